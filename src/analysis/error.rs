//! Error taxonomy for a full recalculation.
//!
//! Missing-data states (fewer than two streams, non-numeric ΔTmin, fewer
//! than two intervals) are not errors: they leave the derived results
//! empty or unset and recalculation reports success. The variants here are
//! the conditions that must fail loudly instead of propagating a missing
//! value into the visualization.

use thiserror::Error;
use uom::si::f64::ThermodynamicTemperature;

use crate::support::constraint::ConstraintError;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PinchError {
    /// Cascade arithmetic produced a utility outside its invariant range,
    /// which indicates NaN stream data.
    #[error("utility targets could not be computed")]
    InvalidTargets(#[from] ConstraintError),

    /// The seeded cascade never touched zero, so no interval boundary is
    /// pinched (a threshold problem). Composite curves cannot be anchored.
    #[error("the heat cascade never returns to zero, so no pinch interval exists")]
    PinchNotLocated,

    /// No hot-composite point exists at the pinch temperature re-expressed
    /// on the hot scale. This indicates a geometry or shift-convention
    /// mismatch that would corrupt the visualization.
    #[error("no hot composite point at the pinch temperature ({expected_temperature:?})")]
    PinchPointNotFound {
        expected_temperature: ThermodynamicTemperature,
    },
}
