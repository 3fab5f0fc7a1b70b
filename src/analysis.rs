//! Pinch-analysis components.
//!
//! The components mirror the stages of the problem-table method:
//!
//! - [`stream`]: A single process stream and its Hot/Cold classification.
//! - [`interval`]: Temperature-interval decomposition on the ΔTmin-shifted
//!   scale.
//! - [`cascade`]: The heat cascade, yielding minimum utilities and the
//!   pinch location.
//! - [`composite`]: Hot and cold composite curves anchored to the computed
//!   utilities.
//! - [`session`]: The [`PinchSession`] orchestrator owning the stream
//!   collection and sequencing the stages on demand.
//!
//! All derived results are recomputed from scratch by
//! [`PinchSession::recalculate`]; nothing is cached across stream or ΔTmin
//! edits. The data sets involved are small (tens of streams), so a full
//! recomputation is the intended strategy.

pub mod cascade;
pub mod composite;
pub mod error;
pub mod interval;
pub mod session;
pub mod stream;

#[cfg(test)]
mod test_support;

pub use cascade::{PinchPoint, UtilityTargets};
pub use composite::{CompositeCurves, CurvePoint};
pub use error::PinchError;
pub use interval::{HeatBalance, Interval};
pub use session::PinchSession;
pub use stream::{Stream, StreamKind};
