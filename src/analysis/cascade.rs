//! The heat cascade (problem-table algorithm).
//!
//! Cascading interval net loads from the top with no external heat input
//! exposes the largest cumulative deficit, which is exactly the minimum
//! heating utility. Re-running the cascade seeded with that utility makes
//! every interval feasible; the point where the running value touches zero
//! is the pinch, and the final surplus is the minimum cooling utility.

use uom::{
    ConstZero,
    si::f64::{Power, ThermodynamicTemperature},
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative},
    units::midpoint,
};

use super::interval::Interval;

/// The pinch location on the interval sequence.
///
/// The temperature is the average of the hot-side and shifted cold-side
/// temperatures at the top of the pinch interval, which recovers the
/// process pinch under the ΔTmin shift convention. The interval ordinal is
/// carried alongside so consumers can anchor on the interval itself
/// instead of re-deriving it from the temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchPoint {
    interval_index: usize,
    temperature: ThermodynamicTemperature,
}

impl PinchPoint {
    /// 1-based ordinal of the pinch interval.
    #[must_use]
    pub fn interval_index(&self) -> usize {
        self.interval_index
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }
}

/// Minimum-utility targets computed by the cascade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilityTargets {
    min_heating: Constrained<Power, NonNegative>,
    min_cooling: Constrained<Power, NonNegative>,
    pinch: Option<PinchPoint>,
}

impl UtilityTargets {
    /// Minimum external heating utility.
    #[must_use]
    pub fn min_heating(&self) -> Power {
        *self.min_heating.as_ref()
    }

    /// Minimum external cooling utility.
    #[must_use]
    pub fn min_cooling(&self) -> Power {
        *self.min_cooling.as_ref()
    }

    /// The pinch, when the seeded cascade touches zero.
    ///
    /// `None` for threshold problems whose largest deficit sits at the
    /// bottom of the cascade, where no interval boundary is pinched.
    #[must_use]
    pub fn pinch(&self) -> Option<&PinchPoint> {
        self.pinch.as_ref()
    }

    /// Convenience accessor for the pinch temperature.
    #[must_use]
    pub fn pinch_temperature(&self) -> Option<ThermodynamicTemperature> {
        self.pinch.map(|p| p.temperature)
    }
}

/// Runs the cascade over intervals ordered from highest temperature down.
///
/// Callers must supply at least two intervals; the session skips utility
/// computation otherwise.
///
/// # Errors
///
/// Returns an error when the cascade arithmetic produces a non-numeric
/// utility, which happens when stream data contains NaN temperatures or
/// heat capacity flowrates.
pub(super) fn solve(intervals: &[Interval]) -> ConstraintResult<UtilityTargets> {
    // First pass: the running maximum of the unseeded cascade (starting at
    // zero, so a fully feasible cascade needs no heating).
    let mut min_heating = Power::ZERO;
    let mut cascade = Power::ZERO;
    for interval in intervals {
        cascade += interval.net_heat_load();
        if cascade > min_heating {
            min_heating = cascade;
        }
    }

    // Second pass: seed with the heating utility. The first interval whose
    // incoming cascade is exactly zero starts at the pinch.
    let mut pinch = None;
    let mut cascade = -min_heating;
    for interval in intervals {
        if pinch.is_none() && cascade == Power::ZERO {
            pinch = Some(PinchPoint {
                interval_index: interval.index(),
                temperature: midpoint(
                    interval.hot_side_upper_temp(),
                    interval.cold_side_upper_temp(),
                ),
            });
        }
        cascade += interval.net_heat_load();
    }
    let min_cooling = -cascade;

    Ok(UtilityTargets {
        min_heating: NonNegative::new(min_heating)?,
        min_cooling: NonNegative::new(min_cooling)?,
        pinch,
    })
}
