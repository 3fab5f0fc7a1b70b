//! Composite-curve assembly.
//!
//! Each curve is a cumulative enthalpy-vs-temperature polyline built from
//! the interval sequence, walked from the lowest temperature upward. The
//! hot curve starts at zero enthalpy; the cold curve starts at the minimum
//! cooling utility, so the horizontal offset between the curves at the
//! pinch equals the computed utilities.

use uom::{
    ConstZero,
    si::f64::{Power, TemperatureInterval, ThermodynamicTemperature},
};

use super::{cascade::UtilityTargets, error::PinchError, interval::Interval};

/// One vertex of a composite curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub enthalpy: Power,
    pub temperature: ThermodynamicTemperature,
}

/// Hot and cold composite polylines plus the pinch anchor enthalpy.
///
/// The anchor is the hot-composite enthalpy at the pinch, for rendering a
/// vertical reference line.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeCurves {
    pub hot: Vec<CurvePoint>,
    pub cold: Vec<CurvePoint>,
    pub pinch_enthalpy: Power,
}

/// Builds both composite curves and resolves the pinch anchor enthalpy.
///
/// Callers ensure at least two intervals exist; the session skips curve
/// assembly otherwise.
///
/// # Errors
///
/// Fails when the targets carry no pinch, or when no hot-composite point
/// lands exactly at the pinch temperature re-expressed on the hot scale
/// (`pinch + ΔTmin/2`).
pub(super) fn build(
    intervals: &[Interval],
    targets: &UtilityTargets,
    dt_min: TemperatureInterval,
) -> Result<CompositeCurves, PinchError> {
    let bottom = &intervals[intervals.len() - 1];

    // Hot curve: seed at zero enthalpy, accumulate each interval's hot CP
    // total over its own span. Intervals without hot streams emit no point
    // and contribute no enthalpy.
    let mut hot = vec![CurvePoint {
        enthalpy: Power::ZERO,
        temperature: bottom.hot_side_lower_temp(),
    }];
    let mut enthalpy = Power::ZERO;
    for interval in intervals.iter().rev() {
        if interval.hot_stream_ids().is_empty() {
            continue;
        }
        enthalpy += interval.hot_cp_total() * interval.dt();
        hot.push(CurvePoint {
            enthalpy,
            temperature: interval.hot_side_upper_temp(),
        });
    }

    // Cold curve: same walk on the cold-side temperatures, seeded at the
    // cooling utility.
    let mut cold = vec![CurvePoint {
        enthalpy: targets.min_cooling(),
        temperature: bottom.cold_side_lower_temp(),
    }];
    let mut enthalpy = targets.min_cooling();
    for interval in intervals.iter().rev() {
        if interval.cold_stream_ids().is_empty() {
            continue;
        }
        enthalpy += interval.cold_cp_total() * interval.dt();
        cold.push(CurvePoint {
            enthalpy,
            temperature: interval.cold_side_upper_temp(),
        });
    }

    let pinch = targets.pinch().ok_or(PinchError::PinchNotLocated)?;
    let expected_temperature = pinch.temperature() + dt_min / 2.0;
    let pinch_enthalpy = hot
        .iter()
        .find(|point| point.temperature == expected_temperature)
        .map(|point| point.enthalpy)
        .ok_or(PinchError::PinchPointNotFound {
            expected_temperature,
        })?;

    Ok(CompositeCurves {
        hot,
        cold,
        pinch_enthalpy,
    })
}
