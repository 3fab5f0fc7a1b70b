//! Temperature-interval decomposition on the ΔTmin-shifted scale.
//!
//! Cold-stream temperatures are shifted up by ΔTmin onto the hot
//! temperature scale, so that streams sharing an interval are guaranteed
//! the minimum approach. The distinct breakpoint temperatures, sorted
//! descending, bound the intervals; each interval then records which
//! streams span it fully and the resulting net heat load.
//!
//! Intervals are rebuilt wholesale on every recalculation and never
//! mutated in place.

use std::cmp::Ordering;

use uom::{
    ConstZero,
    si::f64::{Power, TemperatureInterval, ThermalConductance, ThermodynamicTemperature},
};

use crate::support::units::TemperatureDifference;

use super::stream::{Stream, StreamKind};

/// Classification of an interval's net heat load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatBalance {
    /// Positive net load: the interval needs heat from above.
    Deficit,
    /// Negative net load: the interval has heat to cascade downward.
    Surplus,
    /// Zero net load.
    Neither,
}

/// A temperature band on the shifted composite scale.
///
/// Bounds are expressed twice: on the hot (unshifted) scale and on the
/// cold scale, which sits ΔTmin below it. Contributing streams and the
/// net heat load are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    index: usize,
    hot_side_upper_temp: ThermodynamicTemperature,
    hot_side_lower_temp: ThermodynamicTemperature,
    cold_side_upper_temp: ThermodynamicTemperature,
    cold_side_lower_temp: ThermodynamicTemperature,
    hot_stream_ids: Vec<usize>,
    cold_stream_ids: Vec<usize>,
    hot_cp_total: ThermalConductance,
    cold_cp_total: ThermalConductance,
    net_heat_load: Power,
}

impl Interval {
    fn new(
        index: usize,
        upper: ThermodynamicTemperature,
        lower: ThermodynamicTemperature,
        dt_min: TemperatureInterval,
        streams: &[Stream],
    ) -> Self {
        let cold_side_upper_temp = upper - dt_min;
        let cold_side_lower_temp = lower - dt_min;
        let dt = upper.minus(lower);

        let mut hot_stream_ids = Vec::new();
        let mut cold_stream_ids = Vec::new();
        let mut hot_cp_total = ThermalConductance::ZERO;
        let mut cold_cp_total = ThermalConductance::ZERO;

        // A stream contributes only when its temperature range spans the
        // whole interval on its own scale.
        for stream in streams {
            match stream.kind() {
                StreamKind::Hot => {
                    if stream.supply_temp() >= upper && stream.target_temp() <= lower {
                        hot_stream_ids.push(stream.id());
                        hot_cp_total += stream.heat_capacity_rate();
                    }
                }
                StreamKind::Cold => {
                    if stream.supply_temp() <= cold_side_lower_temp
                        && stream.target_temp() >= cold_side_upper_temp
                    {
                        cold_stream_ids.push(stream.id());
                        cold_cp_total += stream.heat_capacity_rate();
                    }
                }
            }
        }

        let net_heat_load = cold_cp_total * dt - hot_cp_total * dt;

        Self {
            index,
            hot_side_upper_temp: upper,
            hot_side_lower_temp: lower,
            cold_side_upper_temp,
            cold_side_lower_temp,
            hot_stream_ids,
            cold_stream_ids,
            hot_cp_total,
            cold_cp_total,
            net_heat_load,
        }
    }

    /// 1-based ordinal within the interval sequence, for display.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The ordinal as a roman numeral, matching the tabular report form.
    #[must_use]
    pub fn roman_index(&self) -> String {
        romanize(self.index)
    }

    #[must_use]
    pub fn hot_side_upper_temp(&self) -> ThermodynamicTemperature {
        self.hot_side_upper_temp
    }

    #[must_use]
    pub fn hot_side_lower_temp(&self) -> ThermodynamicTemperature {
        self.hot_side_lower_temp
    }

    #[must_use]
    pub fn cold_side_upper_temp(&self) -> ThermodynamicTemperature {
        self.cold_side_upper_temp
    }

    #[must_use]
    pub fn cold_side_lower_temp(&self) -> ThermodynamicTemperature {
        self.cold_side_lower_temp
    }

    /// The interval's temperature span, identical on both scales.
    #[must_use]
    pub fn dt(&self) -> TemperatureInterval {
        self.hot_side_upper_temp.minus(self.hot_side_lower_temp)
    }

    /// Ids of hot streams spanning this interval.
    #[must_use]
    pub fn hot_stream_ids(&self) -> &[usize] {
        &self.hot_stream_ids
    }

    /// Ids of cold streams spanning this interval.
    #[must_use]
    pub fn cold_stream_ids(&self) -> &[usize] {
        &self.cold_stream_ids
    }

    /// Ids of all contributing streams, hot first.
    #[must_use]
    pub fn stream_ids(&self) -> Vec<usize> {
        let mut ids = self.hot_stream_ids.clone();
        ids.extend_from_slice(&self.cold_stream_ids);
        ids
    }

    pub(super) fn hot_cp_total(&self) -> ThermalConductance {
        self.hot_cp_total
    }

    pub(super) fn cold_cp_total(&self) -> ThermalConductance {
        self.cold_cp_total
    }

    /// Net heat load, `Σ(cold CP × DT) − Σ(hot CP × DT)`.
    ///
    /// Positive means the interval is in deficit and needs heat cascaded
    /// in from above.
    #[must_use]
    pub fn net_heat_load(&self) -> Power {
        self.net_heat_load
    }

    /// Surplus/deficit classification of the net heat load.
    #[must_use]
    pub fn balance(&self) -> HeatBalance {
        match self.net_heat_load.partial_cmp(&Power::ZERO) {
            Some(Ordering::Greater) => HeatBalance::Deficit,
            Some(Ordering::Less) => HeatBalance::Surplus,
            _ => HeatBalance::Neither,
        }
    }
}

/// Partitions the temperature range into ordered intervals.
///
/// Returns an empty sequence when fewer than two streams exist or ΔTmin is
/// not a number: that is the quiescent "not enough data yet" state, not an
/// error. The same applies when the breakpoint set collapses to fewer than
/// two distinct temperatures.
pub(super) fn build(streams: &[Stream], dt_min: TemperatureInterval) -> Vec<Interval> {
    if streams.len() < 2 || dt_min.is_nan() {
        return Vec::new();
    }

    let mut temps = Vec::with_capacity(streams.len() * 2);
    for stream in streams {
        match stream.kind() {
            StreamKind::Hot => {
                temps.push(stream.supply_temp());
                temps.push(stream.target_temp());
            }
            StreamKind::Cold => {
                temps.push(stream.supply_temp() + dt_min);
                temps.push(stream.target_temp() + dt_min);
            }
        }
    }

    temps.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    temps.dedup();

    temps
        .windows(2)
        .enumerate()
        .map(|(i, bounds)| Interval::new(i + 1, bounds[0], bounds[1], dt_min, streams))
        .collect()
}

fn romanize(mut n: usize) -> String {
    const NUMERALS: [(&str, usize); 13] = [
        ("M", 1000),
        ("CM", 900),
        ("D", 500),
        ("CD", 400),
        ("C", 100),
        ("XC", 90),
        ("L", 50),
        ("XL", 40),
        ("X", 10),
        ("IX", 9),
        ("V", 5),
        ("IV", 4),
        ("I", 1),
    ];

    let mut roman = String::new();
    for (symbol, value) in NUMERALS {
        while n >= value {
            roman.push_str(symbol);
            n -= value;
        }
    }
    roman
}
