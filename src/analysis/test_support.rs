//! Shared helpers for analysis tests.

use uom::si::{
    f64::{TemperatureInterval, ThermalConductance, ThermodynamicTemperature},
    temperature_interval::degree_celsius as delta_celsius,
    thermal_conductance::kilowatt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::stream::Stream;

/// Builds a stream from scalar values: CP in kW/K, temperatures in °C.
pub(super) fn stream(id: usize, cp_kw_per_k: f64, supply_c: f64, target_c: f64) -> Stream {
    let mut s = Stream::new(id);
    s.set_heat_capacity_rate(ThermalConductance::new::<kilowatt_per_kelvin>(cp_kw_per_k));
    s.set_supply_temp(ThermodynamicTemperature::new::<degree_celsius>(supply_c));
    s.set_target_temp(ThermodynamicTemperature::new::<degree_celsius>(target_c));
    s
}

pub(super) fn dt_min(celsius: f64) -> TemperatureInterval {
    TemperatureInterval::new::<delta_celsius>(celsius)
}

/// The 2-stream regression problem (hot 5 kW/K 200→70, cold 20 kW/K 100→135).
pub(super) fn two_stream_problem() -> Vec<Stream> {
    vec![stream(1, 5.0, 200.0, 70.0), stream(2, 20.0, 100.0, 135.0)]
}

/// The 4-stream regression problem.
pub(super) fn four_stream_problem() -> Vec<Stream> {
    vec![
        stream(1, 1.0, 250.0, 120.0),
        stream(2, 4.0, 200.0, 100.0),
        stream(3, 3.0, 90.0, 150.0),
        stream(4, 6.0, 130.0, 190.0),
    ]
}
