//! A single process stream.

use uom::{
    ConstZero,
    si::{
        f64::{Power, ThermalConductance, ThermodynamicTemperature},
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::units::TemperatureDifference;

/// Hot/Cold classification of a process stream.
///
/// A stream is hot when it must be cooled (supply above target) and cold
/// when it must be heated. A stream whose supply and target temperatures
/// are equal classifies as cold and carries zero heat load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Hot,
    Cold,
}

/// A process stream: a heat capacity flowrate between a supply and a
/// target temperature.
///
/// Fields are freely editable until a calculation is triggered; no
/// validation is applied at construction. [`Stream::kind`] and
/// [`Stream::heat_load`] are pure functions of the current field values.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    id: usize,
    heat_capacity_rate: ThermalConductance,
    supply_temp: ThermodynamicTemperature,
    target_temp: ThermodynamicTemperature,
}

impl Stream {
    /// Creates a stream with the given display id and zeroed fields.
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self {
            id,
            heat_capacity_rate: ThermalConductance::ZERO,
            // uom's kind restriction on absolute temperatures rules out
            // `ConstZero` here; zero kelvin is the explicit equivalent.
            supply_temp: ThermodynamicTemperature::new::<kelvin>(0.0),
            target_temp: ThermodynamicTemperature::new::<kelvin>(0.0),
        }
    }

    /// The display id, unique within the owning session.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Heat capacity flowrate (CP), the mass flow times the specific heat.
    #[must_use]
    pub fn heat_capacity_rate(&self) -> ThermalConductance {
        self.heat_capacity_rate
    }

    #[must_use]
    pub fn supply_temp(&self) -> ThermodynamicTemperature {
        self.supply_temp
    }

    #[must_use]
    pub fn target_temp(&self) -> ThermodynamicTemperature {
        self.target_temp
    }

    pub fn set_heat_capacity_rate(&mut self, cp: ThermalConductance) {
        self.heat_capacity_rate = cp;
    }

    pub fn set_supply_temp(&mut self, temperature: ThermodynamicTemperature) {
        self.supply_temp = temperature;
    }

    pub fn set_target_temp(&mut self, temperature: ThermodynamicTemperature) {
        self.target_temp = temperature;
    }

    /// Classifies the stream from its current temperatures.
    ///
    /// Equal supply and target temperatures resolve to [`StreamKind::Cold`].
    #[must_use]
    pub fn kind(&self) -> StreamKind {
        if self.supply_temp > self.target_temp {
            StreamKind::Hot
        } else {
            StreamKind::Cold
        }
    }

    /// Signed enthalpy change, `CP × (target − supply)`.
    ///
    /// Negative for hot streams (heat released), non-negative for cold
    /// streams (heat absorbed).
    #[must_use]
    pub fn heat_load(&self) -> Power {
        self.heat_capacity_rate * self.target_temp.minus(self.supply_temp)
    }
}
