//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units. Two small pieces of
//! temperature arithmetic that the analysis needs are not expressible with
//! the operators [`uom`] provides for `ThermodynamicTemperature` (which is
//! kind-restricted to prevent accidental misuse of affine temperatures):
//!
//! - subtracting two absolute temperatures into a [`TemperatureInterval`]
//!   ([`TemperatureDifference::minus`]), and
//! - averaging two absolute temperatures ([`midpoint`]), used to recover
//!   the pinch temperature from the hot-side and shifted cold-side
//!   temperatures at the top of the pinch interval.
//!
//! See uom issues [#380](https://github.com/iliekturtles/uom/issues/380)
//! and [#289](https://github.com/iliekturtles/uom/issues/289) for the
//! background on the missing subtraction.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

/// Returns the temperature midway between two absolute temperatures.
#[must_use]
pub fn midpoint(
    a: ThermodynamicTemperature,
    b: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<abs_kelvin>(
        (a.get::<abs_kelvin>() + b.get::<abs_kelvin>()) / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn subtract_temperatures() {
        let hot = ThermodynamicTemperature::new::<degree_celsius>(145.0);
        let cold = ThermodynamicTemperature::new::<degree_celsius>(110.0);

        assert_relative_eq!(hot.minus(cold).get::<delta_celsius>(), 35.0);
        assert_relative_eq!(cold.minus(hot).get::<delta_celsius>(), -35.0);
    }

    #[test]
    fn midpoint_of_shifted_scales() {
        let hot_side = ThermodynamicTemperature::new::<degree_celsius>(110.0);
        let cold_side = ThermodynamicTemperature::new::<degree_celsius>(100.0);

        assert_relative_eq!(
            midpoint(hot_side, cold_side).get::<degree_celsius>(),
            105.0
        );
    }
}
