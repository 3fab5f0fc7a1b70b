//! # Pinch Analysis
//!
//! Utility targeting for process heat integration using the problem-table
//! (temperature-interval) method.
//!
//! Given a set of hot and cold process streams and a minimum temperature
//! approach (ΔTmin), this crate computes:
//!
//! - the ordered temperature intervals on the ΔTmin-shifted scale,
//! - the minimum external heating and cooling utilities,
//! - the pinch temperature, and
//! - hot and cold composite curves anchored to those utilities.
//!
//! ## Crate layout
//!
//! - [`analysis`]: The pinch-analysis components, orchestrated by
//!   [`analysis::PinchSession`].
//! - [`support`]: Supporting utilities used by the analysis.
//!
//! All physical quantities are [`uom`] SI quantities. Heat capacity
//! flowrates (CP) carry the `ThermalConductance` dimension (W/K), heat
//! duties are `Power`, and temperature differences are `TemperatureInterval`.
//!
//! ## Example
//!
//! ```
//! use pinch_analysis::analysis::PinchSession;
//! use uom::si::power::kilowatt;
//!
//! let mut session = PinchSession::new();
//! session.load_two_stream_problem();
//! session.recalculate().unwrap();
//!
//! let targets = session.targets().unwrap();
//! assert_eq!(targets.min_heating().get::<kilowatt>(), 250.0);
//! assert_eq!(targets.min_cooling().get::<kilowatt>(), 200.0);
//! ```

pub mod analysis;
pub mod support;
