//! The pinch-analysis session orchestrator.

use uom::{
    ConstZero,
    si::{
        f64::{Power, TemperatureInterval, ThermalConductance, ThermodynamicTemperature},
        temperature_interval::degree_celsius as delta_celsius,
        thermal_conductance::kilowatt_per_kelvin,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::units::TemperatureDifference;

use super::{
    cascade::{self, UtilityTargets},
    composite::{self, CompositeCurves},
    error::PinchError,
    interval::{self, Interval},
    stream::{Stream, StreamKind},
};

/// Owns the stream collection and ΔTmin, and sequences interval
/// construction, the heat cascade, and composite-curve assembly.
///
/// Recalculation is explicit: derived results ([`intervals`],
/// [`targets`], [`curves`]) are valid only immediately after
/// [`recalculate`], and any stream or ΔTmin edit invalidates them until
/// it is invoked again. Callers batch their edits and recalculate once.
///
/// [`intervals`]: PinchSession::intervals
/// [`targets`]: PinchSession::targets
/// [`curves`]: PinchSession::curves
/// [`recalculate`]: PinchSession::recalculate
#[derive(Debug, Clone)]
pub struct PinchSession {
    streams: Vec<Stream>,
    next_id: usize,
    dt_min: TemperatureInterval,
    intervals: Vec<Interval>,
    targets: Option<UtilityTargets>,
    curves: Option<CompositeCurves>,
}

impl Default for PinchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PinchSession {
    /// Creates an empty session with the default ΔTmin of 10 °C.
    #[must_use]
    pub fn new() -> Self {
        Self {
            streams: Vec::new(),
            next_id: 1,
            dt_min: TemperatureInterval::new::<delta_celsius>(10.0),
            intervals: Vec::new(),
            targets: None,
            curves: None,
        }
    }

    /// The stream collection in insertion order.
    #[must_use]
    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    #[must_use]
    pub fn stream(&self, id: usize) -> Option<&Stream> {
        self.streams.iter().find(|s| s.id() == id)
    }

    /// Mutable access to a stream for batched edits.
    pub fn stream_mut(&mut self, id: usize) -> Option<&mut Stream> {
        self.streams.iter_mut().find(|s| s.id() == id)
    }

    /// Appends a zeroed stream and returns it for editing.
    ///
    /// Display ids come from a monotonic counter, so an id freed by
    /// [`remove_stream`](PinchSession::remove_stream) is never reused.
    pub fn add_stream(&mut self) -> &mut Stream {
        let id = self.next_id;
        self.next_id += 1;

        let slot = self.streams.len();
        self.streams.push(Stream::new(id));
        &mut self.streams[slot]
    }

    /// Removes the stream with the given id.
    ///
    /// Returns `false` when no such stream exists.
    pub fn remove_stream(&mut self, id: usize) -> bool {
        let before = self.streams.len();
        self.streams.retain(|s| s.id() != id);
        self.streams.len() != before
    }

    /// Removes every stream and restarts display ids from 1.
    pub fn clear_streams(&mut self) {
        self.streams.clear();
        self.next_id = 1;
    }

    /// The minimum allowed temperature approach between the scales.
    #[must_use]
    pub fn dt_min(&self) -> TemperatureInterval {
        self.dt_min
    }

    /// Sets ΔTmin. A NaN value (unparseable user input) is accepted and
    /// puts the next recalculation into the quiescent state.
    pub fn set_dt_min(&mut self, dt_min: TemperatureInterval) {
        self.dt_min = dt_min;
    }

    /// Aggregate signed heat load over all streams.
    #[must_use]
    pub fn net_heat_load(&self) -> Power {
        self.streams
            .iter()
            .fold(Power::ZERO, |sum, s| sum + s.heat_load())
    }

    /// Span from the hottest hot-stream supply down to the coldest
    /// cold-stream supply, or `None` when either side is empty.
    #[must_use]
    pub fn temperature_span(&self) -> Option<TemperatureInterval> {
        let hottest = self
            .streams
            .iter()
            .filter(|s| s.kind() == StreamKind::Hot)
            .map(Stream::supply_temp)
            .reduce(|a, b| if b > a { b } else { a })?;
        let coldest = self
            .streams
            .iter()
            .filter(|s| s.kind() == StreamKind::Cold)
            .map(Stream::supply_temp)
            .reduce(|a, b| if b < a { b } else { a })?;

        Some(hottest.minus(coldest))
    }

    /// Recomputes every derived result from the current streams and ΔTmin.
    ///
    /// With fewer than two streams, a non-numeric ΔTmin, or fewer than two
    /// resulting intervals, this clears the derived state and returns
    /// successfully: callers check for emptiness before rendering.
    ///
    /// # Errors
    ///
    /// Fails when utility targets cannot be computed from NaN stream data,
    /// or when composite-curve assembly cannot anchor the pinch
    /// ([`PinchError::PinchNotLocated`], [`PinchError::PinchPointNotFound`]).
    /// Intervals, and targets when already computed, remain available.
    pub fn recalculate(&mut self) -> Result<(), PinchError> {
        self.intervals = interval::build(&self.streams, self.dt_min);
        self.targets = None;
        self.curves = None;

        if self.intervals.len() < 2 {
            return Ok(());
        }

        let targets = cascade::solve(&self.intervals)?;
        self.targets = Some(targets);

        self.curves = Some(composite::build(&self.intervals, &targets, self.dt_min)?);
        Ok(())
    }

    /// The interval sequence from the last recalculation, highest
    /// temperature first.
    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Utility targets from the last recalculation, when computed.
    #[must_use]
    pub fn targets(&self) -> Option<&UtilityTargets> {
        self.targets.as_ref()
    }

    /// Composite curves from the last recalculation, when built.
    #[must_use]
    pub fn curves(&self) -> Option<&CompositeCurves> {
        self.curves.as_ref()
    }

    /// Loads the 2-stream demonstration problem, replacing any streams.
    pub fn load_two_stream_problem(&mut self) {
        self.clear_streams();
        self.push_stream(5.0, 200.0, 70.0);
        self.push_stream(20.0, 100.0, 135.0);
    }

    /// Loads the 4-stream demonstration problem, replacing any streams.
    pub fn load_four_stream_problem(&mut self) {
        self.clear_streams();
        self.push_stream(1.0, 250.0, 120.0);
        self.push_stream(4.0, 200.0, 100.0);
        self.push_stream(3.0, 90.0, 150.0);
        self.push_stream(6.0, 130.0, 190.0);
    }

    fn push_stream(&mut self, cp_kw_per_k: f64, supply_c: f64, target_c: f64) {
        let stream = self.add_stream();
        stream.set_heat_capacity_rate(ThermalConductance::new::<kilowatt_per_kelvin>(
            cp_kw_per_k,
        ));
        stream.set_supply_temp(ThermodynamicTemperature::new::<degree_celsius>(supply_c));
        stream.set_target_temp(ThermodynamicTemperature::new::<degree_celsius>(target_c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::kilowatt;

    #[test]
    fn two_stream_problem_end_to_end() {
        let mut session = PinchSession::new();
        session.load_two_stream_problem();
        session.recalculate().unwrap();

        assert_eq!(session.intervals().len(), 3);

        let targets = session.targets().unwrap();
        assert_relative_eq!(targets.min_heating().get::<kilowatt>(), 250.0);
        assert_relative_eq!(targets.min_cooling().get::<kilowatt>(), 200.0);
        assert_relative_eq!(
            targets.pinch_temperature().unwrap().get::<degree_celsius>(),
            105.0
        );

        let curves = session.curves().unwrap();
        assert_eq!(curves.hot.len(), 4);
        assert_relative_eq!(curves.pinch_enthalpy.get::<kilowatt>(), 200.0);
    }

    #[test]
    fn four_stream_problem_end_to_end() {
        let mut session = PinchSession::new();
        session.load_four_stream_problem();
        session.recalculate().unwrap();

        assert_eq!(session.intervals().len(), 5);

        let targets = session.targets().unwrap();
        assert_relative_eq!(targets.min_heating().get::<kilowatt>(), 70.0);
        assert_relative_eq!(targets.min_cooling().get::<kilowatt>(), 60.0);
        assert_relative_eq!(
            targets.pinch_temperature().unwrap().get::<degree_celsius>(),
            135.0
        );
        assert_relative_eq!(
            session.curves().unwrap().pinch_enthalpy.get::<kilowatt>(),
            180.0
        );
    }

    #[test]
    fn too_few_streams_is_quiescent() {
        let mut session = PinchSession::new();
        session.add_stream();
        session.recalculate().unwrap();

        assert!(session.intervals().is_empty());
        assert!(session.targets().is_none());
        assert!(session.curves().is_none());
    }

    #[test]
    fn non_numeric_dt_min_is_quiescent() {
        let mut session = PinchSession::new();
        session.load_two_stream_problem();
        session.set_dt_min(TemperatureInterval::new::<delta_celsius>(f64::NAN));
        session.recalculate().unwrap();

        assert!(session.intervals().is_empty());
        assert!(session.targets().is_none());
    }

    #[test]
    fn recalculation_is_idempotent() {
        let mut session = PinchSession::new();
        session.load_four_stream_problem();

        session.recalculate().unwrap();
        let first = session.intervals().to_vec();
        session.recalculate().unwrap();

        assert_eq!(session.intervals(), first.as_slice());
    }

    #[test]
    fn edits_take_effect_on_the_next_recalculation() {
        let mut session = PinchSession::new();
        session.load_two_stream_problem();
        session.recalculate().unwrap();
        assert_eq!(session.intervals().len(), 3);

        // Align the hot target with the shifted cold supply: one fewer
        // breakpoint.
        session
            .stream_mut(1)
            .unwrap()
            .set_target_temp(ThermodynamicTemperature::new::<degree_celsius>(110.0));
        session.recalculate().unwrap();

        assert_eq!(session.intervals().len(), 2);
    }

    #[test]
    fn removed_stream_never_contributes() {
        let mut session = PinchSession::new();
        session.load_four_stream_problem();
        session.recalculate().unwrap();

        assert!(session.remove_stream(2));
        let _ = session.recalculate();

        for interval in session.intervals() {
            assert!(!interval.stream_ids().contains(&2));
        }
    }

    #[test]
    fn removing_an_unknown_id_reports_false() {
        let mut session = PinchSession::new();
        session.load_two_stream_problem();

        assert!(!session.remove_stream(99));
        assert_eq!(session.streams().len(), 2);
    }

    #[test]
    fn display_ids_are_never_reused() {
        let mut session = PinchSession::new();
        session.add_stream();
        session.add_stream();
        session.remove_stream(2);

        assert_eq!(session.add_stream().id(), 3);
    }

    #[test]
    fn threshold_problem_keeps_targets_but_fails_curve_assembly() {
        let mut session = PinchSession::new();
        session.set_dt_min(TemperatureInterval::new::<delta_celsius>(0.0));
        for (cp, supply, target) in [(1.0, 100.0, 40.0), (2.0, 40.0, 70.0), (1.25, 70.0, 90.0)] {
            session.push_stream(cp, supply, target);
        }

        assert_eq!(session.recalculate().unwrap_err(), PinchError::PinchNotLocated);

        let targets = session.targets().unwrap();
        assert_relative_eq!(targets.min_heating().get::<kilowatt>(), 25.0);
        assert!(targets.pinch().is_none());
        assert!(session.curves().is_none());
    }

    #[test]
    fn net_heat_load_aggregates_all_streams() {
        let mut session = PinchSession::new();
        session.load_two_stream_problem();

        // 700 kW required minus 650 kW released.
        assert_relative_eq!(session.net_heat_load().get::<kilowatt>(), 50.0);
    }

    #[test]
    fn temperature_span_requires_both_kinds() {
        let mut session = PinchSession::new();
        assert!(session.temperature_span().is_none());

        session.load_four_stream_problem();
        assert_relative_eq!(
            session.temperature_span().unwrap().get::<delta_celsius>(),
            160.0
        );

        // Hot streams only.
        session.clear_streams();
        session.push_stream(5.0, 200.0, 70.0);
        assert_eq!(session.streams()[0].kind(), StreamKind::Hot);
        assert!(session.temperature_span().is_none());
    }

    #[test]
    fn presets_load_the_documented_data() {
        let mut session = PinchSession::new();
        session.load_two_stream_problem();

        let streams = session.streams();
        assert_eq!(streams.len(), 2);
        assert_eq!(streams[0].id(), 1);
        assert_relative_eq!(
            streams[0].heat_capacity_rate().get::<kilowatt_per_kelvin>(),
            5.0
        );
        assert_relative_eq!(streams[1].supply_temp().get::<degree_celsius>(), 100.0);

        // Reloading replaces rather than appends, and restarts ids.
        session.load_four_stream_problem();
        assert_eq!(session.streams().len(), 4);
        assert_eq!(session.streams()[0].id(), 1);
    }
}
