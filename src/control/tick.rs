//! The tick loop: sample, dispatch one event, redraw if dirty.

use crate::control::{debounce, ApplianceState, ButtonFrame, InputSource, Renderer, StatusView};
use crate::sensor::{SensorGateway, SensorSnapshot};

/// Cooperative control loop for the dispenser.
///
/// Owns the appliance state and the per-channel sample history; the
/// bootstrap (or a test harness) drives it by calling [`tick`] at
/// whatever cadence it likes. One instance serves both hardware
/// variants: pass `None` for `sensors` on boards without the
/// temperature/battery package.
///
/// [`tick`]: ControlLoop::tick
pub struct ControlLoop<I, R, S> {
    inputs: I,
    renderer: R,
    sensors: Option<S>,
    state: ApplianceState,
    prev: ButtonFrame,
}

impl<I, R, S> ControlLoop<I, R, S>
where
    I: InputSource,
    R: Renderer,
    S: SensorGateway,
{
    /// Build a loop around the given collaborators.
    ///
    /// Takes one priming sample so a button already held at power-on
    /// does not fire an edge on the first tick.
    pub fn new(mut inputs: I, renderer: R, sensors: Option<S>) -> Self {
        let prev = inputs.sample();
        Self {
            inputs,
            renderer,
            sensors,
            state: ApplianceState::new(),
            prev,
        }
    }

    /// Read-only view of the appliance state.
    pub fn state(&self) -> &ApplianceState {
        &self.state
    }

    /// The sensor gateway, if this board has one.
    ///
    /// The bootstrap uses this to refresh the gateway's cache between
    /// ticks (the gateway itself is a pure read for the core).
    pub fn sensors_mut(&mut self) -> Option<&mut S> {
        self.sensors.as_mut()
    }

    /// Run one tick. Returns true if the display was redrawn.
    ///
    /// Edge events are evaluated in fixed priority order - START, then
    /// UP, then DOWN - and at most one event is acted on per tick, so
    /// two buttons landing in the same tick are never ambiguous. The
    /// previous samples are updated unconditionally afterwards,
    /// whether or not an event fired.
    pub fn tick(&mut self) -> bool {
        let frame = self.inputs.sample();

        let mut dirty = false;
        if debounce::pressed(frame.start, self.prev.start) {
            self.state.toggle_running();
            dirty = true;
        } else if debounce::pressed(frame.up, self.prev.up) {
            self.state.increment_target();
            dirty = true;
        } else if debounce::pressed(frame.down, self.prev.down) {
            self.state.decrement_target();
            dirty = true;
        }

        if dirty {
            self.render();
        }

        self.prev = frame;
        dirty
    }

    /// Redraw unconditionally. The bootstrap calls this once before
    /// entering the tick loop so the display is never blank.
    pub fn redraw(&mut self) {
        self.render();
    }

    fn render(&mut self) {
        let sensors = self.sensors.as_mut().map(|s| SensorSnapshot {
            object_f: s.object_temp_f(),
            ambient_f: s.ambient_temp_f(),
            battery_volts: s.battery_voltage(),
        });
        let view = StatusView {
            running: self.state.running(),
            target_temp: self.state.target_temp(),
            sensors,
        };
        self.renderer.render(&view);
    }
}
