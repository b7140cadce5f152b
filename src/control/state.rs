//! Persistent appliance state - motor flag and target temperature.

use crate::config::{DEFAULT_TARGET_TEMP, MAX_TARGET_TEMP, MIN_TARGET_TEMP};

/// The two pieces of state the operator can change.
///
/// Owned exclusively by the [`crate::control::ControlLoop`]; the
/// mutators below are the only way the state changes, and the loop
/// calls at most one of them per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ApplianceState {
    running: bool,
    target_temp: i16,
}

impl ApplianceState {
    /// Power-on defaults: motor stopped, target at 26 °F.
    pub fn new() -> Self {
        Self {
            running: false,
            target_temp: DEFAULT_TARGET_TEMP,
        }
    }

    /// Whether the motor is currently running.
    pub fn running(&self) -> bool {
        self.running
    }

    /// The operator-selected target temperature (°F).
    pub fn target_temp(&self) -> i16 {
        self.target_temp
    }

    /// Flip the motor flag. Always succeeds.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Raise the target by one degree, saturating at the maximum.
    pub fn increment_target(&mut self) {
        self.target_temp = (self.target_temp + 1).min(MAX_TARGET_TEMP);
    }

    /// Lower the target by one degree, saturating at the minimum.
    pub fn decrement_target(&mut self) {
        self.target_temp = (self.target_temp - 1).max(MIN_TARGET_TEMP);
    }
}

impl Default for ApplianceState {
    fn default() -> Self {
        Self::new()
    }
}
