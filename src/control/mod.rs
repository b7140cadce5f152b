//! Control core - input debouncing, appliance state, tick loop.
//!
//! This is the only part of the firmware with actual control logic.
//! It is pure (no I/O, no logging, no allocation) and talks to the
//! outside world through three narrow seams:
//!
//! - [`InputSource`] - raw button levels, one frame per tick
//! - [`Renderer`] - full-screen redraws when state changes
//! - [`crate::sensor::SensorGateway`] - cached temperature/battery reads
//!
//! The embedded bootstrap implements these with real peripherals; the
//! tests implement them with scripted doubles.

pub mod debounce;
pub mod state;
pub mod tick;

pub use state::ApplianceState;
pub use tick::ControlLoop;

use crate::sensor::SensorSnapshot;

/// One tick's worth of logical button samples, all three channels.
///
/// `true` means "physically pressed". The buttons are wired active-low
/// (pull-up), so the hardware adapter inverts the electrical level
/// before it reaches the core; the core never sees raw pin polarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonFrame {
    /// START/STOP - toggles the motor.
    pub start: bool,
    /// UP - raises the target temperature.
    pub up: bool,
    /// DOWN - lowers the target temperature.
    pub down: bool,
}

/// Source of raw button samples.
///
/// `sample` must never block; it returns the instantaneous logical
/// level of all three channels. Electrical debouncing is assumed to
/// have happened at the pull-up layer already.
pub trait InputSource {
    fn sample(&mut self) -> ButtonFrame;
}

/// Everything the display needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusView {
    pub running: bool,
    pub target_temp: i16,
    /// `None` on hardware without the sensor package fitted.
    pub sensors: Option<SensorSnapshot>,
}

/// Redraws the whole display from a [`StatusView`].
///
/// Must be idempotent and side-effect-free beyond the display buffer;
/// tests substitute a recording stub.
pub trait Renderer {
    fn render(&mut self, view: &StatusView);
}
