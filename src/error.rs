//! Unified error type for slushctl.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Sensors
    /// The MLX90614 did not acknowledge on the bus at startup.
    ///
    /// Fatal: the appliance refuses to enter the control loop without
    /// a working temperature readout.
    SensorNotDetected,

    /// An I²C transaction to the sensor failed after startup, or the
    /// sensor flagged its own reading as invalid.
    SensorBus,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,
}
