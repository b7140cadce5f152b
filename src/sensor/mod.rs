//! Sensor gateway - temperature and battery readouts for the display.
//!
//! The control core only ever sees [`SensorGateway`]: three pure reads
//! of the latest cached values, already converted to display units.
//! The embedded bootstrap refreshes the cache between ticks from the
//! MLX90614 driver and the SAADC battery channel; post-startup read
//! glitches keep the previous cached value rather than failing.

pub mod mlx90614;
pub mod units;

pub use mlx90614::Mlx90614;

/// One consistent set of readings, in display units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorSnapshot {
    /// Beverage (object) temperature, °F.
    pub object_f: f32,
    /// Ambient temperature at the sensor die, °F.
    pub ambient_f: f32,
    /// Battery voltage, V.
    pub battery_volts: f32,
}

/// Cached sensor readings, infallible after startup.
///
/// Construction of the concrete gateway may fail (sensor absent from
/// the bus); that failure is fatal to the whole process and handled by
/// the bootstrap, never by the control core.
pub trait SensorGateway {
    fn object_temp_f(&mut self) -> f32;
    fn ambient_temp_f(&mut self) -> f32;
    fn battery_voltage(&mut self) -> f32;
}

/// Stand-in gateway type for boards without the sensor package.
///
/// Uninhabited: an `Option<NoSensors>` is always `None`, so these
/// methods can never be called.
pub enum NoSensors {}

impl SensorGateway for NoSensors {
    fn object_temp_f(&mut self) -> f32 {
        match *self {}
    }

    fn ambient_temp_f(&mut self) -> f32 {
        match *self {}
    }

    fn battery_voltage(&mut self) -> f32 {
        match *self {}
    }
}
