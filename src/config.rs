//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and appliance
//! limits live here so they can be tuned in one place.

// Appliance state

/// Target temperature on power-up (°F).
pub const DEFAULT_TARGET_TEMP: i16 = 26;

/// Lowest settable target temperature (°F).
pub const MIN_TARGET_TEMP: i16 = 18;

/// Highest settable target temperature (°F).
pub const MAX_TARGET_TEMP: i16 = 34;

// Control loop

/// Interval between input-sampling ticks (ms).
///
/// The core tolerates any tick rate; this only paces the production
/// loop so the I²C bus is not hammered needlessly.
pub const TICK_INTERVAL_MS: u64 = 10;

// Sensors

/// I²C address of the MLX90614 IR thermometer (factory default).
pub const MLX90614_ADDR: u8 = 0x5A;

/// ADC reference voltage for the battery sense channel (V).
pub const BATTERY_ADC_REF_VOLTS: f32 = 3.3;

/// Full-scale count of the battery ADC reading (16-bit range).
pub const BATTERY_ADC_FULL_SCALE: f32 = 65536.0;

/// The battery sense pin sits behind a 1:2 resistor divider.
pub const BATTERY_DIVIDER_RATIO: f32 = 2.0;

// Display

/// OLED panel geometry (SSD1306, 128×32).
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 32;

// GPIO pin assignments (Feather nRF52840 defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types
// are selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button START   → P0.24
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   Battery sense  → P0.29 (AIN5, behind the on-board divider)
