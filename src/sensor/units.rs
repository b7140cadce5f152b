//! Conversions from raw sensor values to display units.

use crate::config::{BATTERY_ADC_FULL_SCALE, BATTERY_ADC_REF_VOLTS, BATTERY_DIVIDER_RATIO};

/// Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit(c: f32) -> f32 {
    c * 1.8 + 32.0
}

/// Raw 16-bit battery ADC count to volts at the battery terminal.
///
/// The sense pin sits behind a 1:2 resistor divider, so the measured
/// voltage is doubled to recover the actual battery voltage.
pub fn adc_to_battery_volts(raw: u16) -> f32 {
    (raw as f32 * BATTERY_ADC_REF_VOLTS / BATTERY_ADC_FULL_SCALE) * BATTERY_DIVIDER_RATIO
}
