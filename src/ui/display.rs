//! SSD1306 OLED display wrapper.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::control::StatusView;
use crate::ui::view;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x32, BufferedGraphicsMode<DisplaySize128x32>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Render the status screen: motor state, target, optional sensor row.
///
/// Clears and redraws the whole frame; display-write failures are
/// dropped and the next dirty tick retries with fresh state.
pub fn draw_status<I2C>(display: &mut Display<I2C>, status: &StatusView)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let (motor, target, sensors) = view::lines(status);
    let _ = Text::new(motor, Point::new(0, 8), text_style()).draw(display);
    let _ = Text::new(target.as_str(), Point::new(0, 18), text_style()).draw(display);
    if let Some(line) = sensors {
        let _ = Text::new(line.as_str(), Point::new(0, 28), text_style()).draw(display);
    }

    let _ = display.flush();
}

/// Render the two-line fatal-startup screen (component + message).
///
/// Shown once when a required peripheral is missing; the firmware
/// idles forever afterwards.
pub fn draw_fatal<I2C>(display: &mut Display<I2C>, component: &str, message: &str)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new(component, Point::new(0, 8), text_style()).draw(display);
    let _ = Text::new(message, Point::new(0, 18), text_style()).draw(display);

    let _ = display.flush();
}
