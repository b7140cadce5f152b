//! Embedded bootstrap for the nRF52840 board.
//!
//! Everything hardware-specific lives here: pin wiring, the shared
//! I²C bus, the SAADC battery channel, and the production run-forever
//! loop that paces [`ControlLoop::tick`]. The control core itself is
//! in the library and knows nothing about peripherals.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pin, Pull};
use embassy_nrf::{bind_interrupts, peripherals, saadc, twim};
use embassy_time::{Duration, Timer};
use embedded_hal::i2c::I2c;
use embedded_hal_bus::i2c::RefCellDevice;
use {defmt_rtt as _, panic_probe as _};

use slushctl::config;
use slushctl::control::{ButtonFrame, ControlLoop, InputSource, Renderer, StatusView};
use slushctl::sensor::{units, Mlx90614, SensorGateway};
use slushctl::ui::display::{self, Display};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SAADC => saadc::InterruptHandler;
});

/// The three panel buttons, active-low with internal pull-ups.
///
/// `is_low()` means "physically pressed"; the inversion happens here
/// so the control core only ever sees logical pressed levels.
struct Buttons {
    start: Input<'static>,
    up: Input<'static>,
    down: Input<'static>,
}

impl InputSource for Buttons {
    fn sample(&mut self) -> ButtonFrame {
        ButtonFrame {
            start: self.start.is_low(),
            up: self.up.is_low(),
            down: self.down.is_low(),
        }
    }
}

/// Renders status frames on the SSD1306.
struct OledRenderer<I2C> {
    display: Display<I2C>,
}

impl<I2C: I2c> Renderer for OledRenderer<I2C> {
    fn render(&mut self, view: &StatusView) {
        display::draw_status(&mut self.display, view);
    }
}

/// Cached sensor gateway over the MLX90614 and the battery ADC.
///
/// `refresh` is called by the loop below between ticks; a read glitch
/// after startup keeps the previous cached value, so the gateway reads
/// the core sees are infallible (at worst stale by one frame).
struct BoardSensors<I2C> {
    thermometer: Mlx90614<I2C>,
    object_f: f32,
    ambient_f: f32,
    battery_volts: f32,
}

impl<I2C: I2c> BoardSensors<I2C> {
    fn new(thermometer: Mlx90614<I2C>) -> Self {
        Self {
            thermometer,
            object_f: 0.0,
            ambient_f: 0.0,
            battery_volts: 0.0,
        }
    }

    fn refresh(&mut self, battery_raw: u16) {
        if let Ok(c) = self.thermometer.object_temp_c() {
            self.object_f = units::celsius_to_fahrenheit(c);
        }
        if let Ok(c) = self.thermometer.ambient_temp_c() {
            self.ambient_f = units::celsius_to_fahrenheit(c);
        }
        self.battery_volts = units::adc_to_battery_volts(battery_raw);
    }
}

impl<I2C: I2c> SensorGateway for BoardSensors<I2C> {
    fn object_temp_f(&mut self) -> f32 {
        self.object_f
    }

    fn ambient_temp_f(&mut self) -> f32 {
        self.ambient_f
    }

    fn battery_voltage(&mut self) -> f32 {
        self.battery_volts
    }
}

/// One battery sample, left-aligned from the SAADC's 12-bit result to
/// the 16-bit range the voltage conversion expects.
async fn read_battery(adc: &mut saadc::Saadc<'_, 1>) -> u16 {
    let mut buf = [0i16; 1];
    adc.sample(&mut buf).await;
    (buf[0].max(0) as u16) << 4
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("slushctl start");
    let mut p = embassy_nrf::init(Default::default());

    let buttons = Buttons {
        start: Input::new(p.P0_24.degrade(), Pull::Up),
        up: Input::new(p.P0_11.degrade(), Pull::Up),
        down: Input::new(p.P0_12.degrade(), Pull::Up),
    };

    // Display and thermometer share the bus.
    let twim = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let i2c_bus = RefCell::new(twim);

    let mut oled = display::init(RefCellDevice::new(&i2c_bus));

    // Fatal-at-startup: without a temperature readout the appliance
    // refuses to run. Show the error and idle until power-off.
    let thermometer = match Mlx90614::new(RefCellDevice::new(&i2c_bus)) {
        Ok(t) => t,
        Err(e) => {
            error!("MLX90614 init failed: {}", e);
            display::draw_fatal(&mut oled, "MLX90614", "not detected");
            loop {
                cortex_m::asm::wfi();
            }
        }
    };
    info!("MLX90614 detected");

    let channel_config = saadc::ChannelConfig::single_ended(&mut p.P0_29);
    let mut adc = saadc::Saadc::new(p.SAADC, Irqs, saadc::Config::default(), [channel_config]);

    let mut ctl = ControlLoop::new(
        buttons,
        OledRenderer { display: oled },
        Some(BoardSensors::new(thermometer)),
    );

    // Prime the cache and show the power-on state before the first
    // button is ever touched.
    let raw = read_battery(&mut adc).await;
    if let Some(s) = ctl.sensors_mut() {
        s.refresh(raw);
    }
    ctl.redraw();

    info!("entering control loop");
    loop {
        let raw = read_battery(&mut adc).await;
        if let Some(s) = ctl.sensors_mut() {
            s.refresh(raw);
        }
        ctl.tick();
        Timer::after(Duration::from_millis(config::TICK_INTERVAL_MS)).await;
    }
}
