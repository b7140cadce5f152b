//! Text layout for the 128×32 status screen.
//!
//! FONT_6X10 gives 21 columns; every line here is built to fit. Kept
//! free of display-driver types so the exact strings the operator
//! sees are asserted in host tests.

use core::fmt::Write;

use crate::control::StatusView;
use crate::sensor::SensorSnapshot;

/// One display row. 21 visible columns plus slack for `write!`.
pub type Line = heapless::String<24>;

/// Row 1: motor state.
pub fn motor_line(running: bool) -> &'static str {
    if running {
        "Running"
    } else {
        "Stopped"
    }
}

/// Row 2: operator-selected target, e.g. `Target: 26F`.
pub fn target_line(target_temp: i16) -> Line {
    let mut line = Line::new();
    // 24 bytes always fits "Target: -32768F".
    let _ = write!(line, "Target: {}F", target_temp);
    line
}

/// Row 3: compact sensor readout, e.g. `68.5F 70.1F 4.01V`
/// (object °F, ambient °F, battery V).
pub fn sensor_line(snapshot: &SensorSnapshot) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "{:.1}F {:.1}F {:.2}V",
        snapshot.object_f, snapshot.ambient_f, snapshot.battery_volts
    );
    line
}

/// All rows for one frame; row 3 is absent without the sensor package.
pub fn lines(view: &StatusView) -> (&'static str, Line, Option<Line>) {
    (
        motor_line(view.running),
        target_line(view.target_temp),
        view.sensors.as_ref().map(sensor_line),
    )
}
