//! Integration tests for the slushctl control core.
//!
//! Drives the public `ControlLoop` API the way the embedded bootstrap
//! does - scripted button frames in, recorded display frames out -
//! with a fake sensor gateway standing in for the MLX90614 + ADC.

use slushctl::control::{ButtonFrame, ControlLoop, InputSource, Renderer, StatusView};
use slushctl::sensor::{NoSensors, SensorGateway};
use slushctl::ui::view;

const IDLE: ButtonFrame = ButtonFrame {
    start: false,
    up: false,
    down: false,
};

fn press(start: bool, up: bool, down: bool) -> ButtonFrame {
    ButtonFrame { start, up, down }
}

/// Replays scripted frames, then reports all-released forever.
struct ScriptedInput {
    frames: Vec<ButtonFrame>,
    next: usize,
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> ButtonFrame {
        let frame = self.frames.get(self.next).copied().unwrap_or_default();
        self.next += 1;
        frame
    }
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<StatusView>,
}

impl Renderer for &mut RecordingRenderer {
    fn render(&mut self, view: &StatusView) {
        self.frames.push(*view);
    }
}

/// Fixed readings, as the cached gateway presents them post-refresh.
struct FakeSensors {
    object_f: f32,
    ambient_f: f32,
    battery_volts: f32,
}

impl SensorGateway for FakeSensors {
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

/// Builds a loop over the scripted frames (the first frame is consumed
/// by the constructor's priming sample) and ticks through the rest.
fn run_script<S: SensorGateway>(
    frames: Vec<ButtonFrame>,
    sensors: Option<S>,
    renderer: &mut RecordingRenderer,
) {
    let ticks = frames.len().saturating_sub(1);
    let inputs = ScriptedInput { frames, next: 0 };
    let mut ctl = ControlLoop::new(inputs, renderer, sensors);
    for _ in 0..ticks {
        ctl.tick();
    }
}

#[test]
fn start_press_renders_running_frame() {
    let mut renderer = RecordingRenderer::default();
    run_script::<NoSensors>(
        vec![IDLE, press(true, false, false), IDLE],
        None,
        &mut renderer,
    );

    assert_eq!(renderer.frames.len(), 1);
    let frame = &renderer.frames[0];
    assert!(frame.running);
    assert_eq!(frame.target_temp, 26);
    assert!(frame.sensors.is_none());
}

#[test]
fn sensor_snapshot_is_attached_to_every_redraw() {
    let sensors = FakeSensors {
        object_f: 28.4,
        ambient_f: 71.6,
        battery_volts: 4.01,
    };
    let mut renderer = RecordingRenderer::default();
    run_script(
        vec![
            IDLE,
            press(false, true, false),
            IDLE,
            press(false, false, true),
            IDLE,
        ],
        Some(sensors),
        &mut renderer,
    );

    assert_eq!(renderer.frames.len(), 2);
    for frame in &renderer.frames {
        let snapshot = frame.sensors.expect("gateway fitted");
        assert_eq!(snapshot.object_f, 28.4);
        assert_eq!(snapshot.ambient_f, 71.6);
        assert_eq!(snapshot.battery_volts, 4.01);
    }
    // UP then DOWN: back at the default.
    assert_eq!(renderer.frames[1].target_temp, 26);
}

#[test]
fn a_full_operator_session() {
    // Start the motor, raise the target twice, change nothing for a
    // while, then stop the motor.
    let mut script = vec![IDLE, press(true, false, false), IDLE];
    for _ in 0..2 {
        script.push(press(false, true, false));
        script.push(IDLE);
    }
    script.extend([IDLE; 20]);
    script.push(press(true, false, false));
    script.push(IDLE);

    let mut renderer = RecordingRenderer::default();
    run_script::<NoSensors>(script, None, &mut renderer);

    // Exactly four events, so exactly four redraws.
    assert_eq!(renderer.frames.len(), 4);
    assert!(renderer.frames[0].running);
    assert_eq!(renderer.frames[1].target_temp, 27);
    assert_eq!(renderer.frames[2].target_temp, 28);
    assert!(!renderer.frames[3].running);
    assert_eq!(renderer.frames[3].target_temp, 28);
}

#[test]
fn rendered_frames_format_into_panel_lines() {
    // The view layer must be able to lay out whatever the loop emits.
    let sensors = FakeSensors {
        object_f: 28.42,
        ambient_f: 71.66,
        battery_volts: 4.013,
    };
    let mut renderer = RecordingRenderer::default();
    run_script(
        vec![IDLE, press(true, false, false)],
        Some(sensors),
        &mut renderer,
    );

    let frame = &renderer.frames[0];
    let (motor, target, sensor_row) = view::lines(frame);
    assert_eq!(motor, "Running");
    assert_eq!(target.as_str(), "Target: 26F");
    assert_eq!(sensor_row.unwrap().as_str(), "28.4F 71.7F 4.01V");
}
