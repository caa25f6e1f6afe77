//! Manual driving sessions replayed from scripted key states.

use approx::assert_relative_eq;
use controlbot::logger::StepLogger;
use controlbot::manual::{self, KeyState, ManualController, SessionOutputs};
use controlbot::render::{FrameWriter, Renderer};
use env::{ControlBotEnv, EnvConfig, EpisodeState};
use std::io::Cursor;
use std::path::Path;

fn keys(line: &str) -> KeyState {
    line.parse().unwrap()
}

fn session_env(field_size: f32) -> ControlBotEnv {
    ControlBotEnv::new(EnvConfig {
        field_size,
        ..EnvConfig::default()
    })
    .unwrap()
}

#[test]
fn held_shift_ramps_and_released_shift_decays() {
    let mut controller = ManualController::default();

    let first = controller.update(&keys("L R"));
    assert!(!first.reset);
    assert_eq!((first.action.v_l, first.action.v_r), (0.1, 0.1));

    controller.update(&keys("L R"));
    controller.update(&keys("L"));
    let (vl, vr) = controller.speeds();
    assert_relative_eq!(vl, 0.3, epsilon = 1e-6);
    assert_relative_eq!(vr, 0.1, epsilon = 1e-6);

    controller.update(&keys(""));
    controller.update(&keys(""));
    controller.update(&keys(""));
    controller.update(&keys(""));
    assert_eq!(controller.speeds(), (0.0, 0.0));
}

#[test]
fn speeds_saturate_at_the_limits() {
    let mut controller = ManualController::new(4.0, 0.0, 10.0);
    for _ in 0..5 {
        controller.update(&keys("L R"));
    }
    assert_eq!(controller.speeds(), (10.0, 10.0));

    for _ in 0..5 {
        controller.update(&keys(""));
    }
    assert_eq!(controller.speeds(), (0.0, 0.0));
}

#[test]
fn space_and_reset_stop_both_wheels_before_ramping() {
    let mut controller = ManualController::new(1.0, 0.0, 10.0);
    for _ in 0..3 {
        controller.update(&keys("L R"));
    }

    let stopped = controller.update(&keys("space"));
    assert!(!stopped.reset);
    assert_eq!(controller.speeds(), (0.0, 0.0));

    controller.update(&keys("L R"));
    let restarted = controller.update(&keys("r L"));
    assert!(restarted.reset);
    assert_eq!(controller.speeds(), (1.0, 0.0));
}

#[test]
fn session_logs_only_moving_steps() {
    let mut env = session_env(600.0);
    let mut controller = ManualController::default();
    let mut logger = StepLogger::new(Vec::new());
    let script = "L R\nL R\n\n\nq\nL R\n";

    let summary = manual::drive(
        &mut env,
        Cursor::new(script),
        &mut controller,
        SessionOutputs {
            logger: Some(&mut logger),
            ..SessionOutputs::default()
        },
    )
    .unwrap();

    assert_eq!(summary.ticks, 4);
    assert_eq!(summary.steps, 4);
    assert_eq!(summary.records, 3);
    assert_eq!(logger.records(), 3);

    let csv = String::from_utf8(logger.finish().unwrap()).unwrap();
    assert_eq!(csv, "0.1,0.1,0\n0.2,0.2,0\n0.1,0.1,0\n");
    assert_relative_eq!(env.pose().x, 300.4, epsilon = 1e-3);
}

#[test]
fn logged_heading_change_matches_the_turn() {
    let mut env = session_env(600.0);
    let mut controller = ManualController::default();
    let mut logger = StepLogger::new(Vec::new());

    manual::drive(
        &mut env,
        Cursor::new("L\nL\n"),
        &mut controller,
        SessionOutputs {
            logger: Some(&mut logger),
            ..SessionOutputs::default()
        },
    )
    .unwrap();

    let csv = String::from_utf8(logger.finish().unwrap()).unwrap();
    let rows: Vec<Vec<f32>> = csv
        .lines()
        .map(|line| line.split(',').map(|field| field.parse().unwrap()).collect())
        .collect();
    assert_eq!(rows.len(), 2);
    // Left wheel only: omega = (0 - v_l) / 5 per unit step.
    assert_relative_eq!(rows[0][2], -0.02, epsilon = 1e-6);
    assert_relative_eq!(rows[1][2], -0.04, epsilon = 1e-6);
    assert_relative_eq!(env.pose().theta, -0.06, epsilon = 1e-6);
}

#[test]
fn terminated_episode_waits_for_reset() {
    // Start at (10, 10); 14 accelerating ticks cover 10.5 units.
    let mut env = session_env(20.0);
    let mut controller = ManualController::default();
    let mut logger = StepLogger::new(Vec::new());
    let mut script = "L R\n".repeat(20);
    script.push_str("r\n");

    let summary = manual::drive(
        &mut env,
        Cursor::new(script),
        &mut controller,
        SessionOutputs {
            logger: Some(&mut logger),
            ..SessionOutputs::default()
        },
    )
    .unwrap();

    assert_eq!(summary.ticks, 21);
    assert_eq!(summary.terminations, 1);
    assert_eq!(summary.resets, 1);
    assert_eq!(summary.steps, 15);
    assert_eq!(summary.records, 14);
    assert_eq!(env.state(), EpisodeState::Active);
    assert_eq!(env.pose(), env::Pose::new(10.0, 10.0, 0.0));
}

#[test]
fn unknown_keys_report_the_line() {
    let mut env = session_env(600.0);
    let mut controller = ManualController::default();

    let err = manual::drive(
        &mut env,
        Cursor::new("L\nL\njump\n"),
        &mut controller,
        SessionOutputs::<Vec<u8>>::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("line 3"), "{err:#}");
}

#[test]
fn frames_are_written_per_step() {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("manual_session_frames");
    let _ = std::fs::remove_dir_all(&dir);

    let mut env = session_env(100.0);
    let mut controller = ManualController::default();
    let renderer = Renderer::new(100.0).unwrap();
    let mut writer = FrameWriter::new(&dir).unwrap();

    let summary = manual::drive(
        &mut env,
        Cursor::new("R\nR\nR\n"),
        &mut controller,
        SessionOutputs::<Vec<u8>> {
            frames: Some((&renderer, &mut writer)),
            ..SessionOutputs::default()
        },
    )
    .unwrap();

    assert_eq!(summary.frames, 3);
    assert_eq!(writer.frames_written(), 3);
    assert!(dir.join("frame_00002.png").is_file());
}
