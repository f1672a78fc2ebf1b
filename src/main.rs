//! Headless driver: follows a target moving in a circle and logs the camera
//! pose each tick. Run with `RUST_LOG=info`.

use std::f32::consts::TAU;
use std::path::Path;

use glam::{Quat, Vec3};
use target_camera::options::{RigOptions, TargetPreset};
use target_camera::{SharedTransform, TargetCamera, Transform};

const TICKS: u32 = 240;
const DT: f32 = 1.0 / 60.0;
const RADIUS: f32 = 40.0;

fn load_options() -> RigOptions {
    let Some(arg) = std::env::args().nth(1) else {
        return RigOptions::default();
    };
    match RigOptions::load(Path::new(&arg)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let options = load_options();
    let mut rig = TargetCamera::from_options(&options);

    // Rebind every preset (or a default "orbit") to the moving object.
    let tracked = SharedTransform::new(Transform::IDENTITY);
    let mut presets = options.targets.clone();
    if presets.is_empty() {
        presets.push(TargetPreset {
            name: "orbit".to_owned(),
            ..Default::default()
        });
    }
    for preset in &presets {
        rig.add(preset.to_settings().with_tracked(tracked.clone()));
    }
    if rig.current_target_name().is_none() {
        rig.select(&presets[0].name);
    }

    rig.set_pose(Vec3::new(0.0, 30.0, 100.0), Quat::IDENTITY);

    for tick in 0..TICKS {
        let angle = TAU * tick as f32 / TICKS as f32;
        tracked.set(Transform::new(
            Vec3::new(RADIUS * angle.cos(), 0.0, RADIUS * angle.sin()),
            Quat::from_rotation_y(-angle),
        ));
        rig.update(DT);

        let pos = rig.position();
        log::info!(
            "tick {tick:>3}: target {:?} camera ({:>8.3}, {:>8.3}, {:>8.3})",
            rig.current_target_name().unwrap_or("-"),
            pos.x,
            pos.y,
            pos.z,
        );
    }
}
