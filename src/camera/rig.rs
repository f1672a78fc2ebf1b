use glam::{Mat4, Quat, Vec3};

use crate::camera::core::Camera;
use crate::camera::transform::Transform;
use crate::options::RigOptions;
use crate::solver::{blend_toward, solve_ideal_pose};
use crate::target::{TargetConfig, TargetRegistry, TargetSettings};

/// A perspective camera that chases one of several named targets.
///
/// Each [`update`](Self::update) computes where the camera would sit if it
/// snapped to the selected target and moves a `stiffness` fraction of the
/// way there. With nothing selected the camera stays put.
#[derive(Debug)]
pub struct TargetCamera {
    /// Projection parameters. Not touched by `update`.
    pub camera: Camera,
    pose: Transform,
    targets: TargetRegistry,
    current: Option<String>,
    scratch: Transform,
    /// Reserved for target-to-target transitions; never set.
    transitioning: bool,
}

impl TargetCamera {
    /// Create a rig at the origin with no targets.
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            camera: Camera::new(fovy, aspect, znear, zfar),
            pose: Transform::IDENTITY,
            targets: TargetRegistry::new(),
            current: None,
            scratch: Transform::IDENTITY,
            transitioning: false,
        }
    }

    /// Create a rig from options, adding every preset target. Preset targets
    /// follow a neutral placeholder until re-added with a real tracker.
    pub fn from_options(options: &RigOptions) -> Self {
        let co = &options.camera;
        let mut rig = Self::new(co.fovy, co.aspect, co.znear, co.zfar);
        for preset in &options.targets {
            rig.add(preset.to_settings());
        }
        if let Some(name) = &options.initial_target {
            rig.select(name);
        }
        rig
    }

    /// Register a target, replacing any existing one with the same name.
    pub fn add(&mut self, settings: TargetSettings) {
        let config = TargetConfig::from_settings(settings);
        if let Some(old) = self.targets.insert(config) {
            log::debug!("Replaced camera target '{}'", old.name);
        }
    }

    /// Make `name` the active target. Unknown names keep the current
    /// selection and log a warning; targets are often selected before the
    /// level that registers them has finished loading.
    pub fn select(&mut self, name: &str) {
        if self.targets.contains(name) {
            self.current = Some(name.to_owned());
        } else {
            log::warn!("No target with name '{name}'");
        }
    }

    /// Advance one tick toward the active target.
    ///
    /// `dt` is accepted for host loop symmetry but unused: stiffness is a
    /// per-tick fraction, so smoothing speed depends on frame rate.
    pub fn update(&mut self, _dt: f32) {
        let Some(target) =
            self.current.as_deref().and_then(|name| self.targets.get(name))
        else {
            return;
        };

        solve_ideal_pose(target, &mut self.scratch);
        blend_toward(&mut self.pose, &self.scratch, target);
    }

    /// Place the camera directly, e.g. before the first tick.
    pub fn set_pose(&mut self, position: Vec3, rotation: Quat) {
        self.pose = Transform::new(position, rotation);
    }

    /// Current world-space camera position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    /// Current world-space camera orientation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.pose.rotation
    }

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> Transform {
        self.pose
    }

    /// Name of the active target, if one has been selected.
    #[must_use]
    pub fn current_target_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Configuration of the active target.
    #[must_use]
    pub fn current_target(&self) -> Option<&TargetConfig> {
        self.current.as_deref().and_then(|name| self.targets.get(name))
    }

    /// All registered targets.
    #[must_use]
    pub fn targets(&self) -> &TargetRegistry {
        &self.targets
    }

    /// Whether a transition is in progress. Always false for now.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// World -> view matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.pose.view_matrix()
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.camera.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, Once};

    use glam::EulerRot;

    use super::*;
    use crate::camera::transform::{look_at_rotation, SharedTransform};
    use crate::options::{CameraOptions, TargetPreset};

    /// Records every log line so tests can check diagnostics.
    struct CaptureLog;

    static CAPTURED: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
    static INSTALL_LOGGER: Once = Once::new();

    impl log::Log for CaptureLog {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            if let Ok(mut lines) = CAPTURED.lock() {
                lines.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    fn install_capture_log() {
        INSTALL_LOGGER.call_once(|| {
            let _ = log::set_logger(&CaptureLog);
            log::set_max_level(log::LevelFilter::Trace);
        });
    }

    fn warned_about(name: &str) -> bool {
        CAPTURED.lock().unwrap().iter().any(|(level, msg)| {
            *level == log::Level::Warn && msg.contains(name)
        })
    }

    fn rig() -> TargetCamera {
        TargetCamera::new(45.0, 16.0 / 9.0, 0.1, 1000.0)
    }

    #[test]
    fn construction_sets_projection_and_idle_state() {
        let rig = rig();
        assert_eq!(
            rig.camera.projection_matrix(),
            Mat4::perspective_rh(45.0_f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0)
        );
        assert_eq!(rig.position(), Vec3::ZERO);
        assert_eq!(rig.rotation(), Quat::IDENTITY);
        assert!(rig.current_target_name().is_none());
        assert!(rig.targets().is_empty());
        assert!(!rig.is_transitioning());
    }

    #[test]
    fn orbit_scenario_moves_halfway() {
        let mut rig = rig();
        rig.add(
            TargetSettings::new("orbit")
                .with_tracked(Transform::IDENTITY)
                .with_offset(Vec3::new(0.0, 10.0, 20.0))
                .with_stiffness(0.5)
                .with_match_rotation(true),
        );
        rig.select("orbit");
        rig.set_pose(Vec3::new(0.0, 0.0, 100.0), Quat::IDENTITY);
        rig.update(1.0 / 60.0);

        // Ideal sits at (0, 10, 20); halfway from (0, 0, 100)
        assert_eq!(rig.position(), Vec3::new(0.0, 5.0, 60.0));
        assert!(rig.rotation().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn update_without_selection_is_noop() {
        let mut rig = rig();
        rig.add(TargetSettings::new("orbit").with_stiffness(1.0));
        let start = (Vec3::new(0.1, -7.3, 42.0), Quat::from_rotation_y(0.77));
        rig.set_pose(start.0, start.1);
        for _ in 0..5 {
            rig.update(0.016);
        }
        assert_eq!(rig.position().to_array(), start.0.to_array());
        assert_eq!(rig.rotation().to_array(), start.1.to_array());
    }

    #[test]
    fn unknown_select_keeps_previous() {
        let mut rig = rig();
        rig.select("ghost");
        assert!(rig.current_target_name().is_none());

        rig.add(TargetSettings::new("orbit"));
        rig.select("orbit");
        rig.select("ghost");
        assert_eq!(rig.current_target_name(), Some("orbit"));
    }

    #[test]
    fn unknown_select_logs_warning() {
        install_capture_log();
        let mut rig = rig();
        rig.add(TargetSettings::new("harbor-cam"));
        rig.select("harbor-cam");
        assert!(!warned_about("harbor-cam"));

        rig.select("level-two-cam");
        assert!(warned_about("level-two-cam"));
        assert_eq!(rig.current_target_name(), Some("harbor-cam"));
    }

    #[test]
    fn re_add_replaces_active_target() {
        let mut rig = rig();
        rig.add(
            TargetSettings::new("orbit")
                .with_offset(Vec3::new(0.0, 0.0, 10.0))
                .with_stiffness(1.0),
        );
        rig.select("orbit");
        rig.add(TargetSettings::new("orbit").with_stiffness(1.0));
        assert_eq!(rig.targets().len(), 1);

        rig.update(0.016);
        assert!(rig.position().abs_diff_eq(Vec3::new(0.0, 30.0, 50.0), 1e-5));
    }

    #[test]
    fn unit_stiffness_snaps_to_ideal() {
        let tracked = Transform::new(
            Vec3::new(12.0, -3.0, 8.0),
            Quat::from_euler(EulerRot::YXZ, 0.6, -0.25, 0.1),
        );
        let extra = Quat::from_rotation_x(-0.3);
        let mut rig = rig();
        rig.add(
            TargetSettings::new("snap")
                .with_tracked(tracked)
                .with_offset(Vec3::new(2.0, 4.0, 9.0))
                .with_rotation(extra)
                .with_stiffness(1.0),
        );
        rig.select("snap");
        rig.set_pose(Vec3::new(-50.0, 20.0, 3.0), Quat::from_rotation_z(2.0));
        rig.update(0.016);

        let mut ideal = tracked;
        ideal.rotate_local(extra);
        ideal.translate_x(2.0);
        ideal.translate_y(4.0);
        ideal.translate_z(9.0);

        assert_eq!(rig.position(), ideal.position);
        assert_eq!(rig.rotation(), ideal.rotation);
    }

    #[test]
    fn unit_stiffness_snap_from_far_away() {
        let tracked = Transform::new(
            Vec3::new(12.3, -3.7, 8.1),
            Quat::from_rotation_y(0.77),
        );
        let offset = Vec3::new(1.1, 2.2, 3.3);
        let mut rig = rig();
        rig.add(
            TargetSettings::new("snap")
                .with_tracked(tracked)
                .with_offset(offset)
                .with_stiffness(1.0),
        );
        rig.select("snap");
        rig.set_pose(Vec3::new(-1000.0, 7.77, 333.3), Quat::IDENTITY);
        rig.update(0.016);

        let mut ideal = tracked;
        ideal.translate_x(offset.x);
        ideal.translate_y(offset.y);
        ideal.translate_z(offset.z);
        assert_eq!(rig.pose(), ideal);
    }

    #[test]
    fn stationary_target_converges_geometrically() {
        let s = 0.3_f32;
        let mut rig = rig();
        rig.add(
            TargetSettings::new("orbit")
                .with_tracked(Transform::from_position(Vec3::new(4.0, 0.0, -6.0)))
                .with_offset(Vec3::new(0.0, 10.0, 20.0))
                .with_stiffness(s),
        );
        rig.select("orbit");
        rig.set_pose(Vec3::new(100.0, 50.0, 100.0), Quat::IDENTITY);

        let ideal = Vec3::new(4.0, 10.0, 14.0);
        let initial = rig.position().distance(ideal);
        for n in 1..=20 {
            rig.update(0.016);
            let expected = (1.0 - s).powi(n) * initial;
            let actual = rig.position().distance(ideal);
            assert!(
                (actual - expected).abs() < 1e-4 * initial,
                "tick {n}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn up_only_offset_has_no_drift() {
        let tracked = Transform::from_position(Vec3::new(1.25, -3.5, 7.75));
        let mut rig = rig();
        rig.add(
            TargetSettings::new("above")
                .with_tracked(tracked)
                .with_offset(Vec3::new(0.0, 6.0, 0.0))
                .with_stiffness(0.5),
        );
        rig.select("above");
        rig.set_pose(tracked.position, Quat::IDENTITY);
        for _ in 0..30 {
            rig.update(0.016);
            assert_eq!(rig.position().x, tracked.position.x);
            assert_eq!(rig.position().z, tracked.position.z);
        }
        assert!((rig.position().y - 2.5).abs() < 1e-5);
    }

    #[test]
    fn look_at_mode_ignores_extra_rotation() {
        let tracked = SharedTransform::new(Transform::from_position(Vec3::new(0.0, 1.0, 0.0)));
        let mut rig = rig();
        rig.add(
            TargetSettings::new("watch")
                .with_tracked(tracked.clone())
                .with_offset(Vec3::new(5.0, 5.0, 5.0))
                .with_rotation(Quat::from_rotation_y(2.5))
                .with_stiffness(0.2)
                .with_match_rotation(false),
        );
        rig.select("watch");
        rig.set_pose(Vec3::new(0.0, 0.0, 30.0), Quat::IDENTITY);

        for step in 0..4 {
            tracked.set_position(Vec3::new(step as f32, 1.0, -(step as f32)));
            rig.update(0.016);
            let expected =
                look_at_rotation(rig.position(), tracked.get().position, Vec3::Y);
            assert_eq!(rig.rotation(), expected);
        }
    }

    #[test]
    fn follows_moving_shared_transform() {
        let tracked = SharedTransform::default();
        let mut rig = rig();
        rig.add(
            TargetSettings::new("chase")
                .with_tracked(tracked.clone())
                .with_offset(Vec3::new(0.0, 0.0, 10.0))
                .with_stiffness(1.0),
        );
        rig.select("chase");
        rig.update(0.016);
        assert!(rig.position().abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-6));

        tracked.set_position(Vec3::new(100.0, 0.0, 0.0));
        rig.update(0.016);
        assert!(rig.position().abs_diff_eq(Vec3::new(100.0, 0.0, 10.0), 1e-4));
    }

    #[test]
    fn update_leaves_projection_alone() {
        let mut rig = rig();
        rig.add(TargetSettings::new("orbit"));
        rig.select("orbit");
        let before = rig.camera.clone();
        rig.update(0.016);
        assert_eq!(rig.camera, before);
    }

    #[test]
    fn from_options_adds_presets() {
        let options = RigOptions {
            camera: CameraOptions {
                fovy: 60.0,
                ..CameraOptions::default()
            },
            targets: vec![TargetPreset {
                name: "overhead".to_owned(),
                offset: [0.0, 40.0, 0.0],
                stiffness: 1.0,
                ..TargetPreset::default()
            }],
            initial_target: Some("overhead".to_owned()),
        };
        let mut rig = TargetCamera::from_options(&options);
        assert_eq!(rig.camera.fovy, 60.0);
        assert_eq!(rig.current_target_name(), Some("overhead"));
        rig.update(0.016);
        assert!(rig.position().abs_diff_eq(Vec3::new(0.0, 40.0, 0.0), 1e-6));
    }

    #[test]
    fn view_projection_combines_matrices() {
        let mut rig = rig();
        rig.set_pose(Vec3::new(0.0, 0.0, 10.0), Quat::IDENTITY);
        let expected = rig.camera.projection_matrix()
            * Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        assert!(rig.view_projection().abs_diff_eq(expected, 1e-5));
    }
}
