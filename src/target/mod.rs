//! Named follow targets: what to track, where to sit, how fast to get there.
//!
//! Callers describe a target with [`TargetSettings`]; only the fields they
//! set override the defaults. Insertion resolves the settings into a
//! [`TargetConfig`] and files it in the [`TargetRegistry`] under its name.

mod registry;
mod rotation;

use std::fmt;
use std::rc::Rc;

use glam::{Quat, Vec3};
pub use registry::TargetRegistry;
pub use rotation::{EulerAngles, EulerOrder, RotationInput};

use crate::camera::transform::{SharedTransform, TrackedObject};

/// Default camera offset: above and behind the target.
pub const DEFAULT_OFFSET: Vec3 = Vec3::new(0.0, 30.0, 50.0);
/// Default fraction of the remaining gap closed per tick.
pub const DEFAULT_STIFFNESS: f32 = 0.4;

/// Descriptor for a target. Unset fields fall back to the defaults in
/// [`TargetConfig::defaults`].
#[derive(Clone, Default)]
pub struct TargetSettings {
    /// Registry key.
    pub name: String,
    /// Object to follow.
    pub tracked: Option<Rc<dyn TrackedObject>>,
    /// Camera offset in the tracked object's local axes.
    pub offset: Option<Vec3>,
    /// Extra rotation composed onto the tracked orientation.
    pub rotation: RotationInput,
    /// Reserved positioning flag.
    pub fixed: Option<bool>,
    /// Per-tick interpolation fraction.
    pub stiffness: Option<f32>,
    /// Blend toward the ideal orientation instead of looking at the target.
    pub match_rotation: Option<bool>,
}

impl fmt::Debug for TargetSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetSettings")
            .field("name", &self.name)
            .field("tracked", &self.tracked)
            .field("offset", &self.offset)
            .field("rotation", &self.rotation)
            .field("fixed", &self.fixed)
            .field("stiffness", &self.stiffness)
            .field("match_rotation", &self.match_rotation)
            .finish()
    }
}

impl TargetSettings {
    /// Settings with only a name; everything else defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Follow `tracked`.
    #[must_use]
    pub fn with_tracked<T: TrackedObject + 'static>(mut self, tracked: T) -> Self {
        self.tracked = Some(Rc::new(tracked));
        self
    }

    /// Set the local-space camera offset.
    #[must_use]
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the extra rotation (Euler angles or quaternion).
    #[must_use]
    pub fn with_rotation(mut self, rotation: impl Into<RotationInput>) -> Self {
        self.rotation = rotation.into();
        self
    }

    /// Set the reserved `fixed` flag.
    #[must_use]
    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = Some(fixed);
        self
    }

    /// Set the per-tick interpolation fraction. Not range-checked.
    #[must_use]
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = Some(stiffness);
        self
    }

    /// Choose between orientation blending and look-at.
    #[must_use]
    pub fn with_match_rotation(mut self, match_rotation: bool) -> Self {
        self.match_rotation = Some(match_rotation);
        self
    }
}

/// A resolved target configuration as stored in the registry.
#[derive(Clone)]
pub struct TargetConfig {
    /// Registry key.
    pub name: String,
    /// Object the camera follows.
    pub tracked: Rc<dyn TrackedObject>,
    /// Camera offset applied along the tracked object's local axes.
    pub offset: Vec3,
    /// Extra rotation applied after the tracked orientation.
    pub rotation: Option<Quat>,
    /// Reserved for an absolute positioning mode. Does not affect updates.
    pub fixed: bool,
    /// Fraction of the remaining gap closed per tick.
    pub stiffness: f32,
    /// Blend orientation toward the ideal pose (`true`) or look at the
    /// tracked position (`false`).
    pub match_rotation: bool,
}

impl fmt::Debug for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetConfig")
            .field("name", &self.name)
            .field("tracked", &self.tracked)
            .field("offset", &self.offset)
            .field("rotation", &self.rotation)
            .field("fixed", &self.fixed)
            .field("stiffness", &self.stiffness)
            .field("match_rotation", &self.match_rotation)
            .finish()
    }
}

impl TargetConfig {
    /// Fresh defaults. Each call allocates its own neutral tracked
    /// transform, so defaulted targets never share one.
    pub fn defaults(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracked: Rc::new(SharedTransform::default()),
            offset: DEFAULT_OFFSET,
            rotation: None,
            fixed: false,
            stiffness: DEFAULT_STIFFNESS,
            match_rotation: true,
        }
    }

    /// Overlay `settings` onto the defaults.
    #[must_use]
    pub fn from_settings(settings: TargetSettings) -> Self {
        let defaults = Self::defaults(settings.name);
        Self {
            tracked: settings.tracked.unwrap_or(defaults.tracked),
            offset: settings.offset.unwrap_or(defaults.offset),
            rotation: settings.rotation.resolve(),
            fixed: settings.fixed.unwrap_or(defaults.fixed),
            stiffness: settings.stiffness.unwrap_or(defaults.stiffness),
            match_rotation: settings
                .match_rotation
                .unwrap_or(defaults.match_rotation),
            name: defaults.name,
        }
    }
}

impl From<TargetSettings> for TargetConfig {
    fn from(settings: TargetSettings) -> Self {
        Self::from_settings(settings)
    }
}
