use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::target::{
    EulerAngles, EulerOrder, RotationInput, TargetSettings, DEFAULT_OFFSET,
    DEFAULT_STIFFNESS,
};

/// Extra rotation as written in a preset file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RotationPreset {
    /// Euler angles in radians.
    Euler {
        /// Rotation about X.
        #[serde(default)]
        x: f32,
        /// Rotation about Y.
        #[serde(default)]
        y: f32,
        /// Rotation about Z.
        #[serde(default)]
        z: f32,
        /// Composition order.
        #[serde(default)]
        order: EulerOrder,
    },
    /// Quaternion as `[x, y, z, w]`.
    Quaternion([f32; 4]),
}

impl From<RotationPreset> for RotationInput {
    fn from(preset: RotationPreset) -> Self {
        match preset {
            RotationPreset::Euler { x, y, z, order } => {
                Self::Euler(EulerAngles::new(x, y, z).with_order(order))
            }
            RotationPreset::Quaternion(xyzw) => {
                Self::Quaternion(Quat::from_array(xyzw))
            }
        }
    }
}

/// A camera target as stored in a preset file. Presets cannot name a tracked
/// object; hosts attach one after converting with
/// [`to_settings`](Self::to_settings).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Target")]
#[serde(default)]
pub struct TargetPreset {
    /// Registry key.
    pub name: String,
    /// Camera offset in the tracked object's local axes (right, up, back).
    #[schemars(title = "Offset")]
    pub offset: [f32; 3],
    /// Fraction of the remaining gap closed per tick.
    #[schemars(title = "Stiffness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub stiffness: f32,
    /// Blend toward the ideal orientation instead of looking at the target.
    #[schemars(title = "Match Rotation")]
    pub match_rotation: bool,
    /// Reserved positioning flag.
    #[schemars(skip)]
    pub fixed: bool,
    /// Extra rotation composed onto the tracked orientation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationPreset>,
}

impl Default for TargetPreset {
    fn default() -> Self {
        Self {
            name: String::new(),
            offset: DEFAULT_OFFSET.to_array(),
            stiffness: DEFAULT_STIFFNESS,
            match_rotation: true,
            fixed: false,
            rotation: None,
        }
    }
}

impl TargetPreset {
    /// Settings with every preset field set explicitly and no tracker.
    #[must_use]
    pub fn to_settings(&self) -> TargetSettings {
        let mut settings = TargetSettings::new(self.name.clone())
            .with_offset(Vec3::from_array(self.offset))
            .with_stiffness(self.stiffness)
            .with_match_rotation(self.match_rotation)
            .with_fixed(self.fixed);
        if let Some(rotation) = self.rotation {
            settings = settings.with_rotation(rotation);
        }
        settings
    }
}
