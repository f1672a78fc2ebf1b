use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Order in which Euler axis rotations are composed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum EulerOrder {
    /// Rx · Ry · Rz
    #[default]
    Xyz,
    /// Rx · Rz · Ry
    Xzy,
    /// Ry · Rx · Rz
    Yxz,
    /// Ry · Rz · Rx
    Yzx,
    /// Rz · Rx · Ry
    Zxy,
    /// Rz · Ry · Rx
    Zyx,
}

/// Euler angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    /// Rotation about X.
    pub x: f32,
    /// Rotation about Y.
    pub y: f32,
    /// Rotation about Z.
    pub z: f32,
    /// Composition order.
    pub order: EulerOrder,
}

impl EulerAngles {
    /// Angles composed in the default XYZ order.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            order: EulerOrder::Xyz,
        }
    }

    /// Same angles, different composition order.
    #[must_use]
    pub const fn with_order(mut self, order: EulerOrder) -> Self {
        self.order = order;
        self
    }

    /// Product of the per-axis rotations, leftmost axis first.
    #[must_use]
    pub fn to_quat(&self) -> Quat {
        let rx = Quat::from_axis_angle(Vec3::X, self.x);
        let ry = Quat::from_axis_angle(Vec3::Y, self.y);
        let rz = Quat::from_axis_angle(Vec3::Z, self.z);
        match self.order {
            EulerOrder::Xyz => rx * ry * rz,
            EulerOrder::Xzy => rx * rz * ry,
            EulerOrder::Yxz => ry * rx * rz,
            EulerOrder::Yzx => ry * rz * rx,
            EulerOrder::Zxy => rz * rx * ry,
            EulerOrder::Zyx => rz * ry * rx,
        }
    }
}

/// Extra camera rotation as supplied by the caller.
///
/// Resolved once when a target is added; the stored form is always
/// `Option<Quat>`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RotationInput {
    /// Converted to a quaternion on insertion.
    Euler(EulerAngles),
    /// Stored as given.
    Quaternion(Quat),
    /// No extra rotation.
    #[default]
    None,
}

impl RotationInput {
    /// Canonical stored representation.
    #[must_use]
    pub fn resolve(self) -> Option<Quat> {
        match self {
            Self::Euler(angles) => Some(angles.to_quat()),
            Self::Quaternion(q) => Some(q),
            Self::None => None,
        }
    }
}

impl From<EulerAngles> for RotationInput {
    fn from(angles: EulerAngles) -> Self {
        Self::Euler(angles)
    }
}

impl From<Quat> for RotationInput {
    fn from(q: Quat) -> Self {
        Self::Quaternion(q)
    }
}
