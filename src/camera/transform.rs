//! Position + orientation pairs and the tracked-object seam.
//!
//! [`Transform`] is the scratch calculator the rig uses to build its ideal
//! pose. [`TrackedObject`] is what the rig reads from the thing it follows;
//! [`SharedTransform`] is the stock implementation hosts move around.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use glam::{Mat3, Mat4, Quat, Vec3};

/// World-space position and orientation.
///
/// Local axes follow the usual camera convention: +X right, +Y up, and
/// forward is -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Origin with no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a transform from a position and orientation.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Create an unrotated transform at `position`.
    #[must_use]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Overwrite both position and orientation from a tracked object.
    pub fn copy_from(&mut self, source: &dyn TrackedObject) {
        self.position = source.world_position();
        self.rotation = source.world_rotation();
    }

    /// Local +X axis in world space.
    #[inline]
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Local +Y axis in world space.
    #[inline]
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Local +Z axis in world space (the camera looks down the opposite
    /// direction).
    #[inline]
    #[must_use]
    pub fn back(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Translate along the local X axis.
    pub fn translate_x(&mut self, distance: f32) {
        self.position += self.right() * distance;
    }

    /// Translate along the local Y axis.
    pub fn translate_y(&mut self, distance: f32) {
        self.position += self.up() * distance;
    }

    /// Translate along the local Z axis.
    pub fn translate_z(&mut self, distance: f32) {
        self.position += self.back() * distance;
    }

    /// Compose `delta` after the current orientation (local-space rotation).
    pub fn rotate_local(&mut self, delta: Quat) {
        self.rotation *= delta;
    }

    /// Orient so that forward (-Z) points at `target`, keeping +Y as up.
    pub fn look_at(&mut self, target: Vec3) {
        self.rotation = look_at_rotation(self.position, target, Vec3::Y);
    }

    /// View -> world matrix.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// World -> view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation.conjugate())
            * Mat4::from_translation(-self.position)
    }
}

/// Orientation whose forward axis (-Z) points from `eye` toward `target`.
///
/// Coincident `eye` and `target` produce the identity rotation. An `up`
/// parallel to the view direction is nudged so a basis still exists.
#[must_use]
pub fn look_at_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let mut z_axis = eye - target;
    if z_axis.length_squared() == 0.0 {
        z_axis = Vec3::Z;
    }
    z_axis = z_axis.normalize();

    let mut x_axis = up.cross(z_axis);
    if x_axis.length_squared() == 0.0 {
        if up.z.abs() == 1.0 {
            z_axis.x += 0.0001;
        } else {
            z_axis.z += 0.0001;
        }
        z_axis = z_axis.normalize();
        x_axis = up.cross(z_axis);
    }
    x_axis = x_axis.normalize();
    let y_axis = z_axis.cross(x_axis);

    Quat::from_mat3(&Mat3::from_cols(x_axis, y_axis, z_axis)).normalize()
}

/// Read-only view of something the camera can follow.
pub trait TrackedObject: fmt::Debug {
    /// Current world-space position.
    fn world_position(&self) -> Vec3;
    /// Current world-space orientation.
    fn world_rotation(&self) -> Quat;
}

impl TrackedObject for Transform {
    fn world_position(&self) -> Vec3 {
        self.position
    }

    fn world_rotation(&self) -> Quat {
        self.rotation
    }
}

/// Cheaply clonable handle to a transform owned by the host.
///
/// Clones share state: the host keeps one clone and moves it every frame,
/// the rig keeps another inside a target configuration and reads it during
/// `update`.
#[derive(Debug, Clone, Default)]
pub struct SharedTransform(Rc<Cell<Transform>>);

impl SharedTransform {
    /// Wrap an initial transform.
    #[must_use]
    pub fn new(transform: Transform) -> Self {
        Self(Rc::new(Cell::new(transform)))
    }

    /// Snapshot of the current transform.
    #[must_use]
    pub fn get(&self) -> Transform {
        self.0.get()
    }

    /// Replace the whole transform.
    pub fn set(&self, transform: Transform) {
        self.0.set(transform);
    }

    /// Move to a new world position, keeping the orientation.
    pub fn set_position(&self, position: Vec3) {
        let mut transform = self.0.get();
        transform.position = position;
        self.0.set(transform);
    }

    /// Change orientation, keeping the position.
    pub fn set_rotation(&self, rotation: Quat) {
        let mut transform = self.0.get();
        transform.rotation = rotation;
        self.0.set(transform);
    }

    /// True when both handles point at the same transform.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl TrackedObject for SharedTransform {
    fn world_position(&self) -> Vec3 {
        self.0.get().position
    }

    fn world_rotation(&self) -> Quat {
        self.0.get().rotation
    }
}
