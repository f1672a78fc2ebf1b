//! Per-tick pose math: ideal pose from a target, then a partial step toward
//! it.
//!
//! Neither function keeps state. The ideal pose is written into a
//! caller-owned scratch [`Transform`] that is fully overwritten each call.

use glam::{Quat, Vec3};

use crate::camera::transform::Transform;
use crate::target::TargetConfig;

/// Compute the ideal camera pose for `target` into `scratch`.
///
/// The tracked orientation is composed with the extra rotation (applied
/// second), then the offset is applied along the resulting local axes in
/// X, Y, Z order.
pub fn solve_ideal_pose(target: &TargetConfig, scratch: &mut Transform) {
    scratch.copy_from(target.tracked.as_ref());

    if let Some(extra) = target.rotation {
        scratch.rotate_local(extra);
    }

    apply_offset(scratch, target.offset);
}

/// Translate along local axes, skipping components that are exactly zero so
/// idle axes never pick up rounding from the rotated basis.
fn apply_offset(scratch: &mut Transform, offset: Vec3) {
    if offset.x != 0.0 {
        scratch.translate_x(offset.x);
    }
    if offset.y != 0.0 {
        scratch.translate_y(offset.y);
    }
    if offset.z != 0.0 {
        scratch.translate_z(offset.z);
    }
}

/// Move `pose` a `target.stiffness` fraction of the way to `ideal`.
///
/// Position always lerps. Orientation slerps toward `ideal` when the target
/// matches rotation; otherwise it is replaced by a look-at from the new
/// position toward the tracked object, ignoring the ideal orientation.
/// Stiffness is a per-tick fraction and is not range-checked.
pub fn blend_toward(pose: &mut Transform, ideal: &Transform, target: &TargetConfig) {
    let s = target.stiffness;
    pose.position = lerp_position(pose.position, ideal.position, s);

    if target.match_rotation {
        pose.rotation = slerp_rotation(pose.rotation, ideal.rotation, s);
    } else {
        pose.look_at(target.tracked.world_position());
    }
}

/// `current + (ideal - current) * s`. The endpoints are returned untouched
/// at `s == 0` and `s == 1`.
#[inline]
pub fn lerp_position(current: Vec3, ideal: Vec3, s: f32) -> Vec3 {
    if s == 1.0 {
        ideal
    } else {
        current + (ideal - current) * s
    }
}

/// Spherical step from `current` toward `ideal`. The endpoints are returned
/// untouched at `s == 0` and `s == 1`.
#[inline]
pub fn slerp_rotation(current: Quat, ideal: Quat, s: f32) -> Quat {
    if s == 0.0 {
        current
    } else if s == 1.0 {
        ideal
    } else {
        current.slerp(ideal, s)
    }
}
