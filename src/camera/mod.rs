//! Camera system for following scene objects.
//!
//! Provides the projection parameters, the transform type used for poses
//! and tracked objects, and the [`rig::TargetCamera`] that ties them to the
//! target registry.

/// Core camera struct holding projection parameters.
pub mod core;
/// Named-target follow camera.
pub mod rig;
/// Position/orientation pairs and the tracked-object trait.
pub mod transform;
