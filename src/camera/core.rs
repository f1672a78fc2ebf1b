use glam::Mat4;

/// Perspective projection parameters with a cached projection matrix.
///
/// The rig never reads these back beyond construction; they are kept so
/// hosts can build view-projection matrices from the rig's pose.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    projection: Mat4,
}

impl Camera {
    /// Create a camera and compute its projection matrix once.
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        let mut camera = Self {
            fovy,
            aspect,
            znear,
            zfar,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Recompute the cached projection matrix from the current parameters.
    /// Call after mutating any of the public fields.
    pub fn update_projection_matrix(&mut self) {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        self.projection = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
    }

    /// The projection matrix as of the last
    /// [`update_projection_matrix`](Self::update_projection_matrix).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Update the aspect ratio for a new viewport size.
    ///
    /// A zero height leaves the camera untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
        self.update_projection_matrix();
    }
}
