use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect: f32,
    /// Near clipping plane distance.
    #[schemars(title = "Near Plane", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(title = "Far Plane", range(min = 100.0, max = 10000.0), extend("step" = 10.0))]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            aspect: 16.0 / 9.0,
            znear: 0.1,
            zfar: 2000.0,
        }
    }
}
