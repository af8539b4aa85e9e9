/*!
# View Frustum

View-frustum visibility engine for the Galaxy3D renderer.

Derives the six planes bounding a camera's visible volume from the active
projection and model-view matrices, and classifies points, spheres,
oriented boxes, and polygons against them.

## Architecture

- **Plane**: half-space (a, b, c, d), positive side is inside
- **Frustum**: six named planes plus the visibility queries
- **Visibility**: `Inside` / `Outside` / `Partial` for hierarchical culling
- **OrientedBox**: box description expanded to eight corners by `bounding_box`
- **Camera**: owns a frustum and refreshes it when its matrices change

## Example

```
use view_frustum::glam::{Mat4, Vec3};
use view_frustum::frustum3d::camera::{Frustum, Visibility};

let projection = Mat4::perspective_rh_gl(60.0_f32.to_radians(), 1.0, 1.0, 100.0);
let frustum = Frustum::from_matrices(&projection, &Mat4::IDENTITY);

assert!(frustum.point_visible(Vec3::new(0.0, 0.0, -10.0)));
assert_eq!(frustum.sphere_visible(1.0, Vec3::new(0.0, 0.0, -10.0)), Visibility::Inside);
```
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;

// Main frustum3d namespace module
pub mod frustum3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Frustum, camera and bounding boxes
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
