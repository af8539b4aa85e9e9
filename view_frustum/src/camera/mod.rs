//! Camera module: view frustum, visibility queries, and bounding boxes.
//!
//! The frustum consumes projection and model-view matrices supplied by
//! its owner; it never owns a camera transform itself.

mod bounding_box;
mod camera;
mod frustum;
mod plane;

pub use bounding_box::{bounding_box, Basis, HalfExtents, OrientedBox};
pub use camera::Camera;
pub use frustum::{Frustum, FrustumConfig, FrustumSide, PlaneExtraction, Visibility};
pub use plane::Plane;
