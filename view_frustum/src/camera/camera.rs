/// Camera: owns a Frustum and keeps it in step with its matrices.
///
/// Setting a matrix only stores it and marks the frustum stale; the
/// planes are recomputed by `look()`, once per frame at most. The frustum
/// is never handed out mutably, so `look()` is the only path that
/// touches it.

use glam::Mat4;
use super::frustum::{Frustum, FrustumConfig};

#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    frustum: Frustum,
    frustum_stale: bool,
}

impl Camera {
    /// Create a camera and compute its frustum immediately.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self::with_config(view, projection, FrustumConfig::default())
    }

    pub fn with_config(view: Mat4, projection: Mat4, config: FrustumConfig) -> Self {
        let mut frustum = Frustum::with_config(config);
        frustum.update(&projection, &view);
        Self {
            view_matrix: view,
            projection_matrix: projection,
            frustum,
            frustum_stale: false,
        }
    }

    // ===== GETTERS =====

    /// View (model-view) matrix.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix, OpenGL clip conventions.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Current frustum. Out of date while `is_frustum_stale()`.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    pub fn is_frustum_stale(&self) -> bool {
        self.frustum_stale
    }

    // ===== SETTERS: store, compute nothing =====

    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
        self.frustum_stale = true;
    }

    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
        self.frustum_stale = true;
    }

    // ===== FRUSTUM REFRESH =====

    /// Apply the camera: refresh the frustum if a matrix changed.
    pub fn look(&mut self) -> &Frustum {
        if self.frustum_stale {
            self.frustum.update(&self.projection_matrix, &self.view_matrix);
            self.frustum_stale = false;
            crate::engine_debug!("frustum3d::Camera", "Frustum refreshed");
        }
        &self.frustum
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
