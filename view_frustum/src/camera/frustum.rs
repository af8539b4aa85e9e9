/// Frustum: six clipping planes for visibility queries.
///
/// Each plane is (a, b, c, d) with the normal pointing inward: a point P
/// is inside the frustum iff a*x + b*y + c*z + d > 0 for all six planes.
///
/// The planes are derived from an OpenGL-style projection and model-view
/// pair (column-major, clip z in [-w, w]). `update` is the only expensive
/// call here: call it once per camera move and cache the frustum between
/// moves. Queries are pure reads and may be issued any number of times.
///
/// There is no internal synchronization. `update` mutates the planes in
/// place, so sharing a frustum across threads needs external locking.

use glam::{Mat4, Vec3};
use crate::engine::Engine;
use crate::error::{Error, Result};
use super::bounding_box::OrientedBox;
use super::plane::Plane;

const LOG_SOURCE: &str = "frustum3d::Frustum";

/// Result of a 3-way visibility classification.
///
/// Spatial indices rely on the distinction for hierarchical culling:
/// - `Outside` → skip the entire subtree
/// - `Inside` → collect all descendants without further testing
/// - `Partial` → test children individually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Entirely outside at least one plane
    Outside,
    /// Entirely inside all six planes
    Inside,
    /// Straddles at least one plane, excluded by none
    Partial,
}

impl Visibility {
    /// `true` for `Inside` and `Partial`.
    pub fn is_visible(self) -> bool {
        !matches!(self, Visibility::Outside)
    }
}

/// Frustum sides, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrustumSide {
    Right = 0,
    Left = 1,
    Bottom = 2,
    Top = 3,
    Far = 4,
    Near = 5,
}

impl FrustumSide {
    pub const ALL: [FrustumSide; 6] = [
        FrustumSide::Right,
        FrustumSide::Left,
        FrustumSide::Bottom,
        FrustumSide::Top,
        FrustumSide::Far,
        FrustumSide::Near,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Row selection for the top plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaneExtraction {
    /// Top is derived from row3 - row0, the same rows as the right plane.
    /// The resulting frustum has no upper bound.
    #[default]
    MirrorRightForTop,
    /// Top is derived from row3 - row1 (Gribb & Hartmann).
    Standard,
}

/// Frustum configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrustumConfig {
    /// How the top plane is extracted
    pub extraction: PlaneExtraction,
}

#[derive(Debug, Clone)]
pub struct Frustum {
    planes: [Plane; 6],
    modelview: Mat4,
    clip: Mat4,
    config: FrustumConfig,
}

impl Default for Frustum {
    fn default() -> Self {
        Self::new()
    }
}

impl Frustum {
    /// Frustum with six zero planes: nothing is visible until `update`.
    pub fn new() -> Self {
        Self::with_config(FrustumConfig::default())
    }

    pub fn with_config(config: FrustumConfig) -> Self {
        Self {
            planes: [Plane::default(); 6],
            modelview: Mat4::ZERO,
            clip: Mat4::ZERO,
            config,
        }
    }

    /// Build a frustum and extract its planes in one step.
    pub fn from_matrices(projection: &Mat4, modelview: &Mat4) -> Self {
        let mut frustum = Self::new();
        frustum.update(projection, modelview);
        frustum
    }

    // ===== PLANE EXTRACTION =====

    /// Recompute the six planes from a projection and model-view matrix.
    ///
    /// Planes are overwritten in place. A plane with a zero normal (singular
    /// matrix pair, e.g. near == far) is left unnormalized and reported at
    /// WARN; it is never an error.
    pub fn update(&mut self, projection: &Mat4, modelview: &Mat4) {
        self.modelview = *modelview;
        self.clip = *projection * *modelview;

        // m[col][row]; plane components run across the four columns
        let m = self.clip.to_cols_array_2d();
        let combine = |row: usize, sign: f32| {
            Plane::new(
                m[0][3] + sign * m[0][row],
                m[1][3] + sign * m[1][row],
                m[2][3] + sign * m[2][row],
                m[3][3] + sign * m[3][row],
            )
        };

        let top_row = match self.config.extraction {
            PlaneExtraction::MirrorRightForTop => 0,
            PlaneExtraction::Standard => 1,
        };

        self.planes[FrustumSide::Right.index()] = combine(0, -1.0);
        self.planes[FrustumSide::Left.index()] = combine(0, 1.0);
        self.planes[FrustumSide::Bottom.index()] = combine(1, 1.0);
        self.planes[FrustumSide::Top.index()] = combine(top_row, -1.0);
        self.planes[FrustumSide::Far.index()] = combine(2, -1.0);
        self.planes[FrustumSide::Near.index()] = combine(2, 1.0);

        for side in FrustumSide::ALL {
            if !self.planes[side.index()].normalize() {
                crate::engine_warn!(LOG_SOURCE, "Degenerate {:?} plane left unnormalized", side);
            }
        }

        crate::engine_trace!(LOG_SOURCE, "Planes updated");
    }

    /// `update` from raw 16-scalar column-major arrays.
    ///
    /// Fails without touching the planes when either slice does not hold
    /// exactly 16 values.
    pub fn update_from_slices(&mut self, projection: &[f32], modelview: &[f32]) -> Result<()> {
        let projection = Self::matrix_from_slice("projection", projection)?;
        let modelview = Self::matrix_from_slice("modelview", modelview)?;
        self.update(&projection, &modelview);
        Ok(())
    }

    fn matrix_from_slice(name: &str, values: &[f32]) -> Result<Mat4> {
        if values.len() != 16 {
            return Err(Engine::log_and_return_error(
                LOG_SOURCE,
                Error::InvalidMatrix(format!(
                    "{} matrix must hold 16 values, got {}",
                    name,
                    values.len()
                )),
            ));
        }
        Ok(Mat4::from_cols_slice(values))
    }

    // ===== ACCESSORS =====

    pub fn config(&self) -> &FrustumConfig {
        &self.config
    }

    /// Planes indexed by `FrustumSide::index`.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    pub fn plane(&self, side: FrustumSide) -> &Plane {
        &self.planes[side.index()]
    }

    pub fn right(&self) -> &Plane {
        self.plane(FrustumSide::Right)
    }

    pub fn left(&self) -> &Plane {
        self.plane(FrustumSide::Left)
    }

    pub fn bottom(&self) -> &Plane {
        self.plane(FrustumSide::Bottom)
    }

    pub fn top(&self) -> &Plane {
        self.plane(FrustumSide::Top)
    }

    pub fn far(&self) -> &Plane {
        self.plane(FrustumSide::Far)
    }

    pub fn near(&self) -> &Plane {
        self.plane(FrustumSide::Near)
    }

    /// Model-view matrix from the last `update`.
    pub fn modelview(&self) -> &Mat4 {
        &self.modelview
    }

    /// Composed clip matrix (projection * modelview) from the last `update`.
    pub fn clip_matrix(&self) -> &Mat4 {
        &self.clip
    }

    // ===== VISIBILITY QUERIES =====

    /// `true` iff the point is strictly inside all six planes.
    pub fn point_visible(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.is_in_front(point))
    }

    /// Classify a sphere.
    ///
    /// Outside as soon as one plane has the center at or beyond `-radius`;
    /// Inside only when every plane has the center further than `radius`.
    pub fn sphere_visible(&self, radius: f32, center: Vec3) -> Visibility {
        let mut inside = 0;
        for plane in &self.planes {
            let distance = plane.distance(center);
            if distance <= -radius {
                return Visibility::Outside;
            }
            if distance > radius {
                inside += 1;
            }
        }

        if inside == self.planes.len() {
            Visibility::Inside
        } else {
            Visibility::Partial
        }
    }

    /// Classify a parametric oriented box.
    pub fn box_visible(&self, obb: &OrientedBox) -> Result<Visibility> {
        obb.validate()
            .map_err(|err| Engine::log_and_return_error(LOG_SOURCE, err))?;
        Ok(self.classify_corners(&obb.corners()))
    }

    /// Classify a box given by its world-space corners, in any order.
    pub fn corners_visible(&self, corners: &[Vec3]) -> Result<Visibility> {
        if corners.is_empty() {
            return Err(Engine::log_and_return_error(
                LOG_SOURCE,
                Error::InvalidArgument(
                    "Could not calculate any bounding box vertices from arguments".to_string(),
                ),
            ));
        }
        Ok(self.classify_corners(corners))
    }

    fn classify_corners(&self, corners: &[Vec3]) -> Visibility {
        let mut within = 0;
        for plane in &self.planes {
            let in_front = corners.iter().filter(|&&corner| plane.is_in_front(corner)).count();
            if in_front == 0 {
                return Visibility::Outside;
            }
            if in_front == corners.len() {
                within += 1;
            }
        }

        if within == self.planes.len() {
            Visibility::Inside
        } else {
            Visibility::Partial
        }
    }

    /// Conservative polygon test.
    ///
    /// Rejects the polygon only when one plane has every vertex on its
    /// outer side. Otherwise the polygon is reported visible, even when no
    /// vertex is inside and the polygon misses the volume entirely. Clip
    /// against the planes when exactness matters.
    pub fn polygon_visible(&self, vertices: &[Vec3]) -> bool {
        self.planes
            .iter()
            .all(|plane| vertices.iter().any(|&vertex| plane.is_in_front(vertex)))
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
