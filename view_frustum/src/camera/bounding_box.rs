/// Oriented bounding boxes and their corner construction.
///
/// A box is described by half-extents along its own (view, up, right)
/// axes, a world-space position, and that basis. `bounding_box` turns the
/// description into eight world-space corners; callers with rarely
/// changing transforms should cache the corners and test them directly
/// with `Frustum::corners_visible`.

use glam::Vec3;
use crate::error::{Error, Result};

/// Half-extents of a box: distance from the center to each face.
///
/// `width` runs along the right axis, `height` along up, `depth` along view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfExtents {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl HalfExtents {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth }
    }

    /// Same half-extent on every axis (a cube).
    pub const fn uniform(size: f32) -> Self {
        Self::new(size, size, size)
    }

    fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.depth.is_finite()
    }
}

impl From<f32> for HalfExtents {
    fn from(size: f32) -> Self {
        Self::uniform(size)
    }
}

impl From<Vec3> for HalfExtents {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[f32; 3]> for HalfExtents {
    fn from([width, height, depth]: [f32; 3]) -> Self {
        Self::new(width, height, depth)
    }
}

/// Orientation of a box. The three vectors are expected to be orthonormal;
/// unnormalized vectors silently scale the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub view: Vec3,
    pub up: Vec3,
    pub right: Vec3,
}

impl Basis {
    /// Looking down -Z with +Y up and +X right.
    pub const CANONICAL: Basis = Basis {
        view: Vec3::NEG_Z,
        up: Vec3::Y,
        right: Vec3::X,
    };

    pub const fn new(view: Vec3, up: Vec3, right: Vec3) -> Self {
        Self { view, up, right }
    }

    fn is_usable(&self) -> bool {
        [self.view, self.up, self.right]
            .iter()
            .all(|v| v.is_finite() && *v != Vec3::ZERO)
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Parametric oriented box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    pub half_extents: HalfExtents,
    pub position: Vec3,
    pub basis: Basis,
}

impl OrientedBox {
    pub fn new(half_extents: impl Into<HalfExtents>, position: Vec3, basis: Basis) -> Self {
        Self {
            half_extents: half_extents.into(),
            position,
            basis,
        }
    }

    /// Box aligned with the canonical axes.
    pub fn axis_aligned(half_extents: impl Into<HalfExtents>, position: Vec3) -> Self {
        Self::new(half_extents, position, Basis::CANONICAL)
    }

    /// Check that corners can be derived from this description.
    pub fn validate(&self) -> Result<()> {
        if !self.half_extents.is_finite() {
            return Err(Error::InvalidArgument(
                "Could not calculate width, height and depth from arguments".to_string(),
            ));
        }
        if !self.position.is_finite() || !self.basis.is_usable() {
            return Err(Error::InvalidArgument(
                "Could not calculate position, view, up and right vectors from arguments".to_string(),
            ));
        }
        Ok(())
    }

    /// The eight world-space corners, in `bounding_box` order.
    pub fn corners(&self) -> [Vec3; 8] {
        bounding_box(self.half_extents, self.position, &self.basis)
    }
}

/// Eight corners of an oriented box: `position ± view*depth ± up*height ± right*width`.
///
/// Order: front/rear (along +view first) × top/bottom × left/right.
pub fn bounding_box(half_extents: HalfExtents, position: Vec3, basis: &Basis) -> [Vec3; 8] {
    let view = basis.view * half_extents.depth;
    let up = basis.up * half_extents.height;
    let right = basis.right * half_extents.width;

    [
        view + up - right + position,   // front, top,    left
        view + up + right + position,   // front, top,    right
        view - up - right + position,   // front, bottom, left
        view - up + right + position,   // front, bottom, right
        -view + up - right + position,  // rear,  top,    left
        -view + up + right + position,  // rear,  top,    right
        -view - up - right + position,  // rear,  bottom, left
        -view - up + right + position,  // rear,  bottom, right
    ]
}

#[cfg(test)]
#[path = "bounding_box_tests.rs"]
mod tests;
