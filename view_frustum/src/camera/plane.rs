/// Plane: one half-space of the view frustum.
///
/// A point P is on the positive (inside) side iff a*x + b*y + c*z + d > 0.
/// The layout is `#[repr(C)]` and `Pod`, so a plane array can be copied
/// into a GPU buffer as six vec4s.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Plane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Plane {
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    pub fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.a, self.b, self.c, self.d)
    }

    /// Plane normal (a, b, c). Unit length once normalized.
    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// Signed distance of `point` from the plane.
    ///
    /// Only a true distance after `normalize`; before that it is scaled
    /// by the normal's magnitude.
    #[inline]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.a * point.x + self.b * point.y + self.c * point.z + self.d
    }

    /// Strictly on the positive side. Points on the plane are outside.
    #[inline]
    pub fn is_in_front(&self, point: Vec3) -> bool {
        self.distance(point) > 0.0
    }

    /// Divide all four coefficients by the magnitude of (a, b, c).
    ///
    /// Returns `false` and leaves the plane unchanged when that magnitude
    /// is zero.
    pub fn normalize(&mut self) -> bool {
        let magnitude = self.normal().length();
        if magnitude == 0.0 {
            return false;
        }
        self.a /= magnitude;
        self.b /= magnitude;
        self.c /= magnitude;
        self.d /= magnitude;
        true
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
