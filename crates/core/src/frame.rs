//! Cross-section frames perpendicular to the path tangent.

use crate::Vec3;

/// Reference up direction used to orient every ring.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Squared-length threshold below which a vector normalizes to zero.
const SMALL_NUMBER: f32 = 1e-8;

/// Normalize `v`, returning the zero vector when it is too short to normalize.
#[inline]
pub fn safe_normal(v: Vec3) -> Vec3 {
    let square_sum = v.length_squared();
    if square_sum == 1.0 {
        v
    } else if square_sum < SMALL_NUMBER {
        Vec3::ZERO
    } else {
        v * square_sum.sqrt().recip()
    }
}

/// Local basis at one path sample.
///
/// Built against [`WORLD_UP`]: a tangent parallel to it (or a zero tangent)
/// leaves `right` and `up` at zero, and every ring offset collapses onto the
/// centerline. Callers see a zero-area ring rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossSectionFrame {
    /// Unit tangent, or zero for a degenerate sample.
    pub axis: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl CrossSectionFrame {
    pub fn from_tangent(tangent: Vec3) -> Self {
        let axis = safe_normal(tangent);
        let right = safe_normal(axis.cross(WORLD_UP));
        let up = safe_normal(right.cross(axis));
        Self { axis, right, up }
    }

    /// Ring offset at `angle` radians for the given radius.
    #[inline]
    pub fn offset(&self, angle: f32, radius: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        (self.right * cos + self.up * sin) * radius
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.right == Vec3::ZERO
    }
}
