/// Bounding volumes for framing and culling.
///
/// `AABB` is the per-object query the framer consumes; `BoundingSphere`
/// is the loose aggregate it produces.

use glam::Vec3;

// ===== AABB =====

/// Axis-Aligned Bounding Box in scene space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Build from two opposite corners, in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// Tight box around a set of points. `None` when the set is empty.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half the length of the main diagonal.
    ///
    /// This is the radius of the box's circumscribed sphere when taken
    /// around `center()`.
    pub fn half_diagonal(&self) -> f32 {
        self.max.distance(self.min) * 0.5
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Test if a point lies inside or on the boundary.
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Sphere approximation used by the framer: box center, half-diagonal.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere { center: self.center(), radius: self.half_diagonal() }
    }
}

// ===== BOUNDING SPHERE =====

/// Center + radius estimate. Not guaranteed minimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius: radius.max(0.0) }
    }

    /// Test if `other` lies entirely inside this sphere.
    ///
    /// `tolerance` absorbs float error when the spheres touch internally.
    pub fn contains_sphere(&self, other: &BoundingSphere, tolerance: f32) -> bool {
        self.center.distance(other.center) + other.radius <= self.radius + tolerance
    }
}

// ===== CAPABILITY =====

/// Anything that can report a scene-space bounding box.
///
/// Objects returning `None` (lights, empty groups) are skipped by the framer.
pub trait Bounded {
    fn bounding_box(&self) -> Option<AABB>;
}

impl Bounded for AABB {
    fn bounding_box(&self) -> Option<AABB> {
        Some(*self)
    }
}

impl<T: Bounded + ?Sized> Bounded for &T {
    fn bounding_box(&self) -> Option<AABB> {
        (**self).bounding_box()
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
