//! 3-D Axis Aligned Bounding Boxes.

use crate::geometry::{point3, Point3, Point3f, Ray, Vector3};
use crate::lumo::*;
use num_traits::Num;
use std::ops::Index;

/// 3-D Axis Aligned Bounding Box.
///
/// Callers maintain `p_min[i] <= p_max[i]` on every axis; the queries below do
/// not re-validate it. An inverted box yields an empty or NaN-propagating
/// result, never a fault.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3<T: Num> {
    /// Minimum bounds.
    pub p_min: Point3<T>,

    /// Maximum bounds.
    pub p_max: Point3<T>,
}

/// 3-D bounding box containing `Float` points.
pub type Bounds3f = Bounds3<Float>;

/// 3-D bounding box containing `Int` points.
pub type Bounds3i = Bounds3<Int>;

/// Creates a new 3-D bounding box from 2 points. The minimum and maximum bounds
/// are used for each coordinate axis.
///
/// * `p1` - First point.
/// * `p2` - Second point.
pub fn bounds3<T: Num + PartialOrd + Copy>(p1: Point3<T>, p2: Point3<T>) -> Bounds3<T> {
    Bounds3 {
        p_min: point3(min(p1.x, p2.x), min(p1.y, p2.y), min(p1.z, p2.z)),
        p_max: point3(max(p1.x, p2.x), max(p1.y, p2.y), max(p1.z, p2.z)),
    }
}

impl<T: Num + Copy> Bounds3<T> {
    /// Returns the vector along the box diagonal from the minimum point to
    /// the maximum point.
    pub fn diagonal(&self) -> Vector3<T> {
        self.p_max - self.p_min
    }

    /// Returns true if a point is inside the bounding box.
    ///
    /// * `p` - The point.
    pub fn contains(&self, p: &Point3<T>) -> bool
    where
        T: PartialOrd,
    {
        (p.x >= self.p_min.x && p.x <= self.p_max.x)
            && (p.y >= self.p_min.y && p.y <= self.p_max.y)
            && (p.z >= self.p_min.z && p.z <= self.p_max.z)
    }

    /// Pad the bounding box by a constant factor in all dimensions.
    ///
    /// * `delta` - Padding amount.
    pub fn expand(&self, delta: T) -> Bounds3<T> {
        Bounds3 {
            p_min: self.p_min - Vector3::new(delta, delta, delta),
            p_max: self.p_max + Vector3::new(delta, delta, delta),
        }
    }

    /// Returns the squared distance from a point to the closest point on or in
    /// the box. Zero when the point is inside or on the boundary.
    ///
    /// * `p` - The point.
    pub fn distance_squared(&self, p: &Point3<T>) -> T
    where
        T: PartialOrd,
    {
        let nearest = point3(
            clamp(p.x, self.p_min.x, self.p_max.x),
            clamp(p.y, self.p_min.y, self.p_max.y),
            clamp(p.z, self.p_min.z, self.p_max.z),
        );
        (nearest - *p).length_squared()
    }
}

impl Bounds3f {
    /// Slab-method ray intersection. Returns the parametric entry and exit
    /// distances of the ray's line through the box, or `None` when there is no
    /// overlap.
    ///
    /// The distances may be negative; this reports geometric overlap only, and
    /// the caller decides visibility along the positive ray. A ray parallel to
    /// a slab whose origin lies outside that slab is a definite miss no matter
    /// what the remaining axes contribute.
    ///
    /// * `ray` - The ray.
    pub fn intersect_p(&self, ray: &Ray) -> Option<(Float, Float)> {
        let mut t_near = -INFINITY;
        let mut t_far = INFINITY;

        for axis in Axis::ALL {
            if ray.d[axis] == 0.0 {
                if ray.o[axis] < self.p_min[axis] || ray.o[axis] > self.p_max[axis] {
                    return None;
                }
            } else {
                // Direction sign decides which plane is crossed first, so
                // order the two crossings rather than trusting p_min/p_max.
                let t1 = (self.p_min[axis] - ray.o[axis]) / ray.d[axis];
                let t2 = (self.p_max[axis] - ray.o[axis]) / ray.d[axis];

                t_near = max(t_near, min(t1, t2));
                t_far = min(t_far, max(t1, t2));
            }
        }

        if t_near <= t_far {
            Some((t_near, t_far))
        } else {
            None
        }
    }

    /// Returns true if a sphere at `center` overlaps the box.
    ///
    /// * `center` - The sphere center.
    /// * `radius` - The sphere radius.
    pub fn overlaps_sphere(&self, center: &Point3f, radius: Float) -> bool {
        self.distance_squared(center) < radius * radius
    }

    /// Returns true if a sphere whose center travels linearly from `c0` to
    /// `c1` over one shutter interval overlaps the box at some time.
    ///
    /// Minimizes the point-to-box distance over the motion segment by ternary
    /// search and tests the converged point against the radius. The distance
    /// curve is treated as unimodal; trajectories grazing a corner can in
    /// principle defeat the bracketing, so this is an accepted approximation
    /// tuned for shutter-length segments, not an exact sweep test.
    ///
    /// * `c0`     - Center at the start of the interval.
    /// * `c1`     - Center at the end of the interval.
    /// * `radius` - The sphere radius.
    pub fn overlaps_moving_sphere(&self, c0: &Point3f, c1: &Point3f, radius: Float) -> bool {
        let mut lo: Float = 0.0;
        let mut hi: Float = 1.0;

        while lo + 1e-5 < hi {
            let m1 = (2.0 * lo + hi) / 3.0;
            let m2 = (lo + 2.0 * hi) / 3.0;

            let d1 = self.distance_squared(&lerp(m1, *c0, *c1));
            let d2 = self.distance_squared(&lerp(m2, *c0, *c1));

            if d2 > d1 {
                hi = m2;
            } else {
                lo = m1;
            }
        }

        self.distance_squared(&lerp(lo, *c0, *c1)) < radius * radius
    }
}

impl<T: Num> Index<u8> for Bounds3<T> {
    type Output = Point3<T>;

    /// Index the minimum and maximum bounds.
    ///
    /// * `index` - 0 for minimum and 1 for maximum.
    fn index(&self, index: u8) -> &Self::Output {
        match index {
            0 => &self.p_min,
            1 => &self.p_max,
            _ => panic!("Invalid index for std::Index on Bounds3<T>"),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
