//! Spheres

use crate::geometry::{Dot, Point3f, Ray};
use crate::lumo::*;

/// A sphere, the only analytic shape the renderer traces directly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    /// Center.
    pub center: Point3f,

    /// Radius. Non-negative by caller contract.
    pub radius: Float,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// * `center` - Center.
    /// * `radius` - Radius.
    pub fn new(center: Point3f, radius: Float) -> Self {
        Self { center, radius }
    }

    /// Returns the parametric distance to the nearest visible intersection
    /// with the ray, or `INFINITY` when there is none. The sentinel keeps the
    /// caller's nearest-hit reduction over many primitives branch-free.
    ///
    /// Solves `|T + t*d|^2 = r^2` for `T = o - center`, taking the leading
    /// coefficient as 1; supply a unit direction or read the result in
    /// direction-length units. The near root wins when it clears
    /// `SHADOW_EPSILON`, otherwise the far root is tried under the same
    /// guard, so a ray starting inside the sphere reports the far wall
    /// instead of its own entry point.
    ///
    /// * `ray` - The ray.
    pub fn intersect(&self, ray: &Ray) -> Float {
        let t = ray.o - self.center;
        let b = 2.0 * t.dot(&ray.d);
        let c = t.length_squared() - self.radius * self.radius;

        let delta = b * b - 4.0 * c;
        if delta <= 0.0 {
            return INFINITY;
        }

        let sqrt_delta = delta.sqrt();
        let t_near = 0.5 * (-b - sqrt_delta);
        if t_near > SHADOW_EPSILON {
            return t_near;
        }

        let t_far = 0.5 * (-b + sqrt_delta);
        if t_far > SHADOW_EPSILON {
            return t_far;
        }

        INFINITY
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{point3, Point3, Vector3, Vector3f};
    use float_cmp::*;
    use proptest::prelude::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Point3::zero(), 1.0)
    }

    #[test]
    fn near_root() {
        let r = Ray::new(point3(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0), INFINITY, 0.0);
        assert_eq!(unit_sphere().intersect(&r), 4.0);
    }

    #[test]
    fn far_root_from_inside() {
        // Near root is at or behind the origin; the far wall is returned.
        let r = Ray::new(Point3::zero(), Vector3f::new(0.0, 0.0, 1.0), INFINITY, 0.0);
        assert_eq!(unit_sphere().intersect(&r), 1.0);
    }

    #[test]
    fn miss() {
        let r = Ray::new(point3(0.0, 2.0, -5.0), Vector3f::new(0.0, 0.0, 1.0), INFINITY, 0.0);
        assert_eq!(unit_sphere().intersect(&r), INFINITY);
    }

    #[test]
    fn behind_origin() {
        let r = Ray::new(point3(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, 1.0), INFINITY, 0.0);
        assert_eq!(unit_sphere().intersect(&r), INFINITY);
    }

    #[test]
    fn tangent_is_a_miss() {
        // Grazing ray: the discriminant is zero, not positive.
        let r = Ray::new(point3(1.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0), INFINITY, 0.0);
        assert_eq!(unit_sphere().intersect(&r), INFINITY);
    }

    #[test]
    fn epsilon_guard_skips_surface_origin() {
        // Origin on the surface, pointing inward: the near root is ~0 and is
        // rejected in favor of the far root.
        let r = Ray::new(point3(0.0, 0.0, -1.0), Vector3f::new(0.0, 0.0, 1.0), INFINITY, 0.0);
        assert_eq!(unit_sphere().intersect(&r), 2.0);
    }

    // Define some properties for tests.
    prop_point3!(
        point3_f32,
        f32,
        -10.0..10.0f32,
        -10.0..10.0f32,
        -10.0..10.0f32
    );

    prop_vector3!(
        vector3_f32,
        f32,
        -1.0..1.0f32,
        -1.0..1.0f32,
        -1.0..1.0f32
    );

    proptest! {
        #[test]
        fn hit_point_lies_on_surface(
            o in point3_f32(),
            d in vector3_f32().prop_filter("non-zero", |v| v.length_squared() > 0.01),
            c in point3_f32(),
            radius in 0.5..5.0f32
        ) {
            let sphere = Sphere::new(c, radius);
            let dist = sphere.intersect(&Ray::new(o, d.normalize(), INFINITY, 0.0));
            prop_assume!(dist < INFINITY);

            let p = o + d.normalize() * dist;
            prop_assert!(approx_eq!(f32, p.distance(c), radius, epsilon = 0.01));
        }

        #[test]
        fn returned_distance_clears_guard(
            o in point3_f32(),
            d in vector3_f32().prop_filter("non-zero", |v| v.length_squared() > 0.01),
            c in point3_f32(),
            radius in 0.5..5.0f32
        ) {
            let sphere = Sphere::new(c, radius);
            let dist = sphere.intersect(&Ray::new(o, d.normalize(), INFINITY, 0.0));
            prop_assert!(dist > SHADOW_EPSILON);
        }

        #[test]
        fn ray_inside_always_hits(
            d in vector3_f32().prop_filter("non-zero", |v| v.length_squared() > 0.01),
            c in point3_f32(),
            radius in 0.5..5.0f32
        ) {
            // From the center every direction exits through the sphere wall.
            let sphere = Sphere::new(c, radius);
            let dist = sphere.intersect(&Ray::new(c, d.normalize(), INFINITY, 0.0));
            prop_assert!(approx_eq!(f32, dist, radius, epsilon = 0.01));
        }
    }
}
