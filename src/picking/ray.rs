use glam::Vec3;

/// Near-parallel denominators below this are treated as a miss rather
/// than divided through.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A ray with an origin and a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// World-space starting point.
    pub origin: Vec3,
    /// Unit-length direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from origin and direction.
    #[must_use]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parametric distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// An infinite plane given by a unit normal and an offset along it:
/// all points `x` with `dot(normal, x) == offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit-length plane normal.
    pub normal: Vec3,
    /// Signed distance of the plane from the origin, along the normal.
    pub offset: f32,
}

impl Plane {
    /// Create a plane from a unit normal and offset.
    #[must_use]
    pub const fn new(normal: Vec3, offset: f32) -> Self {
        Self { normal, offset }
    }

    /// Build from the `[nx, ny, nz, offset]` equation form used by
    /// [`Properties::map_plane`](crate::Properties::map_plane).
    #[must_use]
    pub const fn from_equation(eq: [f32; 4]) -> Self {
        Self {
            normal: Vec3::new(eq[0], eq[1], eq[2]),
            offset: eq[3],
        }
    }

    /// A point on the plane.
    #[must_use]
    pub fn point(&self) -> Vec3 {
        self.normal * self.offset
    }

    /// Parametric distance to the plane along `ray`, front side only.
    ///
    /// Only rays approaching the plane against its normal can hit;
    /// near-parallel rays are a miss.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = -self.normal.dot(ray.direction);
        if denom <= PARALLEL_EPSILON {
            return None;
        }
        let t = (self.point() - ray.origin).dot(self.normal) / -denom;
        (t >= 0.0).then_some(t)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Componentwise minimum corner.
    pub min: Vec3,
    /// Componentwise maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its corners.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all of `points`. Empty input yields a
    /// degenerate box at the origin, which no ray can hit.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        if points.is_empty() {
            return Self::new(Vec3::ZERO, Vec3::ZERO);
        }
        Self { min, max }
    }

    /// Box center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Whether the box encloses zero volume.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let d = self.max - self.min;
        d.x <= 0.0 || d.y <= 0.0 || d.z <= 0.0
    }

    /// Slab-method intersection returning the entry distance, or the
    /// exit distance when the ray starts inside the box.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        if self.is_degenerate() {
            return None;
        }

        // Clamp near-zero direction components so the inverse stays
        // finite with the correct sign.
        let safe = |d: f32| {
            if d.abs() < PARALLEL_EPSILON {
                PARALLEL_EPSILON.copysign(d)
            } else {
                d
            }
        };
        let inv = Vec3::new(
            1.0 / safe(ray.direction.x),
            1.0 / safe(ray.direction.y),
            1.0 / safe(ray.direction.z),
        );

        let to_min = (self.min - ray.origin) * inv;
        let to_max = (self.max - ray.origin) * inv;
        let near = to_min.min(to_max);
        let far = to_min.max(to_max);
        let t_near = near.x.max(near.y).max(near.z);
        let t_far = far.x.min(far.y).min(far.z);

        if t_near > t_far || t_far < 0.0 {
            return None;
        }
        if t_near >= 0.0 {
            Some(t_near)
        } else {
            // Origin inside the box: report the exit point.
            (t_far > PARALLEL_EPSILON).then_some(t_far)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_at_walks_the_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(ray.at(3.0), Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn plane_hit_from_front_side() {
        // Ground plane z = 0, camera above looking down.
        let plane = Plane::from_equation([0.0, 0.0, 1.0, 0.0]);
        let ray = Ray::new(Vec3::new(1.0, 2.0, 5.0), Vec3::NEG_Z);
        let t = plane.intersect(&ray).unwrap();
        assert!((t - 5.0).abs() < 1e-6);
        assert!((ray.at(t).z).abs() < 1e-6);
    }

    #[test]
    fn plane_miss_when_parallel() {
        let plane = Plane::from_equation([0.0, 0.0, 1.0, 0.0]);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn plane_miss_from_back_side() {
        let plane = Plane::from_equation([0.0, 0.0, 1.0, 0.0]);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn plane_offset_shifts_the_surface() {
        let plane = Plane::from_equation([0.0, 0.0, 1.0, 2.0]);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let t = plane.intersect(&ray).unwrap();
        assert!((t - 3.0).abs() < 1e-6);
    }

    #[test]
    fn aabb_entry_distance() {
        let aabb = Aabb::new(
            Vec3::new(5.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = aabb.intersect(&ray).unwrap();
        assert!((t - 5.0).abs() < 1e-4);
    }

    #[test]
    fn aabb_miss_off_axis() {
        let aabb =
            Aabb::new(Vec3::new(5.0, 2.0, 2.0), Vec3::new(10.0, 3.0, 3.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(aabb.intersect(&ray).is_none());
    }

    #[test]
    fn aabb_exit_distance_from_inside() {
        let aabb = Aabb::new(
            Vec3::new(0.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        );
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::X);
        let t = aabb.intersect(&ray).unwrap();
        assert!((t - 5.0).abs() < 1e-4);
    }

    #[test]
    fn aabb_behind_origin_misses() {
        let aabb = Aabb::new(
            Vec3::new(-10.0, -1.0, -1.0),
            Vec3::new(-5.0, 1.0, 1.0),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(aabb.intersect(&ray).is_none());
    }

    #[test]
    fn aabb_from_points_bounds_all() {
        let aabb = Aabb::from_points(&[
            Vec3::new(-1.0, 4.0, 0.0),
            Vec3::new(2.0, -3.0, 1.0),
        ]);
        assert_eq!(aabb.min, Vec3::new(-1.0, -3.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 4.0, 1.0));
    }

    #[test]
    fn degenerate_aabb_never_hits() {
        let aabb = Aabb::from_points(&[]);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(aabb.intersect(&ray).is_none());
    }
}
