//! Ray type and the primitive intersection tests used by picking and
//! occlusion.
//!
//! The primitive tests accept an unnormalized direction so a world-space ray
//! can be mapped into a node's local space with an inverse world matrix while
//! keeping the parametric `t` comparable to world distances.

use crate::constants::RAY_PARALLEL_EPSILON;
use glam::Vec3;

/// Half-line in world space. `direction` is unit length, or zero for a
/// degenerate ray that never hits anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray starting at `origin` and passing through `target`.
    pub fn toward(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, target - origin)
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let a = ray_dir.dot(ray_dir);
    if a <= RAY_PARALLEL_EPSILON {
        return None;
    }
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = (-b - sq) / a;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    // origin inside the sphere: report the exit point
    let t_far = (-b + sq) / a;
    (t_far >= 0.0).then_some(t_far)
}

/// Slab test against an axis-aligned box. Returns the entry distance, or the
/// exit distance when the origin is inside the box.
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<f32> {
    let safe = |d: f32| {
        if d.abs() < RAY_PARALLEL_EPSILON {
            RAY_PARALLEL_EPSILON.copysign(d)
        } else {
            d
        }
    };
    let inv_dir = Vec3::new(1.0 / safe(ray_dir.x), 1.0 / safe(ray_dir.y), 1.0 / safe(ray_dir.z));

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;
    let tmin = t1.min(t2).max_element();
    let tmax = t1.max(t2).min_element();

    if tmax < tmin.max(0.0) {
        return None;
    }
    if tmin >= 0.0 {
        Some(tmin)
    } else {
        Some(tmax)
    }
}

/// Double-sided Möller–Trumbore ray/triangle test.
pub fn ray_triangle(ray_origin: Vec3, ray_dir: Vec3, tri: &[Vec3; 3]) -> Option<f32> {
    let edge1 = tri[1] - tri[0];
    let edge2 = tri[2] - tri[0];
    let p = ray_dir.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < RAY_PARALLEL_EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray_origin - tri[0];
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = ray_dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = edge2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}
