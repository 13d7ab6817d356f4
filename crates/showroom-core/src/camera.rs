//! Perspective camera described by position and either an Euler rotation or
//! a look-at target, plus the viewport helpers used to move between pixels and normalized device
//! coordinates.

use crate::constants::{
    CAMERA_FOVY_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR, INITIAL_CAMERA_POSITION,
    INITIAL_CAMERA_ROTATION,
};
use crate::ray::Ray;
use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3};

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Pixel coordinates (origin top-left, Y down) to NDC in [-1, 1] with Y up.
    #[inline]
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.width) * 2.0 - 1.0,
            -(y / self.height) * 2.0 + 1.0,
        )
    }

    /// NDC to a pixel offset from the viewport centre (Y down), as used for
    /// CSS `translate` on overlay elements.
    #[inline]
    pub fn ndc_to_center_offset(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(ndc.x * self.width * 0.5, -ndc.y * self.height * 0.5)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    /// When set, the camera faces this point and `rotation` is ignored.
    pub look_target: Option<Vec3>,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(INITIAL_CAMERA_POSITION, INITIAL_CAMERA_ROTATION, 1.0)
    }
}

impl Camera {
    pub fn new(position: Vec3, rotation: Vec3, aspect: f32) -> Self {
        Self {
            position,
            rotation,
            look_target: None,
            aspect,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn orientation(&self) -> Quat {
        self.look_target
            .and_then(|target| look_rotation(self.position, target))
            .unwrap_or_else(|| {
                Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
            })
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.look_target = Some(target);
    }

    /// Drop the look-at target, keeping the current facing as the Euler
    /// rotation.
    pub fn release_look_target(&mut self) {
        if self.look_target.is_some() {
            let (x, y, z) = self.orientation().to_euler(EulerRot::XYZ);
            self.rotation = Vec3::new(x, y, z);
            self.look_target = None;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World-to-view transform (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position).inverse()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if !viewport.is_empty() {
            self.aspect = viewport.aspect();
        }
    }

    /// World-space ray from the camera through an NDC point.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::toward(self.position, far)
    }

    /// Project a world point to NDC. Only meaningful when `is_in_front`.
    pub fn project(&self, point: Vec3) -> Vec3 {
        (self.projection_matrix() * self.view_matrix()).project_point3(point)
    }

    /// Whether `point` lies on the viewing side of the camera plane.
    pub fn is_in_front(&self, point: Vec3) -> bool {
        self.view_matrix().transform_point3(point).z < 0.0
    }
}

// Camera looks down its local -Z with +Y up. None when the target coincides
// with the eye or sits straight above/below it.
fn look_rotation(eye: Vec3, target: Vec3) -> Option<Quat> {
    let forward = (target - eye).try_normalize()?;
    let right = forward.cross(Vec3::Y).try_normalize()?;
    let up = right.cross(forward);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, -forward)))
}
