use bytemuck::{Pod, Zeroable};
use glam::{vec2, vec3, IVec2, Mat4, UVec2, Vec2, Vec3};

use crate::Ray;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Camera {
    pub view_to_world: Mat4,
    pub projection: Mat4,
    pub blur: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl Camera {
    pub fn new(view_to_world: Mat4, projection: Mat4, blur: f32) -> Self {
        Self {
            view_to_world,
            projection,
            blur,
            _pad0: 0.0,
            _pad1: 0.0,
            _pad2: 0.0,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.view_to_world.transform_point3(Vec3::ZERO)
    }

    /// Returns whether given point lays inside the screen.
    pub fn contains(&self, pos: IVec2, screen_size: UVec2) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.x < screen_size.x as i32
            && pos.y < screen_size.y as i32
    }

    /// Given a point in screen-coordinates, returns a unique index for it;
    /// used to index screen-space structures.
    pub fn screen_to_idx(&self, pos: UVec2, screen_size: UVec2) -> usize {
        (pos.y * screen_size.x + pos.x) as usize
    }

    /// Ratio the horizontal NDC gets pre-scaled by before unprojection;
    /// assumes the projection was built with a height-over-width aspect.
    fn aspect_scale(&self) -> f32 {
        self.projection.col(0).x / self.projection.col(1).y
    }

    /// Casts a ray from the camera's center through given screen position.
    pub fn ray(&self, screen_pos: UVec2, screen_size: UVec2) -> Ray {
        let screen_size = screen_size.as_vec2();
        let ndc = screen_pos.as_vec2() * 2.0 / screen_size - Vec2::ONE;
        let ndc = vec2(ndc.x * self.aspect_scale(), -ndc.y);

        // The projection is symmetric once the horizontal pre-scale is
        // applied, so unprojecting the target onto the z = 1 view plane is
        // a division by the vertical focal term.
        let focal = self.projection.col(1).y;

        let target = self
            .view_to_world
            .transform_point3(vec3(ndc.x / focal, ndc.y / focal, 1.0));

        let origin = self.origin();

        Ray::new(origin, target - origin)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, 0.0)
    }
}
