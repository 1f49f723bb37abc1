use glam::{vec3, UVec2, Vec3};

/// Per-pixel random number source.
///
/// This is a plain 32-bit LCG seeded from the pixel's screen coordinates
/// only, so a pixel draws the same sequence every frame and renders are
/// bit-for-bit reproducible at a fixed resolution.
#[derive(Clone, Copy)]
pub struct Noise {
    state: u32,
}

impl Noise {
    pub fn new(id: UVec2) -> Self {
        Self {
            state: id.y.wrapping_add(id.x.wrapping_mul(1080)),
        }
    }

    /// Generates a uniform sample in range `~[-1.0, 1.0]`.
    ///
    /// The divisor is `i32::MAX` on purpose - the generator's word is
    /// unsigned, but it's mapped over the signed range.
    pub fn sample(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(104723);

        1.0 - self.state as f32 / i32::MAX as f32
    }

    /// Generates a random direction-vector.
    pub fn sample_direction(&mut self) -> Vec3 {
        vec3(self.sample(), self.sample(), self.sample()).normalize()
    }

    /// Generates a random direction within the hemisphere around `normal`,
    /// pulled towards the normal.
    ///
    /// This is not a cosine-weighted hemisphere sample; the `normal * 2.0`
    /// blend is part of the renderer's look.
    pub fn sample_hemisphere(&mut self, normal: Vec3) -> Vec3 {
        let mut direction = self.sample_direction();

        if direction.dot(normal) < 0.0 {
            direction = -direction;
        }

        (direction + normal * 2.0).normalize()
    }
}
