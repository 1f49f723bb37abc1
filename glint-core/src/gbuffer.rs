use glam::Vec3;

/// First-hit attributes of a pixel, used to guide the denoiser.
///
/// `depth` stores the *inverse* hit distance, so nearer surfaces store
/// larger values and `0.0` means the primary ray escaped the scene.
#[derive(Clone, Copy, Debug, Default)]
pub struct GBufferEntry {
    pub albedo: Vec3,
    pub normal: Vec3,
    pub depth: f32,
}

impl GBufferEntry {
    pub fn none() -> Self {
        Self::default()
    }

    /// Encodes a hit distance into the stored inverse depth; misses (and
    /// degenerate distances) map to the `0.0` sentinel instead of dividing
    /// by zero.
    pub fn encode_depth(distance: f32) -> f32 {
        if distance <= 0.0 || distance == f32::MAX {
            0.0
        } else {
            1.0 / distance
        }
    }

    pub fn is_some(&self) -> bool {
        self.depth != 0.0
    }
}
