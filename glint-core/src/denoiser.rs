use glam::{ivec2, UVec2, Vec3};

use crate::{BufferView, DebugView, DenoisingPassParams};

/// The per-pixel denoising kernel: a joint bilateral filter whose weights
/// come from the auxiliary buffers, never from the color being filtered -
/// noise gets averaged away inside flat regions while material and
/// geometry edges hold.
#[derive(Clone, Copy)]
pub struct BilateralDenoiser<'a> {
    pub color: BufferView<'a, Vec3>,
    pub albedo: BufferView<'a, Vec3>,
    pub normal: BufferView<'a, Vec3>,
    pub depth: BufferView<'a, f32>,
    pub params: &'a DenoisingPassParams,
}

impl BilateralDenoiser<'_> {
    /// Resolves one output pixel; debug views bypass the filter and return
    /// the selected raw buffer.
    pub fn run(&self, screen_pos: UVec2) -> Vec3 {
        match self.params.view {
            DebugView::Denoised => self.filter(screen_pos),
            DebugView::Color => self.color.get(screen_pos),
            DebugView::Albedo => self.albedo.get(screen_pos),
            DebugView::Normal => self.normal.get(screen_pos),
            DebugView::Depth => Vec3::splat(self.depth.get(screen_pos)),
        }
    }

    fn filter(&self, screen_pos: UVec2) -> Vec3 {
        let center_color = self.color.get(screen_pos);
        let center_albedo = self.albedo.get(screen_pos);
        let center_normal = self.normal.get(screen_pos);
        let center_depth = self.depth.get(screen_pos);

        let kernel_size = self.params.kernel_size;
        let stride = self.params.kernel_offset() as usize;

        let mut color_sum = Vec3::ZERO;
        let mut weight_sum = 0.0;

        for dy in (-kernel_size..=kernel_size).step_by(stride) {
            for dx in (-kernel_size..=kernel_size).step_by(stride) {
                let pos = screen_pos.as_ivec2() + ivec2(dx, dy);

                if !self.color.contains(pos) {
                    continue;
                }

                let pos = pos.as_uvec2();

                let albedo_term = (self.albedo.get(pos) - center_albedo)
                    .length_squared()
                    / self.params.albedo_weight();

                let normal_term = (self.normal.get(pos) - center_normal)
                    .length_squared()
                    / self.params.normal_weight();

                let depth_term = (self.depth.get(pos) - center_depth).abs()
                    / self.params.depth_weight();

                let weight =
                    (-albedo_term).exp() * (-normal_term).exp() * (-depth_term).exp();

                color_sum += self.color.get(pos) * weight;
                weight_sum += weight;
            }
        }

        // A window that skips the center pixel can end up with no usable
        // neighbours at all; fall back to the unfiltered color then.
        if weight_sum > 0.0 {
            color_sum / weight_sum
        } else {
            center_color
        }
    }
}
