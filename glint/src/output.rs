use glam::{uvec2, Vec3};
use glint_core::DebugView;
use image::{Rgb, RgbImage};

use crate::{FrameBuffers, PixelBuffer};

/// Converts a linear color buffer into an 8-bit RGB image; values are
/// clamped to `[0, 1]`, no tone mapping beyond that.
pub fn to_rgb_image(buffer: &PixelBuffer<Vec3>) -> RgbImage {
    let size = buffer.size();

    RgbImage::from_fn(size.x, size.y, |x, y| {
        let color =
            buffer.get(uvec2(x, y)).clamp(Vec3::ZERO, Vec3::ONE) * 255.0;

        Rgb([color.x as u8, color.y as u8, color.z as u8])
    })
}

impl FrameBuffers {
    /// Exports one of the traced buffers for inspection.
    ///
    /// Depth renders as grayscale; [`DebugView::Denoised`] maps to the raw
    /// color buffer here, since the denoised output lives in the engine's
    /// output buffer rather than in the frame buffers.
    pub fn to_image(&self, view: DebugView) -> RgbImage {
        match view {
            DebugView::Denoised | DebugView::Color => to_rgb_image(&self.color),
            DebugView::Albedo => to_rgb_image(&self.albedo),
            DebugView::Normal => to_rgb_image(&self.normal),
            DebugView::Depth => {
                let size = self.depth.size();

                RgbImage::from_fn(size.x, size.y, |x, y| {
                    let value = self.depth.get(uvec2(x, y)).clamp(0.0, 1.0);
                    let value = (value * 255.0) as u8;

                    Rgb([value, value, value])
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn clamps_out_of_range_colors() {
        let mut buffer = PixelBuffer::<Vec3>::new(uvec2(2, 1));

        buffer.set(uvec2(0, 0), vec3(2.0, 0.5, -1.0));
        buffer.set(uvec2(1, 0), vec3(0.0, 1.0, 0.25));

        let image = to_rgb_image(&buffer);

        assert_eq!(image.get_pixel(0, 0), &Rgb([255, 127, 0]));
        assert_eq!(image.get_pixel(1, 0), &Rgb([0, 255, 63]));
    }

    #[test]
    fn frame_buffers_export_per_view() {
        let mut buffers = FrameBuffers::new(uvec2(2, 1));

        buffers.color.set(uvec2(0, 0), vec3(1.0, 0.0, 0.0));
        buffers.albedo.set(uvec2(0, 0), vec3(0.0, 1.0, 0.0));
        buffers.normal.set(uvec2(0, 0), vec3(0.0, 0.0, 1.0));
        buffers.depth.set(uvec2(0, 0), 0.5);
        buffers.depth.set(uvec2(1, 0), 4.0);

        let color = buffers.to_image(DebugView::Color);
        let albedo = buffers.to_image(DebugView::Albedo);
        let normal = buffers.to_image(DebugView::Normal);
        let depth = buffers.to_image(DebugView::Depth);

        assert_eq!(color.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(albedo.get_pixel(0, 0), &Rgb([0, 255, 0]));
        assert_eq!(normal.get_pixel(0, 0), &Rgb([0, 0, 255]));
        assert_eq!(depth.get_pixel(0, 0), &Rgb([127, 127, 127]));
        assert_eq!(depth.get_pixel(1, 0), &Rgb([255, 255, 255]));

        let denoised = buffers.to_image(DebugView::Denoised);

        assert_eq!(denoised.get_pixel(0, 0), color.get_pixel(0, 0));
    }
}
