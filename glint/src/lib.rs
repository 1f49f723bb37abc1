//! CPU path-traced renderer with an edge-aware denoising post-process.
//!
//! Rendering is two pixel-parallel passes: the tracing pass fills the
//! color buffer and the auxiliary G-buffers, then the denoising pass blends
//! them into the final image. See [`Engine::render()`].

mod buffers;
mod output;
mod passes;
mod scene;

use glam::{UVec2, Vec3};
pub use glint_core::*;

pub use self::buffers::*;
pub use self::output::*;
pub use self::passes::*;
pub use self::scene::*;

pub struct Engine {
    size: UVec2,
    buffers: FrameBuffers,
    output: PixelBuffer<Vec3>,
}

impl Engine {
    pub fn new(size: UVec2) -> Self {
        log::info!("Initializing ({}x{})", size.x, size.y);

        Self {
            size,
            buffers: FrameBuffers::new(size),
            output: PixelBuffer::new(size),
        }
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Buffers written by the latest tracing pass.
    pub fn buffers(&self) -> &FrameBuffers {
        &self.buffers
    }

    /// Renders one frame: traces every pixel, then denoises; returns the
    /// final color buffer.
    ///
    /// Both passes run in parallel over scanlines; the tracing pass
    /// returns only once every buffer is fully written, so the denoiser
    /// never observes a partial frame.
    pub fn render(
        &mut self,
        scene: &Scene,
        tracing: &TracingPassParams,
        denoising: &DenoisingPassParams,
    ) -> &PixelBuffer<Vec3> {
        let camera = scene.camera.build(self.size);

        run_tracing_pass(
            &mut self.buffers,
            &camera,
            scene.spheres(),
            scene.materials(),
            tracing,
        );

        run_denoising_pass(&self.buffers, &mut self.output, denoising);

        &self.output
    }
}
