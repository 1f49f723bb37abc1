use std::time::Instant;

use glam::{uvec2, Vec3};
use glint_core::{
    BilateralDenoiser, Camera, DenoisingPassParams, MaterialsView,
    PathTracer, SpheresView, TracingPassParams,
};
use rayon::prelude::*;

use crate::{FrameBuffers, PixelBuffer};

/// Path-traces every pixel, filling the color buffer and the G-buffers.
///
/// Scanlines are rendered in parallel; the pass returns only after the
/// last row is written, which is the barrier the denoising pass relies on.
pub fn run_tracing_pass(
    buffers: &mut FrameBuffers,
    camera: &Camera,
    spheres: SpheresView<'_>,
    materials: MaterialsView<'_>,
    params: &TracingPassParams,
) {
    let size = buffers.size();
    let width = size.x as usize;
    let started = Instant::now();

    let tracer = PathTracer {
        camera,
        spheres,
        materials,
        params,
    };

    let (color, albedo, normal, depth) = buffers.split_mut();

    color
        .par_chunks_mut(width)
        .zip(albedo.par_chunks_mut(width))
        .zip(normal.par_chunks_mut(width))
        .zip(depth.par_chunks_mut(width))
        .enumerate()
        .for_each(|(y, (((color_row, albedo_row), normal_row), depth_row))| {
            for x in 0..width {
                let (color, gbuffer) =
                    tracer.shade(uvec2(x as u32, y as u32), size);

                color_row[x] = color;
                albedo_row[x] = gbuffer.albedo;
                normal_row[x] = gbuffer.normal;
                depth_row[x] = gbuffer.depth;
            }
        });

    log::debug!("Tracing pass finished in {:?}", started.elapsed());
}

/// Runs the bilateral filter (or a debug passthrough) over the traced
/// buffers, producing the final color buffer.
pub fn run_denoising_pass(
    buffers: &FrameBuffers,
    output: &mut PixelBuffer<Vec3>,
    params: &DenoisingPassParams,
) {
    assert_eq!(buffers.size(), output.size());

    let width = output.size().x as usize;
    let started = Instant::now();

    let denoiser = BilateralDenoiser {
        color: buffers.color.view(),
        albedo: buffers.albedo.view(),
        normal: buffers.normal.view(),
        depth: buffers.depth.view(),
        params,
    };

    output
        .as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = denoiser.run(uvec2(x as u32, y as u32));
            }
        });

    log::debug!("Denoising pass finished in {:?}", started.elapsed());
}

#[cfg(test)]
mod tests {
    use glam::{uvec2, UVec2};
    use glint_core::{sky, DebugView};

    use super::*;
    use crate::{Engine, Scene};

    const SIZE: UVec2 = uvec2(32, 24);

    #[test]
    fn empty_scene_renders_the_sky() {
        let scene = Scene::new();
        let mut engine = Engine::new(SIZE);

        let tracing = TracingPassParams::default();
        let denoising = DenoisingPassParams::default();

        engine.render(&scene, &tracing, &denoising);

        let camera = scene.camera.build(SIZE);

        for pos in [uvec2(0, 0), uvec2(16, 12), uvec2(31, 23)] {
            let expected = sky::sample(&camera.ray(pos, SIZE));
            let albedo = engine.buffers().albedo.get(pos);

            assert_eq!(albedo, expected);
            assert_eq!(engine.buffers().depth.get(pos), 0.0);
        }
    }

    #[test]
    fn rendering_is_bit_identical() {
        let scene = Scene::demo();

        let tracing = TracingPassParams::default();
        let denoising = DenoisingPassParams::default();

        let mut first = Engine::new(SIZE);
        let mut second = Engine::new(SIZE);

        let a = first.render(&scene, &tracing, &denoising).as_slice().to_vec();
        let b = second.render(&scene, &tracing, &denoising).as_slice().to_vec();

        assert_eq!(a, b);
    }

    #[test]
    fn debug_views_expose_raw_buffers() {
        let scene = Scene::demo();
        let mut engine = Engine::new(SIZE);

        let tracing = TracingPassParams::default();

        let denoising = DenoisingPassParams::new(
            DebugView::Color,
            5,
            2,
            0.01,
            0.01,
            0.3,
        );

        let output = engine.render(&scene, &tracing, &denoising).as_slice().to_vec();

        assert_eq!(output, engine.buffers().color.as_slice());
    }

    #[test]
    fn denoised_output_differs_from_raw_color() {
        let scene = Scene::demo();
        let mut engine = Engine::new(SIZE);

        let tracing = TracingPassParams {
            time: 0.0,
            sample_count: 2,
        };

        let denoising = DenoisingPassParams::default();

        let output = engine.render(&scene, &tracing, &denoising).as_slice().to_vec();

        // With 2 samples per pixel the raw buffer is noisy; the filter must
        // have blended something somewhere
        assert_ne!(output, engine.buffers().color.as_slice());
    }
}
