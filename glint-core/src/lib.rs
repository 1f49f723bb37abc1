//! Per-pixel math shared by glint's render passes: cameras, rays, scene
//! primitives, the path-tracing kernel and the bilateral denoising kernel.
//!
//! Everything in here is pure over explicit inputs - the host crate decides
//! how pixels are scheduled.

mod buffer;
mod camera;
mod denoiser;
mod gbuffer;
mod hit;
mod material;
mod noise;
mod passes;
mod ray;
pub mod sky;
mod sphere;
mod tracer;
mod utils;

pub use self::buffer::*;
pub use self::camera::*;
pub use self::denoiser::*;
pub use self::gbuffer::*;
pub use self::hit::*;
pub use self::material::*;
pub use self::noise::*;
pub use self::passes::*;
pub use self::ray::*;
pub use self::sphere::*;
pub use self::tracer::*;
pub use self::utils::*;
