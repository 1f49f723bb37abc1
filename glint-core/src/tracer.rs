use glam::{UVec2, Vec3};

use crate::{
    sky, Camera, GBufferEntry, Hit, MaterialsView, Noise, Ray,
    ResolvedMaterial, SpheresView, TracingPassParams, Vec3Ext,
};

/// Upper bound on path length; paths whose throughput survives this many
/// bounces get cut off without an ambient term.
pub const MAX_BOUNCES: u32 = 32;

/// The per-pixel primary-ray kernel: Monte Carlo path tracing plus the
/// first-hit query that fills the auxiliary buffers.
#[derive(Clone, Copy)]
pub struct PathTracer<'a> {
    pub camera: &'a Camera,
    pub spheres: SpheresView<'a>,
    pub materials: MaterialsView<'a>,
    pub params: &'a TracingPassParams,
}

impl PathTracer<'_> {
    /// Shades one pixel, returning its radiance and its G-buffer entry.
    pub fn shade(
        &self,
        screen_pos: UVec2,
        screen_size: UVec2,
    ) -> (Vec3, GBufferEntry) {
        let ray = self.camera.ray(screen_pos, screen_size);
        let gbuffer = self.sample_gbuffer(&ray);

        let mut noise = Noise::new(screen_pos);
        let sample_count = self.params.sample_count.max(1);
        let mut color = Vec3::ZERO;

        for _ in 0..sample_count {
            let jitter = noise.sample_direction() * self.camera.blur * 0.01;

            color += self.sample_radiance(ray.jittered(jitter), &mut noise);
        }

        (color / sample_count as f32, gbuffer)
    }

    /// Traces a single path, accumulating emission weighted by the
    /// throughput gathered along the way.
    fn sample_radiance(&self, mut ray: Ray, noise: &mut Noise) -> Vec3 {
        let mut light = Vec3::ZERO;
        let mut throughput = Vec3::ONE;

        for _ in 0..MAX_BOUNCES {
            let hit = self.spheres.hit(&ray);

            if hit.is_none() {
                light += sky::sample(&ray) * throughput;
                break;
            }

            let material = match self.materials.get(hit.material_id) {
                ResolvedMaterial::Surface(material) => material,
                ResolvedMaterial::Sky => {
                    light += sky::sample(&ray) * throughput;
                    break;
                }
            };

            light += material.emission * throughput;
            throughput *= material.color;

            let diffuse = noise.sample_hemisphere(hit.normal);
            let specular = ray.direction().reflect(hit.normal);

            ray = Ray::new(
                hit.point + hit.normal * Hit::NUDGE_OFFSET,
                diffuse.lerp(specular, material.smoothness),
            );
        }

        light
    }

    /// One nearest-hit query on the un-jittered primary ray; no bouncing.
    fn sample_gbuffer(&self, ray: &Ray) -> GBufferEntry {
        let hit = self.spheres.hit(ray);

        if hit.is_none() {
            return GBufferEntry {
                albedo: sky::sample(ray),
                normal: Vec3::ZERO,
                depth: 0.0,
            };
        }

        let albedo = match self.materials.get(hit.material_id) {
            ResolvedMaterial::Surface(material) => material.color,
            ResolvedMaterial::Sky => sky::sample(ray),
        };

        GBufferEntry {
            albedo,
            normal: hit.normal,
            depth: GBufferEntry::encode_depth(hit.distance),
        }
    }
}
