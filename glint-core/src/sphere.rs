use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::{Hit, MaterialId, Ray};

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material_id: MaterialId,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material_id: MaterialId) -> Self {
        Self {
            center,
            radius,
            material_id,
        }
    }

    pub fn hit(&self, ray: &Ray) -> Hit {
        let oc = ray.origin() - self.center;
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = b * b - c;

        if discriminant <= 0.0 {
            return Hit::none();
        }

        let distance = -b - discriminant.sqrt();

        if distance <= 0.0 {
            return Hit::none();
        }

        let point = ray.at(distance);

        Hit {
            distance,
            point,
            normal: (point - self.center) / self.radius,
            material_id: self.material_id,
        }
    }
}

/// An infinite plane; no scene uses one out of the box, but it intersects
/// the same way spheres do.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub material_id: MaterialId,
}

impl Plane {
    pub fn hit(&self, ray: &Ray) -> Hit {
        let denom = ray.direction().dot(self.normal);

        if denom.abs() < 1e-6 {
            return Hit::none();
        }

        let distance = (self.point - ray.origin()).dot(self.normal) / denom;

        if distance <= 0.0 {
            return Hit::none();
        }

        Hit {
            distance,
            point: ray.at(distance),
            normal: self.normal,
            material_id: self.material_id,
        }
    }
}

#[derive(Clone, Copy)]
pub struct SpheresView<'a> {
    items: &'a [Sphere],
}

impl<'a> SpheresView<'a> {
    pub fn new(items: &'a [Sphere]) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Traces `ray` against every sphere and returns the nearest hit.
    pub fn hit(&self, ray: &Ray) -> Hit {
        let mut nearest = Hit::none();

        for sphere in self.items {
            let hit = sphere.hit(ray);

            if hit.distance < nearest.distance {
                nearest = hit;
            }
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;

    #[test]
    fn head_on_hit_distance() {
        let sphere =
            Sphere::new(vec3(0.0, 0.0, 10.0), 2.0, MaterialId::new(0));

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = sphere.hit(&ray);

        assert!(hit.is_some());
        assert_relative_eq!(hit.distance, 8.0, epsilon = 1e-5);
        assert_relative_eq!(hit.normal.z, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let sphere =
            Sphere::new(vec3(0.0, 0.0, 10.0), 2.0, MaterialId::new(0));

        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn plane_hit_and_rejections() {
        let plane = Plane {
            point: Vec3::ZERO,
            normal: Vec3::Y,
            material_id: MaterialId::FLOOR,
        };

        let hit = plane.hit(&Ray::new(vec3(0.0, 3.0, 0.0), -Vec3::Y));

        assert!(hit.is_some());
        assert_relative_eq!(hit.distance, 3.0);

        // Near-parallel ray
        assert!(plane.hit(&Ray::new(vec3(0.0, 3.0, 0.0), Vec3::X)).is_none());

        // Plane behind the ray
        assert!(plane.hit(&Ray::new(vec3(0.0, 3.0, 0.0), Vec3::Y)).is_none());
    }

    #[test]
    fn scene_query_returns_nearest() {
        let spheres = [
            Sphere::new(vec3(0.0, 0.0, 20.0), 1.0, MaterialId::new(0)),
            Sphere::new(vec3(0.0, 0.0, 5.0), 1.0, MaterialId::new(1)),
        ];

        let hit = SpheresView::new(&spheres).hit(&Ray::new(Vec3::ZERO, Vec3::Z));

        assert_eq!(hit.material_id, MaterialId::new(1));
        assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-5);
    }
}
