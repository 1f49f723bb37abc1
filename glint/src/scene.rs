use glam::{vec3, EulerRot, Mat4, UVec2, Vec3};
use glint_core::{
    Camera, Material, MaterialId, MaterialsView, Sphere, SpheresView,
};

/// Camera placement in the scene; turned into render-ready matrices once
/// the output resolution is known.
#[derive(Clone, Copy, Debug)]
pub struct CameraPose {
    pub position: Vec3,
    /// Euler angles, applied in Y-X-Z order.
    pub rotation: Vec3,
    pub fov_degrees: f32,
    pub blur: f32,
}

impl CameraPose {
    pub fn build(&self, screen_size: UVec2) -> Camera {
        let view_to_world = Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::YXZ,
                self.rotation.y,
                self.rotation.x,
                self.rotation.z,
            );

        // Aspect is height-over-width here; the ray unprojection's
        // horizontal pre-scale expects the projection built that way
        let projection = Mat4::perspective_rh_gl(
            self.fov_degrees.to_radians(),
            screen_size.y as f32 / screen_size.x as f32,
            0.1,
            100.0,
        );

        Camera::new(view_to_world, projection, self.blur)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            fov_degrees: 75.0,
            blur: 0.0,
        }
    }
}

/// Everything the renderer reads during a frame: camera pose, spheres and
/// their materials. Read-only for the duration of a render.
#[derive(Default)]
pub struct Scene {
    pub camera: CameraPose,
    spheres: Vec<Sphere>,
    materials: Vec<Material>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a material and returns the id spheres refer to it by.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);

        MaterialId::new(self.materials.len() as i32 - 1)
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn spheres(&self) -> SpheresView<'_> {
        SpheresView::new(&self.spheres)
    }

    pub fn materials(&self) -> MaterialsView<'_> {
        MaterialsView::new(&self.materials)
    }

    /// The built-in demo scene: three small glossy spheres, two huge warm
    /// emitters in the distance and a ground ball, seen from z = -3.
    pub fn demo() -> Self {
        let mut scene = Self::new();

        scene.camera.position = vec3(0.0, 0.0, -3.0);

        let red = scene.add_material(Material::new(
            vec3(1.0, 0.2, 0.2),
            Vec3::ZERO,
            0.1,
        ));

        let green = scene.add_material(Material::new(
            vec3(0.2, 1.0, 0.2),
            Vec3::ZERO,
            0.5,
        ));

        let blue = scene.add_material(Material::new(
            vec3(0.2, 0.2, 1.0),
            Vec3::ZERO,
            0.8,
        ));

        // 4700K-ish
        const INTENSITY: f32 = 0.7;

        let lamp = scene.add_material(Material::new(
            vec3(0.7, 1.0, 0.03),
            vec3(1.0, 0.917, 0.564) * INTENSITY,
            0.0,
        ));

        let ground = scene.add_material(Material::new(
            vec3(0.4, 0.4, 0.4),
            Vec3::ZERO,
            0.84,
        ));

        scene.add_sphere(Sphere::new(vec3(1.0, 0.3, 0.3), 0.3, red));
        scene.add_sphere(Sphere::new(vec3(0.0, 1.3, 0.3), 0.3, green));
        scene.add_sphere(Sphere::new(vec3(-1.0, 0.3, 0.3), 0.3, blue));
        scene.add_sphere(Sphere::new(vec3(-50.0, 5.0, 50.0), 15.0, lamp));
        scene.add_sphere(Sphere::new(vec3(80.0, 30.0, 0.0), 25.0, lamp));
        scene.add_sphere(Sphere::new(vec3(0.0, -100.0, 0.0), 100.0, ground));

        scene
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::uvec2;

    use super::*;

    #[test]
    fn demo_scene_contents() {
        let scene = Scene::demo();

        assert_eq!(scene.spheres().len(), 6);
        assert_eq!(scene.camera.position, vec3(0.0, 0.0, -3.0));
    }

    #[test]
    fn pose_builds_a_camera_at_the_position() {
        let scene = Scene::demo();
        let camera = scene.camera.build(uvec2(640, 480));

        assert_relative_eq!(camera.origin().z, -3.0, epsilon = 1e-5);
        assert_relative_eq!(camera.blur, 0.0);
    }

    #[test]
    fn material_ids_follow_insertion_order() {
        let mut scene = Scene::new();

        let first = scene.add_material(Material::default());
        let second = scene.add_material(Material::default());

        assert_eq!(first, MaterialId::new(0));
        assert_eq!(second, MaterialId::new(1));
    }
}
