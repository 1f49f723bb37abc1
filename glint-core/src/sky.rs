use glam::{vec3, Vec3};

use crate::Ray;

/// Direction the implicit sun sits in; not normalized on purpose, callers
/// normalize before dotting.
pub const SUN_DIRECTION: Vec3 = vec3(0.3, 0.3, 0.3);

pub const SUN_COLOR: Vec3 = vec3(1.0, 0.917, 0.564);

const HORIZON_COLOR: Vec3 = vec3(0.75, 0.82, 0.92);
const ZENITH_COLOR: Vec3 = vec3(0.25, 0.45, 0.85);

/// Ambient radiance for a ray that escaped the scene: a vertical gradient,
/// tinted by the ray origin's height, blended towards the sun color as the
/// ray aligns with the sun.
pub fn sample(ray: &Ray) -> Vec3 {
    let altitude = ray.direction().y * 0.5 + 0.5;
    let tint = ray.origin().y * 0.001;

    let sky = HORIZON_COLOR.lerp(ZENITH_COLOR, (altitude + tint).clamp(0.0, 1.0));
    let sun = ray.direction().dot(SUN_DIRECTION.normalize()).clamp(0.0, 1.0);

    sky.lerp(SUN_COLOR, sun)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn looking_up_is_bluer_than_looking_down() {
        let up = sample(&Ray::new(Vec3::ZERO, vec3(-0.3, 1.0, -0.3)));
        let down = sample(&Ray::new(Vec3::ZERO, vec3(-0.3, -1.0, -0.3)));

        assert!(up.z / up.x > down.z / down.x);
    }

    #[test]
    fn sun_direction_is_brightest() {
        let towards_sun = sample(&Ray::new(Vec3::ZERO, SUN_DIRECTION));
        let away = sample(&Ray::new(Vec3::ZERO, -SUN_DIRECTION));

        assert!(towards_sun.length() > away.length());
        assert_relative_eq!(towards_sun.x, SUN_COLOR.x, epsilon = 1e-3);
        assert_relative_eq!(towards_sun.y, SUN_COLOR.y, epsilon = 1e-3);
        assert_relative_eq!(towards_sun.z, SUN_COLOR.z, epsilon = 1e-3);
    }
}
