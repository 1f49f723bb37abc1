use glam::Vec3;

use crate::MaterialId;

#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub distance: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub material_id: MaterialId,
}

impl Hit {
    /// How far to move a bounce origin away from its surface to avoid
    /// self-intersection.
    pub const NUDGE_OFFSET: f32 = 1e-3;

    pub fn none() -> Self {
        Self {
            distance: f32::MAX,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material_id: MaterialId::INVALID,
        }
    }

    pub fn is_some(&self) -> bool {
        self.distance < f32::MAX
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }
}
