use bytemuck::{Pod, Zeroable};
use glam::{vec3, Vec3};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Material {
    pub color: Vec3,
    pub emission: Vec3,
    pub smoothness: f32,
}

impl Material {
    /// The implicit floor material: plain white diffuse.
    pub const FLOOR: Self = Self {
        color: Vec3::ONE,
        emission: Vec3::ZERO,
        smoothness: 0.0,
    };

    /// Rendered for out-of-range material indices; emissive so that the
    /// error signal stays pink no matter the lighting.
    pub const INVALID: Self = Self {
        color: vec3(1.0, 0.25, 0.75),
        emission: vec3(1.0, 0.25, 0.75),
        smoothness: 0.0,
    };

    pub fn new(color: Vec3, emission: Vec3, smoothness: f32) -> Self {
        Self {
            color,
            emission,
            smoothness,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            emission: Vec3::ZERO,
            smoothness: 0.5,
        }
    }
}

/// Index into the materials list; negative values select the procedural
/// materials.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct MaterialId(i32);

impl MaterialId {
    pub const FLOOR: Self = Self(-1);
    pub const SKY: Self = Self(-2);
    pub const INVALID: Self = Self(-3);

    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// A material looked up through [`MaterialsView::get()`]; the sky has no
/// surface response and gets shaded procedurally by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolvedMaterial {
    Surface(Material),
    Sky,
}

#[derive(Clone, Copy)]
pub struct MaterialsView<'a> {
    items: &'a [Material],
}

impl<'a> MaterialsView<'a> {
    pub fn new(items: &'a [Material]) -> Self {
        Self { items }
    }

    /// Resolves a material index, mapping the reserved sentinels to their
    /// procedural materials; anything out of range resolves to
    /// [`Material::INVALID`] instead of panicking.
    pub fn get(self, id: MaterialId) -> ResolvedMaterial {
        match id.get() {
            -1 => ResolvedMaterial::Surface(Material::FLOOR),
            -2 => ResolvedMaterial::Sky,
            id if id >= 0 => match self.items.get(id as usize) {
                Some(material) => ResolvedMaterial::Surface(*material),
                None => ResolvedMaterial::Surface(Material::INVALID),
            },
            _ => ResolvedMaterial::Surface(Material::INVALID),
        }
    }
}
