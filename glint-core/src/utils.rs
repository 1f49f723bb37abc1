use glam::Vec3;

pub trait Vec3Ext
where
    Self: Sized,
{
    /// Reflects this direction-vector around `normal`.
    fn reflect(self, normal: Self) -> Self;
}

impl Vec3Ext for Vec3 {
    fn reflect(self, normal: Self) -> Self {
        self - 2.0 * normal.dot(self) * normal
    }
}
