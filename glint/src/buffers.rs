use glam::{UVec2, Vec3};
use glint_core::BufferView;

/// One full-screen buffer, owned by the host; kernels read it through
/// [`BufferView`].
pub struct PixelBuffer<T> {
    size: UVec2,
    items: Vec<T>,
}

impl<T> PixelBuffer<T>
where
    T: Copy + Default,
{
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            items: vec![T::default(); (size.x * size.y) as usize],
        }
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn get(&self, pos: UVec2) -> T {
        self.items[(pos.y * self.size.x + pos.x) as usize]
    }

    pub fn set(&mut self, pos: UVec2, value: T) {
        self.items[(pos.y * self.size.x + pos.x) as usize] = value;
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn view(&self) -> BufferView<'_, T> {
        BufferView::new(self.size, &self.items)
    }
}

/// The four buffers the tracing pass produces; allocated once per
/// resolution and overwritten every frame.
pub struct FrameBuffers {
    pub color: PixelBuffer<Vec3>,
    pub albedo: PixelBuffer<Vec3>,
    pub normal: PixelBuffer<Vec3>,
    pub depth: PixelBuffer<f32>,
}

impl FrameBuffers {
    pub fn new(size: UVec2) -> Self {
        Self {
            color: PixelBuffer::new(size),
            albedo: PixelBuffer::new(size),
            normal: PixelBuffer::new(size),
            depth: PixelBuffer::new(size),
        }
    }

    pub fn size(&self) -> UVec2 {
        self.color.size()
    }

    /// Mutable access to all four buffers at once, for the tracing pass.
    pub fn split_mut(
        &mut self,
    ) -> (&mut [Vec3], &mut [Vec3], &mut [Vec3], &mut [f32]) {
        (
            self.color.as_mut_slice(),
            self.albedo.as_mut_slice(),
            self.normal.as_mut_slice(),
            self.depth.as_mut_slice(),
        )
    }
}

#[cfg(test)]
mod tests {
    use glam::{uvec2, vec3};

    use super::*;

    #[test]
    fn get_set_roundtrip() {
        let mut buffer = PixelBuffer::<Vec3>::new(uvec2(4, 2));

        buffer.set(uvec2(3, 1), vec3(1.0, 2.0, 3.0));

        assert_eq!(buffer.get(uvec2(3, 1)), vec3(1.0, 2.0, 3.0));
        assert_eq!(buffer.get(uvec2(0, 0)), Vec3::ZERO);
        assert_eq!(buffer.view().get(uvec2(3, 1)), vec3(1.0, 2.0, 3.0));
    }
}
