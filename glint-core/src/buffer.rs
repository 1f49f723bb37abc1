use glam::{IVec2, UVec2};

/// Read-only view over one full-screen buffer; this is what the per-pixel
/// kernels get, ownership stays with the host.
#[derive(Clone, Copy)]
pub struct BufferView<'a, T> {
    size: UVec2,
    items: &'a [T],
}

impl<'a, T> BufferView<'a, T>
where
    T: Copy,
{
    pub fn new(size: UVec2, items: &'a [T]) -> Self {
        assert_eq!((size.x * size.y) as usize, items.len());

        Self { size, items }
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn contains(&self, pos: IVec2) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.x < self.size.x as i32
            && pos.y < self.size.y as i32
    }

    pub fn get(&self, pos: UVec2) -> T {
        self.items[(pos.y * self.size.x + pos.x) as usize]
    }
}
