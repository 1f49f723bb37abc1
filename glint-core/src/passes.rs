use bytemuck::{Pod, Zeroable};

/// Per-frame configuration of the tracing pass.
///
/// `time` is carried for parity with the host contract but doesn't feed the
/// noise seed; renders are intentionally frame-independent.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct TracingPassParams {
    pub time: f32,
    pub sample_count: u32,
}

impl Default for TracingPassParams {
    fn default() -> Self {
        Self {
            time: 0.0,
            sample_count: 8,
        }
    }
}

/// What the denoising pass outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DebugView {
    /// The production path: the filtered color buffer.
    #[default]
    Denoised,
    /// Raw buffer passthroughs, no filtering applied.
    Color,
    Albedo,
    Normal,
    Depth,
}

impl DebugView {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Denoised),
            1 => Some(Self::Color),
            2 => Some(Self::Albedo),
            3 => Some(Self::Normal),
            4 => Some(Self::Depth),
            _ => None,
        }
    }
}

/// Per-frame configuration of the denoising pass.
///
/// `kernel_offset` and the weight divisors are clamped at construction:
/// a non-positive stride would never advance the window scan, and a
/// non-positive divisor would blow the weights up.
#[derive(Clone, Copy, Debug)]
pub struct DenoisingPassParams {
    pub view: DebugView,
    pub kernel_size: i32,
    kernel_offset: i32,
    albedo_weight: f32,
    normal_weight: f32,
    depth_weight: f32,
}

impl DenoisingPassParams {
    pub const MIN_WEIGHT: f32 = 0.001;

    pub fn new(
        view: DebugView,
        kernel_size: i32,
        kernel_offset: i32,
        albedo_weight: f32,
        normal_weight: f32,
        depth_weight: f32,
    ) -> Self {
        Self {
            view,
            kernel_size,
            kernel_offset: kernel_offset.max(1),
            albedo_weight: albedo_weight.max(Self::MIN_WEIGHT),
            normal_weight: normal_weight.max(Self::MIN_WEIGHT),
            depth_weight: depth_weight.max(Self::MIN_WEIGHT),
        }
    }

    pub fn kernel_offset(&self) -> i32 {
        self.kernel_offset
    }

    pub fn albedo_weight(&self) -> f32 {
        self.albedo_weight
    }

    pub fn normal_weight(&self) -> f32 {
        self.normal_weight
    }

    pub fn depth_weight(&self) -> f32 {
        self.depth_weight
    }
}

impl Default for DenoisingPassParams {
    fn default() -> Self {
        Self::new(DebugView::Denoised, 5, 2, 0.01, 0.01, 0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_offset_is_clamped() {
        let params =
            DenoisingPassParams::new(DebugView::Denoised, 5, 0, 0.01, 0.01, 0.3);

        assert_eq!(params.kernel_offset(), 1);

        let params = DenoisingPassParams::new(
            DebugView::Denoised,
            5,
            -3,
            0.01,
            0.01,
            0.3,
        );

        assert_eq!(params.kernel_offset(), 1);
    }

    #[test]
    fn weights_stay_positive() {
        let params =
            DenoisingPassParams::new(DebugView::Denoised, 5, 2, 0.0, -1.0, 0.3);

        assert_eq!(params.albedo_weight(), DenoisingPassParams::MIN_WEIGHT);
        assert_eq!(params.normal_weight(), DenoisingPassParams::MIN_WEIGHT);
        assert_eq!(params.depth_weight(), 0.3);
    }

    #[test]
    fn view_codes() {
        assert_eq!(DebugView::from_code(0), Some(DebugView::Denoised));
        assert_eq!(DebugView::from_code(1), Some(DebugView::Color));
        assert_eq!(DebugView::from_code(4), Some(DebugView::Depth));
        assert_eq!(DebugView::from_code(5), None);
        assert_eq!(DebugView::from_code(-1), None);
    }
}
