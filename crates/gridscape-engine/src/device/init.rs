/// Surface and device options for the view window.
///
/// `Default` gives a portable setup: non-sRGB target, FIFO presentation, no
/// extra features.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default: grid colors are display values, written to the target
    /// unchanged, which is what the CPU rasterizer produces too.
    pub prefer_srgb: bool,

    /// Present mode.
    ///
    /// FIFO paces the frame loop to the display refresh, which is also the pan
    /// rate under `PanIntegration::PerFrame`.
    pub present_mode: wgpu::PresentMode,

    /// Alpha mode for the surface; falls back to the first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features. The grid pass needs none.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Frame latency hint passed to the surface configuration.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}