use crate::coords::Resolution;

/// What a renderer needs for one frame: device and queue for uploads and
/// pipeline creation, the surface format its pipeline must target, and the
/// surface size it shades over.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Current surface size in device pixels, read this frame.
    pub resolution: Resolution,
}

impl<'a> RenderCtx<'a> {
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        resolution: Resolution,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            resolution,
        }
    }
}

/// Where a renderer records its pass: the frame's encoder and the swapchain
/// view, already cleared.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
