/// Swapchain image acquired for one grid frame.
///
/// Built by `Gpu::begin_frame`, filled by the clear pass and the grid pass,
/// then consumed by `Gpu::submit`, which presents it. Until then no further
/// image can be acquired from the surface.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    /// Color view of `surface_texture` that both passes render into.
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
