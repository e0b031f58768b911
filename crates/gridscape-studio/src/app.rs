use gridscape_engine::camera::{CameraController, CameraState};
use gridscape_engine::coords::ColorRgba;
use gridscape_engine::core::{App, AppControl, FrameCtx};
use gridscape_engine::grid::{GridPalette, GridUniforms};
use gridscape_engine::render::GridRenderer;

/// The grid viewer: one camera, one renderer, one pass per frame.
pub struct GridApp {
    camera: CameraState,
    controller: CameraController,
    palette: GridPalette,
    renderer: GridRenderer,
}

impl GridApp {
    pub fn new(camera: CameraState, controller: CameraController, palette: GridPalette) -> Self {
        Self {
            camera,
            controller,
            palette,
            renderer: GridRenderer::new(),
        }
    }
}

impl Default for GridApp {
    fn default() -> Self {
        Self::new(CameraState::new(), CameraController::default(), GridPalette::default())
    }
}

impl App for GridApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.controller
            .apply_all(&mut self.camera, &ctx.input_frame.events);
        self.camera.advance(ctx.time.dt);

        let uniforms = GridUniforms::from_camera(&self.camera, ctx.window.resolution());
        log::trace!(
            "frame {} ({:.3}s): zoom {:.4} at ({:.5}, {:.5})",
            ctx.time.frame_index,
            ctx.time.elapsed,
            uniforms.zoom,
            uniforms.camera_position.x,
            uniforms.camera_position.y,
        );

        let (renderer, palette) = (&mut self.renderer, &self.palette);
        ctx.render(ColorRgba::black(), |rctx, target| {
            renderer.render(rctx, target, &uniforms, palette);
        })
    }
}
