use bytemuck::{Pod, Zeroable};

use crate::camera::CameraState;
use crate::coords::{Resolution, Vec2};

/// Per-frame inputs of the grid pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridUniforms {
    pub camera_position: Vec2,
    pub resolution: Resolution,
    /// Effective zoom, `[0.5, 1.9)` when taken from a camera.
    pub zoom: f64,
}

impl GridUniforms {
    #[inline]
    pub const fn new(camera_position: Vec2, resolution: Resolution, zoom: f64) -> Self {
        Self { camera_position, resolution, zoom }
    }

    /// Snapshots a camera for one frame.
    #[inline]
    pub fn from_camera(camera: &CameraState, resolution: Resolution) -> Self {
        Self::new(camera.position(), resolution, camera.effective_zoom())
    }

    /// Packs the uniforms into the GPU layout.
    pub fn to_block(&self) -> GridUniformBlock {
        GridUniformBlock {
            camera_position: self.camera_position.to_f32_array(),
            resolution: [
                self.resolution.width.max(1.0) as f32,
                self.resolution.height.max(1.0) as f32,
            ],
            zoom: self.zoom as f32,
            _pad: [0.0; 3],
        }
    }
}

/// GPU uniform block; matches `GridUniforms` in `shaders/grid.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct GridUniformBlock {
    pub camera_position: [f32; 2],
    pub resolution: [f32; 2],
    pub zoom: f32,
    pub _pad: [f32; 3], // 16-byte alignment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_32_bytes() {
        assert_eq!(std::mem::size_of::<GridUniformBlock>(), 32);
    }

    #[test]
    fn block_field_offsets() {
        let block = GridUniforms::new(Vec2::new(1.0, 2.0), Resolution::new(800.0, 600.0), 1.25).to_block();
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&block));
        assert_eq!(&floats[..5], &[1.0, 2.0, 800.0, 600.0, 1.25]);
        assert_eq!(&floats[5..], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_resolution_is_clamped_in_block() {
        let block = GridUniforms::new(Vec2::zero(), Resolution::new(0.0, 0.0), 1.0).to_block();
        assert_eq!(block.resolution, [1.0, 1.0]);
    }

    #[test]
    fn snapshot_uses_effective_zoom() {
        let mut cam = CameraState::new();
        cam.on_scroll(100.0);
        let u = GridUniforms::from_camera(&cam, Resolution::new(640.0, 480.0));
        assert_eq!(u.zoom, cam.effective_zoom());
        assert_eq!(u.camera_position, cam.position());
    }
}
