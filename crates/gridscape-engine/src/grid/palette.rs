use bytemuck::{Pod, Zeroable};

use crate::coords::ColorRgba;

use super::pass::GridCell;

/// Colors used by the grid pass. All opaque.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridPalette {
    pub background: ColorRgba,
    pub grid: ColorRgba,
    /// Horizontal line through the origin (`y == 0`).
    pub x_axis: ColorRgba,
    /// Vertical line through the origin (`x == 0`).
    pub y_axis: ColorRgba,
}

impl GridPalette {
    #[inline]
    pub fn color_of(&self, cell: GridCell) -> ColorRgba {
        match cell {
            GridCell::Background => self.background,
            GridCell::GridLine => self.grid,
            GridCell::XAxis => self.x_axis,
            GridCell::YAxis => self.y_axis,
        }
    }

    /// Packs the palette into the GPU layout.
    pub fn to_block(&self) -> GridPaletteBlock {
        GridPaletteBlock {
            background: self.background.to_array(),
            grid: self.grid.to_array(),
            x_axis: self.x_axis.to_array(),
            y_axis: self.y_axis.to_array(),
        }
    }
}

/// GPU uniform block; matches `GridPalette` in `shaders/grid.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct GridPaletteBlock {
    pub background: [f32; 4],
    pub grid: [f32; 4],
    pub x_axis: [f32; 4],
    pub y_axis: [f32; 4],
}

impl Default for GridPalette {
    fn default() -> Self {
        Self {
            background: ColorRgba::rgb(0.3, 0.3, 0.3),
            grid: ColorRgba::rgb(0.8, 0.8, 0.8),
            x_axis: ColorRgba::rgb(0.9, 0.0, 0.0),
            y_axis: ColorRgba::rgb(0.0, 0.9, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colors() {
        let p = GridPalette::default();
        assert_eq!(p.color_of(GridCell::Background), ColorRgba::rgb(0.3, 0.3, 0.3));
        assert_eq!(p.color_of(GridCell::GridLine), ColorRgba::rgb(0.8, 0.8, 0.8));
        assert_eq!(p.color_of(GridCell::XAxis), ColorRgba::rgb(0.9, 0.0, 0.0));
        assert_eq!(p.color_of(GridCell::YAxis), ColorRgba::rgb(0.0, 0.9, 0.0));
    }

    #[test]
    fn block_is_four_vec4() {
        assert_eq!(std::mem::size_of::<GridPaletteBlock>(), 64);
        let b = GridPalette::default().to_block();
        assert_eq!(b.y_axis, [0.0, 0.9, 0.0, 1.0]);
    }
}
