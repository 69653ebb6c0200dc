use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::font;
use crate::grid::Grid;

pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];
pub const LIVE_CELL: [u8; 4] = [255, 255, 255, 255];
const OVERLAY_MARGIN: u32 = 2;

/// Pixel buffer the size of the grid; one buffer pixel per cell.
pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Resizes the window surface. The buffer keeps the grid size and is scaled to fit.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Resizing surface to {}x{}", width, height);
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
    }

    /// Maps a physical window position to a cell coordinate. Positions outside the
    /// buffer come back out of range; the grid clamps them.
    pub fn window_pos_to_cell(&self, (x, y): (f64, f64)) -> (isize, isize) {
        match self.pixels.window_pos_to_pixel((x as f32, y as f32)) {
            Ok((px, py)) => (px as isize, py as isize),
            Err(outside) => outside,
        }
    }

    pub fn render(&mut self, grid: &Grid) {
        draw_frame(self.pixels.frame_mut(), self.width, self.height, grid);
    }

    pub fn present(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

/// Clears `frame` to black, draws a white pixel per live cell and the generation overlay.
pub fn draw_frame(frame: &mut [u8], width: u32, height: u32, grid: &Grid) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BACKGROUND);
    }

    for (x, y) in grid.live_cells() {
        let (x, y) = (x as u32, y as u32);
        if x < width && y < height {
            let index = ((y * width + x) * 4) as usize;
            if index + 3 < frame.len() {
                frame[index..index + 4].copy_from_slice(&LIVE_CELL);
            }
        }
    }

    draw_overlay(frame, width, height, &format!("Generation: {}", grid.generation()));
}

fn draw_overlay(frame: &mut [u8], width: u32, height: u32, text: &str) {
    // Shadow first so the text stays readable over live cells
    let shadow = OVERLAY_MARGIN + 1;
    font::draw_text(frame, width, height, shadow, shadow, text, BACKGROUND);
    font::draw_text(frame, width, height, OVERLAY_MARGIN, OVERLAY_MARGIN, text, LIVE_CELL);
}
