use serde::{Deserialize, Serialize};
use std::time::Duration;
use winit::dpi::LogicalSize;

use crate::grid::NeighborBounds;

// --- Global Simulation Constants ---
pub const GRID_SIZE: usize = 400;
pub const PIXEL_SCALE: u32 = 2;
pub const ALIVE_CHANCE: u32 = 5; // one in five cells starts alive
pub const TICKS_PER_SECOND: u32 = 60;
pub const WINDOW_TITLE: &str = "Conway's Game of Life";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub grid_size: usize,
    pub pixel_scale: u32,
    pub alive_chance: u32,
    pub ticks_per_second: u32,
    pub title: String,
    /// Fixed seed for the initial board. `None` seeds from the clock.
    pub seed: Option<u64>,
    pub bounds: NeighborBounds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            pixel_scale: PIXEL_SCALE,
            alive_chance: ALIVE_CHANCE,
            ticks_per_second: TICKS_PER_SECOND,
            title: WINDOW_TITLE.to_string(),
            seed: None,
            bounds: NeighborBounds::default(),
        }
    }
}

impl Config {
    /// Logical window size: the grid scaled up by `pixel_scale`.
    pub fn window_size(&self) -> LogicalSize<u32> {
        let side = self.grid_size as u32 * self.pixel_scale.max(1);
        LogicalSize::new(side, side)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}
