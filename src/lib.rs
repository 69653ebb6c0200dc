//! # Game of Life
//!
//! Conway's Game of Life on a fixed 400x400 board, drawn with `pixels` into a
//! `winit` window. Holding the left mouse button brings a small plus of cells
//! to life under the cursor.

pub mod config;
pub mod engine;
pub mod error;
pub mod font;
pub mod game;
pub mod graphics;
pub mod grid;
pub mod input;
