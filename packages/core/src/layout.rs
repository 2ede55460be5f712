//! Responsive layout arithmetic.
//!
//! The scenes were designed against a 1024x768 canvas; every element scales
//! by `min(w/1024, h/768)` with per-element caps and floors. These functions
//! are recomputed from scratch on every resize event.

use crate::letter::ALPHABET_LEN;
#[cfg(test)]
use crate::progression::TARGET_COUNT;

pub const BASE_WIDTH: f32 = 1024.0;
pub const BASE_HEIGHT: f32 = 768.0;

/// Egg grid shape in the main game scene.
pub const GRID_COLS: usize = 7;
pub const GRID_ROWS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Uniform scale factor relative to the base design size.
    pub fn scale(&self) -> f32 {
        (self.width / BASE_WIDTH).min(self.height / BASE_HEIGHT)
    }

    /// Screen-edge padding used by corner buttons and the score display.
    pub fn padding(&self) -> f32 {
        (20.0 * self.scale()).max(15.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// The centered A-Z button strip along the bottom of the practice scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterStrip {
    pub button_size: f32,
    pub spacing: f32,
    pub y: f32,
    start_x: f32,
}

impl LetterStrip {
    pub fn for_viewport(vp: &Viewport) -> Self {
        let scale = vp.scale();
        let button_size = (40.0 * scale).min(50.0);
        let spacing = (button_size * 1.2).min(60.0);
        let total_width = ALPHABET_LEN as f32 * spacing;
        Self {
            button_size,
            spacing,
            y: vp.height * 0.85,
            start_x: (vp.width - total_width) / 2.0,
        }
    }

    /// Center of the button for the letter at `index`.
    pub fn button_center(&self, index: usize) -> Point {
        Point {
            x: self.start_x + index as f32 * self.spacing + self.spacing / 2.0,
            y: self.y,
        }
    }
}

/// The 7x4 egg grid of the main game scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EggGrid {
    pub egg_size: f32,
    pub spacing: f32,
    start_x: f32,
    start_y: f32,
}

impl EggGrid {
    pub fn for_viewport(vp: &Viewport) -> Self {
        let scale = vp.scale();
        let spacing = (130.0 * scale).min(150.0);
        let total_width = spacing * (GRID_COLS - 1) as f32;
        Self {
            egg_size: (100.0 * scale).min(120.0),
            spacing,
            start_x: (vp.width - total_width) / 2.0,
            start_y: vp.height * 0.15,
        }
    }

    /// Center of the egg for the target at `index`, row-major over 7 columns.
    pub fn egg_center(&self, index: usize) -> Point {
        let row = index / GRID_COLS;
        let col = index % GRID_COLS;
        Point {
            x: self.start_x + col as f32 * self.spacing,
            y: self.start_y + row as f32 * self.spacing,
        }
    }
}
