// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for boxes and boards.
//!
//! Boxes are rendered independently into their own [`Canvas`]; the board composer then copies
//! them side by side into a fresh canvas and draws local and far connectors between them.

use std::fmt;

pub mod board;
pub mod boxes;
#[cfg(test)]
mod test_utils;
pub(crate) mod text;

pub use board::{compose_board, Arrow, BoardError, BoardLayout, BoxPlacement, FarConnection};
pub use boxes::{render_box, render_box_default, BoxRenderError, TextBox};
pub use text::canvas_to_string_trimmed;

pub const BORDER_HORIZONTAL: char = '-';
pub const BORDER_VERTICAL: char = '|';
pub const CORNER_TOP_LEFT: char = '┌';
pub const CORNER_TOP_RIGHT: char = '┐';
pub const CORNER_BOTTOM_LEFT: char = '└';
pub const CORNER_BOTTOM_RIGHT: char = '┘';
pub const ARROW_HEAD_RIGHT: char = '>';
pub const ARROW_HEAD_LEFT: char = '<';
pub const ARROW_HEAD_UP: char = '^';

/// A fixed-size, bounds-checked character grid.
///
/// Collision behavior is deterministic: the last writer wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    /// Creates a new canvas filled with `fill`.
    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the character at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.cells[idx])
    }

    /// Sets the character at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = ch;
        Ok(())
    }

    /// Fills the entire canvas with `ch`.
    pub fn fill(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    /// Writes `text` left-to-right starting at `(x, y)`.
    ///
    /// Behavior:
    /// - If `y` is out of bounds: returns an error.
    /// - If `text` exceeds the row: clips at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        if y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }

        let mut x = x;
        for ch in text.chars() {
            if x >= self.width {
                break;
            }
            self.set(x, y, ch)?;
            x += 1;
        }

        Ok(())
    }

    /// Draws `ch` across `x0..=x1` at `y`.
    pub fn draw_hline(
        &mut self,
        x0: usize,
        x1: usize,
        y: usize,
        ch: char,
    ) -> Result<(), CanvasError> {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };

        if y >= self.height {
            return Err(self.out_of_bounds(min_x, y));
        }

        if max_x >= self.width {
            return Err(self.out_of_bounds(max_x, y));
        }

        for x in min_x..=max_x {
            self.set(x, y, ch)?;
        }

        Ok(())
    }

    /// Draws `ch` across `y0..=y1` at `x`.
    pub fn draw_vline(
        &mut self,
        x: usize,
        y0: usize,
        y1: usize,
        ch: char,
    ) -> Result<(), CanvasError> {
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

        if x >= self.width {
            return Err(self.out_of_bounds(x, min_y));
        }

        if max_y >= self.height {
            return Err(self.out_of_bounds(x, max_y));
        }

        for y in min_y..=max_y {
            self.set(x, y, ch)?;
        }

        Ok(())
    }

    /// Copies every cell of `other` into this canvas with its top-left corner at `(x, y)`.
    ///
    /// The whole destination rectangle is checked first, so a failed blit writes nothing.
    pub fn blit(&mut self, x: usize, y: usize, other: &Canvas) -> Result<(), CanvasError> {
        if other.width == 0 || other.height == 0 {
            return Ok(());
        }

        let max_x = x.saturating_add(other.width - 1);
        let max_y = y.saturating_add(other.height - 1);
        if !self.in_bounds(max_x, max_y) {
            return Err(self.out_of_bounds(max_x, max_y));
        }

        for (row_idx, row) in other.cells.chunks(other.width).enumerate() {
            let start = ((y + row_idx) * self.width) + x;
            self.cells[start..start + other.width].copy_from_slice(row);
        }

        Ok(())
    }

    /// Returns each row as an owned string, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height];
        }

        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect::<String>())
            .collect()
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }

        Ok((y * self.width) + x)
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> CanvasError {
        CanvasError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(self.cells[(y * self.width) + x])?;
            }

            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
