// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Single-box rendering.
//!
//! A box is a bordered rectangle with its text on the vertical center row:
//!
//! ```text
//! ┌-------┐
//! |       |
//! | Happy |
//! |       |
//! └-------┘
//! ```

use std::fmt;

use super::text::text_len;
use super::{
    Canvas, CanvasError, BORDER_HORIZONTAL, BORDER_VERTICAL, CORNER_BOTTOM_LEFT,
    CORNER_BOTTOM_RIGHT, CORNER_TOP_LEFT, CORNER_TOP_RIGHT,
};

pub const DEFAULT_BOX_HEIGHT: usize = 3;
pub const DEFAULT_BOX_PADDING: usize = 1;
const MIN_BOX_HEIGHT: usize = 3;

/// A rendered box: an independent character grid plus the text it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    text: String,
    canvas: Canvas,
}

impl TextBox {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Total width, including both border columns.
    pub fn width(&self) -> usize {
        self.canvas.width()
    }

    pub fn height(&self) -> usize {
        self.canvas.height()
    }

    pub fn rows(&self) -> Vec<String> {
        self.canvas.rows()
    }

    pub fn as_canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

impl fmt::Display for TextBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.canvas, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxRenderError {
    /// Height must be odd and at least 3 so the text row sits exactly between two borders.
    InvalidDimension { height: usize },
    Canvas(CanvasError),
}

impl fmt::Display for BoxRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { height } => write!(
                f,
                "invalid box height {height}: must be an odd number >= {MIN_BOX_HEIGHT}"
            ),
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
        }
    }
}

impl std::error::Error for BoxRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDimension { .. } => None,
            Self::Canvas(err) => Some(err),
        }
    }
}

impl From<CanvasError> for BoxRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

/// Renders a box with the default height (3) and padding (1).
pub fn render_box_default(text: &str) -> Result<TextBox, BoxRenderError> {
    render_box(text, DEFAULT_BOX_HEIGHT, DEFAULT_BOX_PADDING)
}

/// Renders `text` inside a bordered box.
///
/// `padding` is the number of blank columns between each vertical border and the text, so the
/// total width is `chars(text) + 2 + 2 * padding`.
pub fn render_box(text: &str, height: usize, padding: usize) -> Result<TextBox, BoxRenderError> {
    if height % 2 == 0 || height < MIN_BOX_HEIGHT {
        return Err(BoxRenderError::InvalidDimension { height });
    }

    let width = padding
        .checked_mul(2)
        .and_then(|p| p.checked_add(text_len(text) + 2))
        .ok_or(CanvasError::AreaOverflow {
            width: usize::MAX,
            height,
        })?;
    let last_x = width - 1;
    let last_y = height - 1;

    let mut canvas = Canvas::new(width, height)?;
    canvas.draw_hline(0, last_x, 0, BORDER_HORIZONTAL)?;
    canvas.draw_hline(0, last_x, last_y, BORDER_HORIZONTAL)?;
    canvas.draw_vline(0, 1, last_y - 1, BORDER_VERTICAL)?;
    canvas.draw_vline(last_x, 1, last_y - 1, BORDER_VERTICAL)?;
    canvas.set(0, 0, CORNER_TOP_LEFT)?;
    canvas.set(last_x, 0, CORNER_TOP_RIGHT)?;
    canvas.set(0, last_y, CORNER_BOTTOM_LEFT)?;
    canvas.set(last_x, last_y, CORNER_BOTTOM_RIGHT)?;

    // Fits by construction: the width is derived from the text length.
    canvas.write_str(1 + padding, last_y / 2, text)?;

    tracing::trace!(text, width, height, padding, "rendered box");

    Ok(TextBox {
        text: text.to_owned(),
        canvas,
    })
}
