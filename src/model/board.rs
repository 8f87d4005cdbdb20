// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::boxes::{DEFAULT_BOX_HEIGHT, DEFAULT_BOX_PADDING};
use crate::render::{
    compose_board, render_box, Arrow, BoardError, BoxRenderError, Canvas, FarConnection, TextBox,
};

fn default_height() -> usize {
    DEFAULT_BOX_HEIGHT
}

fn default_padding() -> usize {
    DEFAULT_BOX_PADDING
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxDescription {
    pub text: String,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_padding")]
    pub padding: usize,
}

impl BoxDescription {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            height: DEFAULT_BOX_HEIGHT,
            padding: DEFAULT_BOX_PADDING,
        }
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn render(&self) -> Result<TextBox, BoxRenderError> {
        render_box(&self.text, self.height, self.padding)
    }
}

/// Boxes in left-to-right order plus the connections between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardDescription {
    pub boxes: Vec<BoxDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local: Vec<Arrow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub far: Vec<FarConnection>,
}

impl BoardDescription {
    /// The showcase board printed by `boxflow --demo`.
    pub fn demo() -> Self {
        Self {
            boxes: vec![
                BoxDescription::new("Happy").with_height(5).with_padding(3),
                BoxDescription::new("Long Word").with_height(7),
                BoxDescription::new("TEST"),
                BoxDescription::new("TEST").with_padding(3),
                BoxDescription::new("FinalFinal"),
            ],
            local: vec![Arrow::Both, Arrow::Right, Arrow::None, Arrow::Left],
            far: vec![FarConnection::new(0, 4, Arrow::Right, 1)],
        }
    }

    pub fn render(&self) -> Result<Canvas, BoardDescriptionError> {
        let boxes = self
            .boxes
            .iter()
            .enumerate()
            .map(|(index, b)| {
                b.render()
                    .map_err(|source| BoardDescriptionError::Box { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(compose_board(&boxes, &self.local, &self.far)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardDescriptionError {
    Box { index: usize, source: BoxRenderError },
    Board(BoardError),
}

impl fmt::Display for BoardDescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box { index, source } => write!(f, "box {index}: {source}"),
            Self::Board(err) => write!(f, "board: {err}"),
        }
    }
}

impl std::error::Error for BoardDescriptionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Box { source, .. } => Some(source),
            Self::Board(err) => Some(err),
        }
    }
}

impl From<BoardError> for BoardDescriptionError {
    fn from(value: BoardError) -> Self {
        Self::Board(value)
    }
}
