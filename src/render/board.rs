// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Board composition.
//!
//! Boxes are placed left to right, vertically centered on the tallest box, with a fixed
//! [`GAP`] of columns after each box. Two kinds of connectors are drawn on top:
//!
//! - local arrows inside the gap between consecutive boxes (`--->`, `<---`)
//! - far arrows that drop a riser below each endpoint box and join them with a horizontal leg
//!
//! ```text
//! ┌---┐    ┌---┐
//! | A |--->| B |
//! └---┘<---└---┘
//!   ^        ^
//!   └--------┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::boxes::TextBox;
use super::{
    Canvas, CanvasError, ARROW_HEAD_LEFT, ARROW_HEAD_RIGHT, ARROW_HEAD_UP, BORDER_HORIZONTAL,
    BORDER_VERTICAL, CORNER_BOTTOM_LEFT, CORNER_BOTTOM_RIGHT,
};

/// Columns reserved after every box; local arrows are drawn inside it.
pub const GAP: usize = 4;
const MIN_BOARD_HEIGHT: usize = 3;
const ARROW_RIGHT_BIT: u8 = 1 << 0;
const ARROW_LEFT_BIT: u8 = 1 << 1;

/// Direction(s) of a connector.
///
/// For local connections `Right` points from box `i` to box `i + 1`. For far connections
/// `Right` puts an arrowhead under the `to` box and `Left` one under the `from` box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arrow {
    #[default]
    None,
    Right,
    Left,
    Both,
}

impl Arrow {
    /// Legacy integer encoding: bit 1 = right, bit 2 = left.
    pub fn bits(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Right => ARROW_RIGHT_BIT,
            Self::Left => ARROW_LEFT_BIT,
            Self::Both => ARROW_RIGHT_BIT | ARROW_LEFT_BIT,
        }
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::None),
            1 => Some(Self::Right),
            2 => Some(Self::Left),
            3 => Some(Self::Both),
            _ => None,
        }
    }

    pub fn points_right(self) -> bool {
        self.bits() & ARROW_RIGHT_BIT != 0
    }

    pub fn points_left(self) -> bool {
        self.bits() & ARROW_LEFT_BIT != 0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Right => "right",
            Self::Left => "left",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseArrowError {
    value: String,
}

impl fmt::Display for ParseArrowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid arrow {:?} (expected none|right|left|both or 0..=3)",
            self.value
        )
    }
}

impl std::error::Error for ParseArrowError {}

impl FromStr for Arrow {
    type Err = ParseArrowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            "both" => Ok(Self::Both),
            _ => s
                .parse::<u8>()
                .ok()
                .and_then(Self::from_bits)
                .ok_or_else(|| ParseArrowError {
                    value: s.to_owned(),
                }),
        }
    }
}

impl Serialize for Arrow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Arrow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Code(u64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
            Repr::Code(code) => u8::try_from(code)
                .ok()
                .and_then(Self::from_bits)
                .ok_or_else(|| {
                    serde::de::Error::custom(ParseArrowError {
                        value: code.to_string(),
                    })
                }),
        }
    }
}

/// A connector between two arbitrary boxes, routed below the row of boxes.
///
/// `length` is the extra drop below the taller endpoint; callers stack several far
/// connections by giving them distinct lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FarConnection {
    pub from: usize,
    pub to: usize,
    #[serde(default)]
    pub arrow: Arrow,
    #[serde(default)]
    pub length: usize,
}

impl FarConnection {
    pub fn new(from: usize, to: usize, arrow: Arrow, length: usize) -> Self {
        Self {
            from,
            to,
            arrow,
            length,
        }
    }
}

/// Where a box lands on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxPlacement {
    pub x: usize,
    pub y_offset: usize,
    pub width: usize,
    pub height: usize,
}

impl BoxPlacement {
    /// Column a far connection riser hangs from.
    pub fn center_x(self) -> usize {
        self.x + self.width / 2
    }

    /// First board row below the box's bottom border.
    pub fn below_y(self) -> usize {
        self.y_offset + self.height
    }
}

/// Result of the sizing pass. Computed before anything is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    width: usize,
    height: usize,
    largest_box_height: usize,
    placements: Vec<BoxPlacement>,
}

impl BoardLayout {
    pub fn compute(boxes: &[TextBox], far: &[FarConnection]) -> Result<Self, BoardError> {
        let largest_box_height = boxes
            .iter()
            .map(TextBox::height)
            .fold(MIN_BOARD_HEIGHT, usize::max);

        let mut far_extra_height = 0usize;
        for connection in far {
            let extra = connection
                .length
                .checked_add(1)
                .ok_or(BoardError::DimensionOverflow)?;
            far_extra_height = far_extra_height.max(extra);
        }

        let height = largest_box_height
            .checked_add(far_extra_height)
            .ok_or(BoardError::DimensionOverflow)?;

        let mut placements = Vec::with_capacity(boxes.len());
        let mut x = 0usize;
        for b in boxes {
            placements.push(BoxPlacement {
                x,
                y_offset: (largest_box_height - b.height()) / 2,
                width: b.width(),
                height: b.height(),
            });
            x = x
                .checked_add(b.width())
                .and_then(|x| x.checked_add(GAP))
                .ok_or(BoardError::DimensionOverflow)?;
        }

        Ok(Self {
            width: x,
            height,
            largest_box_height,
            placements,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn largest_box_height(&self) -> usize {
        self.largest_box_height
    }

    pub fn placements(&self) -> &[BoxPlacement] {
        &self.placements
    }

    /// Row local arrows are centered on.
    pub fn midline_y(&self) -> usize {
        (self.largest_box_height - 1) / 2
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    FarIndexOutOfRange {
        connection: usize,
        index: usize,
        len: usize,
    },
    DimensionOverflow,
    Canvas(CanvasError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FarIndexOutOfRange {
                connection,
                index,
                len,
            } => write!(
                f,
                "far connection {connection} references box {index}, but the board has {len} boxes"
            ),
            Self::DimensionOverflow => f.write_str("board dimensions overflow"),
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CanvasError> for BoardError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

/// Composes `boxes` into one board.
///
/// `local[i]` is the connector in the gap after box `i`; missing entries mean [`Arrow::None`]
/// and entries past the last gap are ignored. Far connection indices are validated before
/// anything is drawn.
pub fn compose_board(
    boxes: &[TextBox],
    local: &[Arrow],
    far: &[FarConnection],
) -> Result<Canvas, BoardError> {
    for (connection, far_connection) in far.iter().enumerate() {
        for index in [far_connection.from, far_connection.to] {
            if index >= boxes.len() {
                return Err(BoardError::FarIndexOutOfRange {
                    connection,
                    index,
                    len: boxes.len(),
                });
            }
        }
    }

    let layout = BoardLayout::compute(boxes, far)?;
    let mut canvas = Canvas::new(layout.width(), layout.height())?;

    for (i, (b, placement)) in boxes.iter().zip(layout.placements()).enumerate() {
        canvas.blit(placement.x, placement.y_offset, b.as_canvas())?;

        if i + 1 < boxes.len() {
            let arrow = local.get(i).copied().unwrap_or_default();
            let gap_end = placement.x + placement.width + GAP;
            draw_local_arrow(&mut canvas, gap_end, layout.midline_y(), arrow)?;
        }
    }

    for connection in far {
        draw_far_connection(&mut canvas, &layout, connection)?;
    }

    tracing::debug!(
        boxes = boxes.len(),
        local = local.len(),
        far = far.len(),
        width = layout.width(),
        height = layout.height(),
        "composed board"
    );

    Ok(canvas)
}

/// `gap_end` is the first column of the next box; the arrow occupies the `GAP` columns before it.
fn draw_local_arrow(
    canvas: &mut Canvas,
    gap_end: usize,
    midline_y: usize,
    arrow: Arrow,
) -> Result<(), CanvasError> {
    let right = arrow.points_right();
    let left = arrow.points_left();
    let gap_start = gap_end - GAP;
    let last = gap_end - 1;

    if right {
        // Both directions share the gap, so each takes its own row around the midline.
        let y = midline_y - usize::from(left);
        canvas.draw_hline(gap_start, last - 1, y, BORDER_HORIZONTAL)?;
        canvas.set(last, y, ARROW_HEAD_RIGHT)?;
    }

    if left {
        let y = midline_y + usize::from(right);
        canvas.draw_hline(gap_start + 1, last, y, BORDER_HORIZONTAL)?;
        canvas.set(gap_start, y, ARROW_HEAD_LEFT)?;
    }

    Ok(())
}

fn draw_far_connection(
    canvas: &mut Canvas,
    layout: &BoardLayout,
    connection: &FarConnection,
) -> Result<(), BoardError> {
    let from = layout.placements()[connection.from];
    let to = layout.placements()[connection.to];
    let (from_x, to_x) = (from.center_x(), to.center_x());

    let start_y = from.below_y().min(to.below_y());
    let leg_y = from
        .below_y()
        .max(to.below_y())
        .checked_add(connection.length)
        .ok_or(BoardError::DimensionOverflow)?;

    // Risers only start below their own box so borders stay intact.
    for y in start_y..leg_y {
        if y >= from.below_y() {
            canvas.set(from_x, y, BORDER_VERTICAL)?;
        }
        if y >= to.below_y() {
            canvas.set(to_x, y, BORDER_VERTICAL)?;
        }
    }

    if connection.arrow.points_left() {
        canvas.set(from_x, from.below_y(), ARROW_HEAD_UP)?;
    }
    if connection.arrow.points_right() {
        canvas.set(to_x, to.below_y(), ARROW_HEAD_UP)?;
    }

    let (left_x, right_x) = if from_x <= to_x {
        (from_x, to_x)
    } else {
        (to_x, from_x)
    };
    if right_x > left_x + 1 {
        canvas.draw_hline(left_x + 1, right_x - 1, leg_y, BORDER_HORIZONTAL)?;
    }
    canvas.set(left_x, leg_y, CORNER_BOTTOM_LEFT)?;
    canvas.set(right_x, leg_y, CORNER_BOTTOM_RIGHT)?;

    tracing::trace!(
        from = connection.from,
        to = connection.to,
        arrow = %connection.arrow,
        leg_y,
        "routed far connection"
    );

    Ok(())
}
