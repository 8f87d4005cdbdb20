// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON board descriptions.
//!
//! ```json
//! {
//!   "boxes": [{ "text": "A" }, { "text": "B", "height": 5, "padding": 2 }],
//!   "local": ["right"],
//!   "far": [{ "from": 0, "to": 1, "arrow": "both", "length": 1 }]
//! }
//! ```
//!
//! Arrows are `none`, `right`, `left`, `both`, or the integer codes `0..=3`.

use std::fmt;

use crate::model::BoardDescription;

#[derive(Debug)]
pub enum BoardJsonError {
    Parse(serde_json::Error),
    Export(serde_json::Error),
}

impl fmt::Display for BoardJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid board description: {err}"),
            Self::Export(err) => write!(f, "failed to export board description: {err}"),
        }
    }
}

impl std::error::Error for BoardJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) | Self::Export(err) => Some(err),
        }
    }
}

pub fn parse_board_json(input: &str) -> Result<BoardDescription, BoardJsonError> {
    serde_json::from_str(input).map_err(BoardJsonError::Parse)
}

pub fn export_board_json(desc: &BoardDescription) -> Result<String, BoardJsonError> {
    serde_json::to_string_pretty(desc).map_err(BoardJsonError::Export)
}

#[cfg(test)]
mod tests {
    use super::{export_board_json, parse_board_json, BoardJsonError};
    use crate::model::{BoardDescription, BoxDescription};
    use crate::render::{Arrow, FarConnection};

    #[test]
    fn parses_defaults_for_missing_fields() {
        let desc = parse_board_json(r#"{ "boxes": [{ "text": "A" }] }"#).expect("parse");
        assert_eq!(desc.boxes, vec![BoxDescription::new("A")]);
        assert!(desc.local.is_empty());
        assert!(desc.far.is_empty());
    }

    #[test]
    fn parses_arrow_names_and_legacy_codes() {
        let desc = parse_board_json(
            r#"{
  "boxes": [{ "text": "A" }, { "text": "B", "height": 5, "padding": 2 }, { "text": "C" }],
  "local": ["both", 1, 0],
  "far": [{ "from": 2, "to": 0, "arrow": 2, "length": 3 }, { "from": 0, "to": 1 }]
}"#,
        )
        .expect("parse");

        assert_eq!(desc.local, vec![Arrow::Both, Arrow::Right, Arrow::None]);
        assert_eq!(
            desc.far,
            vec![
                FarConnection::new(2, 0, Arrow::Left, 3),
                FarConnection::new(0, 1, Arrow::None, 0),
            ]
        );
        assert_eq!(desc.boxes[1], BoxDescription::new("B").with_height(5).with_padding(2));
    }

    #[test]
    fn rejects_unknown_arrow() {
        let err = parse_board_json(r#"{ "boxes": [], "local": ["up"] }"#).unwrap_err();
        assert!(matches!(err, BoardJsonError::Parse(_)));

        parse_board_json(r#"{ "boxes": [], "local": [4] }"#).unwrap_err();
    }

    #[test]
    fn rejects_unknown_fields() {
        parse_board_json(r#"{ "boxes": [{ "text": "A", "colour": "red" }] }"#).unwrap_err();
        parse_board_json(r#"{ "boxes": [], "arrows": [] }"#).unwrap_err();
    }

    #[test]
    fn export_then_parse_preserves_demo() {
        let demo = BoardDescription::demo();
        let json = export_board_json(&demo).expect("export");
        assert!(json.contains(r#""arrow": "right""#));
        assert_eq!(parse_board_json(&json).expect("parse"), demo);
    }
}
