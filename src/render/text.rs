// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Canvas;

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Renders `canvas` with trailing spaces and trailing blank lines removed.
pub fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let mut lines = canvas
        .rows()
        .into_iter()
        .map(|line| line.trim_end_matches(' ').to_owned())
        .collect::<Vec<_>>();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
