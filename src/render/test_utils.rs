// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::Canvas;

/// Returns every `(x, y)` cell of `canvas` holding `ch`.
pub(super) fn cells_with(canvas: &Canvas, ch: char) -> BTreeSet<(usize, usize)> {
    let mut out = BTreeSet::new();
    for (y, row) in canvas.rows().iter().enumerate() {
        for (x, cell) in row.chars().enumerate() {
            if cell == ch {
                out.insert((x, y));
            }
        }
    }
    out
}

/// Returns the characters of column `x`, top to bottom.
pub(super) fn column(canvas: &Canvas, x: usize) -> String {
    (0..canvas.height())
        .map(|y| canvas.get(x, y).expect("x in bounds"))
        .collect()
}
