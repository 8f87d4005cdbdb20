// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Shared deterministic benchmark fixtures (no RNG).

use boxflow::model::{BoardDescription, BoxDescription};
use boxflow::render::{Arrow, FarConnection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    WideLocal,
    FarStacked,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::WideLocal => "wide_local",
            Self::FarStacked => "far_stacked",
        }
    }
}

fn label(i: usize) -> String {
    format!("step-{i:03}")
}

fn arrow_for(i: usize) -> Arrow {
    match i % 4 {
        0 => Arrow::Right,
        1 => Arrow::Both,
        2 => Arrow::None,
        _ => Arrow::Left,
    }
}

fn boxes(count: usize) -> Vec<BoxDescription> {
    (0..count)
        .map(|i| {
            BoxDescription::new(label(i))
                .with_height(3 + 2 * (i % 4))
                .with_padding(1 + i % 3)
        })
        .collect()
}

pub fn fixture(case: Case) -> BoardDescription {
    match case {
        Case::Small => BoardDescription::demo(),
        Case::WideLocal => BoardDescription {
            boxes: boxes(200),
            local: (0..199).map(arrow_for).collect(),
            far: Vec::new(),
        },
        Case::FarStacked => BoardDescription {
            boxes: boxes(60),
            local: (0..59).map(arrow_for).collect(),
            far: (0..30)
                .map(|i| FarConnection::new(i, 59 - i, arrow_for(i), 1 + 2 * i))
                .collect(),
        },
    }
}
