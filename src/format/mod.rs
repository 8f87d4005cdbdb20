// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Board description parsing/export.

pub mod board_json;

pub use board_json::{export_board_json, parse_board_json, BoardJsonError};
