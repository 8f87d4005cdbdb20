// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boxflow — left-to-right box-and-arrow diagrams as monospaced text.
//!
//! [`render::render_box`] turns a label into a bordered box; [`render::compose_board`] lays
//! boxes out side by side and draws local and far connectors between them. Both are pure
//! functions that return a fresh [`render::Canvas`].

pub mod format;
pub mod model;
pub mod render;
