// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Board descriptions.
//!
//! A description is the plain-data form of a board (box texts and sizes plus connections) that
//! can be loaded from JSON and rendered in one step.

pub mod board;

pub use board::{BoardDescription, BoardDescriptionError, BoxDescription};
