// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

pub mod collection;
pub mod render;
pub mod safety;
pub mod selector;
pub mod speech;
pub mod storage;
pub mod syllabifier;
pub mod turkish;
