// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

mod entry;
mod syllable;
mod validation;

pub use entry::*;
pub use syllable::*;
pub use validation::*;
