// SPDX-License-Identifier: PMPL-1.0-or-later

//! Operator-facing message catalog.
//!
//! Item labels live in the translation table; this module only holds the
//! fixed text of the admin console and CLI (menu titles, notices, form
//! fields).
//!
//! ## Supported languages
//!
//! | Code | Language |
//! |------|----------|
//! | ko   | Korean   |
//! | en   | English  |
//!
//! Lookups fall back to English when a key is missing in the requested
//! language, and to the empty string when it is missing in English too.

mod catalog;

pub use catalog::{format_message, t, Lang};
