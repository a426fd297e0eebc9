// SPDX-License-Identifier: PMPL-1.0-or-later

//! Item-Names: deterministic localized names for game items.
//!
//! Given an item descriptor from the host runtime, the crate produces a
//! human-readable localized label. Resolution is layered: an editable
//! translation table keyed by a canonical key derived from the item's
//! attributes, then a network-id index built from the protocol dictionary,
//! then string-id normalization, and finally the item's own default name.
//! Items no tier can name are recorded for the operator to fix.
//!
//! ENGINE PILLARS:
//! 1. **Derive**: ordered attribute rules turn an item into a canonical key.
//! 2. **Normalize**: protocol string ids are massaged until they hit a key.
//! 3. **Resolve**: the owned [`ItemNameService`] runs the lookup tiers, caches
//!    results per state id and keeps the failure log.

pub mod cache;
pub mod canonical;
pub mod config;
pub mod derive;
pub mod dictionary;
pub mod error;
pub mod failures;
pub mod i18n;
pub mod index;
pub mod normalize;
pub mod registrar;
pub mod resolver;
pub mod storage;
pub mod table;
pub mod types;

pub use error::ItemNameError;
pub use resolver::{ItemNameService, StatsSnapshot};
pub use types::ItemDescriptor;
