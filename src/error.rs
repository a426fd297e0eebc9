// SPDX-License-Identifier: PMPL-1.0-or-later

//! Typed errors at the library boundary.

use crate::types::NetworkId;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ItemNameError {
    /// The protocol dictionary has no string id for this numeric id.
    #[error("unknown network id {0}")]
    UnknownNetworkId(NetworkId),

    #[error("malformed translation table {path}: {reason}")]
    MalformedTable { path: PathBuf, reason: String },

    #[error("malformed item dictionary {path}: {reason}")]
    MalformedDictionary { path: PathBuf, reason: String },

    #[error("malformed config {path}: {reason}")]
    MalformedConfig { path: PathBuf, reason: String },

    #[error("{0} must be json/yaml/yml")]
    UnsupportedFormat(PathBuf),

    #[error("reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = ItemNameError> = std::result::Result<T, E>;
