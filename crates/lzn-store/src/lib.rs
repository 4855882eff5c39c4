#![deny(missing_docs)]

//! # lzn-store — Block-Scoped Key-Value Store Abstraction
//!
//! The identity and license subsystems persist every record through the
//! [`Store`] trait: a flat, module-namespaced key-value space handed to the
//! core by the host's block-execution pipeline. The handle is transactional
//! on the host side — if a message handler returns an error, the host rolls
//! back every write the handler made. The core therefore never hand-rolls
//! partial-undo logic; it validates first and writes last.
//!
//! ## Pieces
//!
//! - [`Store`] / [`StoreError`] — the access trait and its failure modes.
//! - [`MemStore`] — `BTreeMap`-backed implementation used by every test.
//! - [`keys`] — the module key layout (one function per record family).
//! - [`codec`] — the single canonical JSON encoding per record type.
//! - [`BlockCtx`] — monotonic block height + UTC block time + event sink.
//! - [`PageRequest`] / [`PageResponse`] — offset pagination for queries.

pub mod block;
pub mod codec;
pub mod keys;
pub mod mem;
pub mod page;
pub mod params;

pub use block::BlockCtx;
pub use mem::MemStore;
pub use page::{PageRequest, PageResponse};

use thiserror::Error;

/// Errors from the persistent store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A stored record failed to decode — schema drift between writer and
    /// reader, or corruption underneath the host.
    #[error("corrupt record at key \"{key}\": {source}")]
    CorruptRecord {
        /// The key whose value failed to decode.
        key: String,
        /// The decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// A record failed to encode. Indicates a bug in the record type, not
    /// in the caller.
    #[error("failed to encode record for key \"{key}\": {source}")]
    EncodeFailed {
        /// The key being written.
        key: String,
        /// The encode failure.
        #[source]
        source: serde_json::Error,
    },

    /// The backing store rejected the operation.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// A flat key-value store scoped to the current block execution.
///
/// Keys are UTF-8 strings under the module namespace (see [`keys`]).
/// Values are opaque bytes; the typed layer in [`codec`] is the only
/// sanctioned way to produce or consume them.
///
/// Implementations must return keys from [`Store::prefix_scan`] in
/// ascending lexicographic order — the begin-block sweep and paginated
/// queries rely on deterministic iteration order across nodes.
pub trait Store {
    /// Read the value at `key`, if present.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` at `key`, replacing any existing value.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Delete the value at `key`. Deleting an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// Whether a value exists at `key`.
    fn has(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }

    /// All `(key, value)` pairs whose key starts with `prefix`, in
    /// ascending key order.
    fn prefix_scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_default_impl_follows_get() {
        let mut store = MemStore::new();
        assert!(!store.has("k").unwrap());
        store.set("k", b"v".to_vec()).unwrap();
        assert!(store.has("k").unwrap());
    }
}
