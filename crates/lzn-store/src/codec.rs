//! # Canonical Record Codec
//!
//! One encoding per record type: canonical JSON from the record's serde
//! derive. Tagged structs only — the reader and writer share the Rust type,
//! so schema drift is a compile error, not a runtime surprise.

use serde::{de::DeserializeOwned, Serialize};

use crate::{Store, StoreError};

/// Encode a record for storage at `key`.
pub fn encode<T: Serialize>(key: &str, record: &T) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(record).map_err(|source| StoreError::EncodeFailed {
        key: key.to_string(),
        source,
    })
}

/// Decode a record read from `key`.
pub fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, StoreError> {
    serde_json::from_slice(bytes).map_err(|source| StoreError::CorruptRecord {
        key: key.to_string(),
        source,
    })
}

/// Read and decode the record at `key`, if present.
pub fn get_record<S: Store, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        Some(bytes) => Ok(Some(decode(key, &bytes)?)),
        None => Ok(None),
    }
}

/// Encode and write `record` at `key`.
pub fn set_record<S: Store, T: Serialize>(
    store: &mut S,
    key: &str,
    record: &T,
) -> Result<(), StoreError> {
    let bytes = encode(key, record)?;
    store.set(key, bytes)
}

/// Decode every record under `prefix`, in ascending key order.
pub fn scan_records<S: Store, T: DeserializeOwned>(
    store: &S,
    prefix: &str,
) -> Result<Vec<(String, T)>, StoreError> {
    let mut out = Vec::new();
    for (key, bytes) in store.prefix_scan(prefix)? {
        let record = decode(&key, &bytes)?;
        out.push((key, record));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        value: u64,
    }

    #[test]
    fn record_roundtrip() {
        let mut store = MemStore::new();
        let rec = Sample {
            name: "x".to_string(),
            value: 7,
        };
        set_record(&mut store, "sample/x", &rec).unwrap();
        let back: Sample = get_record(&store, "sample/x").unwrap().unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn missing_record_is_none_not_error() {
        let store = MemStore::new();
        let got: Option<Sample> = get_record(&store, "sample/missing").unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn corrupt_bytes_decode_to_error_with_key() {
        let mut store = MemStore::new();
        store.set("sample/bad", b"not json".to_vec()).unwrap();
        let err = get_record::<_, Sample>(&store, "sample/bad").unwrap_err();
        assert!(format!("{err}").contains("sample/bad"));
    }

    #[test]
    fn scan_decodes_in_key_order() {
        let mut store = MemStore::new();
        set_record(&mut store, "s/b", &Sample { name: "b".into(), value: 2 }).unwrap();
        set_record(&mut store, "s/a", &Sample { name: "a".into(), value: 1 }).unwrap();
        let all: Vec<(String, Sample)> = scan_records(&store, "s/").unwrap();
        assert_eq!(all[0].1.name, "a");
        assert_eq!(all[1].1.name, "b");
    }
}
