//! # Parameter Storage
//!
//! Load/store helpers for the module [`Params`] record. Validation lives
//! on `Params` itself; callers validate at load and before any mutation
//! that reads a parameter.

use lzn_core::Params;

use crate::{codec, keys, Store, StoreError};

/// Load the stored parameters, falling back to defaults when the chain has
/// not written any yet (genesis before the first param update).
pub fn get_params<S: Store>(store: &S) -> Result<Params, StoreError> {
    Ok(codec::get_record(store, keys::PARAMS_KEY)?.unwrap_or_default())
}

/// Persist the parameters.
pub fn set_params<S: Store>(store: &mut S, params: &Params) -> Result<(), StoreError> {
    codec::set_record(store, keys::PARAMS_KEY, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemStore;

    #[test]
    fn missing_params_fall_back_to_defaults() {
        let store = MemStore::new();
        assert_eq!(get_params(&store).unwrap(), Params::default());
    }

    #[test]
    fn stored_params_roundtrip() {
        let mut store = MemStore::new();
        let mut params = Params::default();
        params.max_activated_per_validator_pct = 25;
        set_params(&mut store, &params).unwrap();
        assert_eq!(get_params(&store).unwrap(), params);
    }
}
