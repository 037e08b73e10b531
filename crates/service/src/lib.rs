//! Service layer for the pack catalog and lead capture.
//! - `storage` holds the document store abstraction and its backends.
//! - `packs` and `leads` validate records and talk to an injected store.
//! - `catalog` is the built-in pack list served when the store has nothing.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod catalog;
pub mod packs;
pub mod leads;
#[cfg(test)]
pub mod test_support;
