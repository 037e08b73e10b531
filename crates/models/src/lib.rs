//! Record schemas accepted by the API and the relational document entity.
//!
//! Each schema is a plain serde struct with `validator` constraints; see
//! [`validation`] for how violations are reported field by field.

pub mod errors;
pub mod validation;
pub mod collection;
pub mod pack;
pub mod quote;
pub mod consultation;
pub mod document;
pub mod db;

pub use collection::{Collection, Record};
pub use consultation::Consultation;
pub use pack::Pack;
pub use quote::QuoteRequest;
