pub mod errors;
pub mod extract;
pub mod state;
pub mod diagnostics;
pub mod routes;
pub mod openapi;
pub mod startup;

pub use startup::run;
