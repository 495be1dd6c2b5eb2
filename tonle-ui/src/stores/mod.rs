//! Store types for UI state management
//!
//! Plain state structs held in signals by the owning page. Kept free of
//! framework types so transitions can be unit tested directly.

pub mod request_form;

pub use request_form::*;
