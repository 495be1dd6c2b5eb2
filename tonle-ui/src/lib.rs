//! tonle-ui - Shared UI components for the Tonle utility website
//!
//! Contains the presentational components, scroll-reveal glue, and form
//! stores used by the public web app.

pub mod components;
pub mod scroll_reveal;
pub mod stores;
pub mod submission;

pub use components::*;
pub use scroll_reveal::{use_scroll_reveal, RevealHandle, RevealSection};
pub use stores::*;
