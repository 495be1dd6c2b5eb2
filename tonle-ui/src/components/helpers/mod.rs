//! Small shared helper components

pub mod page_container;

pub use page_container::PageContainer;
