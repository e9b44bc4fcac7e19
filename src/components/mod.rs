//! UI components for the job matching application
//!
//! Layout, the shared wizard chrome and page components. Pages own their
//! wizard in a signal; step components only render it and call back.

pub mod filter_modal;
pub mod layout;
pub mod pages;

pub use layout::*;
