//! Client-side core of the job matching marketplace
//!
//! Signup and onboarding wizards, listing filters, the lessons
//! catalogue, the REST client and the session context. The Dioxus views in the `jobmatch-ui` binary are
//! thin shells over these types.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod learning;
pub mod session;
pub mod state;
pub mod validate;

pub use error::{Error, Result};
