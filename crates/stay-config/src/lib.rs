//! On-disk persistence for stayhub
//!
//! This crate provides:
//! - File path utilities for the app's config directory
//! - Auth token persistence (the only datum the app persists)

pub mod paths;
pub mod token;

pub use paths::{config_dir, token_path};
pub use token::TokenStorage;
