//! ChatBI Client Library
//!
//! Rust client layer for a conversational business-intelligence backend.
//! Provides the result-presentation resolver used to display chat answers,
//! typed request builders for the backend's management API, and a local
//! development proxy that forwards API traffic to the backend process.

pub mod config;
pub mod error;
pub mod gateway;
pub mod proxy;
pub mod render;
