//! Lilly Signature Core - Shared types library.
//!
//! This crate provides common types used across the signature components:
//! - `resolver` - Client-side signature resolution and rendering
//! - `server` - Profile lookup service brokering Microsoft Graph
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients, no host bindings. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Profile, template-letter, and cache-payload types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
