//! LensVision Core - Shared types library.
//!
//! This crate provides common types used across all LensVision components:
//! - `storefront` - Public-facing e-commerce site
//! - `integration-tests` - HTTP-level tests against a running storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no template
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
