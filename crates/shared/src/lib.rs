//! Shared types and configuration for Bahi.
//!
//! This crate provides common types used across all other crates:
//! - Numeric coercion and display-rounding policy for money fields
//! - The Indian state table with GST state codes
//! - Typed IDs for type-safe entity references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::{AppConfig, OrganizationConfig};
