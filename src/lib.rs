//! daylog library
//!
//! Core functionality for single-day nutrition logging: goal profiles,
//! portion scaling, the append-only daily log, and food discovery.

pub mod build_info;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod provider;
pub mod tools;
