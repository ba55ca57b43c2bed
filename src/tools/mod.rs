//! daylog tools module
//!
//! MCP tool implementations for the daily nutrition log.

pub mod foods;
pub mod log;
pub mod status;
