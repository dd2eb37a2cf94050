//! NutriFit Library
//!
//! Daily energy targets from a body profile, and a meal selection ledger
//! that tracks chosen options against that target.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod session;
pub mod tools;
