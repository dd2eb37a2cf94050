//! NutriFit Tools module
//!
//! MCP tool implementations. This layer validates input, formats output and
//! produces user notifications; the calculator and ledger stay pure.

pub mod meals;
pub mod profile;
pub mod status;
