//! NutriFit
//!
//! An MCP server for daily calorie targets and meal selection.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutrifit::build_info;
use nutrifit::config::{Config, DEFAULT_LOG_DIRECTIVE};
use nutrifit::mcp::NutrifitService;
use nutrifit::session::Session;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays free for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let catalog = config.load_catalog()?;

    build_info::print_startup_banner(catalog.len());
    eprintln!("Starting MCP server on stdio...");

    let service = NutrifitService::new(Session::new(catalog));

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
