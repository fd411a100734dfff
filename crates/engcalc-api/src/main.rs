use std::env;

use engcalc_api::config::ServerConfig;
use engcalc_core::FormulaRegistry;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured JSON logging, overridable via RUST_LOG-style filters.
    tracing_subscriber::fmt()
        .with_env_filter("engcalc=debug,info")
        .with_target(false)
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Engineering Calculator API"
    );

    let args = env::args().collect::<Vec<_>>();
    if let Some(cmd) = args.get(1) {
        match cmd.as_str() {
            "explain" => {
                explain_command();
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {cmd}");
                print_help();
                return Ok(());
            }
        }
    }

    start_server().await
}

fn explain_command() {
    let registry = FormulaRegistry::with_built_in();
    println!("Engineering Calculator API - Formula Catalog");
    println!("Each endpoint evaluates one closed-form formula from query parameters");
    println!("and returns a JSON result plus a work-shown derivation.");
    println!();
    for formula in registry.iter() {
        println!("  /api/{}?{}", formula.name(), formula.usage());
    }
}

fn print_help() {
    println!("Engineering Calculator API v{}", env!("CARGO_PKG_VERSION"));
    println!("Usage: engcalc [COMMAND]");
    println!();
    println!("Commands:");
    println!("  explain    List the calculation endpoints and their parameters");
    println!("  --help     Show this help message");
    println!();
    println!("If no command is provided, starts the web server.");
}

async fn start_server() -> anyhow::Result<()> {
    let config = ServerConfig::from_environment();
    info!(host = %config.host, port = config.port, "Configuring web server");

    let app = engcalc_api::create_app_with_config(&config)?;
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("🚀 Engineering Calculator Backend running on http://{addr}");
    println!("📊 Health check: http://{addr}/api/health");
    println!("🧮 Slope calculator: http://{addr}/api/slope?rise=10&run=100");
    info!("Web server started successfully");

    axum::serve(listener, app).await?;

    Ok(())
}
