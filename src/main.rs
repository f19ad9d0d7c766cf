//! Calculator API entry point.

use std::net::{IpAddr, SocketAddr};

use clap::{Parser, Subcommand};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use calculator_api::api::{create_app, AppState};
use calculator_api::calculator::{perform_calculation, CalculationRequest, CalculationResult};
use calculator_api::config::{Config, VERBOSE_LOG_FILTER};
use calculator_api::error::AppError;
use calculator_api::metrics;
use calculator_api::utils::shutdown_signal;

/// Four-function calculator HTTP API.
#[derive(Parser, Debug)]
#[command(name = "calculator-api")]
#[command(about = "HTTP API for add, subtract, multiply and divide")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Address to bind (overrides HOST).
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to bind (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Evaluate a single calculation and print the result.
    Calc {
        /// First operand.
        #[arg(allow_hyphen_values = true)]
        operand1: String,

        /// Operation: add, subtract, multiply or divide.
        operation: String,

        /// Second operand.
        #[arg(allow_hyphen_values = true)]
        operand2: String,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so LOG_JSON can pick the format
    let config = Config::load();
    let log_json = config.as_ref().map(|c| c.log_json).unwrap_or(false);

    // Initialize logging
    let directives = match &config {
        Ok(c) => c.log_filter(args.verbose),
        Err(_) if args.verbose => VERBOSE_LOG_FILTER.to_string(),
        Err(_) => "info".to_string(),
    };
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    let config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Calc {
            operand1,
            operation,
            operand2,
        }) => cmd_calc(operand1, operation, operand2),
        Some(Command::Serve { host, port }) => cmd_serve(config, host, port).await,
        None => cmd_serve(config, None, None).await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CALCULATOR API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading and validating configuration... ");
    let config = match Config::load_validated() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration check failed"));
        }
    };

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.host, config.port);
    println!("  Swagger UI: {}", if config.enable_docs { "Enabled" } else { "Disabled" });
    println!("  Metrics: {}", if config.enable_metrics { "Enabled" } else { "Disabled" });
    println!("  CORS: {}", if config.cors_permissive { "Permissive" } else { "Same-origin" });
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Evaluate one calculation from the command line.
fn cmd_calc(operand1: String, operation: String, operand2: String) -> anyhow::Result<()> {
    let request = CalculationRequest {
        operand1: Some(Value::String(operand1)),
        operand2: Some(Value::String(operand2)),
        operation: Some(Value::String(operation)),
    };

    match perform_calculation(&request) {
        CalculationResult::Success(calc) => {
            println!(
                "{} {} {} = {}",
                calc.operand1, calc.kind, calc.operand2, calc.value
            );
            Ok(())
        }
        CalculationResult::Failure { message, .. } => {
            eprintln!("Error: {}", message);
            Err(anyhow::anyhow!(message))
        }
    }
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(
    mut config: Config,
    host_override: Option<IpAddr>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    // Override with CLI args if provided
    if let Some(host) = host_override {
        config.host = host.to_string();
    }
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(AppError::InvalidConfig(e).into());
    }

    // Create app state
    let mut app_state = AppState::new();
    if config.enable_metrics {
        match metrics::install_prometheus() {
            Ok(handle) => {
                metrics::spawn_upkeep(handle.clone(), metrics::UPKEEP_INTERVAL);
                app_state = app_state.with_metrics(handle);
            }
            Err(e) => warn!("Metrics disabled, recorder install failed: {}", e),
        }
    }

    let addr: SocketAddr = config.socket_addr().map_err(|e| anyhow::anyhow!(e))?;
    let listener = TcpListener::bind(addr).await.map_err(AppError::Io)?;
    info!("HTTP server listening on {}", addr);
    info!("Calculate: POST http://{}/api/calculator/calculate", addr);
    info!("History:   GET  http://{}/api/calculator/history", addr);
    info!("Health:    GET  http://{}/api/calculator/health", addr);
    if config.enable_docs {
        info!("Docs:      http://{}/swagger-ui", addr);
    }

    let app = create_app(app_state, &config);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
