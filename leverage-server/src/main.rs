mod report;
mod routes;

use std::env;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use leverage_diagnostic::{diagnose, load_metrics_file, DetailAccess, Diagnosis};
use leverage_proxy::{AnalyticsProxy, PlausibleClient, ProxyConfig};

use crate::routes::AppState;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  leverage-server diagnose <metrics.json|metrics.csv> [--json] [--details]");
    eprintln!("  leverage-server serve [--addr HOST:PORT]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json     Output as JSON instead of formatted text");
    eprintln!("  --details  Include detailed action plans");
    eprintln!("  --addr     Listen address (default: $LEVERAGE_BIND_ADDR or {})", DEFAULT_BIND_ADDR);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LEVERAGE_ACCOUNT_TOKENS   Comma-separated tokens that unlock detailed plans over HTTP");
    eprintln!("  DASHBOARD_PASSWORD        Shared secret for the analytics proxy");
    eprintln!("  PLAUSIBLE_API_KEY         Provider API key for the analytics proxy");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  leverage-server diagnose fixtures/sample_metrics.csv");
    eprintln!("  leverage-server diagnose fixtures/sample_metrics.json --json --details");
    eprintln!("  leverage-server serve --addr 127.0.0.1:8080");
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

// ---------------------------------------------------------------------------
// diagnose
// ---------------------------------------------------------------------------

fn run_diagnose(args: &[String]) {
    let Some(path) = args.first() else {
        print_usage();
        process::exit(1);
    };

    let mut json_output = false;
    let mut access = DetailAccess::Locked;
    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json_output = true,
            "--details" => access = DetailAccess::Unlocked,
            other => fail(&format!("unknown argument: {}", other)),
        }
    }

    let load_start = Instant::now();
    let records = match load_metrics_file(path) {
        Ok(r) => r,
        Err(e) => fail(&e.to_string()),
    };
    let load_ms = load_start.elapsed().as_millis();

    let diagnoses: Vec<Diagnosis> = records
        .iter()
        .map(|record| diagnose(&record.metrics, access))
        .collect();
    log::info!("diagnosed {} records from {}", records.len(), path);

    if json_output {
        let report = report::build_json(path, &records, &diagnoses);
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => fail(&format!("failed to render JSON: {}", e)),
        }
    } else {
        report::print_human(path, &records, &diagnoses, load_ms);
    }
}

// ---------------------------------------------------------------------------
// serve
// ---------------------------------------------------------------------------

fn account_tokens_from_env() -> Vec<String> {
    env::var("LEVERAGE_ACCOUNT_TOKENS")
        .map(|raw| {
            raw.split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

async fn run_serve(args: &[String]) {
    let mut addr = env::var("LEVERAGE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--addr" => {
                if i + 1 < args.len() {
                    addr = args[i + 1].clone();
                    i += 2;
                } else {
                    fail("--addr requires HOST:PORT");
                }
            }
            other => fail(&format!("unknown argument: {}", other)),
        }
    }

    let config = ProxyConfig::from_env();
    if config.dashboard_password.is_none() {
        log::warn!("DASHBOARD_PASSWORD is not set; analytics requests will be rejected");
    }
    if config.api_key.is_none() {
        log::warn!("PLAUSIBLE_API_KEY is not set; analytics requests will fail");
    }
    let upstream = PlausibleClient::new(config.upstream_url.clone());

    let account_tokens = account_tokens_from_env();
    if account_tokens.is_empty() {
        log::info!("LEVERAGE_ACCOUNT_TOKENS is empty; detailed plans stay locked");
    }

    let state = Arc::new(AppState {
        proxy: AnalyticsProxy::new(config, Box::new(upstream)),
        account_tokens,
    });
    let app = routes::router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => fail(&format!("failed to bind {}: {}", addr, e)),
    };
    log::info!("listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        fail(&format!("server error: {}", e));
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "diagnose" => run_diagnose(&args[2..]),
        "serve" => run_serve(&args[2..]).await,
        "-h" | "--help" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            process::exit(1);
        }
    }
}
