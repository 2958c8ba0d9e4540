//! doc-query: send one question to the documentation service and print the result.
//! Reads config, takes the question from the command line or stdin, prints the
//! result text to stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use doc_query_client::{config, Client, Config};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "doc-query", version, about = "Query the documentation service")]
struct Args {
    /// Question to send. Read from stdin when omitted.
    question: Option<String>,

    /// Config file (defaults to $DOC_QUERY_CONFIG, then ~/.doc-query/config.yaml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured service base URL.
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Override the configured request timeout, in seconds (at least 1).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_config(explicit: Option<PathBuf>) -> Result<Config, String> {
    // 1. --config <path> flag
    if let Some(path) = explicit {
        return config::load(&path)
            .map_err(|e| format!("failed to load config from {}: {}", path.display(), e));
    }
    // 2. DOC_QUERY_CONFIG env var
    if let Ok(val) = std::env::var("DOC_QUERY_CONFIG") {
        let path = PathBuf::from(val);
        return config::load(&path)
            .map_err(|e| format!("failed to load config from {}: {}", path.display(), e));
    }
    // 3. Default path; absent file means built-in defaults.
    let Some(path) = config::default_config_path() else {
        return Ok(Config::default());
    };
    match config::load(&path) {
        Ok(cfg) => Ok(cfg),
        Err(e) if e.is_not_found() => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(format!("failed to load config from {}: {}", path.display(), e)),
    }
}

fn read_question(arg: Option<String>) -> String {
    if let Some(q) = arg {
        return q.trim().to_string();
    }
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).unwrap_or(0);
    line.trim().to_string()
}

fn main() {
    let args = Args::parse();
    init_tracing();

    let mut cfg = load_config(args.config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    if let Some(url) = args.url {
        cfg.server.base_url = Some(url);
    }
    if let Some(secs) = args.timeout {
        cfg.server.timeout_secs = Some(secs);
    }

    let question = read_question(args.question);
    if question.is_empty() {
        eprintln!("Error: no question provided (pass it as an argument or on stdin)");
        process::exit(1);
    }

    let client = Client::from_config(&cfg).unwrap_or_else(|e| {
        eprintln!("Error: failed to create client: {}", e);
        process::exit(1);
    });
    debug!(
        base_url = client.base_url(),
        timeout = ?cfg.timeout(),
        "client ready"
    );

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to create runtime: {}", e);
            process::exit(1);
        });

    match rt.block_on(client.query_documentation(&question)) {
        Ok(result) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let _ = writeln!(out, "{}", result);
            let _ = out.flush();
        }
        Err(e) => {
            eprintln!("Error: query failed: {}", e);
            process::exit(1);
        }
    }
}
