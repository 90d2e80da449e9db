// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `ecopulse doctor` command implementation.
//!
//! Runs diagnostic checks against the EcoPulse environment to identify
//! configuration issues, missing API keys, and an unreachable server.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use ecopulse_config::EcoPulseConfig;
use ecopulse_core::EcoPulseError;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: impl Into<String>, start: Instant) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            duration: start.elapsed(),
        }
    }
}

/// Run the `ecopulse doctor` command.
///
/// With `--plain`, disables colored output.
pub async fn run_doctor(config: &EcoPulseConfig, plain: bool) -> Result<(), EcoPulseError> {
    let use_color = !plain && std::io::stdout().is_terminal();

    let results = vec![
        check_config().await,
        check_database(&config.storage.database_path).await,
        check_api_key(
            "Maps API key",
            ecopulse_maps::resolve_api_key(&config.maps.api_key),
            "travel entries cannot be created",
        ),
        check_api_key(
            "OpenAI API key",
            ecopulse_openai::resolve_api_key(&config.openai.api_key),
            "fallback recommendations only",
        ),
        check_health_endpoint(config).await,
        check_memory_baseline().await,
    ];

    println!();
    println!("  ecopulse doctor");
    println!("  {}", "-".repeat(50));

    for result in &results {
        println!("{}", render_line(result, use_color));
    }

    println!();

    let issues = results
        .iter()
        .filter(|r| r.status != CheckStatus::Pass)
        .count();
    if issues > 0 {
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }

    println!();

    Ok(())
}

fn render_line(result: &CheckResult, use_color: bool) -> String {
    let duration_ms = result.duration.as_millis();

    if !use_color {
        let tag = match result.status {
            CheckStatus::Pass => "[OK]  ",
            CheckStatus::Warn => "[WARN]",
            CheckStatus::Fail => "[FAIL]",
        };
        return format!(
            "    {tag} {:<20} {} ({duration_ms}ms)",
            result.name, result.message
        );
    }

    use colored::Colorize;
    let (symbol, message) = match result.status {
        CheckStatus::Pass => ("✓".green(), result.message.normal()),
        CheckStatus::Warn => ("!".yellow(), result.message.yellow()),
        CheckStatus::Fail => ("✗".red(), result.message.red()),
    };
    format!(
        "    {symbol} {:<20} {message} ({duration_ms}ms)",
        result.name
    )
}

/// Check configuration loads without errors.
async fn check_config() -> CheckResult {
    let start = Instant::now();
    match ecopulse_config::load_and_validate() {
        Ok(_) => CheckResult::new("Configuration", CheckStatus::Pass, "valid", start),
        Err(errors) => CheckResult::new(
            "Configuration",
            CheckStatus::Fail,
            format!("{} error(s) found", errors.len()),
            start,
        ),
    }
}

/// Check the SQLite file opens and carries the EcoPulse schema.
async fn check_database(db_path: &str) -> CheckResult {
    let start = Instant::now();

    if !std::path::Path::new(db_path).exists() {
        return CheckResult::new(
            "Database",
            CheckStatus::Warn,
            format!("not found: {db_path} (will be created on first run)"),
            start,
        );
    }

    let conn = match tokio_rusqlite::Connection::open(db_path).await {
        Ok(conn) => conn,
        Err(e) => {
            return CheckResult::new(
                "Database",
                CheckStatus::Fail,
                format!("open failed: {e}"),
                start,
            );
        }
    };

    let counts = conn
        .call(|conn| -> Result<(i64, i64), rusqlite::Error> {
            let trips =
                conn.query_row("SELECT COUNT(*) FROM travel_entries", [], |row| row.get(0))?;
            let devices =
                conn.query_row("SELECT COUNT(*) FROM devices", [], |row| row.get(0))?;
            Ok((trips, devices))
        })
        .await;

    match counts {
        Ok((trips, devices)) => CheckResult::new(
            "Database",
            CheckStatus::Pass,
            format!("connected ({trips} trips, {devices} devices)"),
            start,
        ),
        Err(e) if format!("{e:?}").contains("no such table") => CheckResult::new(
            "Database",
            CheckStatus::Warn,
            "schema missing (will be migrated on first run)",
            start,
        ),
        Err(e) => CheckResult::new(
            "Database",
            CheckStatus::Fail,
            format!("query failed: {e}"),
            start,
        ),
    }
}

/// Check an external service key resolves from config or environment.
fn check_api_key(
    name: &str,
    resolved: Result<String, EcoPulseError>,
    consequence: &str,
) -> CheckResult {
    let start = Instant::now();
    match resolved {
        Ok(_) => CheckResult::new(name, CheckStatus::Pass, "configured", start),
        Err(_) => CheckResult::new(
            name,
            CheckStatus::Warn,
            format!("not configured ({consequence})"),
            start,
        ),
    }
}

/// Check the API server answers on `/health`.
async fn check_health_endpoint(config: &EcoPulseConfig) -> CheckResult {
    let start = Instant::now();
    let host = match config.server.host.as_str() {
        "0.0.0.0" => "127.0.0.1",
        other => other,
    };
    let url = format!("http://{host}:{}/health", config.server.port);

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            return CheckResult::new(
                "Health endpoint",
                CheckStatus::Fail,
                format!("HTTP client error: {e}"),
                start,
            );
        }
    };

    match client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => {
            CheckResult::new("Health endpoint", CheckStatus::Pass, "reachable", start)
        }
        Ok(resp) => CheckResult::new(
            "Health endpoint",
            CheckStatus::Warn,
            format!("status {}", resp.status()),
            start,
        ),
        Err(_) => CheckResult::new(
            "Health endpoint",
            CheckStatus::Warn,
            format!("not reachable at {url} (server may not be running)"),
            start,
        ),
    }
}

/// Report current heap usage from jemalloc.
async fn check_memory_baseline() -> CheckResult {
    let start = Instant::now();

    #[cfg(not(target_env = "msvc"))]
    {
        let _ = tikv_jemalloc_ctl::epoch::advance();
        let allocated = tikv_jemalloc_ctl::stats::allocated::read().unwrap_or(0);
        let resident = tikv_jemalloc_ctl::stats::resident::read().unwrap_or(0);
        let allocated_mb = allocated as f64 / (1024.0 * 1024.0);
        let resident_mb = resident as f64 / (1024.0 * 1024.0);

        CheckResult::new(
            "Memory baseline",
            CheckStatus::Pass,
            format!("heap: {allocated_mb:.1} MB, resident: {resident_mb:.1} MB"),
            start,
        )
    }

    #[cfg(target_env = "msvc")]
    {
        CheckResult::new(
            "Memory baseline",
            CheckStatus::Warn,
            "jemalloc not available on MSVC",
            start,
        )
    }
}
