use std::backtrace::Backtrace;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILTER_ENV: &str = "TRIPDECK_LOG";
const DEFAULT_LOG_FILTER: &str = "tripdeck=debug,tripdeck_cli=debug,tripdeck_app=debug,tripdeck_tui=debug,tripdeck_core=debug";

static HOOK_ONCE: Once = Once::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Owns the diagnostics log for one process run. Without `--diagnostics`
/// no subscriber is installed and tracing events are dropped.
pub struct DiagnosticsSession {
    path: Option<PathBuf>,
}

impl DiagnosticsSession {
    pub fn initialize(enabled: bool) -> Result<Self> {
        install_panic_hook();
        if !enabled {
            return Ok(Self { path: None });
        }

        let path = create_diagnostics_log_path()?;
        let file = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&path)
            .with_context(|| format!("failed to create diagnostics log at {}", path.display()))?;

        tracing_subscriber::registry()
            .with(log_filter())
            .with(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true),
            )
            .try_init()
            .context("failed to install diagnostics logger")?;

        let _ = LOG_PATH.set(path.clone());
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            start_epoch_ms = epoch_millis(),
            pid = std::process::id(),
            argv = ?std::env::args().collect::<Vec<String>>(),
            "tripdeck diagnostics start"
        );

        Ok(Self { path: Some(path) })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn install_panic_hook() {
    HOOK_ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            let payload = panic_payload(panic_info);
            let location = panic_info
                .location()
                .map(|value| format!("{}:{}:{}", value.file(), value.line(), value.column()))
                .unwrap_or_else(|| "unknown".to_string());

            if let Some(path) = LOG_PATH.get() {
                let backtrace = Backtrace::force_capture();
                tracing::error!(
                    panic_message = %payload,
                    panic_location = %location,
                    panic_backtrace = %backtrace,
                    "panic captured"
                );
                eprintln!("Fatal internal error in tripdeck.");
                eprintln!("Diagnostics written to {}", path.display());
            } else {
                eprintln!("Fatal internal error in tripdeck: {payload} at {location}");
                eprintln!("Run `tripdeck --diagnostics` to capture a diagnostics log.");
            }
        }));
    });
}

fn panic_payload(panic_info: &std::panic::PanicHookInfo<'_>) -> String {
    if let Some(payload) = panic_info.payload().downcast_ref::<&str>() {
        return (*payload).to_string();
    }
    if let Some(payload) = panic_info.payload().downcast_ref::<String>() {
        return payload.clone();
    }
    "unknown panic payload".to_string()
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

fn create_diagnostics_log_path() -> Result<PathBuf> {
    let config_dir = tripdeck_core::config::resolve_config_dir()
        .context("failed to resolve tripdeck config directory for diagnostics")?;
    diagnostics_log_path_in(&config_dir)
}

fn diagnostics_log_path_in(config_dir: &Path) -> Result<PathBuf> {
    let diagnostics_dir = config_dir.join("diagnostics");
    fs::create_dir_all(&diagnostics_dir).with_context(|| {
        format!(
            "failed to create diagnostics directory {}",
            diagnostics_dir.display()
        )
    })?;

    Ok(diagnostics_dir.join(format!("{}.log", epoch_millis())))
}
