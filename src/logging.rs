use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "farmgraph.log";

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("farmgraph={}", level)
}

/// Initialize logging: compact lines on stderr, plus JSON lines in a daily
/// rotated file when `log_file` is given.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the file writer.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        let _ = subscriber.try_init();
        return None;
    };

    let directory = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let _ = std::fs::create_dir_all(directory);
    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(directory, file_name));
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false).json();

    let _ = subscriber.with(file_layer).try_init();
    Some(guard)
}
