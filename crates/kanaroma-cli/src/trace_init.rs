use std::path::Path;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. With `log_dir` (and the `trace` feature)
/// events go to a JSON-lines file there; otherwise to stderr, filtered by
/// `RUST_LOG` (default `warn`).
pub fn init_tracing(log_dir: Option<&Path>) {
    INIT.call_once(|| {
        #[cfg(feature = "trace")]
        if let Some(dir) = log_dir {
            init_json_file(dir);
            return;
        }

        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_env_filter(env_filter("warn"))
            .init();

        #[cfg(not(feature = "trace"))]
        if log_dir.is_some() {
            tracing::warn!("--log-dir ignored: built without the `trace` feature");
        }
    });
}

#[cfg(feature = "trace")]
fn init_json_file(log_dir: &Path) {
    let file_appender = tracing_appender::rolling::never(log_dir, "kanaroma-trace.jsonl");

    tracing_subscriber::fmt()
        .json()
        .with_writer(file_appender)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(env_filter("kanaroma_core=debug,kanaroma_cli=debug"))
        .init();
}
