//! Runtime setup: logging backends and the rayon thread pool

use super::LogFormat;
use tracing_subscriber::EnvFilter;

/// Default log level for a `-v` count when `RUST_LOG` is unset
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the selected logging backend once at startup
///
/// The tracing subscriber also captures `log` records from the library.
pub fn init_logging(format: LogFormat, verbosity: u8) {
    let level = default_level(verbosity);
    match format {
        LogFormat::Tracing => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
            let result = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
            if let Err(e) = result {
                eprintln!("Note: logging already configured: {}", e);
            }
        }
        LogFormat::Plain => {
            let result =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
                    .format_timestamp(None)
                    .try_init();
            if let Err(e) = result {
                eprintln!("Note: logging already configured: {}", e);
            }
        }
    }
}

/// Configure the rayon global thread pool used for table columns
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        log::debug!("Thread pool already configured: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(4), "debug");
    }
}
