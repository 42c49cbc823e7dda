use tracing_subscriber::EnvFilter;

/// Targets that get a level from `-v`.
///
/// Library events use targets under `almanac` (`almanac::diagnostic` for
/// undefined-date warnings), so the `almanac` prefix covers them all.
/// Dependencies stay silent unless `RUST_LOG` names them.
const CRATE_TARGETS: &[&str] = &["almanac", "almanac_cli"];

/// Filter directives for a `-v` count: warn, info, debug, then trace.
fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber. `RUST_LOG` replaces the `-v` directives
/// when set, and stdout is left for command results.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
