use std::str::FromStr;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod error;
pub mod handler;
pub mod types;
pub mod upstream;

/// Initializes the tracing from RUST_LOG env var if present or sets minimal logging:
/// - INFO for this crate
/// - nothing from other crates
///
/// CloudWatch adds its own timestamps and does not render colors, so both are off.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(
                    Directive::from_str(concat!(env!("CARGO_CRATE_NAME"), "=info"))
                        .expect("Invalid logging filter. It's a bug."),
                )
                .from_env_lossy(),
        )
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}
