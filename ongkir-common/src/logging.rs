use std::str::FromStr;

use tracing::metadata::LevelFilter;
use tracing_subscriber::{
    Layer, filter::FilterFn, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

#[macro_export]
macro_rules! log {
    ($level:expr, $span:expr, $($msg:expr),*) => {{
        let span = $crate::tracing::span!(target: "ongkir", $level, $span);
        let _enter = span.enter();

        $crate::tracing::event!(target: "ongkir", $level, $($msg),*)
    }};
}

/// Traffic to and from the remote override store.
#[macro_export]
macro_rules! remote {
    (level = $level:ident, $($msg:expr),*) => {
        $crate::log!($crate::tracing::Level::$level, "remote", $($msg),*)
    };

    ($($msg:expr),*) => {
        $crate::remote!(level = TRACE, $($msg),*)
    };
}

/// Decisions taken inside the resolver (fallbacks, defaults).
#[macro_export]
macro_rules! internal {
    (level = $level:ident, $($msg:expr),*) => {
        $crate::log!($crate::tracing::Level::$level, "internal", $($msg),*)
    };

    ($($msg:expr),*) => {
        $crate::internal!(level = TRACE, $($msg),*)
    };
}

/// Crates whose events reach the subscriber installed by [`init`].
const CRATE_TARGETS: [&str; 3] = ["ongkir", "ongkir_common", "ongkir_store"];

/// Check whether `target` belongs to one of [`CRATE_TARGETS`], either as the
/// crate itself or one of its modules.
fn is_crate_target(target: &str) -> bool {
    CRATE_TARGETS.iter().any(|name| {
        target
            .strip_prefix(name)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

const fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    }
}

/// Parse a `LOG_LEVEL` value, using [`default_level`] when it is unset or invalid.
fn parse_level(level: Option<&str>) -> LevelFilter {
    let default = default_level();

    level.map_or(default, |level| {
        LevelFilter::from_str(level.trim()).unwrap_or_else(|_| {
            eprintln!("Invalid log level specified {level}, defaulting to {default}");
            default
        })
    })
}

/// Install the global subscriber.
///
/// The level is read from `LOG_LEVEL`, falling back to `TRACE` for debug
/// builds and `INFO` for release builds. Only events from the ongkir crates
/// are kept. Calling this again once a subscriber is installed has no effect.
pub fn init() {
    let level = parse_level(std::env::var("LOG_LEVEL").ok().as_deref());

    let result = tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(false)
                .with_line_number(false)
                .compact()
                .with_ansi(true)
                .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
                .with_filter(level)
                .with_filter(FilterFn::new(|metadata| is_crate_target(metadata.target()))),
        )
        .try_init();

    if let Err(err) = result {
        eprintln!("Logging already initialised: {err}");
    }
}
