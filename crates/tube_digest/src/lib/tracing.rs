use anyhow::Context;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Installs the global subscriber: env-filtered, bunyan-formatted JSON on
/// stdout, with spans and events forwarded to sentry as breadcrumbs.
///
/// `default_directives` applies when `RUST_LOG` is unset.
pub fn init_tracing_subscriber(default_directives: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    let formatting_layer = BunyanFormattingLayer::new("tube-digest".into(), std::io::stdout);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(sentry_tracing::layer())
        .with(JsonStorageLayer)
        .with(formatting_layer);

    ::tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global tracing subscriber")
}
