use anyhow::{Context, Result};
use civsettlements::{pipeline, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) fetch → parse → assemble → write ─────────────────────────
    let config = Config::default();
    pipeline::run(&config).with_context(|| {
        format!(
            "generating {} from sheet {:?}",
            config.output_path.display(),
            config.sheet_name
        )
    })?;

    Ok(())
}
