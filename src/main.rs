use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shrink_resize::{tool_for, Config, Resizer};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shrink_resize=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    let tool = tool_for(&config);
    let resizer = Resizer::new(tool, config);

    let summary = resizer.run().with_context(|| {
        format!(
            "Failed to resize images in {}",
            resizer.config().input_dir.display()
        )
    })?;

    if !summary.failed.is_empty() {
        info!("{} image(s) were not converted", summary.failed.len());
    }

    Ok(())
}
