use chrono::Local;
use scripture_scrap::{
    config::Config, info_time, process::process_site, request::HttpSource, Result,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let start_time = Local::now();
    let config = Config::default();
    let source = HttpSource::new(&config)?;

    let summary = process_site(&config, &source).await?;
    tracing::info!(
        pages = summary.pages,
        "Total data downloaded: {:.2} MB",
        summary.bytes_downloaded as f64 / 1_000_000.0
    );
    tracing::info!(
        "Final {} size: {:.2} MB",
        summary.output_path.display(),
        summary.bytes_written as f64 / 1_000_000.0
    );
    info_time!(start_time, "Full program time:");

    Ok(())
}
