use quiz_admin::config::{resolve_base_url, resolve_stats_page_url};
use quiz_admin::{AdminApi, Console, ConsoleUi, StatsPage};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let base_url = resolve_base_url();
    let page_url = resolve_stats_page_url(&base_url)?;

    let api = AdminApi::new(&base_url);
    let page = StatsPage::new(page_url);
    let mut console = Console::new(api, page, ConsoleUi);

    info!("admin console for {base_url}");
    console.run().await;
    Ok(())
}
