use larder_cli::{AppConfig, Session};
use larder_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    larder_observability::init(&config.log_filter, config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(Inventory::new(), stdin.lock(), stdout.lock());
    session.run()?;

    tracing::debug!("session ended");
    Ok(())
}
