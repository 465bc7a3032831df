use anyhow::Context;

use stockroom_cli::{Config, Session};
use stockroom_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    stockroom_observability::init(&config.log);

    if let Some(raw) = &config.unrecognized_log_format {
        tracing::warn!(
            value = %raw,
            "unrecognized {}; using text logs",
            stockroom_cli::config::LOG_FORMAT_VAR
        );
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(Inventory::new(), stdin.lock(), stdout.lock());
    session.run().context("inventory session failed")?;

    Ok(())
}
