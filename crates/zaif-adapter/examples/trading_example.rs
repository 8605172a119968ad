/*
[INPUT]:  ZAIF_API_KEY / ZAIF_API_SECRET (or ZAIF_TOKEN), optional YAML config path
[OUTPUT]: Account info and open orders
[POS]:    Examples - private trading API
[UPDATE]: When trading API changes
*/

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use zaif_adapter::*;

/// Example: Read-only private calls
///
/// Usage: cargo run --example trading_example [config.yaml]
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ClientConfig::from_file(&path).with_context(|| format!("load {path}"))?,
        None => ClientConfig::default(),
    }
    .with_env_credentials();

    let client = ZaifClient::with_config(config).context("create client")?;
    if let Err(e) = client.credentials().check_ready() {
        eprintln!("✗ {e}: set ZAIF_API_KEY and ZAIF_API_SECRET, or ZAIF_TOKEN");
        return Ok(());
    }

    let info = client.get_info2().await.context("get_info2")?;
    info!(funds = %info["funds"], "account funds");

    let orders = client
        .get_active_orders(Some(&currency_pair("btc", DEFAULT_COUNTER_CURRENCY)))
        .await
        .context("active_orders")?;
    let open = orders.as_object().map(|o| o.len()).unwrap_or(0);
    info!(open, "active btc_jpy orders");

    let trades = client
        .get_my_trades(&HistoryQuery::new().count(10).order(SortOrder::Desc))
        .await
        .context("trade_history")?;
    println!("Recent trades: {trades}");

    Ok(())
}
