/*
[INPUT]:  Currency pair (e.g., btc_jpy)
[OUTPUT]: Market data (last price, ticker, depth)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use tracing_subscriber::EnvFilter;
use zaif_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Zaif Market Data Example ===\n");

    let client = match ZaifClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (cool-down: 2s between calls)\n");

    let currency = "btc";

    println!("Querying last price for {}_{}...", currency, DEFAULT_COUNTER_CURRENCY);
    match client.get_last_price(currency, DEFAULT_COUNTER_CURRENCY).await {
        Ok(price) => println!("✓ Last price: {}", price),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying ticker...");
    match client.get_ticker(currency, DEFAULT_COUNTER_CURRENCY).await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying depth...");
    match client.get_depth(currency, DEFAULT_COUNTER_CURRENCY).await {
        Ok(depth) => {
            let asks = depth["asks"].as_array().map(Vec::len).unwrap_or(0);
            let bids = depth["bids"].as_array().map(Vec::len).unwrap_or(0);
            println!("✓ Depth: {} asks, {} bids", asks, bids);
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
