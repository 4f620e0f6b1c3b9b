//! Example: Fetching market data from bitFlyer.
//!
//! bitFlyer serves market data without authentication; the client still
//! signs the request, so any key pair works here.
//!
//! Run with: cargo run --example public_data

use std::sync::Arc;
use std::time::Duration;

use bitflyer_api_client::auth::StaticCredentials;
use bitflyer_api_client::rest::BitflyerRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = Arc::new(StaticCredentials::new("public", "public"));
    let client = BitflyerRestClient::builder(credentials)
        .timeout(Duration::from_secs(10))
        .build();

    // Get ticker
    println!("=== Ticker ===");
    let ticker = client.get_ticker().await?;
    println!("Product: {}", ticker.product_code);
    println!("Tick: {} at {}", ticker.tick_id, ticker.timestamp);
    println!("LTP: {}", ticker.ltp);
    println!("Bid/Ask: {} / {} (spread {})", ticker.best_bid, ticker.best_ask, ticker.spread());
    println!("Volume: {}", ticker.volume);

    // Get order book
    println!("\n=== Order Book ===");
    let book = client.get_order_book().await?;
    println!("Mid price: {}", book.mid_price);
    println!("Top asks:");
    for level in book.asks.iter().take(5) {
        println!("  {} @ {}", level.size, level.price);
    }
    println!("Top bids:");
    for level in book.bids.iter().take(5) {
        println!("  {} @ {}", level.size, level.price);
    }

    // Other products
    println!("\n=== FX_BTC_JPY ===");
    let fx = client.get_ticker_for("FX_BTC_JPY").await?;
    println!("LTP: {} ({})", fx.ltp, fx.state.unwrap_or_default());

    Ok(())
}
