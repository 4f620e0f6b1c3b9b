//! Example: Balance and child order endpoints.
//!
//! Run with: cargo run --example private_trading
//!
//! Orders are only sent when `BITFLYER_SEND_ORDER=1` is set.

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use bitflyer_api_client::auth::EnvCredentials;
use bitflyer_api_client::rest::BitflyerRestClient;
use bitflyer_api_client::rest::private::{Order, find_balance};
use bitflyer_api_client::{BitflyerError, Side, TimeInForce};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set BITFLYER_API_KEY and BITFLYER_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let client = BitflyerRestClient::new(credentials);

    let balances = client.get_balance().await?;
    for balance in &balances {
        println!(
            "{}: {} ({} available)",
            balance.currency_code, balance.amount, balance.available
        );
    }
    if let Some(jpy) = find_balance(&balances, "JPY") {
        println!("JPY locked in orders: {}", jpy.locked());
    }

    if env::var("BITFLYER_SEND_ORDER").ok().as_deref() != Some("1") {
        println!("Set BITFLYER_SEND_ORDER=1 to send a far-from-market limit order.");
        return Ok(());
    }

    let order = Order::limit(
        "BTC_JPY",
        Side::Buy,
        Decimal::from_str("1000000")?,
        Decimal::from_str("0.001")?,
    )
    .with_minute_to_expire(5)
    .with_time_in_force(TimeInForce::Gtc);

    match client.new_order(order).await {
        Ok(accepted) => println!(
            "Accepted: {}",
            accepted.child_order_acceptance_id.unwrap_or_default()
        ),
        Err(BitflyerError::Exchange(rejection)) => println!("Rejected: {}", rejection),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
