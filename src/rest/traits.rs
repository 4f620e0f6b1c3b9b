//! Trait definition for the bitFlyer REST API client.
//!
//! [`BitflyerClient`] abstracts the REST operations so callers can supply
//! mock implementations or wrap the client with their own policies.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitflyer_api_client::rest::BitflyerClient;
//!
//! async fn print_mid<C: BitflyerClient>(client: &C) -> Result<(), bitflyer_api_client::BitflyerError> {
//!     let book = client.get_order_book().await?;
//!     println!("Mid price: {}", book.mid_price);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::BitflyerError;
use crate::rest::private::{AssetBalance, Order};
use crate::rest::public::{OrderBook, Ticker};

/// Trait defining the bitFlyer REST API operations.
pub trait BitflyerClient: Send + Sync {
    /// Get the order book.
    fn get_order_book(&self) -> impl Future<Output = Result<OrderBook, BitflyerError>> + Send;

    /// Get the ticker.
    fn get_ticker(&self) -> impl Future<Output = Result<Ticker, BitflyerError>> + Send;

    /// Get account asset balances.
    fn get_balance(&self) -> impl Future<Output = Result<AssetBalance, BitflyerError>> + Send;

    /// Send a new child order.
    fn new_order(&self, order: Order) -> impl Future<Output = Result<Order, BitflyerError>> + Send;
}
