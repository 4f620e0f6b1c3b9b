//! Market data endpoints.
//!
//! bitFlyer does not require authentication here, but the client signs every
//! request the same way.

mod types;

pub use types::*;

use crate::error::BitflyerError;
use crate::rest::BitflyerRestClient;
use crate::rest::endpoints::public;
use crate::rest::transport::HttpTransport;

impl<T: HttpTransport> BitflyerRestClient<T> {
    /// Get the order book for the default product (`BTC_JPY`).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitflyer_api_client::auth::StaticCredentials;
    /// use bitflyer_api_client::rest::BitflyerRestClient;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BitflyerRestClient::new(Arc::new(StaticCredentials::new("key", "secret")));
    ///     let book = client.get_order_book().await?;
    ///     println!("mid {} ({} bids, {} asks)", book.mid_price, book.bids.len(), book.asks.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_order_book(&self) -> Result<OrderBook, BitflyerError> {
        self.get(public::BOARD).await
    }

    /// Get the order book for a specific product.
    pub async fn get_order_book_for(&self, product_code: &str) -> Result<OrderBook, BitflyerError> {
        self.get_with_params(public::BOARD, &ProductRequest { product_code })
            .await
    }

    /// Get the ticker for the default product (`BTC_JPY`).
    pub async fn get_ticker(&self) -> Result<Ticker, BitflyerError> {
        self.get(public::TICKER).await
    }

    /// Get the ticker for a specific product.
    pub async fn get_ticker_for(&self, product_code: &str) -> Result<Ticker, BitflyerError> {
        self.get_with_params(public::TICKER, &ProductRequest { product_code })
            .await
    }
}
