//! Account and trading endpoints.

mod types;

pub use types::*;

use crate::error::BitflyerError;
use crate::rest::BitflyerRestClient;
use crate::rest::endpoints::private;
use crate::rest::transport::HttpTransport;

impl<T: HttpTransport> BitflyerRestClient<T> {
    /// Get account asset balances.
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
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = BitflyerRestClient::new(credentials);
    ///
    ///     for balance in client.get_balance().await? {
    ///         println!("{}: {} ({} available)", balance.currency_code, balance.amount, balance.available);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balance(&self) -> Result<AssetBalance, BitflyerError> {
        self.get(private::BALANCE).await
    }

    /// Send a new child order.
    ///
    /// An expiry of zero or less becomes [`DEFAULT_MINUTE_TO_EXPIRE`] and a
    /// missing time in force becomes GTC. The returned order is the submitted
    /// one with the exchange's acceptance ID filled in.
    ///
    /// bitFlyer reports rejections (e.g. insufficient funds) in the body of a
    /// successful HTTP response; those surface as [`BitflyerError::Exchange`].
    pub async fn new_order(&self, order: Order) -> Result<Order, BitflyerError> {
        let order = order.with_defaults();
        let response: SendChildOrderResponse =
            self.post(private::SEND_CHILD_ORDER, &order).await?;

        let order = order.apply_response(response);
        match order.rejection() {
            Some(rejection) => Err(BitflyerError::Exchange(rejection)),
            None => Ok(order),
        }
    }
}
