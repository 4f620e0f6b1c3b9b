//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExchangeError;
use crate::types::{ChildOrderType, Side, TimeInForce};

/// Expiry applied when an order is submitted without one (one year).
pub const DEFAULT_MINUTE_TO_EXPIRE: i64 = 525_600;

/// Balance of a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Balance {
    /// Currency code (e.g. `JPY`, `BTC`).
    pub currency_code: String,
    /// Total amount held.
    pub amount: Decimal,
    /// Amount available for trading.
    pub available: Decimal,
}

impl Balance {
    /// Amount held but not available (open orders, withdrawals).
    pub fn locked(&self) -> Decimal {
        self.amount - self.available
    }
}

/// Account balances, one record per currency.
pub type AssetBalance = Vec<Balance>;

/// Find the balance of a currency.
pub fn find_balance<'a>(balances: &'a [Balance], currency_code: &str) -> Option<&'a Balance> {
    balances
        .iter()
        .find(|b| b.currency_code.eq_ignore_ascii_case(currency_code))
}

/// A child order, as submitted and as returned by the exchange.
///
/// Request fields are filled by the caller. `child_order_acceptance_id`,
/// `status` and `error_message` are set from the exchange response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Acceptance ID assigned by the exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_order_acceptance_id: Option<String>,
    /// Product code (e.g. `BTC_JPY`).
    pub product_code: String,
    /// Limit or market.
    pub child_order_type: ChildOrderType,
    /// Buy or sell.
    pub side: Side,
    /// Limit price. Omitted for market orders.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub price: Option<Decimal>,
    /// Order size.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub size: Decimal,
    /// Minutes until expiry. Zero or less means unset.
    #[serde(default)]
    pub minute_to_expire: i64,
    /// Time in force. `None` means unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Status code returned by the exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    /// Error message returned by the exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Order {
    /// Create a limit order.
    pub fn limit(product_code: impl Into<String>, side: Side, price: Decimal, size: Decimal) -> Self {
        Self {
            child_order_acceptance_id: None,
            product_code: product_code.into(),
            child_order_type: ChildOrderType::Limit,
            side,
            price: Some(price),
            size,
            minute_to_expire: 0,
            time_in_force: None,
            status: None,
            error_message: None,
        }
    }

    /// Create a market order.
    pub fn market(product_code: impl Into<String>, side: Side, size: Decimal) -> Self {
        Self {
            child_order_type: ChildOrderType::Market,
            price: None,
            ..Self::limit(product_code, side, Decimal::ZERO, size)
        }
    }

    /// Set the expiry in minutes.
    pub fn with_minute_to_expire(mut self, minutes: i64) -> Self {
        self.minute_to_expire = minutes;
        self
    }

    /// Set the time in force.
    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    /// Fill in expiry and time in force when the caller left them unset.
    pub fn with_defaults(mut self) -> Self {
        if self.minute_to_expire <= 0 {
            self.minute_to_expire = DEFAULT_MINUTE_TO_EXPIRE;
        }
        if self.time_in_force.is_none() {
            self.time_in_force = Some(TimeInForce::Gtc);
        }
        self
    }

    /// Copy the fields present in a send-order response onto this order.
    pub fn apply_response(mut self, response: SendChildOrderResponse) -> Self {
        if response.child_order_acceptance_id.is_some() {
            self.child_order_acceptance_id = response.child_order_acceptance_id;
        }
        if response.status.is_some() {
            self.status = response.status;
        }
        if response.error_message.is_some() {
            self.error_message = response.error_message;
        }
        self
    }

    /// The exchange rejection carried by this order, if any.
    pub fn rejection(&self) -> Option<ExchangeError> {
        self.error_message
            .as_deref()
            .filter(|m| !m.is_empty())
            .map(|m| ExchangeError::new(self.status, m))
    }
}

/// Response of `POST /v1/me/sendchildorder`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SendChildOrderResponse {
    /// Acceptance ID of the new order.
    #[serde(default)]
    pub child_order_acceptance_id: Option<String>,
    /// Status code, present on failure.
    #[serde(default)]
    pub status: Option<i64>,
    /// Error message, present on failure.
    #[serde(default)]
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_defaults_applied_when_unset() {
        let order = Order::limit("BTC_JPY", Side::Buy, dec("30000"), dec("0.1")).with_defaults();
        assert_eq!(order.minute_to_expire, 525_600);
        assert_eq!(order.time_in_force, Some(TimeInForce::Gtc));

        let order = Order::market("BTC_JPY", Side::Sell, dec("0.1"))
            .with_minute_to_expire(-5)
            .with_defaults();
        assert_eq!(order.minute_to_expire, DEFAULT_MINUTE_TO_EXPIRE);
    }

    #[test]
    fn test_defaults_leave_explicit_values() {
        let order = Order::limit("BTC_JPY", Side::Buy, dec("30000"), dec("0.1"))
            .with_minute_to_expire(10_000)
            .with_time_in_force(TimeInForce::Fok)
            .with_defaults();
        assert_eq!(order.minute_to_expire, 10_000);
        assert_eq!(order.time_in_force, Some(TimeInForce::Fok));
    }

    #[test]
    fn test_request_body_shape() {
        let order = Order::limit("BTC_JPY", Side::Buy, dec("30000"), dec("0.1")).with_defaults();
        let body = serde_json::to_string(&order).unwrap();

        assert_eq!(
            body,
            r#"{"product_code":"BTC_JPY","child_order_type":"LIMIT","side":"BUY","price":30000,"size":0.1,"minute_to_expire":525600,"time_in_force":"GTC"}"#
        );
    }

    #[test]
    fn test_order_numbers_keep_full_precision() {
        let order = Order::limit(
            "BTC_JPY",
            Side::Buy,
            dec("9007199254740993"),
            dec("0.12345678901234567891"),
        );
        let body = serde_json::to_string(&order).unwrap();
        assert!(body.contains(r#""price":9007199254740993,"#));
        assert!(body.contains(r#""size":0.12345678901234567891,"#));

        let decoded: Order = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded.price, Some(dec("9007199254740993")));
        assert_eq!(decoded.size, dec("0.12345678901234567891"));

        let order = Order::limit("BTC_JPY", Side::Sell, dec("12345678.123456789"), dec("1"));
        let decoded: Order = serde_json::from_str(&serde_json::to_string(&order).unwrap()).unwrap();
        assert_eq!(decoded, order);
    }

    #[test]
    fn test_market_order_omits_price() {
        let order = Order::market("FX_BTC_JPY", Side::Sell, dec("0.01"));
        let body = serde_json::to_value(&order).unwrap();
        assert!(body.get("price").is_none());
        assert_eq!(body["child_order_type"], "MARKET");
    }

    #[test]
    fn test_order_round_trip() {
        let order = Order {
            child_order_acceptance_id: Some("JRF20150707-050237-639234".to_string()),
            product_code: "BTC_JPY".to_string(),
            child_order_type: ChildOrderType::Limit,
            side: Side::Sell,
            price: Some(dec("9007199254740993")),
            size: dec("0.12345678901234567891"),
            minute_to_expire: 10_000,
            time_in_force: Some(TimeInForce::Ioc),
            status: Some(0),
            error_message: Some("".to_string()),
        };

        let json = serde_json::to_string(&order).unwrap();
        let decoded: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, order);
    }

    #[test]
    fn test_apply_response() {
        let order = Order::limit("BTC_JPY", Side::Buy, dec("30000"), dec("0.1")).with_defaults();
        let response: SendChildOrderResponse =
            serde_json::from_str(r#"{"child_order_acceptance_id":"JRF20150707-050237-639234"}"#)
                .unwrap();

        let merged = order.clone().apply_response(response);
        assert_eq!(
            merged.child_order_acceptance_id.as_deref(),
            Some("JRF20150707-050237-639234")
        );
        assert_eq!(merged.product_code, order.product_code);
        assert_eq!(merged.minute_to_expire, order.minute_to_expire);
        assert!(merged.rejection().is_none());
    }

    #[test]
    fn test_rejection() {
        let order = Order::market("BTC_JPY", Side::Buy, dec("1")).apply_response(
            SendChildOrderResponse {
                child_order_acceptance_id: None,
                status: Some(-200),
                error_message: Some("Insufficient funds".to_string()),
            },
        );
        assert_eq!(
            order.rejection(),
            Some(ExchangeError::new(Some(-200), "Insufficient funds"))
        );
    }

    #[test]
    fn test_balance_decode() {
        let json = r#"[
            {"currency_code": "JPY", "amount": 1024078, "available": 508000},
            {"currency_code": "BTC", "amount": 10.24, "available": 4.12}
        ]"#;

        let balances: AssetBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].locked(), Decimal::from(516078));
        let btc = find_balance(&balances, "btc").unwrap();
        assert_eq!(btc.available, dec("4.12"));
        assert!(find_balance(&balances, "ETH").is_none());
    }
}
