//! Types for public market data endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Iso8601;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Query parameters selecting a product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRequest<'a> {
    /// Product code, e.g. `BTC_JPY` or `FX_BTC_JPY`.
    pub product_code: &'a str,
}

/// One price level of the order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PriceLevel {
    /// Price.
    pub price: Decimal,
    /// Size at this price.
    pub size: Decimal,
}

/// Order book snapshot.
///
/// Bids and asks keep the order in which the exchange sent them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderBook {
    /// Mid price.
    pub mid_price: Decimal,
    /// Bid levels.
    pub bids: Vec<PriceLevel>,
    /// Ask levels.
    pub asks: Vec<PriceLevel>,
}

impl OrderBook {
    /// First bid level as received.
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// First ask level as received.
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }
}

/// Ticker snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticker {
    /// Product code.
    pub product_code: String,
    /// Exchange timestamp, UTC without offset (e.g. `2015-07-08T02:50:59.97`).
    pub timestamp: String,
    /// Increasing tick identifier.
    pub tick_id: u64,
    /// Best bid price.
    pub best_bid: Decimal,
    /// Best ask price.
    pub best_ask: Decimal,
    /// Size at the best bid.
    pub best_bid_size: Decimal,
    /// Size at the best ask.
    pub best_ask_size: Decimal,
    /// Total bid depth.
    pub total_bid_depth: Decimal,
    /// Total ask depth.
    pub total_ask_depth: Decimal,
    /// Last traded price.
    pub ltp: Decimal,
    /// 24 hour volume.
    pub volume: Decimal,
    /// 24 hour volume for this product.
    pub volume_by_product: Decimal,
    /// Market state (e.g. `RUNNING`).
    #[serde(default)]
    pub state: Option<String>,
    /// Size of outstanding market bids.
    #[serde(default)]
    pub market_bid_size: Option<Decimal>,
    /// Size of outstanding market asks.
    #[serde(default)]
    pub market_ask_size: Option<Decimal>,
}

impl Ticker {
    /// Best ask minus best bid.
    pub fn spread(&self) -> Decimal {
        self.best_ask - self.best_bid
    }

    /// Parse [`Ticker::timestamp`] as a UTC date-time.
    ///
    /// bitFlyer omits the offset; a trailing `Z` is also accepted.
    pub fn parsed_timestamp(&self) -> Result<OffsetDateTime, time::error::Parse> {
        OffsetDateTime::parse(&self.timestamp, &Iso8601::DEFAULT).or_else(|_| {
            PrimitiveDateTime::parse(&self.timestamp, &Iso8601::DEFAULT).map(|dt| dt.assume_utc())
        })
    }
}
