//! bitFlyer REST API endpoint constants.

/// Base URL for the bitFlyer Lightning REST API.
pub const BITFLYER_BASE_URL: &str = "https://api.bitflyer.jp";

/// Public market data endpoints.
pub mod public {
    /// Get order book.
    pub const BOARD: &str = "/v1/getboard";
    /// Get ticker.
    pub const TICKER: &str = "/v1/getticker";
}

/// Private endpoints (authentication required).
pub mod private {
    /// Get account asset balance.
    pub const BALANCE: &str = "/v1/me/getbalance";
    /// Send a new child order.
    pub const SEND_CHILD_ORDER: &str = "/v1/me/sendchildorder";
}
