//! Example: Authentication helpers and signing.
//!
//! Run with: cargo run --example auth_credentials

use bitflyer_api_client::auth::{
    Credentials, CredentialsProvider, EnvCredentials, SignedHeaders, StaticCredentials,
    SystemClock, TimestampProvider, sign_message,
};

fn main() {
    // Static credentials (typically used in tests or explicit config).
    let static_creds = StaticCredentials::new("api_key", "api_secret");
    println!("Static key: {}", static_creds.get_credentials().api_key);
    println!("Debug output hides the secret: {:?}", static_creds.get_credentials());

    // Environment credentials are convenient for local dev.
    if let Some(env_creds) = EnvCredentials::try_from_env() {
        println!(
            "Loaded env credentials: {}",
            env_creds.get_credentials().api_key
        );
    } else {
        println!("Set BITFLYER_API_KEY and BITFLYER_API_SECRET to load env credentials.");
    }

    // Raw signature over timestamp + method + path + body.
    let signature = sign_message("secret", "1234567890", "GET", "/v1/getboard", b"");
    println!("Signature: {}", signature);

    // Full header set for a request signed now.
    let creds = Credentials::new("api_key", "api_secret");
    let body = br#"{"product_code":"BTC_JPY","child_order_type":"MARKET","side":"BUY","size":0.01}"#;
    let signed = SignedHeaders::sign(
        &creds,
        SystemClock::new().unix_timestamp(),
        "POST",
        "/v1/me/sendchildorder",
        body,
    );
    for (name, value) in signed.headers(&creds) {
        println!("{}: {}", name, value);
    }
}
