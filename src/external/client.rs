use std::sync::LazyLock;
use std::time::Duration;

/// User-Agent sent with every outbound request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Process-wide HTTP client shared by the homework API client and the
/// Telegram notifier.
///
/// Built lazily on first access. No request timeout is set, so a call takes
/// as long as the transport allows.
///
/// # Features
/// - **Connection pooling**: one pool for both remote services
/// - **Compression**: gzip, deflate, brotli and zstd responses
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
///
/// # Example
/// ```rust,ignore
/// use homework_bot::external::client::HTTP_CLIENT;
///
/// async fn fetch_data() -> Result<String, reqwest::Error> {
///     HTTP_CLIENT.get("https://api.example.com/data").send().await?.text().await
/// }
/// ```
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        // Connection pooling
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        // Enable compression (gzip, deflate, brotli, zstd)
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        let _ = &*HTTP_CLIENT;
    }

    #[test]
    fn test_user_agent_names_the_bot() {
        assert!(USER_AGENT.starts_with("homework-bot/"));
    }
}
