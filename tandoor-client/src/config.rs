//! Client configuration

/// Client configuration for connecting to the Tandoor server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// JWT token for admin calls
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Sync bus TCP address (e.g., "localhost:8081")
    pub sync_tcp_addr: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            sync_tcp_addr: None,
        }
    }

    /// Set the JWT token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the sync bus TCP address
    pub fn with_sync_tcp_addr(mut self, addr: impl Into<String>) -> Self {
        self.sync_tcp_addr = Some(addr.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }

    /// Connect a sync-feed subscriber to the configured TCP address
    pub async fn connect_sync(&self) -> crate::ClientResult<super::SyncClient> {
        let addr = self.sync_tcp_addr.as_deref().ok_or_else(|| {
            crate::ClientError::Validation("sync_tcp_addr is not configured".to_string())
        })?;
        super::SyncClient::connect(addr).await
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
