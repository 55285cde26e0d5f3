//! Sync-feed subscriber
//!
//! Connects to the server's TCP change feed and yields decoded
//! [`BusMessage`]s. The feed only signals that something changed; the
//! consumer re-fetches through the HTTP API. A dropped connection is
//! surfaced as an error — reconnecting and re-fetching restores sync.

use tokio::io::AsyncReadExt;
use tokio::net::{TcpStream, ToSocketAddrs};

use shared::sync::{BusMessage, MAX_FRAME_LEN, SyncPayload};

use crate::{ClientError, ClientResult};

/// TCP sync-feed client
#[derive(Debug)]
pub struct SyncClient {
    stream: TcpStream,
}

impl SyncClient {
    /// Connect to the sync bus
    pub async fn connect(addr: impl ToSocketAddrs) -> ClientResult<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self { stream })
    }

    /// Read the next frame
    pub async fn next_message(&mut self) -> ClientResult<BusMessage> {
        let event_type = self.stream.read_u8().await?;
        let len = self.stream.read_u32().await?;
        if len > MAX_FRAME_LEN {
            return Err(ClientError::InvalidResponse(format!(
                "frame length {} exceeds limit",
                len
            )));
        }

        let mut body = vec![0u8; len as usize];
        self.stream.read_exact(&mut body).await?;

        Ok(BusMessage::decode_body(event_type, &body)?)
    }

    /// Read frames until the next collection-change signal
    pub async fn next_sync(&mut self) -> ClientResult<SyncPayload> {
        loop {
            if let BusMessage::Sync(payload) = self.next_message().await? {
                return Ok(payload);
            }
        }
    }
}
