//! 同步总线 TCP 服务端
//!
//! 接受客户端连接，把广播通道里的消息编码成帧写出。
//! 这是单向通道：服务端不读取客户端数据。

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use super::SyncBus;

/// 运行 TCP 服务端直到总线被关闭
pub async fn serve(bus: SyncBus) -> std::io::Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], bus.port()));
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    bus.record_local_addr(local);
    info!("Sync bus listening on {}", local);

    let cancel = bus.cancel_token();
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("Sync bus shutting down");
                return Ok(());
            }
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer)) => {
                        debug!(%peer, "sync client connected");
                        let bus = bus.clone();
                        tokio::spawn(handle_client(bus, stream));
                    }
                    Err(e) => warn!("sync accept failed: {}", e),
                }
            }
        }
    }
}

/// 为单个客户端转发消息，直到断开或总线关闭
async fn handle_client(bus: SyncBus, mut stream: TcpStream) {
    let mut rx = bus.subscribe();
    let cancel = bus.cancel_token();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            received = rx.recv() => {
                let message = match received {
                    Ok(m) => m,
                    // 落后的慢客户端：断开，让它重连后重新拉取
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "sync client lagged, disconnecting");
                        break;
                    }
                    Err(RecvError::Closed) => break,
                };

                let frame = match message.encode_frame() {
                    Ok(f) => f,
                    Err(e) => {
                        warn!("frame encode failed: {}", e);
                        continue;
                    }
                };

                if let Err(e) = stream.write_all(&frame).await {
                    debug!("sync client write failed: {}", e);
                    break;
                }
            }
        }
    }
}
