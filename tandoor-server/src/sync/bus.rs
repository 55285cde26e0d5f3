//! 同步总线
//!
//! 进程内是一个 tokio broadcast 通道；TCP 服务端把通道里的消息
//! 编码成帧转发给每个已连接的客户端。
//!
//! 掉线或写失败的客户端直接断开 —— 通道只承载"有变更"信号，
//! 客户端重连后通过 HTTP 重新拉取即可。

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use shared::sync::BusMessage;

/// 进程内广播通道容量
///
/// 慢客户端落后超过容量会收到 Lagged，由连接任务断开它。
const CHANNEL_CAPACITY: usize = 256;

/// 变更通知总线
#[derive(Clone)]
pub struct SyncBus {
    sender: broadcast::Sender<BusMessage>,
    cancel: CancellationToken,
    port: u16,
    bound: Arc<OnceLock<SocketAddr>>,
}

impl SyncBus {
    pub fn new(port: u16) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            cancel: CancellationToken::new(),
            port,
            bound: Arc::new(OnceLock::new()),
        }
    }

    /// 发布一条消息
    ///
    /// 没有订阅者时消息被丢弃，这不是错误。
    pub fn publish(&self, message: BusMessage) {
        let _ = self.sender.send(message);
    }

    /// 订阅进程内通道 (TCP 服务端和测试使用)
    pub fn subscribe(&self) -> broadcast::Receiver<BusMessage> {
        self.sender.subscribe()
    }

    /// 当前订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// 实际绑定地址；服务端启动前为 None (端口 0 时才与 [`SyncBus::port`] 不同)
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.bound.get().copied()
    }

    pub(crate) fn record_local_addr(&self, addr: SocketAddr) {
        let _ = self.bound.set(addr);
    }

    /// 启动 TCP 服务端，阻塞直到 [`SyncBus::shutdown`]
    pub async fn start_tcp_server(&self) -> std::io::Result<()> {
        crate::sync::tcp_server::serve(self.clone()).await
    }

    /// 关闭 TCP 服务端和所有客户端连接
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub(crate) fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}
