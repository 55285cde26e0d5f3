//! 变更通知总线
//!
//! 资源变更通过 TCP 通道推送给在线客户端：
//! - [`SyncBus`] - 进程内广播 + TCP 服务端
//! - 线格式见 `shared::sync`

pub mod bus;
pub mod tcp_server;

pub use bus::SyncBus;
