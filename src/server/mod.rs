//! Game server
//!
//! JSON request/response protocol, a stateless request handler and the
//! stdin/stdout and TCP transports that drive it.

mod handler;
pub mod protocol;
mod transport;

pub use handler::GameServer;
pub use protocol::{ProtocolError, Request, Response};
pub use transport::{accept_connections, serve_lines, serve_stdio, serve_tcp};
