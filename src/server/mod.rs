// ABOUTME: Server module - the MCP endpoint spoken over stdio.
// ABOUTME: JSON-RPC 2.0 types, method router, and the serve loop.

mod router;
mod stdio;
mod types;

pub use router::Router;
pub use stdio::serve;
pub use types::*;
