// ABOUTME: Stdio endpoint - line-delimited JSON-RPC over stdin/stdout.
// ABOUTME: stdout carries protocol frames only; logging goes to stderr.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use super::Router;
use crate::error::RpcError;

/// Serve requests from stdin until EOF, one JSON document per line in each
/// direction.
pub async fn serve(router: Router) -> Result<(), RpcError> {
    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(response) = router.handle_line(&line).await {
            stdout.write_all(response.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}
