//! Stdio transport for MCP protocol.
//!
//! Newline-delimited JSON-RPC 2.0 over stdin/stdout. Logs go to stderr so
//! they never interleave with protocol output.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::protocol::McpHandler;

/// Serve MCP over the process's stdin and stdout until stdin closes.
///
/// # Errors
///
/// Returns error on I/O failure.
pub async fn run_stdio(handler: &McpHandler) -> anyhow::Result<()> {
    tracing::info!("MCP stdio server ready, waiting for requests...");

    serve_lines(handler, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    tracing::info!("Stdin closed, shutting down");
    Ok(())
}

/// Answer each line of `reader` on `writer`; blank lines are skipped.
///
/// # Errors
///
/// Returns error on I/O or serialization failure.
pub async fn serve_lines<R, W>(
    handler: &McpHandler,
    mut reader: R,
    mut writer: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some(response) = handler.handle_message(trimmed.as_bytes()).await else {
            continue;
        };

        let mut payload = serde_json::to_vec(&response)?;
        payload.push(b'\n');
        writer.write_all(&payload).await?;
        writer.flush().await?;
    }

    Ok(())
}
