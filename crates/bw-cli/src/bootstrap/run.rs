//! Interactive session loop.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::bootstrap::runtime::AppRuntime;
use crate::commands::{self, render, CommandFlow, ReplLine};

const PROMPT: &str = "basewill> ";

/// Read commands line by line until `quit` or end of input.
///
/// Command failures are printed and the loop continues; only I/O errors on
/// the terminal itself end the session with an error.
pub async fn run_session<R, W>(runtime: &AppRuntime, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    info!("session started");
    writeln!(out, "{}", render::welcome())?;
    writeln!(out, "{}", render::view(&runtime.orchestrator().snapshot().await))?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("input closed");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match ReplLine::parse_line(&line) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                writeln!(out, "{}", err.render().to_string().trim_end())?;
                continue;
            }
        };

        let reply = commands::execute(runtime, command).await;
        match &reply.message {
            Ok(message) if !message.is_empty() => writeln!(out, "{message}")?,
            Ok(_) => {}
            Err(message) => writeln!(out, "error: {message}")?,
        }
        if reply.flow == CommandFlow::Quit {
            break;
        }
        writeln!(out, "{}", render::view(&runtime.orchestrator().snapshot().await))?;
    }

    runtime.orchestrator().end_session().await;
    info!("session ended");
    Ok(())
}
