//! Serve command - long-running editor integration
//!
//! Reads one JSON request per line on stdin and answers with one JSON
//! response per line on stdout. A single runner serves every request, so
//! the membership cache carries over between editor commands.
//!
//! ```text
//! {"command":"run","file":"/p/src/main.ts"}
//! {"status":"launched","script":"/p/out/main.js"}
//! ```

use crate::config::Config;
use crate::error::{HostrunError, HostrunResult};
use crate::runner::{Resolution, Runner};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

/// A request from the editor
#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    /// Compile if needed and launch
    Run { file: PathBuf },
    /// Resolve without launching
    Check { file: PathBuf },
    /// Drop cached project listings
    Reset,
    /// Liveness and cache statistics
    Ping,
}

/// The answer to one request
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Launched {
        script: PathBuf,
    },
    NothingToRun,
    Resolved {
        resolution: Resolution,
    },
    Reset,
    Pong {
        cached_files: usize,
        tracked_configs: usize,
    },
    Error {
        message: String,
        hint: Option<&'static str>,
        /// Whether the same request may succeed once the environment is fixed
        retryable: bool,
    },
}

impl From<HostrunError> for Response {
    fn from(err: HostrunError) -> Self {
        Response::Error {
            hint: err.hint(),
            retryable: err.is_retryable(),
            message: err.to_string(),
        }
    }
}

/// Execute the serve command
pub async fn execute(config: &Config) -> HostrunResult<()> {
    let mut runner = Runner::from_config(config);
    info!("Serving requests for {}", runner.host_name());

    let reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();
    serve(&mut runner, reader, &mut writer).await
}

/// Answer every request line from `reader` until end of input
pub async fn serve<R, W>(runner: &mut Runner, reader: R, writer: &mut W) -> HostrunResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| HostrunError::io("reading request", e))?
    {
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(runner, &line).await;
        let mut out = serde_json::to_string(&response)?;
        out.push('\n');

        writer
            .write_all(out.as_bytes())
            .await
            .map_err(|e| HostrunError::io("writing response", e))?;
        writer
            .flush()
            .await
            .map_err(|e| HostrunError::io("flushing response", e))?;
    }

    debug!("Input closed, stopping");
    Ok(())
}

async fn handle_line(runner: &mut Runner, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            return Response::Error {
                message: format!("invalid request: {}", e),
                hint: None,
                retryable: false,
            }
        }
    };
    debug!("Request: {:?}", request);

    match request {
        Request::Run { file } => match runner.run(&file).await {
            Ok(Some(script)) => Response::Launched { script },
            Ok(None) => Response::NothingToRun,
            Err(e) => e.into(),
        },
        Request::Check { file } => match runner.check(&file).await {
            Ok(resolution) => Response::Resolved { resolution },
            Err(e) => e.into(),
        },
        Request::Reset => {
            runner.reset();
            Response::Reset
        }
        Request::Ping => Response::Pong {
            cached_files: runner.membership().len(),
            tracked_configs: runner.membership().tracked_configs(),
        },
    }
}
