//! mpv renderer process
//!
//! Spawns mpv idle with a JSON IPC socket, forwards decoded events into the
//! UI loop's channel and writes encoded requests to the socket.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::ipc::{decode_event, observe_pause, Encoder, RendererEvent, RendererRequest};
use crate::config::Config;

const CONNECT_ATTEMPTS: u32 = 50;
const CONNECT_INTERVAL: Duration = Duration::from_millis(100);

/// Errors from the renderer process or its socket
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Player '{0}' not found. Install mpv first.")]
    NotFound(String),
    #[error("Failed to start player: {0}")]
    SpawnFailed(#[source] io::Error),
    #[error("Player exited before it was ready ({0})")]
    ExitedEarly(String),
    #[error("Timed out connecting to player socket {}", .0.display())]
    ConnectTimeout(PathBuf),
    #[error("Player IPC error: {0}")]
    Io(#[from] io::Error),
    #[error("Player control is not supported on this platform")]
    Unsupported,
}

/// How to launch mpv
#[derive(Debug, Clone, PartialEq)]
pub struct MpvOptions {
    pub program: String,
    pub user_agent: String,
    pub extra_args: Vec<String>,
}

impl From<&Config> for MpvOptions {
    fn from(config: &Config) -> Self {
        Self {
            program: config.player.clone(),
            user_agent: config.user_agent.clone(),
            extra_args: config.extra_player_args.clone(),
        }
    }
}

impl MpvOptions {
    /// Full argument list for an idle mpv listening on `socket`
    pub fn args(&self, socket: &Path) -> Vec<String> {
        let mut args = vec![
            "--idle=yes".to_string(),
            "--force-window=immediate".to_string(),
            "--keep-open=no".to_string(),
            "--no-terminal".to_string(),
            format!("--input-ipc-server={}", socket.display()),
            format!("--user-agent={}", self.user_agent),
        ];
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

/// Fresh socket path under the temp dir
pub fn socket_path() -> PathBuf {
    std::env::temp_dir().join(format!("cinemabox-mpv-{}.sock", uuid::Uuid::new_v4()))
}

type Writer = Box<dyn AsyncWrite + Unpin + Send>;

/// A running mpv controlled over IPC
pub struct MpvRenderer {
    child: Child,
    writer: Writer,
    encoder: Encoder,
    socket: PathBuf,
    reader: JoinHandle<()>,
}

impl MpvRenderer {
    /// Start mpv and connect to its socket. Events go to `events` until the
    /// process exits.
    pub async fn spawn(
        options: &MpvOptions,
        events: UnboundedSender<RendererEvent>,
    ) -> Result<Self, RendererError> {
        let socket = socket_path();
        let mut cmd = Command::new(&options.program);
        cmd.args(options.args(&socket))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        detach_from_terminal(&mut cmd);

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                RendererError::NotFound(options.program.clone())
            } else {
                RendererError::SpawnFailed(e)
            }
        })?;
        info!(program = %options.program, socket = %socket.display(), "spawned renderer");

        let (read_half, write_half) = connect(&mut child, &socket).await?;
        let reader = tokio::spawn(forward_events(read_half, events));

        let mut renderer = Self {
            child,
            writer: write_half,
            encoder: Encoder::new(),
            socket,
            reader,
        };
        let observe = renderer.encoder.encode_raw(observe_pause());
        renderer.write_line(&observe).await?;
        Ok(renderer)
    }

    pub async fn send(&mut self, request: &RendererRequest) -> Result<(), RendererError> {
        for line in self.encoder.encode(request) {
            self.write_line(&line).await?;
        }
        Ok(())
    }

    async fn write_line(&mut self, line: &str) -> Result<(), RendererError> {
        debug!(line = line.trim_end(), "ipc send");
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Ask mpv to quit, then make sure the process and reader are gone
    pub async fn shutdown(mut self) {
        if let Err(e) = self.send(&RendererRequest::Stop).await {
            debug!(error = %e, "quit not delivered");
        }
        match tokio::time::timeout(Duration::from_secs(2), self.child.wait()).await {
            Ok(Ok(status)) => debug!(%status, "renderer exited"),
            Ok(Err(e)) => warn!(error = %e, "waiting for renderer failed"),
            Err(_) => {
                warn!("renderer did not quit, killing it");
                let _ = self.child.kill().await;
            }
        }
        self.reader.abort();
        let _ = std::fs::remove_file(&self.socket);
    }
}

async fn forward_events<R>(read_half: R, events: UnboundedSender<RendererEvent>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(read_half).lines();
    let mut exited = false;
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                debug!(line = %line, "ipc recv");
                if let Some(event) = decode_event(&line) {
                    exited |= event == RendererEvent::Exited;
                    if events.send(event).is_err() {
                        return;
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "renderer socket read failed");
                break;
            }
        }
    }
    // socket closed without a shutdown event (window closed, crash)
    if !exited {
        let _ = events.send(RendererEvent::Exited);
    }
}

/// Own process group, so Ctrl-C in the terminal does not reach mpv
#[cfg(unix)]
fn detach_from_terminal(cmd: &mut Command) {
    cmd.process_group(0);
}

#[cfg(not(unix))]
fn detach_from_terminal(_cmd: &mut Command) {}

#[cfg(unix)]
async fn connect(
    child: &mut Child,
    socket: &Path,
) -> Result<(Box<dyn AsyncRead + Unpin + Send>, Writer), RendererError> {
    for _ in 0..CONNECT_ATTEMPTS {
        if let Some(status) = child.try_wait()? {
            return Err(RendererError::ExitedEarly(status.to_string()));
        }
        match tokio::net::UnixStream::connect(socket).await {
            Ok(stream) => {
                let (r, w) = stream.into_split();
                return Ok((Box::new(r), Box::new(w)));
            }
            Err(_) => tokio::time::sleep(CONNECT_INTERVAL).await,
        }
    }
    let _ = child.kill().await;
    Err(RendererError::ConnectTimeout(socket.to_path_buf()))
}

#[cfg(not(unix))]
async fn connect(
    child: &mut Child,
    _socket: &Path,
) -> Result<(Box<dyn AsyncRead + Unpin + Send>, Writer), RendererError> {
    let _ = child.kill().await;
    Err(RendererError::Unsupported)
}
