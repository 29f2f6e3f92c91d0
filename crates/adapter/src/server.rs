//! TCP text transport for player commands
//!
//! Stands in for the wireless write characteristic: every line a client sends is
//! one command token (`left`, `right`, `rotate`, `restart`, matched by substring).
//! Unrecognized lines are ignored. Nothing is sent back to clients.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use crate::dispatcher::GameHandle;
use crate::types::Command;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Log ignored lines
    pub trace: bool,
    /// Write no log lines; set when stdout belongs to a terminal preview
    pub quiet: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            trace: false,
            quiet: false,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("LED_TETRIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("LED_TETRIS_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(7878);
        let trace = env::var("LED_TETRIS_TRACE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            host,
            port,
            trace,
            quiet: false,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    /// Check if the transport is disabled via environment
    pub fn is_disabled() -> bool {
        std::env::var("LED_TETRIS_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }
}

/// Accept clients forever, forwarding their commands to the game task.
pub async fn run_server(
    config: ServerConfig,
    game: GameHandle,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(&addr).await?;
    let bound = listener.local_addr()?;
    let quiet = config.quiet;
    if !quiet {
        println!("[Transport] Listening on {}", bound);
    }
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let mut client_id_counter = 0usize;

    loop {
        let (socket, addr) = listener.accept().await?;
        client_id_counter += 1;
        let client_id = client_id_counter;

        if !quiet {
            println!("[Transport] Client {} connected from {}", client_id, addr);
        }

        let game = game.clone();
        let trace = config.trace && !quiet;
        tokio::spawn(async move {
            let result = handle_client(socket, client_id, game, trace).await;
            if quiet {
                return;
            }
            if let Err(e) = result {
                eprintln!("[Transport] Client {} error: {}", client_id, e);
            }
            println!("[Transport] Client {} disconnected", client_id);
        });
    }
}

/// Read lines until the client goes away.
async fn handle_client(
    socket: TcpStream,
    client_id: usize,
    game: GameHandle,
    trace: bool,
) -> Result<()> {
    let mut reader = BufReader::new(socket);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            break;
        }

        let token = line.trim_end_matches(|c| c == '\n' || c == '\r');
        if token.is_empty() {
            continue;
        }

        match Command::parse(token) {
            Some(command) => game.send(command).await?,
            None => {
                if trace {
                    println!("[Transport] Client {} ignored {:?}", client_id, token);
                }
            }
        }
    }

    Ok(())
}
