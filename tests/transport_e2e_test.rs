use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::oneshot;

use led_tetris::adapter::{run_server, spawn_game, DispatcherConfig, GameHandle, ServerConfig};
use led_tetris::core::{Game, GameSnapshot, NullPainter};
use led_tetris::led::MemoryStrip;
use led_tetris::types::{Command, RoundState};

async fn wait_for(game: &GameHandle, expected: GameSnapshot) {
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if game.snapshot().await.unwrap() == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("commands were not applied");
}

#[tokio::test]
async fn transport_lines_drive_the_game() {
    let dispatcher = spawn_game(
        DispatcherConfig {
            seed: 77,
            gravity: Duration::from_secs(60),
            ..DispatcherConfig::default()
        },
        MemoryStrip::new(),
    );

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        trace: true,
        quiet: false,
    };
    let (ready_tx, ready_rx) = oneshot::channel();
    let game = dispatcher.handle.clone();
    tokio::spawn(async move {
        let _ = run_server(config, game, Some(ready_tx)).await;
    });

    let addr = tokio::time::timeout(Duration::from_secs(2), ready_rx)
        .await
        .expect("server did not signal ready")
        .expect("ready channel dropped");

    let mut stream = TcpStream::connect(addr).await.expect("connect failed");
    stream
        .write_all(b"hello\nmove-left\r\n\nrotate\n")
        .await
        .unwrap();
    stream.flush().await.unwrap();

    let mut replica = Game::new(77, NullPainter);
    replica.start();
    replica.apply(Command::MoveLeft);
    replica.apply(Command::Rotate);
    wait_for(&dispatcher.handle, replica.snapshot()).await;

    // A second client shares the same queue.
    let mut other = TcpStream::connect(addr).await.expect("connect failed");
    other.write_all(b"restart\n").await.unwrap();
    other.flush().await.unwrap();

    let mut replica = Game::new(77, NullPainter);
    replica.start();
    replica.apply(Command::MoveLeft);
    replica.apply(Command::Rotate);
    replica.apply(Command::Restart);
    wait_for(&dispatcher.handle, replica.snapshot()).await;

    let snapshot = dispatcher.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state, RoundState::Running);
    assert_eq!(snapshot.round, 2);
}

#[tokio::test]
async fn invalid_listen_address_is_an_error() {
    let config = ServerConfig {
        host: "not an address".to_string(),
        port: 1,
        ..ServerConfig::default()
    };
    assert!(config.socket_addr().is_err());
}

#[tokio::test]
async fn quiet_transport_still_forwards_commands() {
    let dispatcher = spawn_game(
        DispatcherConfig {
            seed: 3,
            gravity: Duration::from_secs(60),
            quiet: true,
            ..DispatcherConfig::default()
        },
        MemoryStrip::new(),
    );

    let config = ServerConfig {
        port: 0,
        quiet: true,
        ..ServerConfig::default()
    };
    let (ready_tx, ready_rx) = oneshot::channel();
    let game = dispatcher.handle.clone();
    tokio::spawn(async move {
        let _ = run_server(config, game, Some(ready_tx)).await;
    });
    let addr = tokio::time::timeout(Duration::from_secs(2), ready_rx)
        .await
        .expect("server did not signal ready")
        .expect("ready channel dropped");

    let mut stream = TcpStream::connect(addr).await.expect("connect failed");
    stream.write_all(b"right\n").await.unwrap();
    stream.flush().await.unwrap();

    let mut replica = Game::new(3, NullPainter);
    replica.start();
    replica.apply(Command::MoveRight);
    wait_for(&dispatcher.handle, replica.snapshot()).await;
}
