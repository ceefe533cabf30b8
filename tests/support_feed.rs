use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

pub const HISTORY_BODY: &str = r#"{
    "series": [
        {"timestamp": 1700000000, "indices": {"GAQI": 10.0, "GEI": 10.0, "TCI": 50.0, "SRI": 50.0}},
        {"timestamp": 1700000060, "indices": {"GAQI": 90.0, "GEI": 90.0, "TCI": 50.0, "SRI": 50.0}},
        {"timestamp": 1700000120}
    ]
}"#;

pub const LATEST_BODY: &str = r#"{
    "timestamp": 1700000300,
    "indices": {"GAQI": 22.0, "GEI": 18.0, "TCI": 47.5, "SRI": 33.0}
}"#;

pub const CORRELATION_BODY: &str = r#"{
    "labels": ["co2_ppm", "temperature_c"],
    "matrix": [[1.0, 0.4], [0.4, 1.0]]
}"#;

/// Spawn a canned monitoring-feed server for tests.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_feed_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    thread::spawn(move || handle_client(stream));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

/// Spawn the canned server, or skip the test in sandboxes without network.
///
/// # Errors
///
/// Returns an error for unexpected listener failures.
pub fn spawn_feed_server_or_skip() -> Result<Option<(String, ServerHandle)>, String> {
    match spawn_feed_server() {
        Ok(server) => Ok(Some(server)),
        Err(err) if err.contains("bind test server failed") => {
            eprintln!("Skipping e2e test: {}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn handle_client(mut stream: TcpStream) {
    let mut buffer = [0u8; 2048];
    let read = match stream.read(&mut buffer) {
        Ok(read) => read,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(buffer.get(..read).unwrap_or(&[]));
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let body = if path.starts_with("/history") {
        HISTORY_BODY
    } else if path.starts_with("/latest") {
        LATEST_BODY
    } else if path.starts_with("/correlation") {
        CORRELATION_BODY
    } else {
        "{}"
    };

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Run the `airscope` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_airscope<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = airscope_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .map_err(|err| format!("run airscope failed: {}", err))
}

fn airscope_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_airscope").map_or_else(
        || Err("CARGO_BIN_EXE_airscope missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

/// Reserve a local port that nothing is listening on.
///
/// # Errors
///
/// Returns an error if no port can be reserved.
pub fn unused_local_endpoint() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}", addr))
}
