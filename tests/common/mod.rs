#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use tempfile::TempDir;

/// Nothing listens on the discard port, so posts fail fast with a refused connection.
pub const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/exec";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub items: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let items = write_fixture_items(&root);
        fs::write(
            root.join("survey.toml"),
            format!(
                "endpoint = \"{}\"\nsurvey_year = 2026\ninstrument_version = \"2026.1\"\n",
                DEAD_ENDPOINT
            ),
        )
        .expect("write survey.toml");

        Self {
            _tmp: tmp,
            root,
            items,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("tips");
        cmd.current_dir(&self.root)
            .env_remove("RUST_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy");
        cmd
    }

    pub fn write(&self, name: &str, body: &str) -> PathBuf {
        let p = self.root.join(name);
        fs::write(&p, body).expect("write fixture file");
        p
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }
}

fn write_fixture_items(base: &Path) -> PathBuf {
    let items = serde_json::json!([
        {"name": "Replication Crisis", "description": "Many findings fail to replicate.", "table": 1},
        {"name": "Theory & Method", "description": "Methods outpace theory.", "table": 1},
        {"name": "Publication Bias", "description": "Null results go unpublished.", "table": 2},
        {"name": "Custom", "description": "Carries its own slug.", "table": 2, "slug": "custom_slug"},
        {"name": "Stray", "description": "Belongs to no table.", "table": 3}
    ]);
    let path = base.join("items.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&items).expect("serialize items"),
    )
    .expect("write items.json");
    path
}

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse().ok())
        .unwrap_or(0)
}

fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = header_end(&buf) {
            let head = String::from_utf8_lossy(&buf[..end]).to_string();
            if buf.len() >= end + 4 + content_length(&head) {
                break;
            }
        }
    }
    buf
}

/// Accepts a single HTTP request on loopback and hands back its raw text.
pub fn capture_one_request() -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let buf = read_request(&mut stream);
        let _ = stream
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let _ = tx.send(String::from_utf8_lossy(&buf).to_string());
    });
    (format!("http://{}/exec", addr), rx)
}

/// Answers a single request on loopback with `status` and a JSON `body`.
/// Returns the URL of `/items.json` on that server.
pub fn serve_one_response(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        read_request(&mut stream);
        let _ = stream.write_all(response.as_bytes());
    });
    format!("http://{}/items.json", addr)
}

/// A listener that never accepts: connections land in the backlog and hang.
pub fn silent_listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    (listener, format!("http://{}/items.json", addr))
}

pub fn request_body(raw: &str) -> &str {
    raw.split_once("\r\n\r\n").map(|(_, b)| b).unwrap_or("")
}
