#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use wallgen::{
    error::Result,
    luma::GenerationApi,
    models::{GenerationAssets, GenerationHandle, GenerationRequest, GenerationState},
    wallpaper::{CommandOutput, CommandRunner, ShellCommand},
    PollPolicy,
};

/// Poll budget with the production attempt cap and a short interval.
pub fn fast_policy() -> PollPolicy {
    PollPolicy {
        interval: Duration::from_millis(5),
        ..PollPolicy::default()
    }
}

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// Advertised `Content-Length` when it differs from the body.
    pub declared_length: Option<usize>,
}

impl StubResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
            declared_length: None,
        }
    }

    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: "image/png",
            body: bytes,
            declared_length: None,
        }
    }

    /// A 200 PNG response that promises `declared_length` bytes, sends
    /// `bytes` and then closes the connection.
    pub fn truncated_png(bytes: Vec<u8>, declared_length: usize) -> Self {
        Self {
            declared_length: Some(declared_length),
            ..Self::png(bytes)
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: b"nope".to_vec(),
            declared_length: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// One-response-per-connection HTTP/1.1 server on a random local port.
pub struct HttpStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl HttpStub {
    pub async fn spawn(responses: Vec<StubResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let queue = Arc::new(Mutex::new(VecDeque::from(responses)));

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let recorded = recorded.clone();
                let queue = queue.clone();
                tokio::spawn(async move {
                    handle_connection(stream, recorded, queue).await;
                });
            }
        });

        Self { base_url, requests }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    queue: Arc<Mutex<VecDeque<StubResponse>>>,
) {
    let Some(request) = read_request(&mut stream).await else {
        return;
    };
    recorded.lock().unwrap().push(request);

    let response = queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| StubResponse::status(404));
    let reason = if response.status == 200 { "OK" } else { "Stub" };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason,
        response.content_type,
        response.declared_length.unwrap_or(response.body.len())
    );

    let _ = stream.write_all(head.as_bytes()).await;
    let _ = stream.write_all(&response.body).await;
    let _ = stream.shutdown().await;
}

async fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some(RecordedRequest {
        method,
        path,
        headers,
        body,
    })
}

/// In-memory generation API that plays back a list of poll states. The
/// last state repeats once the list runs out.
pub struct ScriptedApi {
    states: Vec<GenerationState>,
    failure_reason: Option<String>,
    asset_url: Option<String>,
    creates: AtomicU32,
    polls: AtomicU32,
}

impl ScriptedApi {
    pub fn new(states: Vec<GenerationState>) -> Self {
        Self {
            states,
            failure_reason: None,
            asset_url: None,
            creates: AtomicU32::new(0),
            polls: AtomicU32::new(0),
        }
    }

    pub fn completing_with(asset_url: impl Into<String>) -> Self {
        let mut api = Self::new(vec![GenerationState::Completed]);
        api.asset_url = Some(asset_url.into());
        api
    }

    pub fn failing_with(reason: &str) -> Self {
        let mut api = Self::new(vec![GenerationState::Failed]);
        api.failure_reason = Some(reason.to_string());
        api
    }

    /// `pending` polls reporting `dreaming`, then `last` from then on.
    pub fn pending_then(pending: u32, last: GenerationState) -> Self {
        let mut states = vec![GenerationState::Pending("dreaming".into()); pending as usize];
        states.push(last);
        Self::new(states)
    }

    pub fn with_failure_reason(mut self, reason: &str) -> Self {
        self.failure_reason = Some(reason.to_string());
        self
    }

    pub fn with_asset_url(mut self, url: impl Into<String>) -> Self {
        self.asset_url = Some(url.into());
        self
    }

    pub fn creates(&self) -> u32 {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn polls(&self) -> u32 {
        self.polls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationApi for ScriptedApi {
    async fn create(
        &self,
        _api_key: &str,
        _request: &GenerationRequest,
    ) -> Result<GenerationHandle> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(GenerationHandle {
            id: "gen-1".to_string(),
            state: GenerationState::Pending("queued".into()),
            failure_reason: None,
            assets: None,
        })
    }

    async fn get(&self, _api_key: &str, id: &str) -> Result<GenerationHandle> {
        let index = self.polls.fetch_add(1, Ordering::SeqCst) as usize;
        let state = self
            .states
            .get(index)
            .or_else(|| self.states.last())
            .cloned()
            .unwrap_or(GenerationState::Pending("queued".into()));

        let (failure_reason, assets) = match state {
            GenerationState::Failed => (self.failure_reason.clone(), None),
            GenerationState::Completed => (
                None,
                Some(GenerationAssets {
                    image: self.asset_url.clone(),
                }),
            ),
            GenerationState::Pending(_) => (None, None),
        };

        Ok(GenerationHandle {
            id: id.to_string(),
            state,
            failure_reason,
            assets,
        })
    }
}

#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<ShellCommand>>,
    failing_program: Option<&'static str>,
}

impl RecordingRunner {
    pub fn failing(program: &'static str) -> Self {
        Self {
            failing_program: Some(program),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<ShellCommand> {
        self.calls.lock().unwrap().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.program).collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &ShellCommand) -> Result<CommandOutput> {
        self.calls.lock().unwrap().push(command.clone());
        if self.failing_program == Some(command.program.as_str()) {
            return Ok(CommandOutput {
                code: Some(1),
                stdout: String::new(),
                stderr: format!("{} refused", command.program),
            });
        }
        Ok(CommandOutput::success())
    }
}

pub fn png_bytes(len: usize) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend((0..).map(|i: u32| (i % 251) as u8).take(len.saturating_sub(8)));
    bytes.truncate(len);
    bytes
}

pub fn read_file(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap()
}
