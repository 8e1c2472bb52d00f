//! In-process stub of the conversion server for tests.

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::Response,
    routing::{get, post},
    Router,
};
use url::Url;

/// What the stub saw in the last `/convert` request.
#[derive(Debug, Clone, Default)]
pub struct Received {
    pub tool: Option<String>,
    /// `(filename, byte length)` per `files` part, in order.
    pub files: Vec<(String, usize)>,
    pub requests: usize,
}

/// Canned `/convert` answer.
#[derive(Debug, Clone)]
pub struct StubReply {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl StubReply {
    pub fn json(body: &str) -> Self {
        Self { status: 200, content_type: "application/json", body: body.to_string() }
    }

    pub fn html(status: u16, body: &str) -> Self {
        Self { status, content_type: "text/html", body: body.to_string() }
    }
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    received: Arc<Mutex<Received>>,
    downloads: Arc<Vec<(String, Vec<u8>)>>,
}

pub struct Stub {
    pub base: Url,
    received: Arc<Mutex<Received>>,
}

impl Stub {
    pub fn received(&self) -> Received {
        self.received.lock().unwrap().clone()
    }
}

pub async fn spawn_stub(reply: StubReply) -> Stub {
    spawn_stub_with_downloads(reply, Vec::new()).await
}

/// Start the stub on an ephemeral port. `downloads` are served under
/// `/download/<name>`.
pub async fn spawn_stub_with_downloads(reply: StubReply, downloads: Vec<(String, Vec<u8>)>) -> Stub {
    let received = Arc::new(Mutex::new(Received::default()));
    let state = StubState {
        reply,
        received: Arc::clone(&received),
        downloads: Arc::new(downloads),
    };

    let app = Router::new()
        .route("/convert", post(convert))
        .route("/download/{name}", get(download))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Stub {
        base: Url::parse(&format!("http://{}/", addr)).unwrap(),
        received,
    }
}

async fn convert(State(state): State<StubState>, mut multipart: Multipart) -> Response {
    let mut tool = None;
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "files" => {
                let name = field.file_name().unwrap_or("").to_string();
                let bytes = field.bytes().await.unwrap();
                files.push((name, bytes.len()));
            }
            "tool" => tool = Some(field.text().await.unwrap()),
            _ => {}
        }
    }

    {
        let mut received = state.received.lock().unwrap();
        received.tool = tool;
        received.files = files;
        received.requests += 1;
    }

    Response::builder()
        .status(StatusCode::from_u16(state.reply.status).unwrap())
        .header(header::CONTENT_TYPE, state.reply.content_type)
        .body(Body::from(state.reply.body.clone()))
        .unwrap()
}

async fn download(State(state): State<StubState>, Path(name): Path<String>) -> Response {
    match state.downloads.iter().find(|(n, _)| *n == name) {
        Some((_, bytes)) => Response::new(Body::from(bytes.clone())),
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("File not found"))
            .unwrap(),
    }
}
