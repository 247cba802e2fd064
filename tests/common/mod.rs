#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{Method, Request, Response, StatusCode},
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use intelli::{router, AppState};
use parking_lot::Mutex;

pub const BOUNDARY: &str = "intelli-test-boundary";

#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// Requests seen by the mock grading endpoint, one entry per POST.
#[derive(Clone, Default)]
pub struct Received(Arc<Mutex<Vec<Vec<ReceivedPart>>>>);

impl Received {
    pub fn requests(&self) -> Vec<Vec<ReceivedPart>> {
        self.0.lock().clone()
    }
}

#[derive(Clone)]
struct GraderState {
    received: Received,
    status: StatusCode,
    body: serde_json::Value,
}

async fn grade(
    State(state): State<GraderState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.unwrap();
        parts.push(ReceivedPart {
            name,
            file_name,
            bytes,
        });
    }
    state.received.0.lock().push(parts);
    (state.status, Json(state.body))
}

/// Starts a grading endpoint on an ephemeral port and returns its URL.
pub async fn spawn_grader(status: StatusCode, body: serde_json::Value) -> (String, Received) {
    let received = Received::default();
    let app = Router::new().route("/grade", post(grade)).with_state(GraderState {
        received: received.clone(),
        status,
        body,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/grade"), received)
}

pub fn app(grading_url: String) -> Router {
    app_with_limit(grading_url, intelli::rubric::MAX_FORMS)
}

pub fn app_with_limit(grading_url: String, max_forms: usize) -> Router {
    router(AppState::new(grading_url, max_forms), 25 * 1024 * 1024)
}

/// A request as htmx would send it.
pub fn htmx(method: Method, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("HX-Request", "true")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(resp: Response<Body>) -> Bytes {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
}

pub async fn body_text(resp: Response<Body>) -> String {
    String::from_utf8(body_bytes(resp).await.to_vec()).unwrap()
}

pub fn form_id(html: &str) -> String {
    let marker = "data-form-id=\"";
    let start = html.find(marker).expect("page should carry a form id") + marker.len();
    html[start..start + 26].to_string()
}

pub fn form_urlencoded(value: &str) -> String {
    let mut out = String::from("value=");
    for b in value.bytes() {
        if b.is_ascii_alphanumeric() {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

pub fn multipart_file(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Paragraph texts of a docx, in order.
pub fn paragraphs(bytes: &[u8]) -> Vec<String> {
    use docx_rs::{DocumentChild, ParagraphChild, RunChild};

    let docx = docx_rs::read_docx(bytes).unwrap();
    let mut out = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            let mut text = String::new();
            for pc in &p.children {
                if let ParagraphChild::Run(run) = pc {
                    for rc in &run.children {
                        if let RunChild::Text(t) = rc {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            out.push(text);
        }
    }
    out
}
