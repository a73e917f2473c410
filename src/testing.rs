//! Test doubles for the transport and view seams.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::api::{ApiError, ApiRequest, ApiResponse, Transport};
use crate::render::{DomEdit, ListSnapshot};
use crate::sync::ViewSink;

#[derive(Default)]
struct Recorded {
    requests: Vec<ApiRequest>,
    responses: VecDeque<Result<ApiResponse, ApiError>>,
}

/// Records every request and replies from a scripted queue.
///
/// Once the queue is drained it answers with an empty item list.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    inner: Rc<RefCell<Recorded>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: &str) {
        self.inner.borrow_mut().responses.push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_network_error(&self, message: &str) {
        self.inner
            .borrow_mut()
            .responses
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().requests.clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request);
        inner.responses.pop_front().unwrap_or_else(|| {
            Ok(ApiResponse {
                status: 200,
                body: r#"{"items":[]}"#.to_string(),
            })
        })
    }
}

#[derive(Default)]
struct SinkState {
    snapshot: ListSnapshot,
    renders: u32,
    error: String,
    title_clears: u32,
}

/// Applies edits to a `ListSnapshot` and remembers status text
#[derive(Clone, Default)]
pub struct RecordingSink {
    state: Rc<RefCell<SinkState>>,
}

impl RecordingSink {
    pub fn snapshot(&self) -> ListSnapshot {
        self.state.borrow().snapshot.clone()
    }

    pub fn render_count(&self) -> u32 {
        self.state.borrow().renders
    }

    pub fn error(&self) -> String {
        self.state.borrow().error.clone()
    }

    pub fn title_clears(&self) -> u32 {
        self.state.borrow().title_clears
    }
}

impl ViewSink for RecordingSink {
    fn render(&self, edits: Vec<DomEdit>) {
        let mut state = self.state.borrow_mut();
        state.snapshot.apply(&edits);
        state.renders += 1;
    }

    fn show_error(&self, message: &str) {
        self.state.borrow_mut().error = message.to_string();
    }

    fn clear_error(&self) {
        self.state.borrow_mut().error.clear();
    }

    fn clear_title(&self) {
        self.state.borrow_mut().title_clears += 1;
    }
}
