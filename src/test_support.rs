//! Scripted transport for controller tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};

use futures::channel::oneshot;

use crate::error::CartError;
use crate::net::CartTransport;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub fields: Vec<(&'static str, String)>,
}

type Reply = Result<String, CartError>;

/// Replays canned bodies per path, in order, and records every request.
/// A path with nothing queued answers with a transport error.
///
/// Deferred replies are consumed before canned ones: the request stays
/// pending until the test sends on the matching `oneshot::Sender`. A stalled
/// path never answers.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    responses: RefCell<HashMap<String, VecDeque<Reply>>>,
    deferred: RefCell<HashMap<String, VecDeque<oneshot::Receiver<Reply>>>>,
    stalled: RefCell<HashSet<String>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn respond(self, path: &str, body: &str) -> Self {
        self.push(path, Ok(body.to_owned()));
        self
    }

    #[must_use]
    pub fn fail(self, path: &str, message: &str) -> Self {
        self.push(path, Err(CartError::transport(path, message)));
        self
    }

    #[must_use]
    pub fn stall(self, path: &str) -> Self {
        self.stalled.borrow_mut().insert(path.to_owned());
        self
    }

    /// Queue a reply for the next request to `path` that arrives only when
    /// the returned sender fires.
    pub fn defer(&self, path: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.deferred.borrow_mut().entry(path.to_owned()).or_default().push_back(rx);
        tx
    }

    pub fn push(&self, path: &str, result: Reply) {
        self.responses
            .borrow_mut()
            .entry(path.to_owned())
            .or_default()
            .push_back(result);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    async fn answer(&self, method: &'static str, path: &str, fields: &[(&'static str, String)]) -> Reply {
        self.requests.borrow_mut().push(RecordedRequest {
            method,
            path: path.to_owned(),
            fields: fields.to_vec(),
        });
        if self.stalled.borrow().contains(path) {
            std::future::pending::<()>().await;
        }
        let deferred = self.deferred.borrow_mut().get_mut(path).and_then(VecDeque::pop_front);
        if let Some(rx) = deferred {
            return rx
                .await
                .unwrap_or_else(|_| Err(CartError::transport(path, "deferred reply dropped")));
        }
        self.responses
            .borrow_mut()
            .get_mut(path)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(CartError::transport(path, "no scripted response")))
    }
}

impl CartTransport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<String, CartError> {
        self.answer("GET", path, &[]).await
    }

    async fn post_form(&self, path: &str, fields: &[(&'static str, String)]) -> Result<String, CartError> {
        self.answer("POST", path, fields).await
    }
}
