//! A scripted in-memory [`HttpTransport`] for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use crate::transport::HttpTransport;
use crate::transport::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

type Reply = Result<Value, TransportError>;

/// Replies are queued per method and path and consumed in order. A call
/// with nothing queued fails with [`TransportError::Network`].
#[derive(Debug, Default)]
pub struct FakeTransport {
    replies: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    calls: RefCell<Vec<(Method, String)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    /// Every request issued so far, in order.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(m, p)| *m == method && p == path)
            .count()
    }

    fn take(&self, method: Method, path: &str) -> Reply {
        self.calls.borrow_mut().push((method, path.to_string()));
        self.replies
            .borrow_mut()
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(TransportError::Network(format!("no reply for {path}"))))
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.take(Method::Get, path)
    }

    async fn post(&self, path: &str, _body: Option<Value>) -> Result<Value, TransportError> {
        self.take(Method::Post, path)
    }
}
