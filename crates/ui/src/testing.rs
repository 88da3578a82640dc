//! Test doubles for the DOM and network seams

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::ToggleTransport;
use crate::error::{Result, UiError};
use crate::theme::Surface;

/// Surface that records every write instead of touching a document
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub body_classes: Vec<String>,
    pub containers: Vec<String>,
    /// (container index, class, style)
    pub children: Vec<(usize, String, String)>,
    pub fail_containers: bool,
}

impl Surface for RecordingSurface {
    type Node = usize;

    fn add_body_class(&mut self, class: &str) -> Result<()> {
        self.body_classes.push(class.to_string());
        Ok(())
    }

    fn prepend_container(&mut self, id: &str) -> Result<usize> {
        if self.fail_containers {
            return Err(UiError::Dom("prepend rejected".into()));
        }
        self.containers.push(id.to_string());
        Ok(self.containers.len() - 1)
    }

    fn append_decoration(&mut self, parent: &usize, class: &str, style: &str) -> Result<()> {
        self.children
            .push((*parent, class.to_string(), style.to_string()));
        Ok(())
    }
}

/// Transport that logs each request and replays queued responses
#[derive(Debug, Default)]
pub struct MockTransport {
    /// (path, body)
    pub requests: RefCell<Vec<(String, String)>>,
    responses: RefCell<VecDeque<Result<Value>>>,
}

impl MockTransport {
    pub fn replying(response: Result<Value>) -> Self {
        let mock = Self::default();
        mock.push(response);
        mock
    }

    pub fn push(&self, response: Result<Value>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl ToggleTransport for MockTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<Value> {
        self.requests.borrow_mut().push((path.to_string(), body));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(UiError::Network("no mock response queued".into())))
    }
}
