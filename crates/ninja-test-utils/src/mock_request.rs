//! Mock HTTP request builder.
//!
//! Stands in for the HTTP trigger: tests build a request from a method and
//! a body, optionally add query and route parameters, and hand the result
//! to a validator.

use std::collections::BTreeMap;

use ninja_types::Request;
use serde_json::Value;

/// Builder for test requests.
#[derive(Debug, Clone)]
pub struct MockRequest {
    method: String,
    body: Value,
    query: BTreeMap<String, String>,
    params: BTreeMap<String, String>,
}

impl MockRequest {
    /// Create a request with the given method and body.
    pub fn new(method: impl Into<String>, body: Value) -> Self {
        Self {
            method: method.into(),
            body,
            query: BTreeMap::new(),
            params: BTreeMap::new(),
        }
    }

    /// Create a `GET` request.
    pub fn get(body: Value) -> Self {
        Self::new("GET", body)
    }

    /// Create a `POST` request.
    pub fn post(body: Value) -> Self {
        Self::new("POST", body)
    }

    /// Add a query string parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Add a route parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Build the request.
    pub fn build(self) -> Request {
        let mut request = Request::new(self.method, self.body);
        request.query = self.query;
        request.params = self.params;
        request
    }
}

impl From<MockRequest> for Request {
    fn from(mock: MockRequest) -> Self {
        mock.build()
    }
}
