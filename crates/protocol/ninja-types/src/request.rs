//! Request model.
//!
//! A `Request` carries a method and three sections: a JSON body and two
//! string maps for query and route parameters. Validation only reads it.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::RequestSection;

/// An incoming API request, reduced to what validation looks at.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    /// HTTP method, uppercased
    pub method: String,
    /// JSON body (`Null` when the request has none)
    pub body: Value,
    /// Query string parameters
    pub query: BTreeMap<String, String>,
    /// Route parameters
    pub params: BTreeMap<String, String>,
}

impl Request {
    /// Create a request with a method and a body.
    pub fn new(method: impl Into<String>, body: Value) -> Self {
        Self {
            method: method.into().to_ascii_uppercase(),
            body,
            query: BTreeMap::new(),
            params: BTreeMap::new(),
        }
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

    /// Look up a field of a section.
    ///
    /// Body fields are read from the top-level JSON object; a body that is
    /// not an object has no fields. Query and route parameters are
    /// returned as JSON strings.
    pub fn field(&self, section: RequestSection, name: &str) -> Option<Cow<'_, Value>> {
        match section {
            RequestSection::Body => self.body.as_object()?.get(name).map(Cow::Borrowed),
            RequestSection::Query => {
                self.query.get(name).map(|v| Cow::Owned(Value::String(v.clone())))
            }
            RequestSection::Params => {
                self.params.get(name).map(|v| Cow::Owned(Value::String(v.clone())))
            }
        }
    }
}
