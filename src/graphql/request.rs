use serde::Serialize;
use serde_json::{Map, Value};

/// A GraphQL request body as sent over HTTP POST.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    /// Query document text.
    pub query: String,
    /// Variables object; serialized as `{}` when empty.
    pub variables: Map<String, Value>,
    /// Operation name selected from the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphqlRequest {
    /// Build a request without variables.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
            operation_name: None,
        }
    }

    /// Name the operation to execute.
    #[must_use]
    pub fn operation(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Add one variable.
    #[must_use]
    pub fn variable(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_string(), value.into());
        self
    }

    /// What: Identity of this request for response caching.
    ///
    /// Output:
    /// - Query text plus the variables serialized as JSON.
    ///
    /// Details:
    /// - `serde_json::Map` is ordered by key, so the same variables always
    ///   produce the same key regardless of insertion order.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let vars = Value::Object(self.variables.clone()).to_string();
        format!("{}\u{0}{vars}", self.query)
    }
}
