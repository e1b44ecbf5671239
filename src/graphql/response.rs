use serde::Deserialize;
use serde_json::Value;

use super::error::QueryError;
use crate::state::QueryResult;

/// One entry of a GraphQL `errors` array.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphqlError {
    /// Human-readable message.
    pub message: String,
    /// Path to the failing field, when the server reports one.
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

/// Raw GraphQL response envelope.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphqlResponse {
    /// Result object; absent or null when the request failed validation.
    #[serde(default)]
    pub data: Option<Value>,
    /// Errors reported by the server.
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl GraphqlResponse {
    /// What: Turn the envelope into typed transfer events.
    ///
    /// Output:
    /// - `Ok(QueryResult)` when `data.transferEvents` decodes.
    /// - `Err(QueryError::Graphql)` when any error was reported, even with partial data.
    /// - `Err(QueryError::Decode)` when `data` is missing or has the wrong shape.
    ///
    /// # Errors
    /// - See Output.
    pub fn into_result(self) -> Result<QueryResult, QueryError> {
        if let Some(errors) = self.errors
            && !errors.is_empty()
        {
            return Err(QueryError::Graphql(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        let Some(data) = self.data.filter(|d| !d.is_null()) else {
            return Err(QueryError::Decode("response carried no data".to_string()));
        };
        serde_json::from_value::<QueryResult>(data).map_err(|e| QueryError::Decode(e.to_string()))
    }
}

/// What: Decode a raw HTTP body into transfer events.
///
/// # Errors
/// - `QueryError::Decode` when the body is not JSON, plus everything
///   [`GraphqlResponse::into_result`] reports.
pub fn parse_body(body: &str) -> Result<QueryResult, QueryError> {
    let envelope: GraphqlResponse =
        serde_json::from_str(body).map_err(|e| QueryError::Decode(e.to_string()))?;
    envelope.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_transfer_events() {
        let body = r#"{"data":{"transferEvents":[
            {"id":"1","from":"0xA","to":"0xB","value":"500"},
            {"id":"2","from":"0xC","to":"0xD","value":"7","transferType":"mint"}
        ]}}"#;
        let result = parse_body(body).expect("parse");
        assert_eq!(result.transfer_events.len(), 2);
        assert_eq!(result.transfer_events[0].value, "500");
        assert_eq!(result.transfer_events[0].transfer_type, None);
        assert_eq!(
            result.transfer_events[1].transfer_type.as_deref(),
            Some("mint")
        );
    }

    #[test]
    fn errors_take_precedence_over_partial_data() {
        let body = r#"{"data":{"transferEvents":[]},"errors":[{"message":"boom","path":["transferEvents"]}]}"#;
        assert_eq!(
            parse_body(body),
            Err(QueryError::Graphql(vec!["boom".to_string()]))
        );
    }

    #[test]
    fn empty_errors_array_is_not_an_error() {
        let body = r#"{"data":{"transferEvents":[]},"errors":[]}"#;
        assert!(parse_body(body).expect("parse").transfer_events.is_empty());
    }

    #[test]
    fn missing_data_or_field_is_a_decode_error() {
        assert!(matches!(parse_body(r#"{"data":null}"#), Err(QueryError::Decode(_))));
        assert!(matches!(parse_body(r#"{"data":{}}"#), Err(QueryError::Decode(_))));
        assert!(matches!(parse_body("<html>"), Err(QueryError::Decode(_))));
    }
}
