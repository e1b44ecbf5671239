//! The four query documents and the variables each one is sent with.
//!
//! Document text is the schema contract with the indexing service: argument
//! names, filter operators and field selection must match it exactly.

use crate::graphql::GraphqlRequest;
use crate::state::{AppState, QueryKind};

/// All events ordered by value, largest first.
pub const GET_TRANSFER_EVENTS_SORTED: &str = r"
  query GetTransferEventsSorted {
    transferEvents(orderBy: value, orderDirection: desc) {
      id
      from
      to
      value
    }
  }
";

/// Events with value above 1000.
pub const GET_TRANSFER_EVENTS_FILTERED: &str = r#"
  query GetTransferEventsFiltered {
    transferEvents(where: { value_gt: "1000" }) {
      id
      from
      to
      value
    }
  }
"#;

/// At most `$first` events starting at offset `$skip`.
pub const GET_TRANSFER_EVENTS_PAGINATED: &str = r"
  query GetTransferEventsPaginated($skip: Int!, $first: Int!) {
    transferEvents(first: $first, skip: $skip) {
      id
      from
      to
      value
    }
  }
";

/// Events sent by `$from` with value above `$value`.
pub const GET_TRANSFER_EVENTS_LOGICAL: &str = r"
  query GetTransferEventsLogical($from: String!, $value: BigInt!) {
    transferEvents(where: { and: [{ value_gt: $value }, { from: $from }] }) {
      id
      from
      to
      value
    }
  }
";

impl QueryKind {
    /// Query document text.
    #[must_use]
    pub const fn document(self) -> &'static str {
        match self {
            Self::Sorted => GET_TRANSFER_EVENTS_SORTED,
            Self::Filtered => GET_TRANSFER_EVENTS_FILTERED,
            Self::Paginated => GET_TRANSFER_EVENTS_PAGINATED,
            Self::Logical => GET_TRANSFER_EVENTS_LOGICAL,
        }
    }

    /// Operation name declared in the document.
    #[must_use]
    pub const fn operation_name(self) -> &'static str {
        match self {
            Self::Sorted => "GetTransferEventsSorted",
            Self::Filtered => "GetTransferEventsFiltered",
            Self::Paginated => "GetTransferEventsPaginated",
            Self::Logical => "GetTransferEventsLogical",
        }
    }
}

/// What: Build the HTTP request for one query from the current state.
///
/// Inputs:
/// - `kind`: Which query
/// - `app`: Source of the Paginated offset/size and the Logical form values
///
/// Output:
/// - Request carrying the document, operation name and variables.
///
/// Details:
/// - Logical variables are the raw field values; nothing is trimmed or
///   validated, so malformed input surfaces as a server error.
#[must_use]
pub fn request_for(kind: QueryKind, app: &AppState) -> GraphqlRequest {
    let req = GraphqlRequest::new(kind.document()).operation(kind.operation_name());
    match kind {
        QueryKind::Sorted | QueryKind::Filtered => req,
        QueryKind::Paginated => req
            .variable("skip", app.page_skip)
            .variable("first", app.page_size),
        QueryKind::Logical => req
            .variable("from", app.form.account_address.clone())
            .variable("value", app.form.min_value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Each document declares the operation name it is sent under.
    fn documents_declare_their_operation_names() {
        for kind in QueryKind::ALL {
            assert!(
                kind.document()
                    .contains(&format!("query {}", kind.operation_name())),
                "{kind:?}"
            );
            assert!(kind.document().contains("transferEvents("));
        }
    }

    #[test]
    /// What: Every document selects exactly the four schema fields.
    fn documents_select_only_schema_fields() {
        for kind in QueryKind::ALL {
            let doc = kind.document();
            let selection = doc
                .split_once("transferEvents(")
                .and_then(|(_, rest)| rest.split_once(") {"))
                .and_then(|(_, rest)| rest.split_once('}'))
                .map(|(fields, _)| fields.split_whitespace().collect::<Vec<_>>())
                .expect("selection set");
            assert_eq!(selection, vec!["id", "from", "to", "value"], "{kind:?}");
            assert!(!doc.contains("transferType"), "{kind:?}");
        }
    }

    #[test]
    fn documents_keep_schema_arguments() {
        assert!(GET_TRANSFER_EVENTS_SORTED.contains("orderBy: value, orderDirection: desc"));
        assert!(GET_TRANSFER_EVENTS_FILTERED.contains(r#"where: { value_gt: "1000" }"#));
        assert!(GET_TRANSFER_EVENTS_PAGINATED.contains("first: $first, skip: $skip"));
        assert!(
            GET_TRANSFER_EVENTS_LOGICAL
                .contains("where: { and: [{ value_gt: $value }, { from: $from }] }")
        );
    }

    #[test]
    fn paginated_request_uses_offset_and_page_size() {
        let mut app = AppState::default();
        let body = serde_json::to_value(request_for(QueryKind::Paginated, &app)).expect("json");
        assert_eq!(body["variables"], serde_json::json!({ "skip": 0, "first": 10 }));
        app.page_skip = 20;
        let body = serde_json::to_value(request_for(QueryKind::Paginated, &app)).expect("json");
        assert_eq!(body["variables"]["skip"], 20);
    }

    #[test]
    fn logical_request_forwards_raw_field_values() {
        let mut app = AppState::default();
        app.form.account_address = "0x4d02aF17A29cdA77416A1F60Eae9092BB6d9c026".into();
        app.form.min_value = "100".into();
        let req = request_for(QueryKind::Logical, &app);
        assert_eq!(req.operation_name.as_deref(), Some("GetTransferEventsLogical"));
        assert_eq!(
            req.variables["from"],
            "0x4d02aF17A29cdA77416A1F60Eae9092BB6d9c026"
        );
        assert_eq!(req.variables["value"], "100");

        app.form.min_value = " 1e3x".into();
        let req = request_for(QueryKind::Logical, &app);
        assert_eq!(req.variables["value"], " 1e3x");
    }

    #[test]
    fn unconditional_queries_have_no_variables() {
        let app = AppState::default();
        assert!(request_for(QueryKind::Sorted, &app).variables.is_empty());
        assert!(request_for(QueryKind::Filtered, &app).variables.is_empty());
    }
}
