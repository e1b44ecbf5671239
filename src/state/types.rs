//! Core value types shared by the client, workers, event handlers and UI.

use serde::{Deserialize, Serialize};

use crate::graphql::{FetchPolicy, GraphqlRequest};

/// One value-movement record exposed by the indexing API.
///
/// Identity is `id`; amounts and addresses are kept exactly as the server
/// sent them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    /// Opaque unique id.
    pub id: String,
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Decimal amount as a string.
    pub value: String,
    /// Optional transfer classification.
    #[serde(
        rename = "transferType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transfer_type: Option<String>,
}

/// `data` payload of every query: the `transferEvents` list in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Events as ordered by the remote service.
    #[serde(rename = "transferEvents")]
    pub transfer_events: Vec<TransferEvent>,
}

/// The four fixed queries. Each one also names a tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// All events ordered by value, descending.
    Sorted,
    /// Events with value above 1000.
    Filtered,
    /// A page of events by skip/first.
    Paginated,
    /// Events from one address above a minimum value.
    Logical,
}

impl QueryKind {
    /// Tab order.
    pub const ALL: [Self; 4] = [Self::Sorted, Self::Filtered, Self::Paginated, Self::Logical];

    /// Position in [`QueryKind::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Sorted => 0,
            Self::Filtered => 1,
            Self::Paginated => 2,
            Self::Logical => 3,
        }
    }

    /// Kind at a tab position, if valid.
    #[must_use]
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Tab label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sorted => "Sorted",
            Self::Filtered => "Filtered",
            Self::Paginated => "Paginated",
            Self::Logical => "Logical",
        }
    }

    /// Heading shown above the tab content.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Sorted => "Sorted by Value",
            Self::Filtered => "Filtered by Value > 1000",
            Self::Paginated => "Paginated",
            Self::Logical => "Logical Operators",
        }
    }

    /// Whether the query fires on mount without user input.
    #[must_use]
    pub const fn runs_on_mount(self) -> bool {
        !matches!(self, Self::Logical)
    }
}

/// Result state of one query binding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never triggered.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Last trigger failed with this message.
    Failed(String),
    /// Last trigger succeeded with these rows.
    Succeeded(Vec<TransferEvent>),
}

impl QueryStatus {
    /// `true` while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Rows of a successful result; empty otherwise.
    #[must_use]
    pub fn rows(&self) -> &[TransferEvent] {
        match self {
            Self::Succeeded(rows) => rows,
            _ => &[],
        }
    }
}

/// A query paired with its current status and the id of the request it awaits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryBinding {
    /// Current status.
    pub status: QueryStatus,
    /// Id of the most recent dispatch; `0` before the first one.
    pub request_id: u64,
    /// Variables of the most recent dispatch, for the status line.
    pub last_variables: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Work item sent from the UI loop to the query worker.
#[derive(Clone, Debug)]
pub struct QueryRequest {
    /// Which binding the answer belongs to.
    pub kind: QueryKind,
    /// Dispatch id; answers with a different id are stale.
    pub id: u64,
    /// HTTP body to send.
    pub request: GraphqlRequest,
    /// Cache policy.
    pub policy: FetchPolicy,
}

/// Answer from the query worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOutcome {
    /// Which binding the answer belongs to.
    pub kind: QueryKind,
    /// Dispatch id copied from the request.
    pub id: u64,
    /// Rows, or the failure message (without the `"Error: "` prefix).
    pub result: Result<Vec<TransferEvent>, String>,
}

/// Fields of the Logical tab's search form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    /// `accountAddress` input.
    Address,
    /// `minValue` input.
    MinValue,
    /// The Search button.
    SearchButton,
}

impl FormField {
    /// Next field in Tab order, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Address => Self::MinValue,
            Self::MinValue => Self::SearchButton,
            Self::SearchButton => Self::Address,
        }
    }

    /// Previous field in Tab order, wrapping.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Address => Self::SearchButton,
            Self::MinValue => Self::Address,
            Self::SearchButton => Self::MinValue,
        }
    }
}

/// Search form state of the Logical tab. Raw strings, never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    /// Sender address filter.
    pub account_address: String,
    /// Minimum value filter.
    pub min_value: String,
    /// Focused field; `None` when keys drive the tabs instead of the form.
    pub focus: Option<FormField>,
}

impl SearchForm {
    /// Both inputs filled, so the gated query may run.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.account_address.is_empty() && !self.min_value.is_empty()
    }

    /// Text of the focused input, if an input (not the button) has focus.
    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Some(FormField::Address) => Some(&mut self.account_address),
            Some(FormField::MinValue) => Some(&mut self.min_value),
            _ => None,
        }
    }
}
