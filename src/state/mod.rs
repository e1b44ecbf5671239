//! Application state: query bindings, tab and form state, plus the value types
//! exchanged with the query worker.

mod app_state;
pub mod types;

pub use app_state::{AppState, HitRect};
pub use types::{
    FormField, QueryBinding, QueryKind, QueryOutcome, QueryRequest, QueryResult, QueryStatus,
    SearchForm, TransferEvent,
};
