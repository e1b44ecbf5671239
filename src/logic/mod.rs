//! Non-UI logic: query dispatch with its guard, pagination, and the decision
//! of what each tab's content area shows.

pub mod query;
pub mod view;

pub use query::{
    apply_outcome, dispatch_guard, mount, next_page, prev_page, refresh_current, send_query,
    submit_search,
};
pub use view::{
    ContentView, EMPTY_MESSAGE, LOADING_MESSAGE, NO_DATA_MESSAGE, content_view, has_transfer_type,
};
