use ratatui::widgets::TableState;

use super::types::{QueryBinding, QueryKind, QueryOutcome, QueryStatus, SearchForm};
use crate::theme::{KeyMap, Settings};

/// Hit-test rectangle `(x, y, width, height)` recorded while rendering.
pub type HitRect = (u16, u16, u16, u16);

/// Global application state shared by the event, networking, and UI layers.
///
/// Ephemeral: built on startup, mutated only by user interaction and query
/// outcomes, discarded on exit. Nothing here is persisted.
#[derive(Debug)]
pub struct AppState {
    /// Selected tab; only its content is rendered.
    pub tab: QueryKind,
    /// Logical tab inputs.
    pub form: SearchForm,
    /// Dark palette when `true`.
    pub dark_mode: bool,
    /// One binding per [`QueryKind`], indexed by [`QueryKind::index`].
    pub bindings: [QueryBinding; 4],
    /// Last id handed out by [`AppState::begin_request`].
    pub last_request_id: u64,
    /// Row selection/scroll per tab.
    pub table_states: [TableState; 4],
    /// Offset of the Paginated tab.
    pub page_skip: u32,
    /// Rows per page of the Paginated tab.
    pub page_size: u32,
    /// Active key bindings.
    pub keymap: KeyMap,
    /// Endpoint shown in the header.
    pub endpoint: String,
    /// Tab title rectangles from the last frame.
    pub tab_rects: Vec<(QueryKind, HitRect)>,
    /// Address input rectangle from the last frame (Logical tab only).
    pub address_rect: Option<HitRect>,
    /// Min-value input rectangle from the last frame (Logical tab only).
    pub min_value_rect: Option<HitRect>,
    /// Search button rectangle from the last frame (Logical tab only).
    pub search_button_rect: Option<HitRect>,
    /// Dark/light indicator rectangle in the header; clicking it toggles.
    pub dark_toggle_rect: Option<HitRect>,
    /// One-line hint shown in the footer (e.g. why Search did nothing).
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AppState {
    /// What: Initial state for a fresh session.
    ///
    /// Details:
    /// - Dark mode, page size, keymap and endpoint come from settings; every
    ///   binding starts `Idle` and the Sorted tab is selected.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            tab: QueryKind::Sorted,
            form: SearchForm::default(),
            dark_mode: settings.dark_mode,
            bindings: Default::default(),
            last_request_id: 0,
            table_states: Default::default(),
            page_skip: 0,
            page_size: settings.page_size.max(1),
            keymap: settings.keymap.clone(),
            endpoint: settings.endpoint.clone(),
            tab_rects: Vec::new(),
            address_rect: None,
            min_value_rect: None,
            search_button_rect: None,
            dark_toggle_rect: None,
            status_message: None,
        }
    }

    /// Binding of one query.
    #[must_use]
    pub fn binding(&self, kind: QueryKind) -> &QueryBinding {
        &self.bindings[kind.index()]
    }

    /// Mutable binding of one query.
    pub fn binding_mut(&mut self, kind: QueryKind) -> &mut QueryBinding {
        &mut self.bindings[kind.index()]
    }

    /// Status of one query.
    #[must_use]
    pub fn status(&self, kind: QueryKind) -> &QueryStatus {
        &self.binding(kind).status
    }

    /// What: Move a binding to `Loading` under a fresh request id.
    ///
    /// Output:
    /// - The new id; only an outcome carrying this id will be applied.
    pub fn begin_request(&mut self, kind: QueryKind) -> u64 {
        self.last_request_id += 1;
        let id = self.last_request_id;
        let binding = self.binding_mut(kind);
        binding.request_id = id;
        binding.status = QueryStatus::Loading;
        id
    }

    /// What: Apply a worker outcome to its binding.
    ///
    /// Output:
    /// - `true` when applied; `false` when the outcome answered a superseded request.
    ///
    /// Details:
    /// - Success selects the first row of that tab's table; failure clears the selection.
    pub fn apply_outcome(&mut self, outcome: QueryOutcome) -> bool {
        let kind = outcome.kind;
        if self.binding(kind).request_id != outcome.id {
            tracing::debug!(
                kind = ?kind,
                id = outcome.id,
                current = self.binding(kind).request_id,
                "[State] dropping stale query outcome"
            );
            return false;
        }
        let has_rows = matches!(&outcome.result, Ok(rows) if !rows.is_empty());
        self.binding_mut(kind).status = match outcome.result {
            Ok(rows) => QueryStatus::Succeeded(rows),
            Err(msg) => QueryStatus::Failed(msg),
        };
        let table = &mut self.table_states[kind.index()];
        *table = TableState::default();
        if has_rows {
            table.select(Some(0));
        }
        true
    }

    /// What: Select a tab. Never triggers a query.
    ///
    /// Details:
    /// - Leaving the Logical tab drops form focus so typing goes back to shortcuts.
    pub fn select_tab(&mut self, kind: QueryKind) {
        if kind != QueryKind::Logical {
            self.form.focus = None;
        }
        self.tab = kind;
    }

    /// Select the next tab, wrapping.
    pub fn next_tab(&mut self) {
        let i = (self.tab.index() + 1) % QueryKind::ALL.len();
        self.select_tab(QueryKind::ALL[i]);
    }

    /// Select the previous tab, wrapping.
    pub fn prev_tab(&mut self) {
        let len = QueryKind::ALL.len();
        let i = (self.tab.index() + len - 1) % len;
        self.select_tab(QueryKind::ALL[i]);
    }

    /// Flip the palette. Query state is untouched.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// What: Move the row selection of the selected tab.
    ///
    /// Inputs:
    /// - `delta`: Rows to move; negative moves up
    ///
    /// Details:
    /// - Clamped to the table bounds; no-op while the tab has no rows.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.status(self.tab).rows().len();
        let table = &mut self.table_states[self.tab.index()];
        if len == 0 {
            table.select(None);
            return;
        }
        let current = table.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        table.select(Some(next));
    }
}
