use crate::app::prelude::*;

pub mod blocks;
mod editor;
pub mod ingest;
mod lifecycle;
mod notifications;
mod state;

pub(crate) use blocks::{AchievementItem, Block, BlockContent, BlockId, BlockKind, PageModel};
pub(crate) use editor::AchievementField;
pub(crate) use state::{PageState, Snowflake, UiState};

actions!(recap_editor, [ClearSelection, DeleteSelectedBlock]);

pub fn bind_keys(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("escape", ClearSelection, Some("RecapEditor")),
        KeyBinding::new("delete", DeleteSelectedBlock, Some("RecapEditor")),
        KeyBinding::new("backspace", DeleteSelectedBlock, Some("RecapEditor")),
    ]);
}

pub struct AppStore {
    focus_handle: FocusHandle,
    pub(crate) page: PageState,
    pub(crate) ui: UiState,
    _subscriptions: Vec<Subscription>,
}

impl AppStore {
    pub(crate) fn focus_handle(&self) -> &FocusHandle {
        &self.focus_handle
    }
}

impl Focusable for AppStore {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for AppStore {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let compact = crate::ui::is_compact(window.viewport_size().width);
        self.render_root(compact, cx)
    }
}
