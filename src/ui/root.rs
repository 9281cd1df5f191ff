use crate::app::prelude::*;
use crate::app::store::AppStore;
use crate::ui::tokens;

/// Window-level wrapper around the store. Owns the viewport-driven layout
/// mode and re-renders whenever the store changes.
pub(crate) struct RecapRoot {
    store: Entity<AppStore>,
    focus_handle: FocusHandle,
    _store_changed: Subscription,
}

impl RecapRoot {
    pub(crate) fn new(store: Entity<AppStore>, cx: &mut Context<Self>) -> Self {
        let focus_handle = store.read(cx).focus_handle().clone();
        let store_changed = cx.observe(&store, |_this, _store, cx| cx.notify());

        Self {
            store,
            focus_handle,
            _store_changed: store_changed,
        }
    }
}

/// Below this width the achievement/gallery grids collapse and hero type
/// steps down.
pub(crate) fn is_compact(viewport_width: Pixels) -> bool {
    viewport_width < tokens::COMPACT_WIDTH
}

impl Focusable for RecapRoot {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for RecapRoot {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let compact = is_compact(window.viewport_size().width);
        self.store
            .update(cx, |store, cx| store.render_root(compact, cx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_mode_flips_below_threshold() {
        assert!(is_compact(px(480.0)));
        assert!(is_compact(tokens::COMPACT_WIDTH - px(1.0)));
        assert!(!is_compact(tokens::COMPACT_WIDTH));
        assert!(!is_compact(px(1200.0)));
    }
}
