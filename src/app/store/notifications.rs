use super::AppStore;
use crate::app::prelude::*;

impl AppStore {
    /// Shows a toast. Callers only do this after an operation actually
    /// changed the store; no-ops stay silent.
    pub(crate) fn toast(
        &self,
        message: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        window.push_notification(Notification::new().message(message.into()), cx);
    }
}
