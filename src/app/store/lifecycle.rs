use super::*;

impl AppStore {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let page = PageState::new();
        let ui = UiState::new(window, cx);

        let mut app = Self {
            focus_handle,
            page,
            ui,
            _subscriptions: Vec::new(),
        };

        let sub_title = cx.observe(&app.ui.title_input, |this, input, cx| {
            let value = input.read(cx).value().to_string();
            this.commit_title(value, cx);
        });
        app._subscriptions.push(sub_title);

        let sub_subtitle = cx.observe(&app.ui.subtitle_input, |this, input, cx| {
            let value = input.read(cx).value().to_string();
            this.commit_subtitle(value, cx);
        });
        app._subscriptions.push(sub_subtitle);

        let sub_body = cx.observe(&app.ui.body_input, |this, input, cx| {
            let value = input.read(cx).value().to_string();
            this.commit_body(value, cx);
        });
        app._subscriptions.push(sub_body);

        let sub_caption = cx.observe(&app.ui.caption_input, |this, input, cx| {
            let value = input.read(cx).value().to_string();
            this.commit_caption(value, cx);
        });
        app._subscriptions.push(sub_caption);

        tracing::debug!(blocks = app.page.model.len(), "page store seeded");

        app
    }
}
