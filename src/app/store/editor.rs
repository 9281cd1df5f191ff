use super::*;

/// Fields of an achievement item addressed by the dynamic editor inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AchievementField {
    Emoji,
    Title,
    Count,
}

impl AchievementField {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            AchievementField::Emoji => "emoji",
            AchievementField::Title => "title",
            AchievementField::Count => "count",
        }
    }
}

fn content_with_title(content: &BlockContent, value: &str) -> Option<BlockContent> {
    match content {
        BlockContent::Hero { subtitle, .. } => Some(BlockContent::Hero {
            title: value.to_string(),
            subtitle: subtitle.clone(),
        }),
        BlockContent::Text { body, .. } => Some(BlockContent::Text {
            title: value.to_string(),
            body: body.clone(),
        }),
        BlockContent::Gallery { images, .. } => Some(BlockContent::Gallery {
            title: value.to_string(),
            images: images.clone(),
        }),
        BlockContent::Video { url, .. } => Some(BlockContent::Video {
            url: url.clone(),
            title: value.to_string(),
        }),
        _ => None,
    }
}

fn content_with_subtitle(content: &BlockContent, value: &str) -> Option<BlockContent> {
    match content {
        BlockContent::Hero { title, .. } => Some(BlockContent::Hero {
            title: title.clone(),
            subtitle: value.to_string(),
        }),
        _ => None,
    }
}

fn content_with_body(content: &BlockContent, value: &str) -> Option<BlockContent> {
    match content {
        BlockContent::Text { title, .. } => Some(BlockContent::Text {
            title: title.clone(),
            body: value.to_string(),
        }),
        _ => None,
    }
}

fn content_with_caption(content: &BlockContent, value: &str) -> Option<BlockContent> {
    match content {
        BlockContent::Image { url, .. } => Some(BlockContent::Image {
            url: url.clone(),
            caption: value.to_string(),
        }),
        _ => None,
    }
}

fn items_with_field(
    items: &[AchievementItem],
    ix: usize,
    field: AchievementField,
    value: &str,
) -> Option<Vec<AchievementItem>> {
    if ix >= items.len() {
        return None;
    }
    let mut items = items.to_vec();
    match field {
        AchievementField::Emoji => items[ix].emoji = value.to_string(),
        AchievementField::Title => items[ix].title = value.to_string(),
        AchievementField::Count => items[ix].count = value.to_string(),
    }
    Some(items)
}

impl AppStore {
    pub(crate) fn toggle_select_block(&mut self, id: BlockId, cx: &mut Context<Self>) {
        if self.page.selected_block.as_ref() == Some(&id) {
            self.page.selected_block = None;
        } else {
            self.page.selected_block = Some(id);
        }
        cx.notify();
    }

    pub(crate) fn on_clear_selection(
        &mut self,
        _: &ClearSelection,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.page.selected_block.take().is_some() {
            cx.notify();
        }
    }

    pub(crate) fn on_delete_selected(
        &mut self,
        _: &DeleteSelectedBlock,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(id) = self.page.selected_block.clone() {
            self.delete_block(&id, window, cx);
        }
    }

    pub(crate) fn add_block(&mut self, kind: BlockKind, window: &mut Window, cx: &mut Context<Self>) {
        let id = self.page.model.add_block(kind);
        tracing::debug!(kind = kind.as_str(), id = %id, "block added");
        self.toast("Блок добавлен", window, cx);
        cx.notify();
    }

    pub(crate) fn delete_block(&mut self, id: &BlockId, window: &mut Window, cx: &mut Context<Self>) {
        if !self.page.model.delete_block(id) {
            return;
        }
        if self.page.selected_block.as_ref() == Some(id) {
            self.page.selected_block = None;
        }
        if self.page.editing_block.as_ref() == Some(id) {
            self.page.editing_block = None;
        }
        self.prune_media_caches();
        tracing::debug!(id = %id, "block deleted");
        self.toast("Блок удален", window, cx);
        cx.notify();
    }

    // ── Add-block dialog ───────────────────────────────────────────

    pub(crate) fn open_add_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.ui.add_dialog_open {
            return;
        }
        self.ui.add_dialog_open = true;

        let app = cx.entity();
        let view = cx.new(|cx| crate::ui::dialogs::AddBlockDialogView::new(app.clone(), cx));

        window.open_dialog(cx, move |dialog, _window, _cx| {
            let app = app.clone();
            let view = view.clone();
            dialog
                .title("Выберите тип блока")
                .w(px(420.0))
                .child(view)
                .on_close(move |_event, _window, cx| {
                    app.update(cx, |app, cx| {
                        app.ui.add_dialog_open = false;
                        cx.notify();
                    });
                })
        });

        cx.notify();
    }

    // ── Block editor dialog ────────────────────────────────────────

    pub(crate) fn open_block_editor(
        &mut self,
        id: BlockId,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(block) = self.page.model.block(&id) else {
            return;
        };
        let content = block.content.clone();

        self.page.editing_block = Some(id);
        self.ui.editor_dialog_open = true;
        self.ui.editor_dirty = false;
        self.sync_editor_inputs(&content, window, cx);

        let app = cx.entity();
        let view = cx.new(|cx| crate::ui::dialogs::BlockEditorView::new(app.clone(), cx));

        window.open_dialog(cx, move |dialog, _window, _cx| {
            let app = app.clone();
            let view = view.clone();
            dialog
                .title("Редактировать блок")
                .w(px(520.0))
                .child(view)
                .on_close(move |_event, window, cx| {
                    app.update(cx, |app, cx| {
                        app.finish_block_editor(window, cx);
                    });
                })
        });

        cx.notify();
    }

    pub(crate) fn finish_block_editor(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let was_dirty = self.ui.editor_dirty;
        self.page.editing_block = None;
        self.ui.editor_dialog_open = false;
        self.ui.editor_dirty = false;
        self.ui.achievement_inputs.clear();
        self.ui.achievement_subscriptions.clear();
        if was_dirty {
            self.toast("Блок обновлен", window, cx);
        }
        cx.notify();
    }

    fn sync_editor_inputs(
        &mut self,
        content: &BlockContent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match content {
            BlockContent::Hero { title, subtitle } => {
                self.set_input_value(&self.ui.title_input.clone(), title, window, cx);
                self.set_input_value(&self.ui.subtitle_input.clone(), subtitle, window, cx);
            }
            BlockContent::Text { title, body } => {
                self.set_input_value(&self.ui.title_input.clone(), title, window, cx);
                self.set_input_value(&self.ui.body_input.clone(), body, window, cx);
            }
            BlockContent::Image { caption, .. } => {
                self.set_input_value(&self.ui.caption_input.clone(), caption, window, cx);
            }
            BlockContent::Achievements { items } => {
                self.rebuild_achievement_inputs(&items.clone(), window, cx);
            }
            BlockContent::Gallery { title, .. } | BlockContent::Video { title, .. } => {
                self.set_input_value(&self.ui.title_input.clone(), title, window, cx);
            }
            BlockContent::Music { .. } => {}
        }
    }

    fn set_input_value(
        &mut self,
        input: &Entity<InputState>,
        value: &str,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let value = value.to_string();
        input.update(cx, |input, cx| {
            input.set_value(value, window, cx);
        });
    }

    // ── Per-keystroke commits ──────────────────────────────────────

    fn editing_content(&self) -> Option<(BlockId, BlockContent)> {
        let id = self.page.editing_block.clone()?;
        let block = self.page.model.block(&id)?;
        Some((id, block.content.clone()))
    }

    fn commit_content(&mut self, id: &BlockId, content: BlockContent, cx: &mut Context<Self>) {
        if self
            .page
            .model
            .block(id)
            .is_some_and(|block| block.content == content)
        {
            return;
        }
        if self.page.model.replace_content(id, content) {
            self.ui.editor_dirty = true;
            tracing::debug!(id = %id, "block content replaced");
            cx.notify();
        }
    }

    pub(crate) fn commit_title(&mut self, value: String, cx: &mut Context<Self>) {
        let Some((id, content)) = self.editing_content() else {
            return;
        };
        if let Some(next) = content_with_title(&content, &value) {
            self.commit_content(&id, next, cx);
        }
    }

    pub(crate) fn commit_subtitle(&mut self, value: String, cx: &mut Context<Self>) {
        let Some((id, content)) = self.editing_content() else {
            return;
        };
        if let Some(next) = content_with_subtitle(&content, &value) {
            self.commit_content(&id, next, cx);
        }
    }

    pub(crate) fn commit_body(&mut self, value: String, cx: &mut Context<Self>) {
        let Some((id, content)) = self.editing_content() else {
            return;
        };
        if let Some(next) = content_with_body(&content, &value) {
            self.commit_content(&id, next, cx);
        }
    }

    pub(crate) fn commit_caption(&mut self, value: String, cx: &mut Context<Self>) {
        let Some((id, content)) = self.editing_content() else {
            return;
        };
        if let Some(next) = content_with_caption(&content, &value) {
            self.commit_content(&id, next, cx);
        }
    }

    // ── Achievements editor ────────────────────────────────────────

    pub(crate) fn achievement_input_key(ix: usize, field: AchievementField) -> String {
        format!("{ix}:{}", field.as_str())
    }

    fn rebuild_achievement_inputs(
        &mut self,
        items: &[AchievementItem],
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.ui.achievement_inputs.clear();
        self.ui.achievement_subscriptions.clear();

        for (ix, item) in items.iter().enumerate() {
            let fields = [
                (AchievementField::Emoji, item.emoji.clone()),
                (AchievementField::Title, item.title.clone()),
                (AchievementField::Count, item.count.clone()),
            ];
            for (field, value) in fields {
                let key = Self::achievement_input_key(ix, field);
                let input = cx.new(|cx| InputState::new(window, cx));
                input.update(cx, |input, cx| {
                    input.set_value(value, window, cx);
                });
                let subscription = cx.observe(&input, move |this, input, cx| {
                    let value = input.read(cx).value().to_string();
                    this.commit_achievement_field(ix, field, value, cx);
                });
                self.ui.achievement_inputs.insert(key.clone(), input);
                self.ui.achievement_subscriptions.insert(key, subscription);
            }
        }
    }

    pub(crate) fn commit_achievement_field(
        &mut self,
        ix: usize,
        field: AchievementField,
        value: String,
        cx: &mut Context<Self>,
    ) {
        let Some((id, BlockContent::Achievements { items })) = self.editing_content() else {
            return;
        };
        if let Some(items) = items_with_field(&items, ix, field, &value) {
            self.commit_content(&id, BlockContent::Achievements { items }, cx);
        }
    }

    pub(crate) fn add_achievement_item(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some((id, BlockContent::Achievements { mut items })) = self.editing_content() else {
            return;
        };
        items.push(AchievementItem::new("🎉", "New achievement", "0"));
        self.rebuild_achievement_inputs(&items, window, cx);
        self.commit_content(&id, BlockContent::Achievements { items }, cx);
    }

    pub(crate) fn remove_achievement_item(
        &mut self,
        ix: usize,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some((id, BlockContent::Achievements { mut items })) = self.editing_content() else {
            return;
        };
        if ix >= items.len() {
            return;
        }
        items.remove(ix);
        self.rebuild_achievement_inputs(&items, window, cx);
        self.commit_content(&id, BlockContent::Achievements { items }, cx);
    }

    // ── Gallery editor ─────────────────────────────────────────────

    pub(crate) fn remove_gallery_image(&mut self, ix: usize, cx: &mut Context<Self>) {
        let Some((id, BlockContent::Gallery { title, mut images })) = self.editing_content() else {
            return;
        };
        if ix >= images.len() {
            return;
        }
        images.remove(ix);
        self.commit_content(&id, BlockContent::Gallery { title, images }, cx);
        self.prune_media_caches();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::TestAppContext;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn title_rewrite_covers_titled_variants() {
        let hero = BlockContent::Hero {
            title: "a".into(),
            subtitle: "b".into(),
        };
        assert_eq!(
            content_with_title(&hero, "x"),
            Some(BlockContent::Hero {
                title: "x".into(),
                subtitle: "b".into(),
            })
        );

        let video = BlockContent::Video {
            url: "u".into(),
            title: "t".into(),
        };
        assert_eq!(
            content_with_title(&video, "x"),
            Some(BlockContent::Video {
                url: "u".into(),
                title: "x".into(),
            })
        );

        let image = BlockContent::Image {
            url: String::new(),
            caption: String::new(),
        };
        assert_eq!(content_with_title(&image, "x"), None);
    }

    #[test]
    fn subtitle_rewrite_is_hero_only() {
        let text = BlockContent::Text {
            title: "a".into(),
            body: "b".into(),
        };
        assert_eq!(content_with_subtitle(&text, "x"), None);
    }

    #[test]
    fn body_rewrite_keeps_title() {
        let text = BlockContent::Text {
            title: "a".into(),
            body: "b".into(),
        };
        assert_eq!(
            content_with_body(&text, "x"),
            Some(BlockContent::Text {
                title: "a".into(),
                body: "x".into(),
            })
        );
    }

    #[test]
    fn caption_rewrite_keeps_url() {
        let image = BlockContent::Image {
            url: "data:image/png;base64,AA==".into(),
            caption: "old".into(),
        };
        assert_eq!(
            content_with_caption(&image, "new"),
            Some(BlockContent::Image {
                url: "data:image/png;base64,AA==".into(),
                caption: "new".into(),
            })
        );
    }

    #[test]
    fn achievement_field_rewrite_checks_bounds() {
        let items = vec![AchievementItem::new("🎉", "a", "1")];
        assert!(items_with_field(&items, 1, AchievementField::Title, "x").is_none());

        let updated = items_with_field(&items, 0, AchievementField::Count, "12/15").unwrap();
        assert_eq!(updated[0].count, "12/15");
        assert_eq!(updated[0].title, "a");
    }

    #[gpui::test]
    fn block_editor_opens_as_dialog(cx: &mut TestAppContext) {
        cx.skip_drawing();
        let app_handle: Rc<RefCell<Option<Entity<AppStore>>>> = Rc::new(RefCell::new(None));

        {
            let mut app = cx.app.borrow_mut();
            gpui_component::init(&mut app);
        }

        let app_handle_for_window = app_handle.clone();
        let window = cx.add_window(|window, cx| {
            let app = cx.new(|cx| AppStore::new(window, cx));
            *app_handle_for_window.borrow_mut() = Some(app.clone());
            Root::new(app, window, cx)
        });

        let app = app_handle.borrow().clone().expect("app");
        let first_id = app.read_with(cx, |app, _| app.page.model.blocks()[0].id.clone());

        cx.update_window(*window, |_root, window, cx| {
            app.update(cx, |app, cx| {
                app.open_block_editor(first_id.clone(), window, cx);
            });
        })
        .unwrap();

        app.read_with(cx, |app, _| {
            assert!(app.ui.editor_dialog_open);
            assert_eq!(app.page.editing_block, Some(first_id));
        });
    }
}
