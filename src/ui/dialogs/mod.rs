use crate::app::prelude::*;
use crate::app::store::{
    AchievementField, AppStore, BlockContent, BlockId, BlockKind,
};
use crate::ui::tokens;

fn kind_icon(kind: BlockKind) -> IconName {
    match kind {
        BlockKind::Hero => IconName::WandSparkles,
        BlockKind::Text => IconName::ALargeSmall,
        BlockKind::Image => IconName::Image,
        BlockKind::Achievements => IconName::Smile,
        BlockKind::Gallery => IconName::GalleryVerticalEnd,
        BlockKind::Video => IconName::Film,
        BlockKind::Music => IconName::AudioLines,
    }
}

pub(crate) struct AddBlockDialogView {
    app: Entity<AppStore>,
    _subscription: Subscription,
}

impl AddBlockDialogView {
    pub(crate) fn new(app: Entity<AppStore>, cx: &mut Context<Self>) -> Self {
        let subscription = cx.observe(&app, |_this, _app, cx| cx.notify());
        Self {
            app,
            _subscription: subscription,
        }
    }
}

impl Render for AddBlockDialogView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap(tokens::SPACE_2)
            .p(tokens::SPACE_4)
            .children(BlockKind::ALL.iter().enumerate().map(|(ix, kind)| {
                let kind = *kind;
                Button::new(("add-kind", ix))
                    .ghost()
                    .icon(Icon::new(kind_icon(kind)).small())
                    .label(kind.label())
                    .on_click(cx.listener(move |this, _event, window, cx| {
                        this.app.update(cx, |app, cx| {
                            app.add_block(kind, window, cx);
                        });
                        window.close_dialog(cx);
                    }))
            }))
    }
}

pub(crate) struct BlockEditorView {
    app: Entity<AppStore>,
    _subscription: Subscription,
}

impl BlockEditorView {
    pub(crate) fn new(app: Entity<AppStore>, cx: &mut Context<Self>) -> Self {
        let subscription = cx.observe(&app, |_this, _app, cx| cx.notify());
        Self {
            app,
            _subscription: subscription,
        }
    }

    fn editing_snapshot(&self, cx: &App) -> Option<(BlockId, BlockContent)> {
        let app = self.app.read(cx);
        let id = app.page.editing_block.clone()?;
        let block = app.page.model.block(&id)?;
        Some((id, block.content.clone()))
    }

    fn field_row(
        &self,
        label: &'static str,
        input: &Entity<InputState>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;
        div()
            .flex()
            .flex_col()
            .gap(tokens::SPACE_2)
            .child(
                div()
                    .text_size(tokens::FONT_SM)
                    .text_color(muted)
                    .child(label),
            )
            .child(Input::new(input).small().w_full())
    }

    fn render_hero_form(&self, cx: &mut Context<Self>) -> gpui::AnyElement {
        let (title_input, subtitle_input) = {
            let ui = &self.app.read(cx).ui;
            (ui.title_input.clone(), ui.subtitle_input.clone())
        };
        div()
            .flex()
            .flex_col()
            .gap(tokens::SPACE_5)
            .child(self.field_row("Заголовок", &title_input, cx))
            .child(self.field_row("Подзаголовок", &subtitle_input, cx))
            .into_any_element()
    }

    fn render_text_form(&self, cx: &mut Context<Self>) -> gpui::AnyElement {
        let (title_input, body_input) = {
            let ui = &self.app.read(cx).ui;
            (ui.title_input.clone(), ui.body_input.clone())
        };
        div()
            .flex()
            .flex_col()
            .gap(tokens::SPACE_5)
            .child(self.field_row("Заголовок", &title_input, cx))
            .child(self.field_row("Текст", &body_input, cx))
            .into_any_element()
    }

    fn render_image_form(&self, id: &BlockId, url: &str, cx: &mut Context<Self>) -> gpui::AnyElement {
        let caption_input = self.app.read(cx).ui.caption_input.clone();
        let preview = self.source_preview(url, px(160.0), cx);
        let pick_id = id.clone();

        div()
            .flex()
            .flex_col()
            .gap(tokens::SPACE_5)
            .child(
                Button::new("pick-image")
                    .icon(Icon::new(IconName::FolderOpen).small())
                    .label("Выбрать изображение")
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        let pick_id = pick_id.clone();
                        this.app.update(cx, |app, cx| {
                            app.pick_image_for_block(pick_id, cx);
                        });
                    })),
            )
            .children(preview)
            .child(self.field_row("Подпись", &caption_input, cx))
            .into_any_element()
    }

    fn render_achievements_form(&self, items_len: usize, cx: &mut Context<Self>) -> gpui::AnyElement {
        let inputs = self.app.read(cx).ui.achievement_inputs.clone();

        let rows = (0..items_len).filter_map(|ix| {
            let emoji = inputs
                .get(&AppStore::achievement_input_key(ix, AchievementField::Emoji))?
                .clone();
            let title = inputs
                .get(&AppStore::achievement_input_key(ix, AchievementField::Title))?
                .clone();
            let count = inputs
                .get(&AppStore::achievement_input_key(ix, AchievementField::Count))?
                .clone();
            Some(
                div()
                    .flex()
                    .items_end()
                    .gap(tokens::SPACE_3)
                    .child(div().w(px(56.0)).child(Input::new(&emoji).small()))
                    .child(div().flex_1().child(Input::new(&title).small().w_full()))
                    .child(div().w(px(80.0)).child(Input::new(&count).small()))
                    .child(
                        Button::new(("remove-achievement", ix))
                            .xsmall()
                            .ghost()
                            .icon(Icon::new(IconName::Minus).xsmall())
                            .on_click(cx.listener(move |this, _event, window, cx| {
                                this.app.update(cx, |app, cx| {
                                    app.remove_achievement_item(ix, window, cx);
                                });
                            })),
                    ),
            )
        });

        div()
            .flex()
            .flex_col()
            .gap(tokens::SPACE_4)
            .children(rows)
            .child(
                Button::new("add-achievement")
                    .ghost()
                    .icon(Icon::new(IconName::Plus).small())
                    .label("Добавить достижение")
                    .on_click(cx.listener(|this, _event, window, cx| {
                        this.app.update(cx, |app, cx| {
                            app.add_achievement_item(window, cx);
                        });
                    })),
            )
            .into_any_element()
    }

    fn render_gallery_form(
        &self,
        id: &BlockId,
        images: &[String],
        cx: &mut Context<Self>,
    ) -> gpui::AnyElement {
        let title_input = self.app.read(cx).ui.title_input.clone();
        let pick_id = id.clone();

        let tiles: Vec<_> = images
            .iter()
            .enumerate()
            .map(|(ix, url)| {
                let preview = self.source_preview(url, px(96.0), cx);
                div()
                    .relative()
                    .w(px(96.0))
                    .h(px(96.0))
                    .rounded(tokens::SPACE_3)
                    .overflow_hidden()
                    .children(preview)
                    .child(
                        div()
                            .absolute()
                            .top(tokens::SPACE_1)
                            .right(tokens::SPACE_1)
                            .child(
                                Button::new(("remove-gallery-image", ix))
                                    .xsmall()
                                    .ghost()
                                    .icon(Icon::new(IconName::Close).xsmall())
                                    .on_click(cx.listener(move |this, _event, _window, cx| {
                                        this.app.update(cx, |app, cx| {
                                            app.remove_gallery_image(ix, cx);
                                        });
                                    })),
                            ),
                    )
            })
            .collect();

        div()
            .flex()
            .flex_col()
            .gap(tokens::SPACE_5)
            .child(self.field_row("Заголовок", &title_input, cx))
            .child(
                Button::new("pick-gallery-images")
                    .icon(Icon::new(IconName::FolderOpen).small())
                    .label("Добавить фотографии")
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        let pick_id = pick_id.clone();
                        this.app.update(cx, |app, cx| {
                            app.pick_gallery_images(pick_id, cx);
                        });
                    })),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap(tokens::SPACE_3)
                    .children(tiles),
            )
            .into_any_element()
    }

    fn render_video_form(&self, id: &BlockId, url: &str, cx: &mut Context<Self>) -> gpui::AnyElement {
        let title_input = self.app.read(cx).ui.title_input.clone();
        let muted = cx.theme().muted_foreground;
        let pick_id = id.clone();

        div()
            .flex()
            .flex_col()
            .gap(tokens::SPACE_5)
            .child(self.field_row("Заголовок", &title_input, cx))
            .child(
                Button::new("pick-video")
                    .icon(Icon::new(IconName::FolderOpen).small())
                    .label("Выбрать видео")
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        let pick_id = pick_id.clone();
                        this.app.update(cx, |app, cx| {
                            app.pick_video_for_block(pick_id, cx);
                        });
                    })),
            )
            .when(!url.is_empty(), |el| {
                el.child(
                    div()
                        .text_size(tokens::FONT_XS)
                        .text_color(muted)
                        .child("Видео выбрано"),
                )
            })
            .into_any_element()
    }

    fn render_music_placeholder(&self, cx: &mut Context<Self>) -> gpui::AnyElement {
        let muted = cx.theme().muted_foreground;
        div()
            .flex()
            .flex_col()
            .items_center()
            .gap(tokens::SPACE_3)
            .py(tokens::SPACE_6)
            .child(Icon::new(IconName::AudioLines).small())
            .child(
                div()
                    .text_size(tokens::FONT_SM)
                    .text_color(muted)
                    .child("Редактирование музыкального блока пока недоступно"),
            )
            .into_any_element()
    }

    /// Thumbnail for a stored url: decoded image when available, a muted
    /// card otherwise. Empty urls produce no element.
    fn source_preview(
        &self,
        url: &str,
        height: Pixels,
        cx: &mut Context<Self>,
    ) -> Option<gpui::AnyElement> {
        if url.is_empty() {
            return None;
        }
        let muted_bg = cx.theme().muted;
        let image = self
            .app
            .update(cx, |app, _cx| app.cached_image(url));

        Some(match image {
            Some(image) => div()
                .w_full()
                .h(height)
                .rounded(tokens::SPACE_3)
                .overflow_hidden()
                .child(gpui::img(image).size_full())
                .into_any_element(),
            None => div()
                .w_full()
                .h(height)
                .rounded(tokens::SPACE_3)
                .bg(muted_bg)
                .flex()
                .items_center()
                .justify_center()
                .child(Icon::new(IconName::Globe).small())
                .into_any_element(),
        })
    }
}

impl Render for BlockEditorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let Some((id, content)) = self.editing_snapshot(cx) else {
            let muted = cx.theme().muted_foreground;
            return div()
                .p(tokens::SPACE_6)
                .text_size(tokens::FONT_SM)
                .text_color(muted)
                .child("Блок не найден")
                .into_any_element();
        };

        let form = match &content {
            BlockContent::Hero { .. } => self.render_hero_form(cx),
            BlockContent::Text { .. } => self.render_text_form(cx),
            BlockContent::Image { url, .. } => self.render_image_form(&id, url, cx),
            BlockContent::Achievements { items } => {
                self.render_achievements_form(items.len(), cx)
            }
            BlockContent::Gallery { images, .. } => self.render_gallery_form(&id, images, cx),
            BlockContent::Video { url, .. } => self.render_video_form(&id, url, cx),
            BlockContent::Music { .. } => self.render_music_placeholder(cx),
        };

        div().p(tokens::SPACE_4).child(form).into_any_element()
    }
}
