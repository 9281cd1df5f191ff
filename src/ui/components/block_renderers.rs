use crate::app::prelude::*;
use crate::app::store::{AppStore, Block, BlockContent};
use crate::ui::tokens;
use gpui::white;

impl AppStore {
    pub(super) fn render_block_frame(
        &mut self,
        ix: usize,
        block: &Block,
        compact: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let theme = cx.theme();
        let primary = theme.primary;
        let transparent = theme.transparent;
        let selected = self.page.selected_block.as_ref() == Some(&block.id);

        let inner = match &block.content {
            BlockContent::Hero { title, subtitle } => self
                .render_hero_inner(title, subtitle, compact, cx)
                .into_any_element(),
            BlockContent::Text { title, body } => {
                self.render_text_inner(title, body, cx).into_any_element()
            }
            BlockContent::Image { url, caption } => self
                .render_image_inner(&url.clone(), caption, cx)
                .into_any_element(),
            BlockContent::Achievements { items } => self
                .render_achievements_inner(&items.clone(), compact, cx)
                .into_any_element(),
            BlockContent::Gallery { title, images } => self
                .render_gallery_inner(&title.clone(), &images.clone(), compact, cx)
                .into_any_element(),
            BlockContent::Video { url, title } => {
                self.render_video_inner(url, title, cx).into_any_element()
            }
            BlockContent::Music { url, title } => {
                self.render_music_inner(url, title, cx).into_any_element()
            }
        };

        let select_id = block.id.clone();
        let edit_id = block.id.clone();
        let delete_id = block.id.clone();

        div()
            .id(("block", ix))
            .relative()
            .w_full()
            .rounded(tokens::SPACE_6)
            .border_2()
            .border_color(if selected { primary } else { transparent })
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.toggle_select_block(select_id.clone(), cx);
            }))
            .child(inner)
            .child(
                div()
                    .absolute()
                    .top(tokens::SPACE_4)
                    .right(tokens::SPACE_4)
                    .flex()
                    .gap(tokens::SPACE_2)
                    .opacity(0.0)
                    .hover(|s| s.opacity(1.0))
                    .child(
                        Button::new(("edit-block", ix))
                            .xsmall()
                            .ghost()
                            .icon(Icon::new(IconName::Pen).xsmall())
                            .tooltip("Редактировать блок")
                            .on_click(cx.listener(move |this, _event, window, cx| {
                                cx.stop_propagation();
                                this.open_block_editor(edit_id.clone(), window, cx);
                            })),
                    )
                    .child(
                        Button::new(("delete-block", ix))
                            .xsmall()
                            .ghost()
                            .icon(Icon::new(IconName::Close).xsmall())
                            .tooltip("Удалить блок")
                            .on_click(cx.listener(move |this, _event, window, cx| {
                                cx.stop_propagation();
                                this.delete_block(&delete_id.clone(), window, cx);
                            })),
                    ),
            )
    }

    fn render_hero_inner(
        &mut self,
        title: &str,
        subtitle: &str,
        compact: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let primary = cx.theme().primary;

        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .text_center()
            .gap(tokens::SPACE_5)
            .py(if compact { tokens::SPACE_12 } else { px(96.0) })
            .px(tokens::SPACE_8)
            .rounded(tokens::SPACE_5)
            .bg(primary)
            .child(
                div()
                    .text_size(if compact {
                        tokens::FONT_HERO_COMPACT
                    } else {
                        tokens::FONT_HERO
                    })
                    .font_bold()
                    .text_color(white())
                    .child(title.to_string()),
            )
            .child(
                div()
                    .text_size(if compact { tokens::FONT_LG } else { tokens::FONT_XL })
                    .text_color(white().opacity(0.85))
                    .child(subtitle.to_string()),
            )
    }

    fn render_text_inner(
        &mut self,
        title: &str,
        body: &str,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let theme = cx.theme();
        let foreground = theme.foreground;
        let muted = theme.muted_foreground;

        div()
            .flex()
            .flex_col()
            .items_center()
            .text_center()
            .gap(tokens::SPACE_4)
            .py(tokens::SPACE_9)
            .px(tokens::SPACE_8)
            .child(
                div()
                    .text_size(tokens::FONT_2XL)
                    .font_semibold()
                    .text_color(foreground)
                    .child(title.to_string()),
            )
            .child(
                div()
                    .max_w(px(640.0))
                    .text_size(tokens::FONT_BASE)
                    .text_color(muted)
                    .child(body.to_string()),
            )
    }

    fn render_image_inner(
        &mut self,
        url: &str,
        caption: &str,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let theme = cx.theme();
        let border = theme.border;
        let muted = theme.muted_foreground;
        let muted_bg = theme.muted;

        let picture = if url.is_empty() {
            div()
                .w_full()
                .h(px(220.0))
                .rounded(tokens::SPACE_5)
                .border_1()
                .border_color(border)
                .bg(muted_bg)
                .flex()
                .items_center()
                .justify_center()
                .child(Icon::new(IconName::Image).with_size(px(28.0)))
                .into_any_element()
        } else if let Some(image) = self.cached_image(url) {
            div()
                .w_full()
                .h(px(380.0))
                .rounded(tokens::SPACE_5)
                .overflow_hidden()
                .child(gpui::img(image).size_full())
                .into_any_element()
        } else {
            self.render_remote_source_card(url, cx).into_any_element()
        };

        div()
            .flex()
            .flex_col()
            .gap(tokens::SPACE_4)
            .child(picture)
            .when(!caption.is_empty(), |el| {
                el.child(
                    div()
                        .text_center()
                        .text_size(tokens::FONT_SM)
                        .text_color(muted)
                        .child(caption.to_string()),
                )
            })
    }

    fn render_achievements_inner(
        &mut self,
        items: &[crate::app::store::AchievementItem],
        compact: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let theme = cx.theme();
        let foreground = theme.foreground;
        let muted = theme.muted_foreground;
        let card_bg = theme.popover;
        let border = theme.border;

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap(tokens::SPACE_7)
            .py(tokens::SPACE_9)
            .child(
                div()
                    .text_size(tokens::FONT_2XL)
                    .font_semibold()
                    .text_color(foreground)
                    .child("Мои достижения"),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .justify_center()
                    .gap(tokens::SPACE_5)
                    .w_full()
                    .children(items.iter().map(|item| {
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap(tokens::SPACE_2)
                            .p(tokens::SPACE_6)
                            .rounded(tokens::SPACE_5)
                            .bg(card_bg)
                            .border_1()
                            .border_color(border)
                            .when(compact, |el| el.w_full())
                            .when(!compact, |el| el.w(px(220.0)))
                            .child(div().text_size(px(34.0)).child(item.emoji.clone()))
                            .child(
                                div()
                                    .text_size(tokens::FONT_3XL)
                                    .font_bold()
                                    .text_color(foreground)
                                    .child(item.count.clone()),
                            )
                            .child(
                                div()
                                    .text_size(tokens::FONT_SM)
                                    .text_color(muted)
                                    .child(item.title.clone()),
                            )
                    })),
            )
    }

    fn render_gallery_inner(
        &mut self,
        title: &str,
        images: &[String],
        compact: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let foreground = cx.theme().foreground;
        let side = if compact { px(140.0) } else { px(196.0) };

        let tiles: Vec<_> = images
            .iter()
            .map(|url| {
                let content = if let Some(image) = self.cached_image(url) {
                    gpui::img(image).size_full().into_any_element()
                } else {
                    self.render_remote_source_card(url, cx).into_any_element()
                };
                div()
                    .w(side)
                    .h(side)
                    .rounded(tokens::SPACE_4)
                    .overflow_hidden()
                    .child(content)
            })
            .collect();

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap(tokens::SPACE_7)
            .py(tokens::SPACE_9)
            .child(
                div()
                    .text_size(tokens::FONT_2XL)
                    .font_semibold()
                    .text_color(foreground)
                    .child(title.to_string()),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .justify_center()
                    .gap(tokens::SPACE_4)
                    .w_full()
                    .children(tiles),
            )
    }

    fn render_video_inner(
        &mut self,
        url: &str,
        title: &str,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let theme = cx.theme();
        let foreground = theme.foreground;
        let muted_bg = theme.muted;
        let muted = theme.muted_foreground;

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap(tokens::SPACE_6)
            .py(tokens::SPACE_9)
            .child(
                div()
                    .text_size(tokens::FONT_2XL)
                    .font_semibold()
                    .text_color(foreground)
                    .child(title.to_string()),
            )
            .when(!url.is_empty(), |el| {
                el.child(
                    div()
                        .w_full()
                        .h(px(320.0))
                        .rounded(tokens::SPACE_5)
                        .bg(muted_bg)
                        .flex()
                        .flex_col()
                        .items_center()
                        .justify_center()
                        .gap(tokens::SPACE_4)
                        .child(Icon::new(IconName::Film).with_size(px(32.0)))
                        .child(
                            div()
                                .max_w(px(480.0))
                                .overflow_hidden()
                                .text_size(tokens::FONT_XS)
                                .text_color(muted)
                                .child(describe_source(url)),
                        ),
                )
            })
    }

    fn render_music_inner(
        &mut self,
        _url: &str,
        title: &str,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let theme = cx.theme();
        let foreground = theme.foreground;
        let muted = theme.muted_foreground;
        let card_bg = theme.popover;
        let border = theme.border;

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap(tokens::SPACE_4)
            .py(tokens::SPACE_9)
            .px(tokens::SPACE_8)
            .rounded(tokens::SPACE_5)
            .bg(card_bg)
            .border_1()
            .border_color(border)
            .child(Icon::new(IconName::AudioLines).with_size(px(28.0)))
            .child(
                div()
                    .text_size(tokens::FONT_LG)
                    .font_semibold()
                    .text_color(foreground)
                    .child(title.to_string()),
            )
            .child(
                div()
                    .text_size(tokens::FONT_SM)
                    .text_color(muted)
                    .child("Блок типа music"),
            )
    }

    /// Non-data urls are never fetched; show where the content points instead.
    fn render_remote_source_card(&mut self, url: &str, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let muted_bg = theme.muted;
        let muted = theme.muted_foreground;

        div()
            .size_full()
            .min_h(px(120.0))
            .bg(muted_bg)
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap(tokens::SPACE_2)
            .p(tokens::SPACE_4)
            .child(Icon::new(IconName::Globe).small())
            .child(
                div()
                    .max_w_full()
                    .overflow_hidden()
                    .text_size(tokens::FONT_XS)
                    .text_color(muted)
                    .child(describe_source(url)),
            )
    }
}

fn describe_source(url: &str) -> String {
    if url.starts_with("data:") {
        "встроенный файл".to_string()
    } else if url.chars().count() > 72 {
        let prefix: String = url.chars().take(72).collect();
        format!("{prefix}…")
    } else {
        url.to_string()
    }
}
