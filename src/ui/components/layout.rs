use crate::app::prelude::*;
use crate::app::store::AppStore;
use crate::ui::tokens;

impl AppStore {
    pub(crate) fn render_root(&mut self, compact: bool, cx: &mut Context<Self>) -> impl IntoElement {
        let background = cx.theme().background;

        let snowfall = self.render_snowfall(cx);
        let header = self.render_header(cx);
        let content = if self.page.model.is_empty() {
            self.render_empty_state(cx).into_any_element()
        } else {
            self.render_page(compact, cx).into_any_element()
        };

        div()
            .id("recap-root")
            .key_context("RecapEditor")
            .track_focus(&self.focus_handle().clone())
            .on_action(cx.listener(Self::on_clear_selection))
            .on_action(cx.listener(Self::on_delete_selected))
            .size_full()
            .relative()
            .bg(background)
            .child(snowfall)
            .child(
                div()
                    .relative()
                    .flex()
                    .flex_col()
                    .size_full()
                    .child(header)
                    .child(content),
            )
    }

    fn render_header(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let border = theme.border;
        let foreground = theme.foreground;

        div()
            .flex()
            .items_center()
            .justify_between()
            .h(tokens::TOPBAR_HEIGHT)
            .px(tokens::SPACE_8)
            .border_b_1()
            .border_color(border)
            .child(
                div()
                    .text_size(tokens::FONT_XL)
                    .font_semibold()
                    .text_color(foreground)
                    .child("✨ Итоги года"),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(tokens::SPACE_4)
                    .child(
                        Button::new("add-block")
                            .primary()
                            .small()
                            .icon(Icon::new(IconName::Plus).small())
                            .label("Добавить блок")
                            .on_click(cx.listener(|this, _event, window, cx| {
                                this.open_add_dialog(window, cx);
                            })),
                    )
                    .child(
                        // Export is not wired up yet; the button stays as a
                        // visible stub.
                        Button::new("export")
                            .ghost()
                            .small()
                            .icon(Icon::new(IconName::Download).small())
                            .label("Экспорт")
                            .disabled(true),
                    ),
            )
    }

    fn render_page(&mut self, compact: bool, cx: &mut Context<Self>) -> impl IntoElement {
        let blocks = self.page.model.blocks().to_vec();

        div()
            .id("page-scroll")
            .flex_1()
            .min_h_0()
            .overflow_y_scroll()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .w_full()
                    .max_w(tokens::CONTENT_MAX_WIDTH)
                    .mx_auto()
                    .gap(tokens::SPACE_8)
                    .px(if compact { tokens::SPACE_5 } else { tokens::SPACE_9 })
                    .py(tokens::SPACE_9)
                    .children(
                        blocks
                            .into_iter()
                            .enumerate()
                            .map(|(ix, block)| self.render_block_frame(ix, &block, compact, cx)),
                    ),
            )
    }

    fn render_empty_state(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;

        div()
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap(tokens::SPACE_6)
            .child(
                div()
                    .text_size(tokens::FONT_LG)
                    .text_color(muted)
                    .child("Начните создавать свои итоги года"),
            )
            .child(
                Button::new("add-first-block")
                    .primary()
                    .icon(Icon::new(IconName::Plus).small())
                    .label("Добавить первый блок")
                    .on_click(cx.listener(|this, _event, window, cx| {
                        this.open_add_dialog(window, cx);
                    })),
            )
    }
}
