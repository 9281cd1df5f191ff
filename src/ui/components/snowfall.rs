use crate::app::prelude::*;
use crate::app::store::AppStore;
use gpui::{ease_in_out, Animation, AnimationExt as _};
use std::time::Duration;

impl AppStore {
    /// Ambient snow layer behind the page content. Flake parameters are
    /// rolled once per launch; each flake loops on its own cycle, offset by
    /// its phase so the fall never starts in lockstep.
    pub(crate) fn render_snowfall(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let color = cx.theme().foreground.opacity(0.7);

        div()
            .absolute()
            .inset_0()
            .overflow_hidden()
            .children(self.ui.snowflakes.iter().enumerate().map(|(ix, flake)| {
                let phase = flake.phase;
                div()
                    .absolute()
                    .left(relative(flake.left))
                    .text_size(px(flake.font_size))
                    .text_color(color)
                    .child("❄")
                    .with_animation(
                        ("snowflake", ix as u64),
                        Animation::new(Duration::from_millis(flake.fall_duration_ms))
                            .repeat()
                            .with_easing(ease_in_out),
                        move |el, delta| {
                            let cycle = (delta + phase) % 1.0;
                            // Start above the viewport and drift out below it.
                            el.top(relative(cycle * 1.2 - 0.1))
                        },
                    )
            }))
    }
}
