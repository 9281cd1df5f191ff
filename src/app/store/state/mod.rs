use super::AppStore;
use crate::app::prelude::*;
use crate::app::store::{BlockId, PageModel};
use rand::Rng;
use std::collections::HashSet;

pub(crate) struct PageState {
    pub(crate) model: PageModel,
    pub(crate) selected_block: Option<BlockId>,
    pub(crate) editing_block: Option<BlockId>,
}

impl PageState {
    pub(crate) fn new() -> Self {
        Self {
            model: PageModel::seeded(),
            selected_block: None,
            editing_block: None,
        }
    }
}

/// One falling glyph in the ambient snowfall layer. Parameters are rolled
/// once per launch.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Snowflake {
    /// Horizontal position as a fraction of the window width.
    pub(crate) left: f32,
    pub(crate) font_size: f32,
    pub(crate) fall_duration_ms: u64,
    /// Start offset within the fall cycle, 0.0..1.0.
    pub(crate) phase: f32,
}

pub(crate) const SNOWFLAKE_COUNT: usize = 30;

pub(crate) fn roll_snowflakes() -> Vec<Snowflake> {
    let mut rng = rand::thread_rng();
    (0..SNOWFLAKE_COUNT)
        .map(|_| Snowflake {
            left: rng.gen_range(0.0..1.0),
            font_size: rng.gen_range(10.0..20.0),
            fall_duration_ms: rng.gen_range(5_000..15_000),
            phase: rng.gen_range(0.0..1.0),
        })
        .collect()
}

pub(crate) struct UiState {
    pub(crate) add_dialog_open: bool,
    pub(crate) editor_dialog_open: bool,
    /// Set once any per-keystroke commit lands while the editor dialog is
    /// open; drives the "updated" toast on close.
    pub(crate) editor_dirty: bool,

    pub(crate) title_input: Entity<InputState>,
    pub(crate) subtitle_input: Entity<InputState>,
    pub(crate) body_input: Entity<InputState>,
    pub(crate) caption_input: Entity<InputState>,

    /// Per-item achievement inputs keyed `"{ix}:{field}"`.
    pub(crate) achievement_inputs: HashMap<String, Entity<InputState>>,
    pub(crate) achievement_subscriptions: HashMap<String, Subscription>,

    pub(crate) image_cache: HashMap<String, Arc<gpui::Image>>,
    pub(crate) failed_decodes: HashSet<String>,

    pub(crate) snowflakes: Vec<Snowflake>,
}

impl UiState {
    pub(crate) fn new(window: &mut Window, cx: &mut Context<AppStore>) -> Self {
        let title_input = cx.new(|cx| InputState::new(window, cx).placeholder("Заголовок"));
        let subtitle_input = cx.new(|cx| InputState::new(window, cx).placeholder("Подзаголовок"));
        let body_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Текст раздела")
                .multi_line()
                .rows(4)
        });
        let caption_input = cx.new(|cx| InputState::new(window, cx).placeholder("Подпись"));

        Self {
            add_dialog_open: false,
            editor_dialog_open: false,
            editor_dirty: false,
            title_input,
            subtitle_input,
            body_input,
            caption_input,
            achievement_inputs: HashMap::new(),
            achievement_subscriptions: HashMap::new(),
            image_cache: HashMap::new(),
            failed_decodes: HashSet::new(),
            snowflakes: roll_snowflakes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflakes_roll_full_set_within_bounds() {
        let flakes = roll_snowflakes();
        assert_eq!(flakes.len(), SNOWFLAKE_COUNT);
        for flake in flakes {
            assert!((0.0..1.0).contains(&flake.left));
            assert!((10.0..20.0).contains(&flake.font_size));
            assert!((5_000..15_000).contains(&flake.fall_duration_ms));
            assert!((0.0..1.0).contains(&flake.phase));
        }
    }
}
