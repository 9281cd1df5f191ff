use gpui::{px, Pixels};
use std::time::Duration;

// ── Spacing scale ──────────────────────────────────────────────────

pub const SPACE_1: Pixels = px(2.0);
pub const SPACE_2: Pixels = px(4.0);
pub const SPACE_3: Pixels = px(6.0);
pub const SPACE_4: Pixels = px(8.0);
pub const SPACE_5: Pixels = px(12.0);
pub const SPACE_6: Pixels = px(16.0);
pub const SPACE_7: Pixels = px(20.0);
pub const SPACE_8: Pixels = px(24.0);
pub const SPACE_9: Pixels = px(32.0);
pub const SPACE_10: Pixels = px(40.0);
pub const SPACE_12: Pixels = px(64.0);

// ── Typography scale ───────────────────────────────────────────────

pub const FONT_XS: Pixels = px(11.0);
pub const FONT_SM: Pixels = px(12.0);
pub const FONT_BASE: Pixels = px(14.0);
pub const FONT_LG: Pixels = px(16.0);
pub const FONT_XL: Pixels = px(18.0);
pub const FONT_2XL: Pixels = px(22.0);
pub const FONT_3XL: Pixels = px(28.0);
pub const FONT_HERO: Pixels = px(44.0);
pub const FONT_HERO_COMPACT: Pixels = px(30.0);

// ── Animation durations ────────────────────────────────────────────

pub const DURATION_FAST: Duration = Duration::from_millis(100);
pub const DURATION_NORMAL: Duration = Duration::from_millis(200);

// ── Layout dimensions ──────────────────────────────────────────────

pub const TOPBAR_HEIGHT: Pixels = px(52.0);
pub const CONTENT_MAX_WIDTH: Pixels = px(960.0);
/// Below this viewport width grids collapse and hero type steps down.
pub const COMPACT_WIDTH: Pixels = px(760.0);
