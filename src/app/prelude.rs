pub(crate) use gpui::{
    actions, div, prelude::*, px, relative, App, AppContext, Context, Entity,
    FocusHandle, Focusable, KeyBinding, Pixels, Render, SharedString, Subscription, Window,
};
pub(crate) use gpui_component::button::{Button, ButtonVariants as _};
pub(crate) use gpui_component::input::{Input, InputState};
pub(crate) use gpui_component::notification::Notification;
pub(crate) use gpui_component::{
    ActiveTheme as _, Disableable as _, Icon, IconName, Root, Sizable, StyledExt as _,
    WindowExt as _,
};
pub(crate) use std::collections::HashMap;
pub(crate) use std::path::{Path, PathBuf};
pub(crate) use std::sync::Arc;
