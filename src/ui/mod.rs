mod components;
pub(crate) mod dialogs;
mod root;
#[allow(dead_code)] // Design token scale — not all values consumed yet
pub(crate) mod tokens;

pub(crate) use root::{is_compact, RecapRoot};
