//! Theme handling: the page template and the static assets shipped with it.

mod assets;
mod template;

pub use assets::copy_theme_assets;
pub use template::{PageContext, PageTemplate};
