mod markdown_renderer;
mod syntax;

pub use markdown_renderer::MarkdownRenderer;
pub use syntax::DEFAULT_THEME;
