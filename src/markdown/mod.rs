pub mod engine;
pub mod renderer;
pub mod toc;
pub mod utils;

pub use renderer::MarkdownRenderer;
pub use utils::strip_tags;
