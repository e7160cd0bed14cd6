mod collector;
mod model;

pub use collector::collect_pages;
pub use model::Page;
