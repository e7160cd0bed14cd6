mod generator;
mod parser;

pub use generator::build_toc;
pub use parser::{anchor_headings, AnchorRegistry, Heading};
