mod text;

pub use text::{plain_text, strip_tags};
