use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").expect("valid tag regex");
}

/// Strip HTML tags from a fragment, keeping entities as they are
pub fn strip_tags(html: &str) -> String {
    TAG_REGEX.replace_all(html, "").trim().to_string()
}

/// Readable text of an HTML fragment: tags stripped and entities decoded
pub fn plain_text(html: &str) -> String {
    html_escape::decode_html_entities(&strip_tags(html)).to_string()
}
