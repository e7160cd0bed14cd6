use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::markdown::utils::plain_text;

lazy_static! {
    // Headings as comrak renders them, before any id is attached
    static ref HEADING_REGEX: Regex =
        Regex::new(r"(?s)<h([1-6])>(.*?)</h([1-6])>").expect("valid heading regex");
}

/// Anchor used when a heading has no sluggable text
const FALLBACK_ANCHOR: &str = "section";

/// A heading found in a rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub id: String,
    /// Inner markup of the heading element
    pub label: String,
}

/// Hands out anchors that are unique across every document of a site
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    used: HashSet<String>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an anchor derived from a heading's markup.
    ///
    /// Repeated slugs get `-1`, `-2`, ... appended.
    pub fn anchor_for(&mut self, label: &str) -> String {
        let mut base = slug::slugify(plain_text(label));
        if base.is_empty() {
            base = FALLBACK_ANCHOR.to_string();
        }

        let mut anchor = base.clone();
        let mut suffix = 0;
        while self.used.contains(&anchor) {
            suffix += 1;
            anchor = format!("{}-{}", base, suffix);
        }

        self.used.insert(anchor.clone());
        anchor
    }
}

/// Give every heading of a rendered document an `id`, returning the new HTML
/// and the headings in document order.
pub fn anchor_headings(html: &str, anchors: &mut AnchorRegistry) -> (String, Vec<Heading>) {
    let mut headings = Vec::new();

    let anchored = HEADING_REGEX.replace_all(html, |caps: &Captures| {
        if caps[1] != caps[3] {
            return caps[0].to_string();
        }

        let level = caps[1].as_bytes()[0] - b'0';
        let label = caps[2].to_string();
        let id = anchors.anchor_for(&label);
        let markup = format!("<h{level} id=\"{id}\">{label}</h{level}>", level = level, id = id, label = label);

        headings.push(Heading { level, id, label });
        markup
    });

    (anchored.into_owned(), headings)
}
