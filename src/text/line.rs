use super::Fragment;
use std::fmt::{self, Display, Formatter};

/// A Line is a sequence of Fragments. Fragments are only joined in `apply()`,
/// so a whole element tree can be written into one Line and allocated once.
#[derive(Clone, Debug, Default)]
pub struct Line<'a> {
    fragments: Vec<Fragment<'a>>,
}

impl<'a> Line<'a> {
    pub fn new() -> Self {
        Line {
            fragments: Vec::new(),
        }
    }

    /// Push fragment to the end. Empty fragments are skipped.
    pub fn push<F: Into<Fragment<'a>>>(&mut self, f: F) -> &mut Self {
        let f = f.into();
        if !f.is_empty() {
            self.fragments.push(f);
        }
        self
    }

    /// Append `<tag attrs>`
    pub fn open_tag(&mut self, tag: &'a str, attrs: String) -> &mut Self {
        self.push("<").push(tag).push(attrs).push(">")
    }

    /// Append `</tag>`
    pub fn close_tag(&mut self, tag: &'a str) -> &mut Self {
        self.push("</").push(tag).push(">")
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Join fragments into a single String
    pub fn apply(&self) -> String {
        let cap = self.fragments.iter().map(Fragment::len).sum();
        let mut out = String::with_capacity(cap);
        for frag in &self.fragments {
            out.push_str(frag.as_str());
        }
        out
    }
}

impl Display for Line<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for frag in &self.fragments {
            f.write_str(frag.as_str())?;
        }
        Ok(())
    }
}
