//! Inline tokenizer.
//!
//! A raw text span starts out as a single `Inline::Plain` and is refined by an
//! ordered list of [`Step`]s. Every step only looks at `Plain` fragments, so
//! content already typed by an earlier step is never reinterpreted. Nothing
//! here fails: syntax that does not match is kept as literal text.

use crate::ast::inline::{Inline, Style};
use regex::{Captures, Regex};
use std::sync::OnceLock;

static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
static LINK_REGEX: OnceLock<Regex> = OnceLock::new();

fn image_regex() -> &'static Regex {
    IMAGE_REGEX.get_or_init(|| {
        Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
    })
}

fn link_regex() -> &'static Regex {
    LINK_REGEX
        .get_or_init(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex"))
}

/// One refinement pass over a fragment sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Split plain text on `delimiter`, typing odd pieces as `style`.
    Delimiter {
        delimiter: &'static str,
        style: Style,
    },
    /// Extract `![alt](url)`.
    Images,
    /// Extract `[text](url)` not preceded by `!`.
    Links,
}

impl Step {
    pub fn apply(&self, fragments: Vec<Inline>) -> Vec<Inline> {
        match *self {
            Step::Delimiter { delimiter, style } => split_delimiter(fragments, delimiter, style),
            Step::Images => split_images(fragments),
            Step::Links => split_links(fragments),
        }
    }
}

/// Delimiters first, then images, then links. Bracket syntax must not be
/// extracted before the delimiter passes have typed their content.
pub const DEFAULT_STEPS: [Step; 5] = [
    Step::Delimiter {
        delimiter: "**",
        style: Style::Bold,
    },
    Step::Delimiter {
        delimiter: "_",
        style: Style::Italic,
    },
    Step::Delimiter {
        delimiter: "`",
        style: Style::Code,
    },
    Step::Images,
    Step::Links,
];

/// Runs a fixed, ordered list of steps over one text span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tokenizer {
    steps: Vec<Step>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer {
            steps: DEFAULT_STEPS.to_vec(),
        }
    }
}

impl Tokenizer {
    pub fn with_steps(steps: Vec<Step>) -> Self {
        Tokenizer { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Tokenize `text`. Empty plain fragments left over by the steps
    /// (including an empty input) are dropped.
    pub fn tokenize(&self, text: &str) -> Vec<Inline> {
        let mut fragments = vec![Inline::plain(text)];
        for step in &self.steps {
            fragments = step.apply(fragments);
        }
        fragments.retain(|f| !(f.is_plain() && f.text().is_empty()));
        fragments
    }
}

/// Tokenize `text` with the default step order.
pub fn tokenize(text: &str) -> Vec<Inline> {
    Tokenizer::default().tokenize(text)
}

/// Split every plain fragment on `delimiter`. Pieces alternate plain/styled
/// starting with plain; empty pieces are dropped. A fragment with no
/// delimiter, or with an unmatched (odd) number of them, is kept as is.
pub fn split_delimiter(fragments: Vec<Inline>, delimiter: &str, style: Style) -> Vec<Inline> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let text = match fragment {
            Inline::Plain(text) if text.contains(delimiter) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        if text.matches(delimiter).count() % 2 == 1 {
            log::trace!("unmatched {delimiter:?} kept literally in {text:?}");
            out.push(Inline::Plain(text));
            continue;
        }

        for (i, piece) in text.split(delimiter).enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Inline::plain(piece));
            } else {
                out.push(style.wrap(piece));
            }
        }
    }
    out
}

/// Replace every `![alt](url)` in plain fragments with `Inline::Image`.
pub fn split_images(fragments: Vec<Inline>) -> Vec<Inline> {
    split_bracket_pattern(fragments, extract_images, |alt, url| Inline::image(alt, url))
}

/// Replace every `[text](url)` in plain fragments with `Inline::Link`.
pub fn split_links(fragments: Vec<Inline>) -> Vec<Inline> {
    split_bracket_pattern(fragments, extract_links, |text, url| Inline::link(text, url))
}

/// A bracket-pattern match: byte range in the scanned text plus its label and
/// url.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BracketMatch<'t> {
    pub start: usize,
    pub end: usize,
    pub label: &'t str,
    pub url: &'t str,
}

impl<'t> BracketMatch<'t> {
    fn from_captures(caps: &Captures<'t>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(BracketMatch {
            start: whole.start(),
            end: whole.end(),
            label: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    }
}

/// All `![alt](url)` matches, left to right, non-overlapping.
pub fn extract_images(text: &str) -> Vec<BracketMatch<'_>> {
    image_regex()
        .captures_iter(text)
        .filter_map(|caps| BracketMatch::from_captures(&caps))
        .collect()
}

/// All `[text](url)` matches that are not immediately preceded by `!`.
///
/// `regex` has no look-behind, so a rejected candidate restarts the search
/// one character after its opening bracket.
pub fn extract_links(text: &str) -> Vec<BracketMatch<'_>> {
    let re = link_regex();
    let mut out = Vec::new();
    let mut pos = 0;
    while pos <= text.len() {
        let Some(m) = re.captures_at(text, pos).and_then(|c| BracketMatch::from_captures(&c))
        else {
            break;
        };
        if text[..m.start].ends_with('!') {
            pos = m.start + 1;
            continue;
        }
        pos = m.end;
        out.push(m);
    }
    out
}

fn split_bracket_pattern<E, M>(fragments: Vec<Inline>, extract: E, make: M) -> Vec<Inline>
where
    E: for<'t> Fn(&'t str) -> Vec<BracketMatch<'t>>,
    M: Fn(&str, &str) -> Inline,
{
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let text = match fragment {
            Inline::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let matches = extract(&text);
        if matches.is_empty() {
            drop(matches);
            out.push(Inline::Plain(text));
            continue;
        }

        let mut last = 0;
        for m in &matches {
            let before = &text[last..m.start];
            if !before.is_empty() {
                out.push(Inline::plain(before));
            }
            out.push(make(m.label, m.url));
            last = m.end;
        }
        let rest = &text[last..];
        if !rest.is_empty() {
            out.push(Inline::plain(rest));
        }
    }
    out
}
