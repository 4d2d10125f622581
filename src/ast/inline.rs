use crate::ast::node::RenderNode;

/// Inline level nodes produced by the tokenizer. Every variant owns its text;
/// only `Link` and `Image` carry a url.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Inline {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

/// Fieldless mirror of [`Inline`], handy for assertions and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// The kinds a delimiter split can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Italic,
    Code,
}

impl Style {
    pub fn wrap(self, text: impl Into<String>) -> Inline {
        let text = text.into();
        match self {
            Style::Bold => Inline::Bold(text),
            Style::Italic => Inline::Italic(text),
            Style::Code => Inline::Code(text),
        }
    }
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Inline::Plain(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Inline::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Inline::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    pub fn kind(&self) -> InlineKind {
        match self {
            Inline::Plain(_) => InlineKind::Plain,
            Inline::Bold(_) => InlineKind::Bold,
            Inline::Italic(_) => InlineKind::Italic,
            Inline::Code(_) => InlineKind::Code,
            Inline::Link { .. } => InlineKind::Link,
            Inline::Image { .. } => InlineKind::Image,
        }
    }

    /// Displayed text, or the alt text for images.
    pub fn text(&self) -> &str {
        match self {
            Inline::Plain(t) | Inline::Bold(t) | Inline::Italic(t) | Inline::Code(t) => t,
            Inline::Link { text, .. } => text,
            Inline::Image { alt, .. } => alt,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Inline::Link { url, .. } | Inline::Image { url, .. } => Some(url),
            Inline::Plain(_) | Inline::Bold(_) | Inline::Italic(_) | Inline::Code(_) => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Inline::Plain(_))
    }
}

/// Convert an `Inline` into the leaf `RenderNode` that displays it.
pub fn inline_to_node(inl: &Inline) -> RenderNode {
    match inl {
        Inline::Plain(t) => RenderNode::text(t.clone()),
        Inline::Bold(t) => RenderNode::leaf("b", t.clone()),
        Inline::Italic(t) => RenderNode::leaf("i", t.clone()),
        Inline::Code(t) => RenderNode::leaf("code", t.clone()),
        Inline::Link { text, url } => {
            RenderNode::leaf("a", text.clone()).with_attribute("href", url.clone())
        }
        Inline::Image { alt, url } => RenderNode::void("img")
            .with_attribute("src", url.clone())
            .with_attribute("alt", alt.clone()),
    }
}

/// Map a whole fragment sequence, preserving order.
pub fn inlines_to_nodes(inlines: &[Inline]) -> Vec<RenderNode> {
    inlines.iter().map(inline_to_node).collect()
}
