use thiserror::Error;

/// Invariant violations found while serializing a render tree. These point at
/// a malformed tree built upstream, never at bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Tag must not be null for container node")]
    ContainerMissingTag,

    #[error("Children must not be null for container node <{tag}>")]
    ContainerMissingChildren { tag: String },

    #[error("Leaf node {} has no value", describe_tag(.tag))]
    LeafMissingValue { tag: Option<String> },
}

fn describe_tag(tag: &Option<String>) -> String {
    match tag {
        Some(t) => format!("<{t}>"),
        None => "without tag".to_string(),
    }
}

/// Ordered attribute map. Output order is insertion order; inserting an
/// existing name replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Attributes {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as ` name="value"` pairs in order. Values are not escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.entries {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// A node of the output element tree.
///
/// Construction never validates: a `Container` without a tag or a tagged
/// `Leaf` without a value can exist, and is only rejected when serialized.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RenderNode {
    /// Raw text when `tag` is `None`, otherwise `<tag attrs>value</tag>`.
    /// Void elements such as `img` carry no value.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    Container {
        tag: Option<String>,
        children: Option<Vec<RenderNode>>,
        attributes: Attributes,
    },
}

impl RenderNode {
    /// Untagged leaf, emitted verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        RenderNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        RenderNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Tagged leaf without a value, e.g. `img`.
    pub fn void(tag: impl Into<String>) -> Self {
        RenderNode::Leaf {
            tag: Some(tag.into()),
            value: None,
            attributes: Attributes::new(),
        }
    }

    pub fn container(tag: impl Into<String>, children: Vec<RenderNode>) -> Self {
        RenderNode::Container {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(name, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            RenderNode::Leaf { tag, .. } | RenderNode::Container { tag, .. } => tag.as_deref(),
        }
    }

    /// The leaf value. Containers have none.
    pub fn value(&self) -> Option<&str> {
        match self {
            RenderNode::Leaf { value, .. } => value.as_deref(),
            RenderNode::Container { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&[RenderNode]> {
        match self {
            RenderNode::Container { children, .. } => children.as_deref(),
            RenderNode::Leaf { .. } => None,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            RenderNode::Leaf { attributes, .. } | RenderNode::Container { attributes, .. } => {
                attributes
            }
        }
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            RenderNode::Leaf { attributes, .. } | RenderNode::Container { attributes, .. } => {
                attributes
            }
        }
    }

    /// Serialize this node and its subtree.
    pub fn to_html(&self) -> Result<String, ValidationError> {
        crate::ast::writer::serialize(self)
    }
}
