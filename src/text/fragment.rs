use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// A Fragment is the smallest unit of emitted markup: static punctuation such
/// as `</`, or a piece of text borrowed from (or built for) a render node.
/// Borrowing lets serialization walk a tree without copying leaf values.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fragment<'a>(Cow<'a, str>);

impl<'a> Fragment<'a> {
    /// Create a fragment borrowing `s`
    pub fn borrowed(s: &'a str) -> Self {
        Fragment(Cow::Borrowed(s))
    }

    /// Create a fragment owning `s`
    pub fn owned(s: String) -> Self {
        Fragment(Cow::Owned(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Byte length, used to size the final buffer
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> From<&'a str> for Fragment<'a> {
    fn from(s: &'a str) -> Self {
        Fragment::borrowed(s)
    }
}

impl From<String> for Fragment<'_> {
    fn from(s: String) -> Self {
        Fragment::owned(s)
    }
}

impl Display for Fragment<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
