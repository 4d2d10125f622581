use std::fmt::{self, Display, Formatter};

/// A Region is the source text of one block viewed as a list of lines. The
/// block classifier inspects and rewrites the lines through chainable
/// operations and joins them back together once with `join`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Region<'a> {
    pub fn new() -> Self {
        Region { lines: Vec::new() }
    }

    /// Create a region from a multiline &str (split on "\n")
    pub fn from_str(s: &'a str) -> Self {
        let lines = if s.is_empty() {
            Vec::new()
        } else {
            s.split('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .collect()
        };
        Region { lines }
    }

    /// Drop lines that contain only whitespace
    pub fn without_blank_lines(mut self) -> Self {
        self.lines.retain(|l| !l.trim().is_empty());
        self
    }

    /// Trim surrounding whitespace from every line
    pub fn trim_each_line(mut self) -> Self {
        for line in &mut self.lines {
            *line = line.trim();
        }
        self
    }

    /// Whether every line satisfies `pred`. An empty region never does.
    pub fn all_lines<P: FnMut(usize, &str) -> bool>(&self, mut pred: P) -> bool {
        !self.lines.is_empty() && self.lines.iter().enumerate().all(|(i, l)| pred(i, l))
    }

    /// Strip a per-line prefix chosen by `prefix_of` (given the line index).
    /// Returns `None` when any line does not start with its prefix.
    pub fn strip_prefix_each_line<F>(&self, mut prefix_of: F) -> Option<Region<'a>>
    where
        F: FnMut(usize) -> String,
    {
        let mut lines = Vec::with_capacity(self.lines.len());
        for (i, line) in self.lines.iter().copied().enumerate() {
            lines.push(line.strip_prefix(prefix_of(i).as_str())?);
        }
        Some(Region { lines })
    }

    pub fn lines(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join lines with `sep`. This is the only place the result is allocated.
    pub fn join(&self, sep: &str) -> String {
        self.lines.join(sep)
    }

    /// Consume the Region and return its lines as owned Strings.
    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_iter().map(str::to_string).collect()
    }
}

impl Display for Region<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("\n"))
    }
}
