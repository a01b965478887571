use std::fmt;

/// A parsed path template
///
/// Always holds at least one segment. `verb` is the optional custom action
/// after the final `:`, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub segments: Vec<Segment>,
    pub verb: Option<String>,
}

/// One `/`-separated element of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matched verbatim, e.g. `v1`, `*` or `**`
    Literal(String),
    /// A `{field.path}` or `{field.path=pattern}` capture
    Variable(Variable),
}

/// A captured request field
///
/// `name` is the raw field path as written in the template (`book_id`,
/// `shelf.owner_id`). When `parts` is empty the variable captures a single
/// segment; otherwise `parts` is the literal/wildcard pattern it captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub parts: Vec<String>,
}

impl Variable {
    /// The capture pattern, `*` for a plain `{name}`
    #[must_use]
    pub fn pattern(&self) -> String {
        if self.parts.is_empty() {
            "*".to_string()
        } else {
            self.parts.join("/")
        }
    }
}

impl Segment {
    #[must_use]
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Segment::Variable(v) => Some(v),
            Segment::Literal(_) => None,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parts.is_empty() {
            write!(f, "{{{}}}", self.name)
        } else {
            write!(f, "{{{}={}}}", self.name, self.parts.join("/"))
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(s) => f.write_str(s),
            Segment::Variable(v) => v.fmt(f),
        }
    }
}

/// Renders the canonical template text; parsing the output yields an equal `Path`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        if let Some(verb) = &self.verb {
            write!(f, ":{verb}")?;
        }
        Ok(())
    }
}
