use std::fmt;

/// What went wrong while parsing a path template
///
/// [`UnexpectedChar`](PathTemplateErrorKind::UnexpectedChar) is a scan
/// failure (a character that cannot appear at the current grammar position);
/// every other variant is a structural parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathTemplateErrorKind {
    /// The template does not begin with `/`
    MissingLeadingSlash {
        /// First character of the template, `None` for an empty template
        found: Option<char>,
    },
    /// A character that is not valid at this position
    UnexpectedChar {
        /// The offending character
        found: char,
        /// Grammar production being parsed
        context: &'static str,
    },
    /// Two consecutive `/`, a trailing `/`, or a segment with no characters
    EmptySegment,
    /// `{}` or a variable whose field path is missing
    EmptyFieldPath,
    /// A field path component that is not an identifier (`{1abc}`, `{a..b}`)
    InvalidFieldPath {
        /// Field path text read so far
        field_path: String,
    },
    /// A `{` that reaches end of input before its closing `}`
    UnterminatedVariable {
        /// Field path of the unterminated variable
        field_path: String,
    },
    /// A `{` inside the pattern of another variable
    NestedVariable,
    /// A `:` with nothing after it
    EmptyVerb,
}

impl PathTemplateErrorKind {
    /// Whether this is a character-level scan failure rather than a
    /// structural one
    #[must_use]
    pub fn is_scan_error(&self) -> bool {
        matches!(self, PathTemplateErrorKind::UnexpectedChar { .. })
    }
}

impl fmt::Display for PathTemplateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathTemplateErrorKind::MissingLeadingSlash { found: Some(c) } => {
                write!(f, "template must start with '/', found '{c}'")
            }
            PathTemplateErrorKind::MissingLeadingSlash { found: None } => {
                write!(f, "template must start with '/', found end of input")
            }
            PathTemplateErrorKind::UnexpectedChar { found, context } => {
                write!(f, "unexpected '{found}' in {context}")
            }
            PathTemplateErrorKind::EmptySegment => write!(f, "empty segment"),
            PathTemplateErrorKind::EmptyFieldPath => write!(f, "empty field path in variable"),
            PathTemplateErrorKind::InvalidFieldPath { field_path } => {
                write!(f, "invalid field path '{field_path}' in variable")
            }
            PathTemplateErrorKind::UnterminatedVariable { field_path } => {
                write!(f, "unterminated variable '{{{field_path}'")
            }
            PathTemplateErrorKind::NestedVariable => {
                write!(f, "variables cannot be nested inside a variable pattern")
            }
            PathTemplateErrorKind::EmptyVerb => write!(f, "empty verb after ':'"),
        }
    }
}

/// Error returned when a path template cannot be parsed
///
/// Parsing stops at the first failure. The error keeps the full template
/// and the byte offset where parsing failed so diagnostics can point at the
/// offending text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplateError {
    template: String,
    offset: usize,
    kind: PathTemplateErrorKind,
}

impl PathTemplateError {
    pub(crate) fn new(template: &str, offset: usize, kind: PathTemplateErrorKind) -> Self {
        Self {
            template: template.to_string(),
            offset: offset.min(template.len()),
            kind,
        }
    }

    /// The complete template that failed to parse
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Byte offset of the failure within [`template`](Self::template)
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The kind of failure
    #[must_use]
    pub fn kind(&self) -> &PathTemplateErrorKind {
        &self.kind
    }

    /// Template text starting at the failure offset
    #[must_use]
    pub fn offending(&self) -> &str {
        self.template.get(self.offset..).unwrap_or_default()
    }
}

impl fmt::Display for PathTemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot parse path template [{}]: {} at offset {}",
            self.template, self.kind, self.offset
        )?;
        let rest = self.offending();
        if rest.is_empty() {
            write!(f, " (end of input)")
        } else {
            write!(f, " (near \"{rest}\")")
        }
    }
}

impl std::error::Error for PathTemplateError {}
