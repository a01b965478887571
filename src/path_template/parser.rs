//! Recursive-descent parser for HTTP path templates.
//!
//! ```text
//! Template  := "/" Segments [ Verb ]
//! Segments  := Segment ( "/" Segment )*
//! Segment   := Variable | Literal
//! Variable  := "{" FieldPath [ "=" Segments ] "}"
//! FieldPath := identifier ( "." identifier )*
//! Verb      := ":" Literal
//! ```

use std::str::FromStr;

use super::ast::{Path, Segment, Variable};
use super::error::{PathTemplateError, PathTemplateErrorKind};
use super::scanner::Scanner;

/// Characters that end a literal run
const LITERAL_TERMINATORS: [char; 5] = ['/', ':', '{', '}', '='];

fn is_literal_char(c: char) -> bool {
    !LITERAL_TERMINATORS.contains(&c)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Where a `Segments` production is being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Template,
    /// Inside the `=` pattern of a variable; `}` closes it
    Variable,
}

/// Parse a path template such as `/v1/{parent=shelves/*}/books/{book_id}:get`
///
/// # Errors
///
/// Returns a [`PathTemplateError`] describing the first violation of the
/// grammar. No partial result is produced.
pub fn parse(template: &str) -> Result<Path, PathTemplateError> {
    Parser::new(template).parse_template()
}

impl FromStr for Path {
    type Err = PathTemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

struct Parser<'a> {
    template: &'a str,
    scanner: Scanner<'a>,
}

impl<'a> Parser<'a> {
    fn new(template: &'a str) -> Self {
        Self {
            template,
            scanner: Scanner::new(template),
        }
    }

    fn error(&self, offset: usize, kind: PathTemplateErrorKind) -> PathTemplateError {
        PathTemplateError::new(self.template, offset, kind)
    }

    fn unexpected(&self, offset: usize, found: char, context: &'static str) -> PathTemplateError {
        self.error(offset, PathTemplateErrorKind::UnexpectedChar { found, context })
    }

    fn parse_template(mut self) -> Result<Path, PathTemplateError> {
        match self.scanner.next() {
            Some('/') => {}
            found => {
                return Err(self.error(0, PathTemplateErrorKind::MissingLeadingSlash { found }))
            }
        }

        let segments = self.parse_segments(Context::Template)?;
        let verb = self.parse_verb()?;
        Ok(Path { segments, verb })
    }

    fn parse_segments(&mut self, context: Context) -> Result<Vec<Segment>, PathTemplateError> {
        let mut segments = vec![self.parse_segment(context)?];
        while self.scanner.peek() == Some('/') {
            self.scanner.next();
            segments.push(self.parse_segment(context)?);
        }
        Ok(segments)
    }

    fn parse_segment(&mut self, context: Context) -> Result<Segment, PathTemplateError> {
        let start = self.scanner.pos();

        if self.scanner.peek() == Some('{') {
            if context == Context::Variable {
                return Err(self.error(start, PathTemplateErrorKind::NestedVariable));
            }
            self.scanner.next();
            return self.parse_variable(start).map(Segment::Variable);
        }

        let literal = self.scanner.accept_run(is_literal_char);
        if literal.is_empty() {
            return Err(match self.scanner.peek() {
                Some('=') => self.unexpected(start, '=', "segment"),
                Some('}') if context == Context::Template => {
                    self.unexpected(start, '}', "segment")
                }
                _ => self.error(start, PathTemplateErrorKind::EmptySegment),
            });
        }
        Ok(Segment::Literal(literal.to_string()))
    }

    /// Parse the remainder of a variable; `open` is the offset of its `{`
    fn parse_variable(&mut self, open: usize) -> Result<Variable, PathTemplateError> {
        let name = self.parse_field_path(open)?;

        let mut parts = Vec::new();
        if self.scanner.peek() == Some('=') {
            self.scanner.next();
            for segment in self.parse_segments(Context::Variable)? {
                match segment {
                    Segment::Literal(part) => parts.push(part),
                    Segment::Variable(_) => {
                        return Err(self.error(open, PathTemplateErrorKind::NestedVariable))
                    }
                }
            }
        }

        let at = self.scanner.pos();
        match self.scanner.next() {
            Some('}') => Ok(Variable { name, parts }),
            None => Err(self.error(
                open,
                PathTemplateErrorKind::UnterminatedVariable { field_path: name },
            )),
            Some(c) => Err(self.unexpected(at, c, "variable")),
        }
    }

    fn parse_field_path(&mut self, open: usize) -> Result<String, PathTemplateError> {
        let start = self.scanner.pos();
        loop {
            let ident_start = self.scanner.pos();
            let ident = self.scanner.accept_run(is_ident_char);

            if ident.is_empty() {
                let field_path = self.template[start..ident_start].to_string();
                return Err(match self.scanner.peek() {
                    None => self.error(
                        open,
                        PathTemplateErrorKind::UnterminatedVariable { field_path },
                    ),
                    Some('}' | '=') if ident_start == start => {
                        self.error(start, PathTemplateErrorKind::EmptyFieldPath)
                    }
                    Some('.' | '}' | '=') => self.error(
                        ident_start,
                        PathTemplateErrorKind::InvalidFieldPath { field_path },
                    ),
                    Some(c) => self.unexpected(ident_start, c, "field path"),
                });
            }
            if ident.starts_with(|c: char| c.is_ascii_digit()) {
                let field_path = self.template[start..self.scanner.pos()].to_string();
                return Err(self.error(
                    ident_start,
                    PathTemplateErrorKind::InvalidFieldPath { field_path },
                ));
            }

            if self.scanner.peek() == Some('.') {
                self.scanner.next();
            } else {
                return Ok(self.template[start..self.scanner.pos()].to_string());
            }
        }
    }

    fn parse_verb(&mut self) -> Result<Option<String>, PathTemplateError> {
        let colon = self.scanner.pos();
        match self.scanner.next() {
            None => Ok(None),
            Some(':') => {
                let verb = self.scanner.accept_run(is_literal_char);
                let at = self.scanner.pos();
                match self.scanner.peek() {
                    Some(c) => Err(self.unexpected(at, c, "verb")),
                    None if verb.is_empty() => {
                        Err(self.error(colon, PathTemplateErrorKind::EmptyVerb))
                    }
                    None => Ok(Some(verb.to_string())),
                }
            }
            Some(c) => Err(self.unexpected(colon, c, "path")),
        }
    }
}
