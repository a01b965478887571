//! Compiles a parsed [`Path`] into what generated client code needs: the
//! URL binding expression and the request fields already carried by the URL.

use super::ast::{Path, Segment, Variable};
use crate::naming::field_path_accessor;

/// Name of the request object in generated stubs
pub const REQUEST_IDENT: &str = "req";

impl Variable {
    /// Camel-cased accessor for this variable's field path
    #[must_use]
    pub fn binding_name(&self) -> String {
        field_path_accessor(&self.name)
    }

    /// Interpolation marker, e.g. `${req.bookId}`
    #[must_use]
    pub fn binding(&self) -> String {
        format!("${{{}.{}}}", REQUEST_IDENT, self.binding_name())
    }
}

impl Path {
    /// URL template with an interpolation marker in place of every variable
    ///
    /// `/v1/{name=shelves/*}/books/{book_id}:get` compiles to
    /// `/v1/${req.name}/books/${req.bookId}:get`.
    #[must_use]
    pub fn binding(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Variable(var) => out.push_str(&var.binding()),
            }
        }
        if let Some(verb) = &self.verb {
            out.push(':');
            out.push_str(verb);
        }
        out
    }

    /// Raw field paths captured by the template, in path order without
    /// duplicates
    #[must_use]
    pub fn excluded_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for var in self.variables() {
            if !fields.contains(&var.name.as_str()) {
                fields.push(&var.name);
            }
        }
        fields
    }

    /// Variables in path order
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.segments.iter().filter_map(Segment::as_variable)
    }
}
