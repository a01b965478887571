//! Name conversion helpers shared by the binding compiler and the renderer.

/// Convert a snake_case identifier to lowerCamelCase
///
/// Underscores are word boundaries and are dropped. The first character of
/// the result is lowercased, the first character of every following word is
/// uppercased, and the remaining characters are kept as written.
#[must_use]
pub fn to_lower_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split('_').filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if out.is_empty() {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Convert a dotted field path to the accessor used by generated code
///
/// Each component is camel-cased on its own: `shelf.owner_id` becomes
/// `shelf.ownerId`.
#[must_use]
pub fn field_path_accessor(field_path: &str) -> String {
    field_path
        .split('.')
        .map(to_lower_camel_case)
        .collect::<Vec<_>>()
        .join(".")
}
