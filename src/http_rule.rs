//! # HTTP Rule Extraction
//!
//! Locates the `google.api.http` rule of an RPC method and turns it into an
//! [`HttpBinding`]: the HTTP verb, the parsed path template and whether the
//! request travels in the body.
//!
//! Methods without a rule are not transcoded and are skipped: extraction
//! returns `Ok(None)` for them. A rule that is present but cannot be
//! expressed by the generated client is a [`RuleError`].

use std::fmt;

use http::Method;
use prost::Message;
use tracing::{debug, warn};

use crate::descriptor::http_rule::Pattern;
use crate::descriptor::{HttpRule, MethodDescriptorProto, MethodOptions};
use crate::path_template::{self, Path, PathTemplateError};

/// Body selector meaning "the whole request message"
pub const WHOLE_BODY: &str = "*";

/// HTTP transcoding of a single RPC method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBinding {
    /// One of GET, PUT, POST or DELETE
    pub method: Method,
    /// Path template as written in the rule
    pub template: String,
    /// Parsed form of `template`
    pub path: Path,
    /// Whether the request is sent as the JSON body
    pub has_body: bool,
}

impl HttpBinding {
    /// URL expression for the generated stub
    #[must_use]
    pub fn binding(&self) -> String {
        self.path.binding()
    }

    /// Request fields carried by the URL
    #[must_use]
    pub fn excluded_fields(&self) -> Vec<&str> {
        self.path.excluded_fields()
    }
}

/// Error raised when a method's HTTP rule cannot be used
#[derive(Debug)]
pub enum RuleError {
    /// The method options do not decode as `MethodOptions` carrying an
    /// `HttpRule` extension
    InvalidOptions {
        method: String,
        source: prost::DecodeError,
    },
    /// The rule sets a pattern kind with no client verb (`patch`, `custom`)
    UnsupportedPattern { method: String, kind: &'static str },
    /// The rule's path template is malformed
    InvalidTemplate {
        method: String,
        source: PathTemplateError,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::InvalidOptions { method, source } => {
                write!(
                    f,
                    "method {method}: options do not decode as an HttpRule extension: {source}"
                )
            }
            RuleError::UnsupportedPattern { method, kind } => {
                write!(f, "method {method}: unexpected http pattern '{kind}'")
            }
            RuleError::InvalidTemplate { method, source } => {
                write!(f, "method {method}: {source}")
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// Extract the HTTP binding of `method`
///
/// # Returns
///
/// - `Ok(None)` when the method has no options, no `google.api.http` rule,
///   or a rule whose pattern is unset
/// - `Ok(Some(binding))` for `get`, `put`, `post` and `delete` rules
///
/// # Errors
///
/// Returns a [`RuleError`] when the options fail to decode, the pattern kind
/// is `patch` or `custom`, or the path template does not parse.
pub fn extract_rule(method: &MethodDescriptorProto) -> Result<Option<HttpBinding>, RuleError> {
    let name = method.name();
    let Some(raw_options) = method.options.as_deref() else {
        debug!(method = name, "no method options, skipping");
        return Ok(None);
    };

    let options = MethodOptions::decode(raw_options).map_err(|source| RuleError::InvalidOptions {
        method: name.to_string(),
        source,
    })?;
    let Some(rule) = options.http else {
        debug!(method = name, "no google.api.http rule, skipping");
        return Ok(None);
    };

    binding_from_rule(name, &rule)
}

/// Build the binding for an already decoded rule
///
/// # Errors
///
/// See [`extract_rule`].
pub fn binding_from_rule(method: &str, rule: &HttpRule) -> Result<Option<HttpBinding>, RuleError> {
    let (verb, template) = match &rule.pattern {
        None => {
            debug!(method, "http rule has no pattern, skipping");
            return Ok(None);
        }
        Some(Pattern::Get(path)) => (Method::GET, path),
        Some(Pattern::Put(path)) => (Method::PUT, path),
        Some(Pattern::Post(path)) => (Method::POST, path),
        Some(Pattern::Delete(path)) => (Method::DELETE, path),
        Some(pattern @ (Pattern::Patch(_) | Pattern::Custom(_))) => {
            return Err(RuleError::UnsupportedPattern {
                method: method.to_string(),
                kind: pattern.kind(),
            })
        }
    };

    let path = path_template::parse(template).map_err(|source| RuleError::InvalidTemplate {
        method: method.to_string(),
        source,
    })?;

    let has_body = rule.body == WHOLE_BODY;
    if !has_body && !rule.body.is_empty() {
        warn!(
            method,
            body = %rule.body,
            "only body \"*\" is supported, request fields will be sent as query parameters"
        );
    }
    if !rule.additional_bindings.is_empty() {
        debug!(
            method,
            count = rule.additional_bindings.len(),
            "ignoring additional_bindings"
        );
    }

    Ok(Some(HttpBinding {
        method: verb,
        template: template.clone(),
        path,
        has_body,
    }))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::descriptor::CustomHttpPattern;

    fn rule(pattern: Pattern, body: &str) -> HttpRule {
        HttpRule {
            body: body.to_string(),
            pattern: Some(pattern),
            ..Default::default()
        }
    }

    fn method_with(rule: Option<HttpRule>) -> MethodDescriptorProto {
        let options = MethodOptions {
            http: rule,
            ..Default::default()
        };
        MethodDescriptorProto {
            name: Some("GetBook".into()),
            options: Some(options.encode_to_vec()),
            ..Default::default()
        }
    }

    #[test]
    fn test_put_rule() {
        let m = method_with(Some(rule(Pattern::Put("/v1/{book.name=books/*}".into()), "*")));
        let binding = extract_rule(&m).unwrap().unwrap();
        assert_eq!(binding.method, Method::PUT);
        assert!(binding.has_body);
        assert_eq!(binding.template, "/v1/{book.name=books/*}");
        assert_eq!(binding.binding(), "/v1/${req.book.name}");
        assert_eq!(binding.excluded_fields(), vec!["book.name"]);
    }

    #[test]
    fn test_each_supported_verb() {
        for (pattern, expected) in [
            (Pattern::Get("/a".into()), Method::GET),
            (Pattern::Put("/a".into()), Method::PUT),
            (Pattern::Post("/a".into()), Method::POST),
            (Pattern::Delete("/a".into()), Method::DELETE),
        ] {
            let binding = binding_from_rule("M", &rule(pattern, "")).unwrap().unwrap();
            assert_eq!(binding.method, expected);
            assert!(!binding.has_body);
        }
    }

    #[test]
    fn test_no_rule_is_skipped() {
        let bare = MethodDescriptorProto {
            name: Some("Ping".into()),
            ..Default::default()
        };
        assert!(extract_rule(&bare).unwrap().is_none());
        assert!(extract_rule(&method_with(None)).unwrap().is_none());

        let empty = HttpRule::default();
        assert!(binding_from_rule("Ping", &empty).unwrap().is_none());
    }

    #[test]
    fn test_unsupported_pattern_is_error() {
        let err = binding_from_rule("M", &rule(Pattern::Patch("/a".into()), "*")).unwrap_err();
        assert!(matches!(err, RuleError::UnsupportedPattern { kind: "patch", .. }));

        let custom = Pattern::Custom(CustomHttpPattern {
            kind: "HEAD".into(),
            path: "/a".into(),
        });
        let err = binding_from_rule("M", &rule(custom, "")).unwrap_err();
        assert_eq!(err.to_string(), "method M: unexpected http pattern 'custom'");
    }

    #[test]
    fn test_invalid_options_is_error() {
        let m = MethodDescriptorProto {
            name: Some("Broken".into()),
            // field 72295728, length-delimited, claims 5 bytes but has 1
            options: Some(vec![0x82, 0xd3, 0xe4, 0x93, 0x02, 0x05, 0x12]),
            ..Default::default()
        };
        let err = extract_rule(&m).unwrap_err();
        assert!(matches!(err, RuleError::InvalidOptions { .. }));
    }

    #[test]
    fn test_invalid_template_is_error() {
        let err = binding_from_rule("M", &rule(Pattern::Get("/v1/{}".into()), "")).unwrap_err();
        let RuleError::InvalidTemplate { source, .. } = &err else {
            panic!("expected InvalidTemplate, got {err:?}");
        };
        assert_eq!(source.template(), "/v1/{}");
        assert!(err.to_string().starts_with("method M: cannot parse path template [/v1/{}]"));
    }

    #[test]
    fn test_named_body_field_is_not_whole_body() {
        let binding = binding_from_rule("M", &rule(Pattern::Post("/v1/books".into()), "book"))
            .unwrap()
            .unwrap();
        assert!(!binding.has_body);
    }
}
