use askama::Template;

use crate::http_rule::HttpBinding;
use crate::naming::field_path_accessor;

/// One generated method stub
#[derive(Debug, Clone)]
pub struct MethodStub {
    /// RPC method name, used as the JS method name
    pub name: String,
    /// GET, PUT, POST or DELETE
    pub http_method: String,
    /// URL binding escaped for a JS template literal
    pub binding: String,
    /// Whether the runtime sends the request as the JSON body
    pub has_body: bool,
    /// JS array literal of the JSON names already carried by the URL
    pub excluded_fields: String,
}

impl MethodStub {
    /// Build the stub for method `name` from its HTTP binding
    ///
    /// # Errors
    ///
    /// Returns an error if the excluded field list cannot be serialized.
    pub fn new(name: &str, binding: &HttpBinding) -> anyhow::Result<Self> {
        let excluded: Vec<String> = binding
            .excluded_fields()
            .into_iter()
            .map(field_path_accessor)
            .collect();
        Ok(Self {
            name: name.to_string(),
            http_method: binding.method.as_str().to_string(),
            binding: escape_template_literal(&binding.binding()),
            has_body: binding.has_body,
            excluded_fields: serde_json::to_string(&excluded)?,
        })
    }
}

/// A service and the stubs of its transcoded methods
#[derive(Debug, Clone)]
pub struct ServiceStub {
    pub name: String,
    pub methods: Vec<MethodStub>,
}

/// Template data for one generated client file
#[derive(Template)]
#[template(path = "client.js.txt", escape = "none")]
pub struct ClientFileTemplate {
    /// Generator version written in the header
    pub version: String,
    /// `.proto` file the output was generated from
    pub source_filename: String,
    /// Quoted module name passed to `require`
    pub runtime_module: String,
    pub services: Vec<ServiceStub>,
}

/// Render a client file
///
/// # Errors
///
/// Returns an error if the runtime module cannot be quoted or the template
/// fails to render.
pub fn render_client_file(
    version: &str,
    source_filename: &str,
    runtime_module: &str,
    services: Vec<ServiceStub>,
) -> anyhow::Result<String> {
    let rendered = ClientFileTemplate {
        version: version.to_string(),
        source_filename: source_filename.to_string(),
        runtime_module: serde_json::to_string(runtime_module)?,
        services,
    }
    .render()?;
    Ok(rendered)
}

/// Escape text for use inside a JS template literal
///
/// Interpolation markers (`${...}`) are left intact; path literals cannot
/// contain `{`, so no other `${` can appear.
#[must_use]
pub fn escape_template_literal(s: &str) -> String {
    s.replace('\\', "\\\\").replace('`', "\\`")
}
