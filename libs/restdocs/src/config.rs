//! Configuration for snippet generation

use std::path::PathBuf;
use std::str::FromStr;

use crate::RestDocsError;

pub const RESTDOCS_OUTPUT_DIR: &str = "RESTDOCS_OUTPUT_DIR";
pub const RESTDOCS_SNIPPET_FORMAT: &str = "RESTDOCS_SNIPPET_FORMAT";
pub const RESTDOCS_URI_SCHEME: &str = "RESTDOCS_URI_SCHEME";
pub const RESTDOCS_URI_HOST: &str = "RESTDOCS_URI_HOST";
pub const RESTDOCS_URI_PORT: &str = "RESTDOCS_URI_PORT";
pub const RESTDOCS_PRETTY_PRINT: &str = "RESTDOCS_PRETTY_PRINT";
pub const RESTDOCS_EXCLUDE_HEADERS: &str = "RESTDOCS_EXCLUDE_HEADERS";

pub const DEFAULT_OUTPUT_DIR: &str = "target/generated-snippets";

/// Markup used for generated snippets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SnippetFormat {
    #[default]
    Asciidoctor,
    Markdown,
}

impl SnippetFormat {
    /// File extension of snippets in this format
    pub fn extension(&self) -> &'static str {
        match self {
            SnippetFormat::Asciidoctor => "adoc",
            SnippetFormat::Markdown => "md",
        }
    }

    /// Wrap `content` in a source block, optionally tagged with a language
    pub fn code_block(&self, language: Option<&str>, content: &str) -> String {
        match self {
            SnippetFormat::Asciidoctor => {
                let attributes = match language {
                    Some(lang) => format!("[source,{lang},options=\"nowrap\"]"),
                    None => "[source,options=\"nowrap\"]".to_string(),
                };
                format!("{attributes}\n----\n{content}\n----\n")
            }
            SnippetFormat::Markdown => {
                format!("```{}\n{content}\n```\n", language.unwrap_or(""))
            }
        }
    }
}

impl FromStr for SnippetFormat {
    type Err = RestDocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asciidoctor" | "asciidoc" | "adoc" => Ok(SnippetFormat::Asciidoctor),
            "markdown" | "md" => Ok(SnippetFormat::Markdown),
            other => Err(RestDocsError::InvalidConfig(format!(
                "unknown snippet format '{other}'"
            ))),
        }
    }
}

/// Configuration for documenting exchanges
#[derive(Debug, Clone)]
pub struct RestDocsConfig {
    /// Directory that receives one sub-directory per documented exchange
    pub output_dir: PathBuf,
    /// Snippet markup
    pub format: SnippetFormat,
    /// Scheme shown in documented URIs
    pub uri_scheme: String,
    /// Host shown in documented URIs and the `Host` header
    pub uri_host: String,
    /// Port shown in documented URIs (omitted when it is the scheme default)
    pub uri_port: u16,
    /// Re-indent JSON bodies before writing them
    pub pretty_print: bool,
    /// Header names (case-insensitive) removed from every snippet
    pub exclude_headers: Vec<String>,
}

impl Default for RestDocsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: SnippetFormat::default(),
            uri_scheme: "http".to_string(),
            uri_host: "localhost".to_string(),
            uri_port: 8080,
            pretty_print: false,
            exclude_headers: vec![],
        }
    }
}

impl RestDocsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from a variable lookup; invalid values are logged and replaced by defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();

        let output_dir = lookup(RESTDOCS_OUTPUT_DIR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(default.output_dir);

        let format = parse_or_default(
            RESTDOCS_SNIPPET_FORMAT,
            lookup(RESTDOCS_SNIPPET_FORMAT),
            default.format,
        );

        let uri_scheme = lookup(RESTDOCS_URI_SCHEME).unwrap_or(default.uri_scheme);
        let uri_host = lookup(RESTDOCS_URI_HOST).unwrap_or(default.uri_host);

        let uri_port =
            parse_or_default(RESTDOCS_URI_PORT, lookup(RESTDOCS_URI_PORT), default.uri_port);

        let pretty_print = parse_or_default(
            RESTDOCS_PRETTY_PRINT,
            lookup(RESTDOCS_PRETTY_PRINT).map(|v| v.to_lowercase()),
            default.pretty_print,
        );

        let exclude_headers = lookup(RESTDOCS_EXCLUDE_HEADERS)
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(default.exclude_headers);

        Self {
            output_dir,
            format,
            uri_scheme,
            uri_host,
            uri_port,
            pretty_print,
            exclude_headers,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_format(mut self, format: SnippetFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub fn exclude_header(mut self, name: &str) -> Self {
        self.exclude_headers.push(name.to_lowercase());
        self
    }

    /// Whether a header should be left out of the snippets
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude_headers
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(name))
    }

    /// `host[:port]`, with the port omitted when it is the scheme default
    pub fn authority(&self) -> String {
        let default_port = match self.uri_scheme.as_str() {
            "http" => Some(80),
            "https" => Some(443),
            _ => None,
        };

        if default_port == Some(self.uri_port) {
            self.uri_host.clone()
        } else {
            format!("{}:{}", self.uri_host, self.uri_port)
        }
    }

    /// Absolute URI shown in command-line snippets
    pub fn documented_uri(&self, path_and_query: &str) -> String {
        format!("{}://{}{}", self.uri_scheme, self.authority(), path_and_query)
    }
}

/// Parse an optional variable, warning and keeping `default` when the value is invalid
fn parse_or_default<T: FromStr>(env_var: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                env_var = env_var,
                value = %value,
                "ignoring invalid configuration value, using default"
            );
            default
        }),
        None => default,
    }
}
