//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the analysis engine over MCP on stdio so editors and assistants can
//! analyze chapter text without going through files.
//!
//! The server is a presentation layer over `plume-core`: each `#[tool]` method
//! delegates to the same [`TextAnalyzer`] and review pass the CLI commands use.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use plume_core::analysis::TextAnalyzer;
use plume_core::markdown;
use plume_core::review::{ReviewMetadata, review};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Deserialize an optional string, mapping `null` to the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let text: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(text.unwrap_or_default())
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct AnalyzeTextParams {
    /// The chapter text. Missing or null text is analyzed as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Option<String>")]
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `review_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct ReviewTextParams {
    /// The chapter text. Missing or null text is analyzed as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Option<String>")]
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Chapter title to attach to the review.
    pub title: Option<String>,
    /// Book title to attach to the review.
    pub book: Option<String>,
}

/// MCP server exposing the analysis engine.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    analyzer: TextAnalyzer,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(TextAnalyzer::default(), Some(plume_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server around a configured engine.
    ///
    /// Texts longer than `max_input_bytes` are rejected; `None` disables the limit.
    pub fn new(analyzer: TextAnalyzer, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            analyzer,
            max_input_bytes,
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::internal_error(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    text.len()
                ),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn prose<'a>(&self, text: &'a str, strip_markdown: bool) -> std::borrow::Cow<'a, str> {
        if strip_markdown {
            markdown::strip_to_prose(text).into()
        } else {
            text.into()
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "analysis": self.analyzer.settings(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Analyze a chapter of French prose.
    #[tool(
        description = "Analyze French prose: word, sentence, and paragraph counts, reading time, sentiment, readability, complexity, frequent words, word lengths, dialogue ratio, and repetitions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let report = self
            .analyzer
            .analyze(&self.prose(&params.text, params.strip_markdown));

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_text",
            words = report.word_count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Review a chapter: analysis plus grade, suggestions, and summary.
    #[tool(
        description = "Review a chapter of French prose. Returns the full analysis with a 0-100 grade, improvement suggestions, and a plain-language summary."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn review_text(
        &self,
        Parameters(params): Parameters<ReviewTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "review_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let report = self
            .analyzer
            .analyze(&self.prose(&params.text, params.strip_markdown));
        let chapter = review(
            report,
            ReviewMetadata {
                title: params.title,
                book: params.book,
            },
        );

        let json = serde_json::to_string_pretty(&chapter)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "review_text",
            score = chapter.grade.score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for raw metrics and review_text for a graded review of French prose.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
