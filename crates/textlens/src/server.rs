//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes sentence segmentation and text statistics to AI assistants over
//! stdio. Tools delegate to `textlens_core`; nothing here computes statistics
//! on its own.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use textlens_core::{AnalysisOptions, WordCase, analysis, segment};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Number of entries in the word-frequency table.
    pub top_words: Option<usize>,
    /// Reading speed for the reading time estimate.
    pub words_per_minute: Option<f64>,
    /// Count "Дом" and "дом" as different words.
    pub case_sensitive: Option<bool>,
}

/// Parameters for the `split_sentences` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SplitSentencesParams {
    /// The text to split.
    pub text: String,
}

/// MCP server exposing text analysis to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    options: AnalysisOptions,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(AnalysisOptions::default(), None)
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with configured analysis defaults and input limit.
    pub fn new(options: AnalysisOptions, max_input_bytes: Option<usize>) -> Self {
        Self {
            options,
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
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

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full statistics report for a text.
    #[tool(
        description = "Analyze text: sentence segmentation, per-sentence word and character counts with short/medium/long category, sentence statistics, word frequency and reading time. Tuned for Bulgarian."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;

        let mut options = self.options.clone();
        if let Some(top) = params.top_words {
            options.top_words = top;
        }
        if let Some(wpm) = params.words_per_minute {
            options.words_per_minute = wpm;
        }
        if let Some(sensitive) = params.case_sensitive {
            options.word_case = if sensitive {
                WordCase::Sensitive
            } else {
                WordCase::Insensitive
            };
        }

        let report = analysis::analyze_with(&params.text, &options);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_text",
            sentences = report.sentence_count(),
            words = report.total_words,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Split text into sentences.
    #[tool(
        description = "Split text into sentences. Handles Bulgarian abbreviations such as 'г.', 'проф.' and 'ул.'. Returns a JSON array of strings."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn split_sentences(
        &self,
        Parameters(params): Parameters<SplitSentencesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;

        let sentences = segment::split_sentences(&params.text);
        let json = serde_json::to_string_pretty(&sentences)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "split_sentences",
            sentences = sentences.len(),
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
                "{} MCP server. Use analyze_text for statistics and split_sentences for segmentation.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn analyze_params(text: &str) -> AnalyzeTextParams {
        AnalyzeTextParams {
            text: text.to_string(),
            top_words: None,
            words_per_minute: None,
            case_sensitive: None,
        }
    }

    #[test]
    fn server_info_has_name_and_tools() {
        let server = ProjectServer::default();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert!(info.capabilities.tools.is_some());
        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains("analyze_text"));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::default();
        let result = server
            .get_info(Parameters(GetInfoParams {
                format: "json".to_string(),
            }))
            .expect("get_info should succeed");

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::default();
        let result = server
            .get_info(Parameters(GetInfoParams {
                format: default_format(),
            }))
            .expect("get_info should succeed");

        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn analyze_text_tool_works() {
        let server = ProjectServer::default();
        let result = server
            .analyze_text(Parameters(analyze_params(
                "Срещнах проф. Иванов. Той е тук!",
            )))
            .expect("analyze_text should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["total_words"], 6);
        assert_eq!(json["sentence_stats"]["count"], 2);
        assert_eq!(json["sentences"][0]["length_category"], "short");
    }

    #[test]
    fn analyze_text_applies_overrides() {
        let server = ProjectServer::default();
        let mut params = analyze_params("Дом и дом.");
        params.case_sensitive = Some(true);
        params.top_words = Some(1);

        let result = server.analyze_text(Parameters(params)).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(extract_text(&result).unwrap()).unwrap();
        assert_eq!(json["unique_words"], 3);
        assert_eq!(json["common_words"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn analyze_text_rejects_oversize_input() {
        let server = ProjectServer::new(AnalysisOptions::default(), Some(4));
        assert!(
            server
                .analyze_text(Parameters(analyze_params("Твърде дълго.")))
                .is_err()
        );
    }

    #[test]
    fn split_sentences_tool_works() {
        let server = ProjectServer::default();
        let result = server
            .split_sentences(Parameters(SplitSentencesParams {
                text: "Това е първо. Това е второ!".to_string(),
            }))
            .expect("split_sentences should succeed");

        let text = extract_text(&result).expect("should have text content");
        let sentences: Vec<String> = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(sentences, vec!["Това е първо.", "Това е второ!"]);
    }
}
