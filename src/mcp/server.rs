//! MCP Server implementation for the job scraper
//!
//! Runs as a stdio JSON-RPC server. Stdout carries protocol frames only;
//! logs go to stderr.

use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::core::actor_client::{ActorClient, ActorRunner};
use crate::core::config::ServiceConfig;

use super::protocol::*;
use super::tools;

pub const SERVER_NAME: &str = "LinkedIn Scraper MCP";
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub struct McpServer {
    config: ServiceConfig,
    runner: Arc<dyn ActorRunner>,
}

impl McpServer {
    pub fn new(config: ServiceConfig) -> Self {
        let runner = Arc::new(ActorClient::from_config(&config));
        Self::with_runner(config, runner)
    }

    pub fn with_runner(config: ServiceConfig, runner: Arc<dyn ActorRunner>) -> Self {
        Self { config, runner }
    }

    /// Run the MCP server on stdin/stdout until stdin closes
    pub async fn run(&self) -> Result<()> {
        if !self.config.has_api_key() {
            info!("APIFY_API_KEY is not set; tool calls will report a configuration error");
        }
        info!(name = SERVER_NAME, version = env!("CARGO_PKG_VERSION"), "MCP server listening on stdio");
        self.serve(BufReader::new(io::stdin()), io::stdout()).await
    }

    /// Serve newline-delimited JSON-RPC from `reader`, answering on `writer`.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line).await? == 0 {
                break;
            }
            if line.iter().all(|b| b.is_ascii_whitespace()) {
                continue;
            }

            // Bytes that are not UTF-8 fail here like any other bad frame.
            let request: JsonRpcRequest = match serde_json::from_slice(&line) {
                Ok(req) => req,
                Err(e) => {
                    let response =
                        JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e));
                    write_response(&mut writer, &response).await?;
                    continue;
                }
            };

            if let Some(response) = self.handle_request(request).await {
                write_response(&mut writer, &response).await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "Handling request");

        if request.is_notification() {
            return None;
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };
        Some(response)
    }

    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        respond(id, &result)
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = ToolsListResult {
            tools: tools::definitions(),
        };
        respond(id, &result)
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params = match params {
            Some(p) => p,
            None => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params".to_string());
            }
        };

        let call: ToolCallParams = match serde_json::from_value(params) {
            Ok(c) => c,
            Err(e) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {}", e));
            }
        };

        info!(tool = %call.name, "Tool call");
        let result = tools::call_tool(
            &call.name,
            call.arguments.as_ref(),
            &self.config,
            self.runner.as_ref(),
        )
        .await;

        respond(id, &result)
    }
}

fn respond<T: Serialize>(id: Option<Value>, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, -32603, format!("Internal error: {}", e)),
    }
}

async fn write_response<W: AsyncWrite + Unpin>(writer: &mut W, response: &JsonRpcResponse) -> Result<()> {
    let mut json = serde_json::to_string(response)?;
    json.push('\n');
    writer.write_all(json.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
