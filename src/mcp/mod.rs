//! MCP (Model Context Protocol) Server for job search
//!
//! Exposes the LinkedIn and Indeed scrapers as tools via JSON-RPC over stdio.

pub mod protocol;
mod server;
pub mod tools;

pub use server::McpServer;
