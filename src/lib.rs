/// Plain-text projections of GitHub REST payloads
pub mod formatter;

/// GitHub REST request executor, configuration and failure classification
pub mod github;

/// MCP tool implementations exposing GitHub operations through the protocol
pub mod tools;

/// Transport layer implementations for MCP server modes (stdio, SSE)
pub mod transport;

/// Identifier and pagination types used by the tool handlers
pub mod types;
