//! Ways to serve [`GitHubTools`](crate::tools::GitHubTools) to MCP clients
//!
//! Both transports share one [`GitHubClient`](crate::github::GitHubClient);
//! stdio is used when the server runs as a subprocess, SSE when it listens on HTTP.

/// HTTP listener speaking MCP over Server-Sent Events
pub mod sse_server;

/// MCP over the process's stdin/stdout
pub mod stdio;
