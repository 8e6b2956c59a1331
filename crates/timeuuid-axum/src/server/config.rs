use std::net::SocketAddr;

use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use timeuuid::NodeId;

/// Output format of the console log layer.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Runtime configuration for the `timeuuid-axum-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file is loaded first, if present).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "timeuuid-axum-server",
    version,
    about = "An HTTP service for time-ordered version-1 UUIDs"
)]
pub struct CliArgs {
    /// TCP address to listen on.
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:8080"))]
    pub server_addr: String,

    /// Console log format.
    ///
    /// Verbosity is controlled separately with `RUST_LOG` (default `info`).
    ///
    /// Environment variable: `LOG_FORMAT`
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Node identifier (12 hex digits) stamped into UUIDs when a request
    /// does not supply one. A random node is drawn at startup if unset.
    ///
    /// Environment variable: `NODE_ID`
    #[arg(long, env = "NODE_ID")]
    pub node_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: SocketAddr,
    pub log_format: LogFormat,
    pub node_id: Option<NodeId>,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let server_addr = args.server_addr.parse().with_context(|| {
            format!("SERVER_ADDR ({}) is not a socket address", args.server_addr)
        })?;

        let node_id = args
            .node_id
            .as_deref()
            .map(|raw| {
                raw.parse::<NodeId>()
                    .map_err(|e| anyhow!("NODE_ID ({raw}) is invalid: {e}"))
            })
            .transpose()?;

        Ok(Self {
            server_addr,
            log_format: args.log_format,
            node_id,
        })
    }
}
