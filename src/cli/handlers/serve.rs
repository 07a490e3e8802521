use crate::graphql::run_server;
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or(ctx.config.server.host);
    let port = port.unwrap_or(ctx.config.server.port);

    println!("Starting GraphQL server on http://{}:{}/graphql", host, port);
    println!("GraphiQL: http://{}:{}/graphql", host, port);

    tokio::runtime::Runtime::new()?.block_on(async { run_server(ctx.api, &host, port).await })?;
    Ok(())
}
