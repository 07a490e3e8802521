use anyhow::Result;
use clap::Parser;

use farmgraph::cli::handlers::{
    CommandContext, handle_init, handle_query, handle_schema, handle_serve,
};
use farmgraph::cli::{Cli, Commands};
use farmgraph::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref());

    match cli.command {
        Commands::Init {
            id_length,
            id_mode,
            snapshot,
            memory_only,
        } => handle_init(id_length, id_mode, snapshot, memory_only),
        Commands::Serve { host, port } => {
            let ctx = CommandContext::load(cli.config.as_deref())?;
            handle_serve(ctx, host, port)
        }
        Commands::Query {
            document,
            variables,
        } => {
            let ctx = CommandContext::load(cli.config.as_deref())?;
            handle_query(&ctx, document, variables)
        }
        Commands::Schema => handle_schema(),
    }
}
