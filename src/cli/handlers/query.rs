use anyhow::{Context, Result};
use async_graphql::{Request, Variables};
use std::io::{self, Read};

use super::CommandContext;

pub fn handle_query(ctx: &CommandContext, document: String, variables: Option<String>) -> Result<()> {
    let document = if document == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        content
    } else {
        document
    };

    let mut request = Request::new(document);
    if let Some(raw) = variables {
        let value: serde_json::Value =
            serde_json::from_str(&raw).context("Variables must be a JSON object")?;
        if !value.is_object() {
            anyhow::bail!("Variables must be a JSON object");
        }
        request = request.variables(Variables::from_json(value));
    }

    let response = tokio::runtime::Runtime::new()?.block_on(ctx.api.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.errors.is_empty() {
        anyhow::bail!("Query returned {} error(s)", response.errors.len());
    }
    Ok(())
}
