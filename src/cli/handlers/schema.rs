use crate::graphql::build_schema;
use anyhow::Result;

pub fn handle_schema() -> Result<()> {
    print!("{}", build_schema().sdl());
    Ok(())
}
