use deuda_core::identifier;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CheckResponse {
    input: String,
    digits: String,
    display: String,
    valid: bool,
    error: Option<String>,
}

fn check(input: &str) -> CheckResponse {
    let result = identifier::validate(input);
    CheckResponse {
        input: input.to_string(),
        digits: identifier::clean(input),
        display: identifier::format(input),
        valid: result.is_ok(),
        error: result.err().map(|error| error.to_string()),
    }
}

pub fn handle(args: &CheckArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = check(&args.input);
    output(&response, flags.format)?;
    if let Some(error) = response.error {
        anyhow::bail!("{error}");
    }
    Ok(())
}
