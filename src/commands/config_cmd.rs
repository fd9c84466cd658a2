//! Implementation of the `rowlint config` command.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::Result;
use std::io::Write;
use std::path::Path;

use super::output_error;

/// Execute the `rowlint config` command.
pub fn cmd_config(args: ConfigArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_config(args.config.as_deref(), &mut out)
}

/// Load the effective config and write it to `out` as YAML.
fn run_config<W: Write>(path: Option<&Path>, out: &mut W) -> Result<()> {
    let config = Config::load_or_default(path)?;
    let yaml = config.to_yaml()?;

    out.write_all(yaml.as_bytes()).map_err(output_error)?;
    out.flush().map_err(output_error)
}
