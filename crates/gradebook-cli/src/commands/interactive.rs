//! The `gradebook interactive` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use crate::config::{load_config_from, OutputFormat};
use crate::session::Session;

pub fn execute(config_path: Option<PathBuf>, format: Option<OutputFormat>) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(format) = format {
        config.output_format = format;
    }
    tracing::info!(format = %config.output_format, "starting interactive session");

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), config);
    session.run()
}
