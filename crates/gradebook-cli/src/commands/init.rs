//! The `gradebook init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    let path = Path::new("gradebook.toml");
    if path.exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG).context("failed to write gradebook.toml")?;
        println!("Created gradebook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit gradebook.toml to choose an output format");
    println!("  2. Run: gradebook");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# How student lists are printed: "table", "plain" or "json".
output_format = "table"

# Decimal places shown for averages.
average_precision = 2

# Threshold used when the threshold prompt is left empty.
default_threshold = 4.0
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GradebookConfig;

    #[test]
    fn sample_config_matches_defaults() {
        let config: GradebookConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, GradebookConfig::default());
    }
}
