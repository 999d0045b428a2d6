use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use swagdef_schema::{SchemaDocument, SwagdefToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to swagdef.toml (defaults to ./swagdef.toml, optional)
    #[arg(short, long, default_value = "swagdef.toml")]
    pub config: PathBuf,

    /// Schema document (overrides swagdef.toml setting)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let swagdef_toml = SwagdefToml::open_or_default(&self.config).unwrap_or_exit();
        let input = self
            .input
            .clone()
            .unwrap_or_else(|| swagdef_toml.input_path());
        tracing::debug!(input = %input.display(), "loading schema document");

        let document = SchemaDocument::from_file(&input).unwrap_or_exit();
        let report = ops::check(&document, &input).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
