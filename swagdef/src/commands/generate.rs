use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use swagdef_codegen::Indent;
use swagdef_schema::{Config, SchemaDocument, SwagdefToml};
use swagdef_typescript::RenderOptions;

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to swagdef.toml (defaults to ./swagdef.toml, optional)
    #[arg(short, long, default_value = "swagdef.toml")]
    pub config: PathBuf,

    /// Schema document (overrides swagdef.toml setting)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Only generate these definitions (repeatable)
    #[arg(short, long = "definition", value_name = "NAME")]
    pub definitions: Vec<String>,

    /// Omit the `export` keyword
    #[arg(long)]
    pub no_export: bool,

    /// Spaces per indent level, 0 for tabs (overrides swagdef.toml setting)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Comment placed at the top of the output (overrides swagdef.toml setting)
    #[arg(long)]
    pub header: Option<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let swagdef_toml = SwagdefToml::open_or_default(&self.config).unwrap_or_exit();
        let input = self
            .input
            .clone()
            .unwrap_or_else(|| swagdef_toml.input_path());
        tracing::debug!(input = %input.display(), "loading schema document");

        let document = SchemaDocument::from_file(&input).unwrap_or_exit();
        let options = self.render_options(swagdef_toml.config());

        let source = ops::generate(&document, &self.definitions, options).unwrap_or_exit();
        print!("{}", source);
        Ok(())
    }

    /// Config file settings with command line flags applied on top.
    fn render_options(&self, config: &Config) -> RenderOptions {
        let mut options = RenderOptions::from(&config.typescript);
        if self.no_export {
            options.export = false;
        }
        if let Some(width) = self.indent {
            options.indent = Indent::from_width(width);
        }
        if let Some(header) = &self.header {
            options.header = Some(header.clone());
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> GenerateCommand {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            cmd: GenerateCommand,
        }

        let argv = std::iter::once("generate").chain(args.iter().copied());
        Wrapper::parse_from(argv).cmd
    }

    #[test]
    fn test_config_is_used_without_flags() {
        let config: Config = "[typescript]\nindent = 0\nexport = false\nheader = \"hi\""
            .parse()
            .unwrap();
        let options = command(&[]).render_options(&config);
        assert_eq!(options.indent, Indent::Tab);
        assert!(!options.export);
        assert_eq!(options.header.as_deref(), Some("hi"));
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::default();
        let options = command(&["--no-export", "--indent", "4", "--header", "top"])
            .render_options(&config);
        assert_eq!(options.indent, Indent::FOUR);
        assert!(!options.export);
        assert_eq!(options.header.as_deref(), Some("top"));
    }
}
