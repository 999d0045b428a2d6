//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Summary of a schema document.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema document.
    pub input_path: PathBuf,
    /// Target language of the generated declarations.
    pub language: &'static str,
    pub definitions: usize,
    /// Definition count per shape, in order of first appearance.
    pub kinds: Vec<(&'static str, usize)>,
    /// Interfaces that generation would emit.
    pub interfaces: usize,
    /// Enums that generation would emit, hoisted ones included.
    pub enums: usize,
    pub warnings: Vec<String>,
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.input_path.display()));
        out.newline();

        out.section(&plural(self.definitions, "definition"));
        for (kind, count) in &self.kinds {
            out.key_value_indented(kind, &count.to_string());
        }
        out.newline();

        out.section(&format!("would generate ({})", self.language));
        out.key_value_indented("interfaces", &self.interfaces.to_string());
        out.key_value_indented("enums", &self.enums.to_string());
    }
}
