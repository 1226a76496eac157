use crate::types::Module;

/// Indented human-readable size report.
pub struct TextFormatter {
    include_files: bool,
}

impl TextFormatter {
    pub fn new(include_files: bool) -> Self {
        Self { include_files }
    }

    pub fn format(&self, modules: &[Module]) -> String {
        let mut output = String::from("===========\nSIZE REPORT\n===========");

        for module in modules {
            output.push_str(&format!("\n{} ({})", module.name, module.size));
            if self.include_files {
                for file in &module.files {
                    output.push_str(&format!("\n\t{} ({})", file.file, file.size));
                }
            }
        }

        output
    }
}
