use crate::types::Module;

/// Flat CSV rendering for spreadsheet import. No header row.
pub struct CsvFormatter {
    include_files: bool,
}

impl CsvFormatter {
    pub fn new(include_files: bool) -> Self {
        Self { include_files }
    }

    pub fn format(&self, modules: &[Module]) -> String {
        let mut rows = Vec::new();

        for module in modules {
            if self.include_files {
                for file in &module.files {
                    rows.push(format!("{},{},{}", module.name, file.file, file.size));
                }
            } else {
                rows.push(format!("{},,{}", module.name, module.size));
            }
        }

        rows.join("\n")
    }
}
