use crate::types::Module;
use serde::Serialize;

#[derive(Serialize)]
struct Output<'a> {
    version: &'static str,
    modules: &'a [Module],
}

#[derive(Serialize)]
struct ModuleTotal<'a> {
    name: &'a str,
    size: u64,
}

#[derive(Serialize)]
struct TotalsOutput<'a> {
    version: &'static str,
    modules: Vec<ModuleTotal<'a>>,
}

/// Machine-readable size report.
pub struct JsonFormatter {
    include_files: bool,
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(include_files: bool, pretty: bool) -> Self {
        Self { include_files, pretty }
    }

    pub fn format(&self, modules: &[Module]) -> String {
        if self.include_files {
            let output = Output { version: env!("CARGO_PKG_VERSION"), modules };
            self.serialize(&output)
        } else {
            let output = TotalsOutput {
                version: env!("CARGO_PKG_VERSION"),
                modules: modules
                    .iter()
                    .map(|m| ModuleTotal { name: &m.name, size: m.size })
                    .collect(),
            };
            self.serialize(&output)
        }
    }

    fn serialize<T: Serialize>(&self, output: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(output)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        } else {
            serde_json::to_string(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
    }
}
