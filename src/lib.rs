pub mod aggregate;
pub mod cli;
pub mod diag;
pub mod error;
pub mod grammar;
pub mod loader;
pub mod output;
pub mod scan;
pub mod types;

pub use aggregate::build_modules;
pub use cli::Cli;
pub use diag::Diagnostics;
pub use error::{Error, Result};
pub use grammar::{parse_object_file_line, parse_symbol_line};
pub use loader::LinkMapSource;
pub use output::{CsvFormatter, JsonFormatter, TextFormatter};
pub use scan::{ScanResult, scan_lines};
pub use types::{Directive, Module, ObjectFile, SectionKind, Symbol};
