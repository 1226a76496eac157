mod csv;
mod json;
mod text;

pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
