use serde::Serialize;
use std::fmt;

/// The named sections a link map is divided into by `#` marker lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Path,
    Arch,
    ObjectFiles,
    Sections,
    Symbols,
    DeadStrippedSymbols,
}

impl SectionKind {
    /// Classify a marker line (a line whose first character is `#`).
    ///
    /// The marker glyph and the following space are skipped, then only a short
    /// fixed prefix of the section name is inspected. Unknown markers (column
    /// headers inside a section, for example) yield `None`.
    pub fn from_marker(line: &str) -> Option<Self> {
        let rest = line.get(2..)?;
        let kind = match rest.get(..4)? {
            "Path" => Self::Path,
            "Arch" => Self::Arch,
            "Obje" => Self::ObjectFiles,
            "Sect" => Self::Sections,
            "Symb" => Self::Symbols,
            "Dead" => Self::DeadStrippedSymbols,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Path => "Path",
            Self::Arch => "Arch",
            Self::ObjectFiles => "Object Files",
            Self::Sections => "Sections",
            Self::Symbols => "Symbols",
            Self::DeadStrippedSymbols => "Dead Stripped Symbols",
        };
        f.write_str(name)
    }
}

/// A recognized marker line and where it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub kind: SectionKind,
    /// Zero-based line offset of the marker within the input.
    pub line_offset: usize,
}

/// One entry of the link map's object file table: a compiled translation unit
/// identified by a small integer index.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectFile {
    pub index: u32,
    /// Build-module name the file belongs to (framework, package, app target).
    pub module: String,
    /// Source file name without extension.
    pub file: String,
    #[serde(skip)]
    pub symbols: Vec<Symbol>,
    /// Sum of the attached symbols' sizes in bytes.
    pub size: u64,
}

impl ObjectFile {
    pub fn new(index: u32, module: String, file: String) -> Self {
        Self { index, module, file, symbols: Vec::new(), size: 0 }
    }

    /// Attach the symbols attributed to this file and derive its size.
    /// Called exactly once per file, by the aggregator.
    pub fn attach_symbols(&mut self, symbols: Vec<Symbol>) {
        self.symbols.extend(symbols);
        self.size = self.symbols.iter().map(|s| s.size).sum();
    }
}

// Identity is the link map's file-table index.
impl PartialEq for ObjectFile {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for ObjectFile {}

/// A named, addressed, sized unit attributed to one object file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Byte offset in the final image.
    pub address: u64,
    /// Size in bytes.
    pub size: u64,
    /// Index of the owning object file. May reference no parsed file, in
    /// which case the symbol is dropped from all totals.
    pub file_index: u32,
    pub name: String,
}

/// A logical grouping of object files sharing a build-module name.
#[derive(Debug, Clone, Serialize)]
pub struct Module {
    pub name: String,
    pub files: Vec<ObjectFile>,
    /// Sum of the member files' sizes in bytes.
    pub size: u64,
}

impl Module {
    pub fn new(name: String, files: Vec<ObjectFile>) -> Self {
        let size = files.iter().map(|f| f.size).sum();
        Self { name, files, size }
    }
}
