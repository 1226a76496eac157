use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{ObjectFile, Symbol};

macro_rules! static_regex {
    ($name:ident, $str:expr) => {
        static $name: Lazy<Regex> = Lazy::new(|| Regex::new($str).unwrap());
    };
}

// Object file table entries come in two shapes: translation units compiled
// into the app bundle itself, and members of static library archives.
static_regex!(
    APP_OBJECT,
    r"\[\s*(\d+)\].*?/Intermediates\.noindex/(\w+)\.build.*?/arm64/(\w+)\.o"
);
static_regex!(
    LIB_OBJECT,
    r"\[\s*(\d+)\].*?(?:Debug-iphoneos|Debug-iphonesimulator)/(\w+)/.*?\((\w+)\.o\)"
);

// Symbol table entry: address, size, owning file index, then the symbol name
// verbatim to the end of the line.
static_regex!(
    SYMBOL,
    r"^0x([0-9A-Fa-f]+)\s+0x([0-9A-Fa-f]+)\s+\[\s*(\d+)\] (.+)$"
);

/// Parse one line of the object file table.
///
/// The app-bundle shape takes precedence when a line could match both.
/// Lines matching neither shape are not object file entries.
pub fn parse_object_file_line(line: &str) -> Option<ObjectFile> {
    for re in [&*APP_OBJECT, &*LIB_OBJECT] {
        if let Some(caps) = re.captures(line) {
            let index = caps[1].parse().ok()?;
            return Some(ObjectFile::new(index, caps[2].to_string(), caps[3].to_string()));
        }
    }
    None
}

/// Parse one line of the symbol table. Address and size are hexadecimal, the
/// file index is decimal.
pub fn parse_symbol_line(line: &str) -> Option<Symbol> {
    let caps = SYMBOL.captures(line)?;
    Some(Symbol {
        address: u64::from_str_radix(&caps[1], 16).ok()?,
        size: u64::from_str_radix(&caps[2], 16).ok()?,
        file_index: caps[3].parse().ok()?,
        name: caps[4].to_string(),
    })
}
