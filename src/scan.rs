use std::io;

use crate::diag::Diagnostics;
use crate::error::{Error, Result};
use crate::grammar::{parse_object_file_line, parse_symbol_line};
use crate::types::{Directive, ObjectFile, SectionKind, Symbol};

/// Scanner state. Advances monotonically through the map's sections; `Done`
/// stops input consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Other,
    ObjectFiles,
    Symbols,
    Done,
}

/// Everything extracted by a single forward pass over the link map.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Recognized marker lines, in input order.
    pub directives: Vec<Directive>,
    pub object_files: Vec<ObjectFile>,
    pub symbols: Vec<Symbol>,
}

/// Scan the link map line by line, collecting object file entries and symbol
/// entries from their respective sections.
///
/// Marker lines drive the state machine: the "Object Files" marker opens the
/// object file table, the "Symbols" marker closes it and opens the symbol
/// table, and the "Dead Stripped Symbols" marker ends the scan. Any other
/// marker is recorded and otherwise ignored. Data lines that do not match the
/// active section's grammar are skipped.
///
/// All three transition markers are required; reaching the end of input before
/// one of them is a [`Error::MissingSection`].
pub fn scan_lines<I>(lines: I, diag: &Diagnostics) -> Result<ScanResult>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut state = State::Other;
    let mut result = ScanResult::default();

    for (offset, line) in lines.into_iter().enumerate() {
        let line = line?;

        if line.starts_with('#') {
            let Some(kind) = SectionKind::from_marker(&line) else {
                continue;
            };
            result.directives.push(Directive { kind, line_offset: offset });
            state = match (state, kind) {
                (State::Other, SectionKind::ObjectFiles) => State::ObjectFiles,
                (State::ObjectFiles, SectionKind::Symbols) => State::Symbols,
                (State::Symbols, SectionKind::DeadStrippedSymbols) => State::Done,
                (current, _) => current,
            };
            if state == State::Done {
                // Nothing past the dead-strip boundary contributes to sizes.
                break;
            }
            continue;
        }

        match state {
            State::ObjectFiles => {
                if let Some(obj) = parse_object_file_line(&line) {
                    result.object_files.push(obj);
                }
            }
            State::Symbols => match parse_symbol_line(&line) {
                Some(sym) => result.symbols.push(sym),
                None => diag.warn(&format!("line {}: not a symbol entry, skipped", offset + 1)),
            },
            State::Other | State::Done => {}
        }
    }

    match state {
        State::Done => Ok(result),
        State::Other => Err(Error::MissingSection("Object Files")),
        State::ObjectFiles => Err(Error::MissingSection("Symbols")),
        State::Symbols => Err(Error::MissingSection("Dead Stripped Symbols")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> impl Iterator<Item = io::Result<String>> + '_ {
        text.lines().map(|l| Ok(l.to_string()))
    }

    const MAP: &str = "\
# Path: /tmp/Build/Products/Debug-iphoneos/App.app/App
# Arch: arm64
# Object files:
[  0] linker synthesized
[  1] /tmp/Build/Intermediates.noindex/App.build/Debug-iphoneos/App.build/Objects-normal/arm64/AppDelegate.o
[  3] /tmp/Build/Intermediates.noindex/Core.build/Debug-iphoneos/Core.build/Objects-normal/arm64/Widget.o
[  4] /tmp/Build/Products/Debug-iphoneos/NetKit/libNetKit.a(Client.o)
# Sections:
0x100008000\t0x00004000\t__TEXT\t__text
# Symbols:
# Address\tSize    \tFile  Name
0x100008000\t0x00000010\t[  3] _$s4Core6WidgetVMn
0x100008010\t0x00000020\t[  3] _$s4Core6WidgetV4drawyyF
0x100008030\t0x00000040\t[  1] _$s3App11AppDelegateCMn
0x100008070\t0x00000008\t[  4] _netkit_client_init
# Dead Stripped Symbols:
0x100008178\t0x00000999\t[  3] _should_not_count
";

    #[test]
    fn collects_object_files_and_symbols() {
        let result = scan_lines(lines(MAP), &Diagnostics::default()).expect("scan");
        let indices: Vec<u32> = result.object_files.iter().map(|o| o.index).collect();
        assert_eq!(indices, [1, 3, 4]);
        assert_eq!(result.symbols.len(), 4);
        assert_eq!(result.symbols[0].size, 0x10);
    }

    #[test]
    fn records_directive_offsets() {
        let result = scan_lines(lines(MAP), &Diagnostics::default()).expect("scan");
        let kinds: Vec<SectionKind> = result.directives.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            [
                SectionKind::Path,
                SectionKind::Arch,
                SectionKind::ObjectFiles,
                SectionKind::Sections,
                SectionKind::Symbols,
                SectionKind::DeadStrippedSymbols,
            ]
        );
        assert_eq!(result.directives[2].line_offset, 2);
    }

    #[test]
    fn dead_strip_marker_halts_the_scan() {
        // Symbol-looking lines after the dead-strip boundary are not parsed.
        let result = scan_lines(lines(MAP), &Diagnostics::default()).expect("scan");
        assert!(result.symbols.iter().all(|s| s.name != "_should_not_count"));
        assert_eq!(result.symbols.iter().map(|s| s.size).sum::<u64>(), 0x78);
    }

    #[test]
    fn sections_content_is_not_object_data() {
        // The Sections marker does not close the object file table, but its
        // content lines match neither object shape and fall through.
        let result = scan_lines(lines(MAP), &Diagnostics::default()).expect("scan");
        assert_eq!(result.object_files.len(), 3);
    }

    #[test]
    fn missing_object_files_marker_is_fatal() {
        let input = "# Path: /tmp/App\n0x10 0x10 [ 1] _sym\n";
        let err = scan_lines(lines(input), &Diagnostics::default()).unwrap_err();
        assert!(matches!(err, Error::MissingSection("Object Files")));
    }

    #[test]
    fn missing_symbols_marker_is_fatal() {
        let input = "# Object files:\n[  1] /tmp/x.o\n";
        let err = scan_lines(lines(input), &Diagnostics::default()).unwrap_err();
        assert!(matches!(err, Error::MissingSection("Symbols")));
    }

    #[test]
    fn missing_dead_strip_marker_is_fatal() {
        let input = "# Object files:\n# Symbols:\n0x10 0x10 [ 1] _sym\n";
        let err = scan_lines(lines(input), &Diagnostics::default()).unwrap_err();
        assert!(matches!(err, Error::MissingSection("Dead Stripped Symbols")));
    }

    #[test]
    fn symbols_marker_before_object_files_does_not_transition() {
        // Out of order: the Symbols marker only counts once the object file
        // table has been opened.
        let input = "# Symbols:\n# Object files:\n# Symbols:\n# Dead Stripped Symbols:\n";
        scan_lines(lines(input), &Diagnostics::default()).expect("scan");
    }

    #[test]
    fn marker_lines_are_never_data() {
        // A marker line that happens to sit inside the symbol table must not
        // reach the symbol grammar.
        let input = "# Object files:\n# Symbols:\n# Arch: arm64\n# Dead Stripped Symbols:\n";
        let result = scan_lines(lines(input), &Diagnostics::default()).expect("scan");
        assert!(result.symbols.is_empty());
    }

    #[test]
    fn io_errors_propagate() {
        let input = vec![
            Ok("# Object files:".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "not text")),
        ];
        let err = scan_lines(input, &Diagnostics::default()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
