use std::collections::HashMap;

use crate::diag::Diagnostics;
use crate::types::{Module, ObjectFile, Symbol};

/// Join parsed symbols to their owning object files and roll sizes up into
/// modules.
///
/// Symbols are grouped by file index and attached to the matching object file;
/// a group whose index matches no parsed file is dropped from all totals, and
/// files that receive no symbols do not appear in the result. Cannot fail:
/// empty inputs produce an empty module list.
///
/// Output order is deterministic regardless of grouping order: modules sort by
/// name ascending, files within a module by file name ascending.
pub fn build_modules(
    object_files: Vec<ObjectFile>,
    symbols: Vec<Symbol>,
    diag: &Diagnostics,
) -> Vec<Module> {
    // Duplicate indices collapse silently, last parsed wins.
    let mut by_index: HashMap<u32, ObjectFile> =
        object_files.into_iter().map(|obj| (obj.index, obj)).collect();

    let mut grouped: HashMap<u32, Vec<Symbol>> = HashMap::new();
    for sym in symbols {
        grouped.entry(sym.file_index).or_default().push(sym);
    }

    let mut with_symbols: Vec<ObjectFile> = Vec::with_capacity(grouped.len());
    for (index, group) in grouped {
        match by_index.remove(&index) {
            Some(mut obj) => {
                obj.attach_symbols(group);
                with_symbols.push(obj);
            }
            None => diag.warn(&format!(
                "{} symbol(s) attributed to unknown object file index {index}, dropped",
                group.len(),
            )),
        }
    }

    let mut by_module: HashMap<String, Vec<ObjectFile>> = HashMap::new();
    for obj in with_symbols {
        by_module.entry(obj.module.clone()).or_default().push(obj);
    }

    let mut modules: Vec<Module> = by_module
        .into_iter()
        .map(|(name, mut files)| {
            // The index breaks file-name ties so report order is stable
            // across runs.
            files.sort_by(|a, b| a.file.cmp(&b.file).then(a.index.cmp(&b.index)));
            Module::new(name, files)
        })
        .collect();
    modules.sort_by(|a, b| a.name.cmp(&b.name));
    modules
}
