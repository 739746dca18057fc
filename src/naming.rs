//! Index-derived names for corpus files, functions and import aliases
//!
//! Every name in the generated corpus is a pure function of integer indices.
//! Nothing stores names; callers recompute them on demand. Each function here
//! is total and injective over its inputs, so two distinct indices can never
//! produce the same file, alias or function name.

/// Directory (relative to the output root) that holds every node module
pub const FILES_DIR: &str = "files";

/// File name of the entry module at the output root
pub const ENTRY_FILE: &str = "main.mini";

/// Extension shared by every generated module
pub const MODULE_EXTENSION: &str = "mini";

/// Minimum zero-padding width for node file names
pub const MIN_INDEX_WIDTH: usize = 5;

/// Padding width for a corpus of `node_count` nodes.
///
/// At least [`MIN_INDEX_WIDTH`], widened when the largest index needs more
/// digits so lexical and numeric order keep agreeing.
pub fn index_width(node_count: usize) -> usize {
    let largest = node_count.saturating_sub(1);
    let digits = largest.checked_ilog10().map_or(1, |d| d as usize + 1);
    digits.max(MIN_INDEX_WIDTH)
}

/// File name of node `index`, e.g. `file_00042.mini`
pub fn module_file_name(index: usize, width: usize) -> String {
    format!("file_{index:0width$}.{MODULE_EXTENSION}")
}

/// Path of node `index` relative to the output root, e.g. `files/file_00042.mini`
pub fn module_path(index: usize, width: usize) -> String {
    format!("{FILES_DIR}/{}", module_file_name(index, width))
}

/// Function `seq` of node `node`, e.g. `func_3_0`
pub fn function_name(node: usize, seq: usize) -> String {
    format!("func_{node}_{seq}")
}

/// Alias a module binds to dependency `target`, e.g. `m7`.
///
/// Namespaced by target index, so aliases within one import list are
/// distinct whenever the targets are.
pub fn import_alias(target: usize) -> String {
    format!("m{target}")
}
