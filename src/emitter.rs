//! Module emission: graph node -> `.mini` source text
//!
//! Emission is two steps. [`build_module`] decides the structure of a module
//! (imports, function names, which bodies call dependencies) and consumes the
//! random stream; [`ModuleSource::render`] turns that structure into text and
//! is pure. Tests inspect the structure directly instead of reparsing output.
//!
//! Output format:
//!
//! ```text
//! import "file_00001.mini" as m1;
//! import "file_00002.mini" as m2;
//!
//! fn func_0_0(x: i32, y: i32) i32 {
//!     return m1.func_1_0(x, y) + m2.func_2_0(x, y);
//! }
//!
//! fn func_0_1(x: i32, y: i32) i32 {
//!     return x * 2 + y;
//! }
//! ```

use crate::graph::DependencyGraph;
use crate::naming::{function_name, import_alias, module_file_name, module_path};
use crate::random::CorpusRng;
use std::fmt;
use std::ops::RangeInclusive;

/// Integer type used for every parameter and return value
pub const INT_TYPE: &str = "i32";

/// Arithmetic bodies for functions that do not call dependencies
pub const ARITHMETIC_MENU: &[&str] = &["x + y", "x * y", "x - y", "x + y + 1", "x * 2 + y"];

/// Alias the entry module binds to the root node
pub const ENTRY_ALIAS: &str = "m0";

/// Name of the entry module's only function
pub const ENTRY_FUNCTION: &str = "main";

/// Literal arguments the entry function passes to the root
pub const ENTRY_ARGS: (i32, i32) = (1, 2);

/// Knobs that shape each node module
#[derive(Debug, Clone, PartialEq)]
pub struct EmitOptions {
    /// Chance that a function past the first also calls every dependency.
    /// Must lie within `[0, 1]`.
    pub call_probability: f64,
    /// Inclusive range the per-node function count is drawn from
    pub functions_per_node: RangeInclusive<usize>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            call_probability: 0.7,
            functions_per_node: 2..=4,
        }
    }
}

/// One `import "<path>" as <alias>;` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub path: String,
    pub alias: String,
    pub target: usize,
}

/// A call into a dependency's first function through its alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyCall {
    pub alias: String,
    pub function: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionBody {
    Arithmetic(&'static str),
    /// Sum of one call per import, in import order
    DependencyCalls(Vec<DependencyCall>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: String,
    pub body: FunctionBody,
}

/// Structured form of one node module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSource {
    pub node: usize,
    pub imports: Vec<ImportDecl>,
    pub functions: Vec<FunctionDef>,
}

impl fmt::Display for FunctionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arithmetic(expr) => f.write_str(expr),
            Self::DependencyCalls(calls) => {
                for (i, call) in calls.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" + ")?;
                    }
                    write!(f, "{}.{}(x, y)", call.alias, call.function)?;
                }
                Ok(())
            }
        }
    }
}

impl FunctionDef {
    pub fn calls_dependencies(&self) -> bool {
        matches!(self.body, FunctionBody::DependencyCalls(_))
    }

    fn render(&self) -> String {
        format!(
            "fn {}(x: {t}, y: {t}) {t} {{\n    return {};\n}}\n",
            self.name,
            self.body,
            t = INT_TYPE
        )
    }
}

impl ModuleSource {
    /// Render the module as source text.
    ///
    /// Import lines come first, then a blank separator when there is at least
    /// one import, then each function block followed by a blank line.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self
            .imports
            .iter()
            .map(|import| format!("import \"{}\" as {};", import.path, import.alias))
            .collect();
        if !self.imports.is_empty() {
            lines.push(String::new());
        }
        lines.extend(self.functions.iter().map(FunctionDef::render));
        lines.join("\n")
    }

    /// The function every reachability argument goes through
    pub fn entry_function(&self) -> Option<&FunctionDef> {
        self.functions.first()
    }
}

/// Import list for `node`: one declaration per dependency, in graph order.
///
/// Paths are sibling file names since every node lives in the same directory.
pub fn imports_for(graph: &DependencyGraph, node: usize, width: usize) -> Vec<ImportDecl> {
    graph
        .dependencies(node)
        .iter()
        .map(|&target| ImportDecl {
            path: module_file_name(target, width),
            alias: import_alias(target),
            target,
        })
        .collect()
}

/// Build the module for `node` from its imports and a fixed function count.
///
/// Draw order on `rng`: for each function past the first (only when the
/// module has imports) one probability draw, then one menu draw whenever the
/// body ends up arithmetic. Function 0 never takes a probability draw; it
/// always calls every import when there are any.
pub fn build_module(
    node: usize,
    function_count: usize,
    imports: Vec<ImportDecl>,
    call_probability: f64,
    rng: &mut CorpusRng,
) -> ModuleSource {
    let calls: Vec<DependencyCall> = imports
        .iter()
        .map(|import| DependencyCall {
            alias: import.alias.clone(),
            function: function_name(import.target, 0),
        })
        .collect();

    let functions = (0..function_count)
        .map(|seq| {
            let calls_deps =
                !imports.is_empty() && (seq == 0 || rng.chance(call_probability));
            let body = if calls_deps {
                FunctionBody::DependencyCalls(calls.clone())
            } else {
                FunctionBody::Arithmetic(*rng.pick(ARITHMETIC_MENU))
            };
            FunctionDef {
                name: function_name(node, seq),
                body,
            }
        })
        .collect();

    ModuleSource {
        node,
        imports,
        functions,
    }
}

/// Emit the module for `node`: draws its function count, then builds it.
pub fn emit_node(
    graph: &DependencyGraph,
    node: usize,
    width: usize,
    options: &EmitOptions,
    rng: &mut CorpusRng,
) -> ModuleSource {
    let function_count = rng.range(options.functions_per_node.clone());
    let imports = imports_for(graph, node, width);
    tracing::debug!(node, function_count, imports = imports.len(), "emitting module");
    build_module(node, function_count, imports, options.call_probability, rng)
}

/// Entry module text: imports the root node and calls its first function
/// with [`ENTRY_ARGS`].
pub fn render_entry_module(width: usize) -> String {
    let (a, b) = ENTRY_ARGS;
    format!(
        "import \"{path}\" as {alias};\n\nfn {main}() {t} {{\n    return {alias}.{root}({a}, {b});\n}}\n",
        path = module_path(0, width),
        alias = ENTRY_ALIAS,
        main = ENTRY_FUNCTION,
        t = INT_TYPE,
        root = function_name(0, 0),
    )
}
