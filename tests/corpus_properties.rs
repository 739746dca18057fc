//! End-to-end properties of generated corpora
//!
//! Each test generates a corpus on disk and checks it from the files alone:
//! reachability from `main.mini`, import ordering, alias uniqueness, the
//! function-0 call chain and byte-for-byte determinism.

mod common;

use common::{parse_imports, walk_from_entry, CorpusDir};
use corpus_builder::{build_corpus, CorpusConfig, CorpusError, StreamMode};
use std::collections::HashSet;

fn config(node_count: usize) -> CorpusConfig {
    CorpusConfig {
        node_count,
        ..Default::default()
    }
}

fn node_index(path: &str) -> usize {
    path.trim_start_matches("files/")
        .trim_start_matches("file_")
        .trim_end_matches(".mini")
        .parse()
        .expect("not a node file")
}

#[test]
fn three_node_scenario() {
    let corpus = CorpusDir::generate(config(3));
    let files = corpus.snapshot();
    assert_eq!(files.len(), 4);

    let root = &files["files/file_00000.mini"];
    let imports = parse_imports(root);
    assert_eq!(imports.len(), 2);
    assert_eq!(imports[0].path, "file_00001.mini");
    assert_eq!(imports[1].path, "file_00002.mini");
    assert_ne!(imports[0].alias, imports[1].alias);
    assert!(root.contains("fn func_0_0(x: i32, y: i32) i32 {\n    return m1.func_1_0(x, y) + m2.func_2_0(x, y);\n}"));

    assert_eq!(
        files["main.mini"],
        "import \"files/file_00000.mini\" as m0;\n\nfn main() i32 {\n    return m0.func_0_0(1, 2);\n}\n"
    );

    let visited = walk_from_entry(&files);
    let expected: Vec<String> = (0..3).map(|i| format!("files/file_{:05}.mini", i)).collect();
    assert_eq!(visited.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn every_node_reachable_from_entry() {
    for n in [1, 2, 5, 64, 1_000] {
        let corpus = CorpusDir::generate(config(n));
        let files = corpus.snapshot();
        let visited = walk_from_entry(&files);
        assert_eq!(visited.len(), n, "n = {}", n);
        assert_eq!(files.len(), n + 1);
    }
}

#[test]
fn imports_point_to_greater_indices() {
    let corpus = CorpusDir::generate(config(500));
    for (path, text) in corpus.snapshot() {
        if path == "main.mini" {
            continue;
        }
        let source = node_index(&path);
        for import in parse_imports(&text) {
            assert!(node_index(&import.path) > source, "{} imports {}", path, import.path);
        }
    }
}

#[test]
fn aliases_unique_within_each_module() {
    let corpus = CorpusDir::generate(config(300));
    for (path, text) in corpus.snapshot() {
        let imports = parse_imports(&text);
        let aliases: HashSet<_> = imports.iter().map(|i| i.alias.as_str()).collect();
        assert_eq!(aliases.len(), imports.len(), "duplicate alias in {}", path);
    }
}

#[test]
fn function_zero_calls_every_import() {
    let corpus = build_corpus(&config(1_023)).unwrap();
    for file in &corpus.nodes {
        let node = node_index(&file.relative_path);
        let imports = parse_imports(&file.contents);
        let header = format!("fn func_{}_0(x: i32, y: i32) i32 {{\n    return ", node);
        let start = file.contents.find(&header).expect("function 0 missing") + header.len();
        let body = &file.contents[start..start + file.contents[start..].find(';').unwrap()];

        if imports.is_empty() {
            assert!(!body.contains('.'), "leaf {} calls something: {}", node, body);
            continue;
        }

        let terms: Vec<&str> = body.split(" + ").collect();
        assert_eq!(terms.len(), imports.len(), "node {}: {}", node, body);
        for (term, import) in terms.iter().zip(&imports) {
            let target = node_index(&import.path);
            assert_eq!(*term, format!("{}.func_{}_0(x, y)", import.alias, target));
        }
    }
}

#[test]
fn same_seed_gives_identical_tree() {
    let a = CorpusDir::generate(config(400));
    let b = CorpusDir::generate(config(400));
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn per_node_stream_is_deterministic() {
    let per_node = CorpusConfig {
        stream_mode: StreamMode::PerNode,
        ..config(400)
    };
    let a = CorpusDir::generate(per_node.clone());
    let b = CorpusDir::generate(per_node);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn regenerating_replaces_previous_corpus() {
    let corpus = CorpusDir::generate(config(50));
    let generated = corpus.snapshot();

    let smaller = CorpusConfig {
        output_dir: corpus.root(),
        ..config(10)
    };
    corpus_builder::runner::run_generate(&smaller, false).unwrap();
    let after = corpus.snapshot();

    assert_eq!(after.len(), 11);
    assert_eq!(generated.len(), 51);
}

#[test]
fn zero_nodes_is_refused() {
    let result = build_corpus(&config(0));
    assert!(matches!(result, Err(CorpusError::InvalidConfig { .. })));
}

#[test]
fn function_counts_follow_configured_range() {
    let corpus = build_corpus(&CorpusConfig {
        min_functions: 3,
        max_functions: 3,
        ..config(40)
    })
    .unwrap();
    for file in &corpus.nodes {
        assert_eq!(file.contents.matches("fn func_").count(), 3);
    }
    assert_eq!(corpus.stats.functions, 120);
}
