//! Hygiene: source-level rules checked at test time.
//!
//! Scans `src/` (test files excluded) for calls that can panic, errors that
//! are discarded without being looked at, and browser bindings leaking out
//! of `src/web/`. Budgets only ever go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;
const MAX_CORE_WEB_SYS: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn is_web_layer(path: &str) -> bool {
    Path::new(path).components().any(|c| c.as_os_str() == "web")
}

/// Per-file line counts of `pattern`, skipping files `skip` rejects.
fn hits(files: &[SourceFile], pattern: &str, skip: fn(&str) -> bool) -> Vec<(String, usize)> {
    files
        .iter()
        .filter(|file| !skip(&file.path))
        .map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (file.path.clone(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn assert_budget(pattern: &str, max: usize, skip: fn(&str) -> bool) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern, skip);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

fn nothing(_: &str) -> bool {
    false
}

// =============================================================
// Panics
// =============================================================

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP, nothing);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT, nothing);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC, nothing);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", MAX_UNREACHABLE, nothing);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO, nothing);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", MAX_UNIMPLEMENTED, nothing);
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD, nothing);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK, nothing);
}

// =============================================================
// Structure
// =============================================================

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE, nothing);
}

#[test]
fn web_sys_stays_in_web_layer() {
    assert_budget("web_sys::", MAX_CORE_WEB_SYS, is_web_layer);
}

#[test]
fn fake_page_stays_out_of_release_builds() {
    let lib = fs::read_to_string("src/lib.rs").expect("src/lib.rs readable; run from the crate root");
    let lines: Vec<&str> = lib.lines().collect();
    let Some(at) = lines.iter().position(|line| line.trim() == "pub mod fake;") else {
        return;
    };
    let gate = at.checked_sub(1).map_or("", |prev| lines[prev].trim());
    assert_eq!(
        gate, "#[cfg(any(test, feature = \"testing\"))]",
        "src/lib.rs exports the in-memory page without a cfg gate"
    );
}
