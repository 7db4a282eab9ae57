//! Language inference: which file extensions hold the project's real code.
//!
//! An extension qualifies when its share of distinct tracked paths reaches
//! a threshold and it names a programming language in the registry below.
//! Markup, data and lockfile extensions are absent from the registry and
//! never qualify.

use std::collections::{BTreeMap, BTreeSet};

/// A programming language and the extensions (without the dot) it uses.
#[derive(Debug)]
pub struct LanguageSpec {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

macro_rules! lang {
    ($name:expr, [$($ext:expr),*]) => {
        LanguageSpec {
            name: $name,
            extensions: &[$($ext),*],
        }
    };
}

pub fn languages() -> &'static [LanguageSpec] {
    static LANGUAGES: &[LanguageSpec] = &[
        lang!("Rust", ["rs"]),
        lang!("Python", ["py", "pyi"]),
        lang!("JavaScript", ["js", "mjs", "cjs", "jsx"]),
        lang!("TypeScript", ["ts", "mts", "cts", "tsx"]),
        lang!("Java", ["java"]),
        lang!("C", ["c", "h"]),
        lang!("C++", ["cpp", "cxx", "cc", "hpp", "hxx", "h"]),
        lang!("C#", ["cs"]),
        lang!("Go", ["go"]),
        lang!("Ruby", ["rb"]),
        lang!("Shell", ["sh", "bash", "zsh"]),
        lang!("Kotlin", ["kt", "kts"]),
        lang!("Swift", ["swift"]),
        lang!("PHP", ["php"]),
        lang!("Dart", ["dart"]),
        lang!("Haskell", ["hs"]),
        lang!("Lua", ["lua"]),
        lang!("Perl", ["pl", "pm"]),
        lang!("R", ["r", "R"]),
        lang!("Scala", ["scala", "sc"]),
        lang!("Elixir", ["ex", "exs"]),
        lang!("Erlang", ["erl", "hrl"]),
        lang!("Clojure", ["clj", "cljs", "cljc"]),
        lang!("Zig", ["zig"]),
        lang!("Objective-C", ["m", "mm"]),
        lang!("MATLAB", ["m"]),
        lang!("OCaml", ["ml", "mli"]),
        lang!("F#", ["fs", "fsi", "fsx"]),
        lang!("Nim", ["nim"]),
        lang!("Julia", ["jl"]),
        lang!("Groovy", ["groovy"]),
        lang!("Fortran", ["f", "f90", "f95"]),
        lang!("Pascal", ["pas"]),
        lang!("Visual Basic", ["vb"]),
        lang!("Assembly", ["asm", "s", "S"]),
        lang!("Vue", ["vue"]),
        lang!("Svelte", ["svelte"]),
        lang!("Solidity", ["sol"]),
        lang!("Cython", ["pyx", "pxd"]),
    ];
    LANGUAGES
}

/// Names of the languages using `ext` (given with its leading dot).
pub fn languages_for(ext: &str) -> Vec<&'static str> {
    let Some(bare) = ext.strip_prefix('.') else {
        return Vec::new();
    };
    languages()
        .iter()
        .filter(|spec| spec.extensions.contains(&bare))
        .map(|spec| spec.name)
        .collect()
}

/// Extension of a path's file name, dot included: `src/a.py` -> `.py`.
/// Dotfiles such as `.gitignore` are their own extension.
pub fn extension_of(path: &str) -> Option<String> {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{ext}"))
}

/// How many distinct paths carry one extension.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionShare {
    pub extension: String,
    pub files: usize,
    /// `files` over all distinct paths, extensionless ones included.
    pub share: f64,
}

/// Extension frequencies over the distinct paths in `files`, most common first.
pub fn extension_shares<'a>(files: impl IntoIterator<Item = &'a str>) -> Vec<ExtensionShare> {
    let distinct: BTreeSet<&str> = files.into_iter().collect();
    let total = distinct.len();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for path in &distinct {
        if let Some(ext) = extension_of(path) {
            *counts.entry(ext).or_insert(0) += 1;
        }
    }

    let mut shares: Vec<ExtensionShare> = counts
        .into_iter()
        .map(|(extension, files)| ExtensionShare {
            extension,
            files,
            share: files as f64 / total as f64,
        })
        .collect();
    shares.sort_by(|a, b| b.files.cmp(&a.files));
    shares
}

/// Extensions whose share of distinct paths is at least `threshold`.
pub fn infer_programming_language<'a>(
    files: impl IntoIterator<Item = &'a str>,
    threshold: f64,
) -> BTreeSet<String> {
    extension_shares(files)
        .into_iter()
        .filter(|s| s.share >= threshold)
        .map(|s| s.extension)
        .collect()
}

/// Keep only the extensions the registry knows as programming languages.
pub fn resolve_programming_languages(extensions: &BTreeSet<String>) -> BTreeSet<String> {
    extensions
        .iter()
        .filter(|ext| !languages_for(ext).is_empty())
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
