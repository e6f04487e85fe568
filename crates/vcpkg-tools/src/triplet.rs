//! vcpkg triplets: the name type, discovery in a checkout, and the
//! interactive selection prompt.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// Prefix of the per-triplet install root (`vcpkgs-<triplet>`).
pub const INSTALL_ROOT_PREFIX: &str = "vcpkgs-";

/// A vcpkg triplet name such as `x64-windows-static-vs2022`. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Triplet(String);

impl Triplet {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            bail!("Triplet must not be empty");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Install root dependencies for this triplet go to, relative to the
    /// working directory.
    pub fn install_root(&self) -> String {
        format!("{INSTALL_ROOT_PREFIX}{}", self.0)
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Triplet names defined by a vcpkg checkout (`triplets/` and
/// `triplets/community/`), sorted and deduplicated.
pub fn available_triplets(vcpkg_root: &Path) -> Result<Vec<String>> {
    let triplets_dir = vcpkg_root.join("triplets");
    let mut names = BTreeSet::new();

    for dir in [triplets_dir.clone(), triplets_dir.join("community")] {
        if !dir.is_dir() {
            continue;
        }
        let entries = fs::read_dir(&dir).with_context(|| format!("Reading {}", dir.display()))?;
        for entry in entries {
            let path = entry
                .with_context(|| format!("Reading {}", dir.display()))?
                .path();
            if path.extension().is_some_and(|ext| ext == "cmake") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.insert(stem.to_string());
                }
            }
        }
    }

    Ok(names.into_iter().collect())
}

/// Interpret one line of prompt input as a 1-based index into `options` or a
/// triplet name. With no known options any non-empty name is accepted.
pub fn parse_selection(input: &str, options: &[String]) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(index) = input.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .cloned();
    }
    if options.is_empty() || options.iter().any(|o| o == input) {
        return Some(input.to_string());
    }
    None
}

/// Ask the operator for a triplet until a valid one is given.
pub fn prompt<R: BufRead, W: Write>(
    options: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<Triplet> {
    if !options.is_empty() {
        writeln!(output, "Available triplets:")?;
        for (i, name) in options.iter().enumerate() {
            writeln!(output, "  {:>3}. {name}", i + 1)?;
        }
    }

    loop {
        write!(output, "Select a triplet (number or name): ")?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Reading triplet selection")?;
        if read == 0 {
            bail!("No triplet selected (end of input)");
        }

        match parse_selection(&line, options) {
            Some(name) => return Triplet::new(name),
            None => writeln!(output, "Invalid selection: {}", line.trim())?,
        }
    }
}
