//! project.json TFM rewriter
//!
//! Walks a list of project descriptors, renames every framework moniker
//! found in the rename table to its canonical form and records the
//! superseded name at the front of the entry's `imports` list. A file is
//! rewritten in place only when at least one moniker matched.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::mappings::canonical_tfm;

/// Process descriptors strictly in the given order.
///
/// The first fatal error of any kind (unreadable file, malformed JSON, bad
/// descriptor shape, failed write) halts the batch. Files rewritten before
/// the failing path stay rewritten; later paths are never touched.
pub fn run<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        println!("Updating {} project.json", project_label(path));

        if rewrite_file(path)? {
            log::info!("rewrote {}", path.display());
        } else {
            log::debug!("no legacy monikers in {}, left untouched", path.display());
        }
    }
    Ok(())
}

/// Rewrite a single descriptor in place. Returns whether the file changed.
pub fn rewrite_file(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let mut descriptor: Value = serde_json::from_str(&content)
        .with_context(|| format!("invalid project.json: {}", path.display()))?;

    let updated = rewrite_descriptor(&mut descriptor)
        .with_context(|| format!("invalid project.json: {}", path.display()))?;

    if updated {
        let pretty = serde_json::to_string_pretty(&descriptor)?;
        fs::write(path, pretty)
            .with_context(|| format!("cannot write {}", path.display()))?;
    }

    Ok(updated)
}

/// Apply the rename table to the descriptor's `frameworks` section.
/// Returns whether anything was renamed.
pub fn rewrite_descriptor(descriptor: &mut Value) -> Result<bool> {
    let root = descriptor
        .as_object_mut()
        .context("root is not an object")?;
    let frameworks = root
        .get_mut("frameworks")
        .context("missing frameworks section")?
        .as_object_mut()
        .context("frameworks is not an object")?;

    // Snapshot the keys up front so renaming does not affect the walk.
    let names: Vec<String> = frameworks.keys().cloned().collect();
    let mut updated = false;

    for name in names {
        let Some(canonical) = canonical_tfm(&name) else {
            continue;
        };

        // The entry was present in the snapshot; losing it here would mean
        // the map was mutated behind our back.
        let entry = frameworks
            .get_mut(&name)
            .context("framework entry vanished during rename")?;
        let config = entry
            .as_object_mut()
            .with_context(|| format!("framework entry {name} is not an object"))?;

        let imports = merged_imports(&name, config.get("imports"))?;
        config.insert("imports".to_string(), Value::Array(imports));
        rename_key(frameworks, &name, canonical);

        log::debug!("renamed framework {} -> {}", name, canonical);
        updated = true;
    }

    Ok(updated)
}

/// Build the new imports list: the superseded moniker first, then whatever
/// the entry already imported. A scalar import is promoted to a one-element
/// list. No deduplication happens here: a hand-written list that already
/// names the legacy moniker keeps the duplicate.
fn merged_imports(legacy: &str, existing: Option<&Value>) -> Result<Vec<Value>> {
    let mut imports = vec![Value::String(legacy.to_string())];

    match existing {
        None => {}
        Some(Value::String(single)) => imports.push(Value::String(single.clone())),
        Some(Value::Array(list)) => {
            for import in list {
                if !import.is_string() {
                    bail!("imports of {legacy} contains a non-string value");
                }
                imports.push(import.clone());
            }
        }
        Some(_) => bail!("imports of {legacy} is neither a string nor an array"),
    }

    Ok(imports)
}

/// Replace `legacy` with `canonical`, keeping the entry at its original
/// position. serde_json's Map has no in-place rename, so rebuild the map
/// with the new key spliced in where the old one was.
fn rename_key(map: &mut Map<String, Value>, legacy: &str, canonical: &str) {
    let entries = std::mem::take(map);
    for (key, value) in entries {
        if key == legacy {
            map.insert(canonical.to_string(), value);
        } else {
            map.insert(key, value);
        }
    }
}

/// Cosmetic label for progress output: the name of the directory the
/// descriptor sits in, which is the project name in project.json layouts.
fn project_label(path: &Path) -> String {
    path.parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
