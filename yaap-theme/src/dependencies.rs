//! `package.json` dependency merging
//!
//! Theme build tooling is installed as development dependencies. Merging
//! moves any of those packages out of `dependencies` so each package lives
//! in exactly one group, and keeps both groups sorted by name.

use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{Result, ThemeError};
use crate::fs::FileSystem;

/// Runtime dependency group key.
pub const DEPENDENCIES: &str = "dependencies";

/// Development dependency group key.
pub const DEV_DEPENDENCIES: &str = "devDependencies";

/// Frontend packages every generated theme builds with.
pub const FRONTEND_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("tailwindcss", "^3.4"),
    ("vite", "^5.4"),
    ("@tailwindcss/forms", "^0.5"),
    ("@tailwindcss/typography", "^0.4"),
    ("typescript", "^5.5"),
    ("autoprefixer", "^10.4"),
    ("postcss-nesting", "^13.0"),
];

/// Merge `new_dev` into the manifest at `manifest_path` and write it back.
///
/// The manifest is fully read and parsed before anything is written.
pub fn merge_dependencies<F: FileSystem>(
    fs: &F,
    manifest_path: &Path,
    new_dev: &[(&str, &str)],
) -> Result<()> {
    let unreadable = |reason: String| ThemeError::ManifestUnreadable {
        path: manifest_path.to_path_buf(),
        reason,
    };

    if !fs.exists(manifest_path) {
        return Err(unreadable("file does not exist".to_string()));
    }
    let raw = fs
        .read(manifest_path)
        .map_err(|e| unreadable(e.to_string()))?;
    let mut manifest: Value =
        serde_json::from_slice(&raw).map_err(|e| unreadable(e.to_string()))?;

    merge_into(&mut manifest, new_dev).map_err(unreadable)?;

    let mut output = crate::json::to_pretty_string(&manifest)?;
    output.push('\n');

    fs.write(manifest_path, output.as_bytes())
        .map_err(|e| ThemeError::ManifestWriteError {
            path: manifest_path.to_path_buf(),
            source: match e {
                ThemeError::Io { source, .. } => source,
                other => std::io::Error::other(other.to_string()),
            },
        })?;

    tracing::info!(
        manifest = %manifest_path.display(),
        packages = new_dev.len(),
        "dependencies updated"
    );
    Ok(())
}

/// Apply the merge to an already parsed manifest.
///
/// Returns a description of the problem when the manifest is not an object
/// or either dependency group is missing or not an object.
pub fn merge_into(manifest: &mut Value, new_dev: &[(&str, &str)]) -> std::result::Result<(), String> {
    let root = manifest
        .as_object_mut()
        .ok_or_else(|| "manifest is not a JSON object".to_string())?;

    for key in [DEPENDENCIES, DEV_DEPENDENCIES] {
        if !root.get(key).is_some_and(Value::is_object) {
            return Err(format!("missing \"{key}\" object"));
        }
    }

    if let Some(Value::Object(dev)) = root.get_mut(DEV_DEPENDENCIES) {
        for (name, version) in new_dev {
            dev.insert((*name).to_string(), Value::String((*version).to_string()));
        }
        sort_keys(dev);
    }

    if let Some(Value::Object(deps)) = root.get_mut(DEPENDENCIES) {
        for (name, _) in new_dev {
            deps.shift_remove(*name);
        }
        sort_keys(deps);
    }

    Ok(())
}

fn sort_keys(map: &mut Map<String, Value>) {
    let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    map.extend(entries);
}
