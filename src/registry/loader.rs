use std::path::Path;

use crate::error::LoadError;
use crate::screen::screen_model::ScreenDescriptor;

/// Load descriptors from a YAML file or a directory of `.yaml`/`.yml` files.
///
/// A file holds either one descriptor or a sequence of them. Directory
/// results are sorted by screen name.
pub fn load_descriptors(path: impl AsRef<Path>) -> Result<Vec<ScreenDescriptor>, LoadError> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return load_file(path);
    }

    let entries = std::fs::read_dir(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut descriptors = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let p = entry.path();
        if p.extension().is_some_and(|e| e == "yaml" || e == "yml") {
            descriptors.extend(load_file(&p)?);
        }
    }

    descriptors.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(path = %path.display(), screens = descriptors.len(), "loaded screen directory");
    Ok(descriptors)
}

fn load_file(path: &Path) -> Result<Vec<ScreenDescriptor>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_descriptors(&content).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse one descriptor or a sequence of descriptors from YAML text.
pub fn parse_descriptors(content: &str) -> Result<Vec<ScreenDescriptor>, serde_yaml::Error> {
    let document: serde_yaml::Value = serde_yaml::from_str(content)?;
    if document.is_sequence() {
        serde_yaml::from_value(document)
    } else {
        Ok(vec![serde_yaml::from_value(document)?])
    }
}
