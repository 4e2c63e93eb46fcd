use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Where the scheme document goes when no output path is given.
pub const DEFAULT_OUTPUT: &str = "themes/colors.json";

/// The two-color scheme document: darkest and lightest dominant buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scheme {
    pub bg: Color,
    pub fg: Color,
}

impl Scheme {
    /// Serialize to JSON with two-space indentation, `bg` before `fg`.
    pub fn serialize(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize scheme")
    }

    /// Read a scheme document back from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read scheme from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid scheme document: {}", path.display()))
    }

    /// Write the scheme to `path`, creating the parent directory if needed.
    ///
    /// The document is written to a sibling temp file and renamed into place,
    /// so the target is either the old document or the complete new one.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = self.serialize()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory: {}", parent.display())
            })?;
        }

        let tmp = temp_path(path);
        fs::write(&tmp, content)
            .with_context(|| format!("failed to write scheme to {}", path.display()))?;
        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(err).with_context(|| format!("failed to write scheme to {}", path.display()));
        }

        log::debug!("wrote scheme to {}", path.display());
        Ok(())
    }

    /// WCAG contrast ratio between `bg` and `fg`.
    pub fn contrast_ratio(&self) -> f32 {
        Color::contrast_ratio(&self.bg, &self.fg)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("scheme"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Scheme {
        Scheme {
            bg: Color::new(0, 32, 64),
            fg: Color::new(224, 192, 160),
        }
    }

    #[test]
    fn serializes_as_indented_json() {
        let json = sample().serialize().unwrap();
        assert_eq!(json, "{\n  \"bg\": \"#002040\",\n  \"fg\": \"#e0c0a0\"\n}");
    }

    #[test]
    fn write_creates_missing_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("themes").join("nested").join("colors.json");

        sample().write_to(&path).unwrap();

        assert_eq!(Scheme::load(&path).unwrap(), sample());
        assert!(!path.with_file_name("colors.json.tmp").exists());
    }

    #[test]
    fn write_overwrites_existing_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("colors.json");
        fs::write(&path, "{\"bg\": \"#ffffff\", \"fg\": \"#ffffff\", \"extra\": 1}").unwrap();

        sample().write_to(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, sample().serialize().unwrap());
    }

    #[test]
    fn write_into_file_parent_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("themes");
        fs::write(&blocker, "not a directory").unwrap();

        let err = sample().write_to(&blocker.join("colors.json")).unwrap_err();
        assert!(err.to_string().contains("failed to create output directory"));
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("colors.json");
        fs::write(&path, "{\"bg\": \"#000000\", \"fg\": \"#ffffff\", \"accent\": \"#ff0000\"}").unwrap();

        assert!(Scheme::load(&path).is_err());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = Scheme::load(Path::new("/nonexistent/colors.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/colors.json"));
    }
}
