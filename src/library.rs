//! The wallpaper library: a flat directory of wallpaper images.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::pipeline::extract_scheme;
use crate::scheme::Scheme;

/// Default library directory, relative to the working directory.
pub const DEFAULT_LIBRARY_DIR: &str = "wallpapers";

/// File extensions listed as wallpapers (matched case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Check if a path has a supported wallpaper extension.
pub fn is_wallpaper(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let ext = e.to_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|&supported| supported == ext)
        })
        .unwrap_or(false)
}

#[derive(Debug, Clone)]
pub struct WallpaperLibrary {
    dir: PathBuf,
}

impl WallpaperLibrary {
    /// Open the library at `dir`, creating the directory if it is missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create wallpaper directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Wallpaper file names, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read wallpaper directory: {}", self.dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || !is_wallpaper(&path) {
                continue;
            }
            match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => names.push(name.to_string()),
                None => log::warn!("skipping non UTF-8 file name: {}", path.display()),
            }
        }
        names.sort();
        Ok(names)
    }

    /// Copy `source` into the library under its own file name.
    pub fn add(&self, source: &Path) -> Result<String> {
        if !is_wallpaper(source) {
            bail!(
                "unsupported wallpaper format: {} (expected one of: {})",
                source.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            );
        }
        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("invalid wallpaper file name: {}", source.display()))?
            .to_string();

        let destination = self.dir.join(&name);
        if destination.exists() {
            bail!("wallpaper already exists: {name}");
        }
        fs::copy(source, &destination).with_context(|| {
            format!(
                "failed to copy {} to {}",
                source.display(),
                destination.display()
            )
        })?;

        log::info!("added wallpaper {name}");
        Ok(name)
    }

    /// Delete a wallpaper from the library.
    pub fn remove(&self, name: &str) -> Result<()> {
        let path = self.path_of(name)?;
        fs::remove_file(&path)
            .with_context(|| format!("failed to remove wallpaper: {}", path.display()))?;
        log::info!("removed wallpaper {name}");
        Ok(())
    }

    /// Resolve a wallpaper name to its path. The wallpaper must exist.
    pub fn path_of(&self, name: &str) -> Result<PathBuf> {
        if Path::new(name).file_name().and_then(|n| n.to_str()) != Some(name) {
            bail!("invalid wallpaper name: {name:?}");
        }
        let path = self.dir.join(name);
        if !path.is_file() {
            bail!("no such wallpaper: {name}");
        }
        Ok(path)
    }

    /// Extract the scheme of a wallpaper and write it to `output`.
    pub fn apply(&self, name: &str, output: &Path) -> Result<Scheme> {
        let path = self.path_of(name)?;
        let scheme = extract_scheme(&path)?;
        scheme.write_to(output)?;
        log::info!("applied wallpaper {name} to {}", output.display());
        Ok(scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_png(path: &Path, rgb: [u8; 3]) {
        image::RgbImage::from_fn(4, 4, |_, _| image::Rgb(rgb))
            .save(path)
            .unwrap();
    }

    #[test]
    fn open_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("wallpapers");
        let library = WallpaperLibrary::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert!(library.list().unwrap().is_empty());
    }

    #[test]
    fn list_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        let library = WallpaperLibrary::open(tmp.path()).unwrap();
        for name in ["b.PNG", "a.jpg", "c.jpeg", "notes.txt", "d.webp"] {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }
        fs::create_dir(tmp.path().join("e.png")).unwrap();

        assert_eq!(library.list().unwrap(), vec!["a.jpg", "b.PNG", "c.jpeg"]);
    }

    #[test]
    fn add_copies_and_refuses_duplicates() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("sunset.png");
        write_png(&source, [200, 100, 50]);
        let library = WallpaperLibrary::open(tmp.path().join("lib")).unwrap();

        assert_eq!(library.add(&source).unwrap(), "sunset.png");
        assert!(source.exists());
        assert_eq!(library.list().unwrap(), vec!["sunset.png"]);

        let err = library.add(&source).unwrap_err().to_string();
        assert!(err.contains("already exists"), "got: {err}");
    }

    #[test]
    fn add_rejects_unsupported_extension() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("readme.txt");
        fs::write(&source, "hi").unwrap();
        let library = WallpaperLibrary::open(tmp.path().join("lib")).unwrap();

        assert!(library.add(&source).is_err());
    }

    #[test]
    fn remove_deletes_file() {
        let tmp = TempDir::new().unwrap();
        let library = WallpaperLibrary::open(tmp.path()).unwrap();
        write_png(&tmp.path().join("old.png"), [0, 0, 0]);

        library.remove("old.png").unwrap();
        assert!(library.list().unwrap().is_empty());
        assert!(library.remove("old.png").is_err());
    }

    #[test]
    fn path_of_rejects_traversal() {
        let tmp = TempDir::new().unwrap();
        let library = WallpaperLibrary::open(tmp.path().join("lib")).unwrap();
        write_png(&tmp.path().join("outside.png"), [0, 0, 0]);

        assert!(library.path_of("../outside.png").is_err());
        assert!(library.path_of("..").is_err());
        assert!(library.path_of("").is_err());
    }

    #[test]
    fn apply_writes_scheme() {
        let tmp = TempDir::new().unwrap();
        let library = WallpaperLibrary::open(tmp.path().join("lib")).unwrap();
        write_png(&library.dir().join("gray.png"), [40, 40, 40]);
        let output = tmp.path().join("themes").join("colors.json");

        let scheme = library.apply("gray.png", &output).unwrap();
        assert_eq!(scheme.bg.to_hex(), "#202020");
        assert_eq!(Scheme::load(&output).unwrap(), scheme);
    }
}
