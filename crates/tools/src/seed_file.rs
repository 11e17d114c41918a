use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Single-line seed store. A missing or blank file means "no seed".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedFile {
    path: PathBuf,
}

impl SeedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> io::Result<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        let first_line = content.lines().next().unwrap_or_default().trim_end_matches('\r');
        Ok((!first_line.is_empty()).then(|| first_line.to_string()))
    }

    pub fn write(&self, seed: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, format!("{seed}\n"))?;
        fs::rename(&tmp_path, &self.path)
    }

    pub fn remove(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
