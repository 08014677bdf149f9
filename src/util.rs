use std::fs;
use std::path::{Path, PathBuf};

/// Atomically replace a generated file.
///
/// Missing parent directories are created. Content goes to a sibling temp
/// file first and is renamed over the target, so readers never observe a
/// partially written file.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let staged = StagedFile::write(path, content)?;
    staged.commit()
}

/// Content written next to its target but not yet renamed into place.
///
/// Dropping it without `commit` removes the temp file and leaves the target
/// untouched.
pub struct StagedFile {
    tmp: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl StagedFile {
    pub fn write(path: &Path, content: &[u8]) -> std::io::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = temp_path(path);
        if let Err(err) = fs::write(&tmp, content) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        Ok(Self {
            tmp,
            target: path.to_path_buf(),
            committed: false,
        })
    }

    pub fn commit(mut self) -> std::io::Result<()> {
        fs::rename(&self.tmp, &self.target)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.tmp);
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("res/xml/shortcuts.xml");

        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory cannot be replaced by a file
        let path = dir.path().join("shortcuts.xml");
        fs::create_dir_all(path.join("occupied")).unwrap();

        assert!(atomic_write(&path, b"content").is_err());
        assert!(!temp_path(&path).exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_uncommitted_stage_leaves_target_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.xml");
        fs::write(&path, "old").unwrap();

        let staged = StagedFile::write(&path, b"new").unwrap();
        assert!(temp_path(&path).exists());
        drop(staged);

        assert!(!temp_path(&path).exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    }
}
