use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract interface for the file system operations a note needs.
pub trait FileSystem {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Create or truncate a file and write `contents` to it.
    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()>;

    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()>;

    /// Whether any entry (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// List the regular files directly inside `dir`.
    /// This is NOT a recursive search.
    fn list_files(&self, dir: &Path) -> std::io::Result<Vec<PathBuf>>;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        std::fs::write(path, contents)
    }

    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        std::fs::rename(from, to)
    }

    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn list_files(&self, dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_is_single_level() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.md"), "").unwrap();
        fs::write(temp_dir.path().join("a.md"), "").unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("sub").join("c.md"), "").unwrap();

        let files = PhysicalFileSystem.list_files(temp_dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_list_files_missing_dir_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        assert!(PhysicalFileSystem.list_files(&missing).is_err());
    }

    #[test]
    fn test_exists_sees_directories() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("note.md");
        fs::create_dir(&dir).unwrap();
        assert!(PhysicalFileSystem.exists(&dir));
        assert!(!PhysicalFileSystem.exists(&temp_dir.path().join("other.md")));
    }
}
