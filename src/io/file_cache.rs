//! File system abstraction for testability.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Trait for file system operations, allowing both real and virtual implementations.
pub trait FileCache: Send + Sync + std::fmt::Debug {
    /// Reads the contents of a file.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Checks if a file exists.
    fn exists(&self, path: &Path) -> bool;

    /// Creates or truncates a file and writes `content` to it.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Real file system implementation.
#[derive(Debug, Clone, Default)]
pub struct RealFileCache {
    /// Base directory for relative paths.
    pub base_dir: PathBuf,
    /// Create missing parent directories on write.
    pub create_dirs: bool,
}

impl RealFileCache {
    /// Creates a new RealFileCache with the given base directory.
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            create_dirs: true,
        }
    }

    /// Sets whether missing parent directories are created on write.
    #[must_use]
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Resolves a path relative to the base directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl FileCache for RealFileCache {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.resolve(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let target = self.resolve(path);
        if self.create_dirs {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = File::create(&target)?;
        file.write_all(content.as_bytes())?;
        file.flush()
    }
}

/// Virtual file system for testing.
#[derive(Debug, Default)]
pub struct VirtualFS {
    files: RwLock<BTreeMap<PathBuf, String>>,
}

impl VirtualFS {
    /// Creates a new empty virtual file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file to the virtual file system.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.into(), content.into());
    }

    /// Lists all files in path order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.files
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }
}

impl FileCache for VirtualFS {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.files
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "File not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.add_file(path, content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_virtual_fs_basic() {
        let vfs = VirtualFS::new();
        vfs.add_file("book.md", "hello world");

        assert!(vfs.exists(Path::new("book.md")));
        assert!(!vfs.exists(Path::new("other.md")));
        assert_eq!(vfs.read(Path::new("book.md")).unwrap(), "hello world");
    }

    #[test]
    fn test_virtual_fs_write_truncates() {
        let vfs = VirtualFS::new();
        vfs.write(Path::new("out.c"), "long old content").unwrap();
        vfs.write(Path::new("out.c"), "new").unwrap();

        assert_eq!(vfs.read(Path::new("out.c")).unwrap(), "new");
        assert_eq!(vfs.list_files(), vec![PathBuf::from("out.c")]);
    }

    #[test]
    fn test_virtual_fs_missing_file() {
        let vfs = VirtualFS::new();
        let err = vfs.read(Path::new("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_real_file_cache_roundtrip() {
        let dir = tempdir().unwrap();
        let cache = RealFileCache::new(dir.path().to_path_buf());

        cache.write(Path::new("main.c"), "int main;\n").unwrap();
        assert!(cache.exists(Path::new("main.c")));
        assert_eq!(cache.read(Path::new("main.c")).unwrap(), "int main;\n");
        assert_eq!(
            fs::read_to_string(dir.path().join("main.c")).unwrap(),
            "int main;\n"
        );
    }

    #[test]
    fn test_real_file_cache_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let cache = RealFileCache::new(dir.path().to_path_buf());

        cache.write(Path::new("src/lib/util.h"), "#pragma once\n").unwrap();
        assert!(dir.path().join("src/lib/util.h").exists());
    }

    #[test]
    fn test_real_file_cache_without_create_dirs() {
        let dir = tempdir().unwrap();
        let cache = RealFileCache::new(dir.path().to_path_buf()).with_create_dirs(false);

        assert!(cache.write(Path::new("missing/dir/out.c"), "x").is_err());
    }

    #[test]
    fn test_rewrite_truncates_in_place() {
        let dir = tempdir().unwrap();
        let cache = RealFileCache::new(dir.path().to_path_buf());
        cache.write(Path::new("out.txt"), "a much longer first version\n").unwrap();
        cache.write(Path::new("out.txt"), "short\n").unwrap();

        assert_eq!(cache.read(Path::new("out.txt")).unwrap(), "short\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let script = dir.path().join("run.sh");
        fs::write(&script, "echo old\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let cache = RealFileCache::new(dir.path().to_path_buf());
        cache.write(Path::new("run.sh"), "echo new\n").unwrap();

        let mode = fs::metadata(&script).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o755);
        assert_eq!(fs::read_to_string(&script).unwrap(), "echo new\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_follows_symlink() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("real.c"), "old\n").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.c"), dir.path().join("link.c")).unwrap();

        let cache = RealFileCache::new(dir.path().to_path_buf());
        cache.write(Path::new("link.c"), "new\n").unwrap();

        assert!(fs::symlink_metadata(dir.path().join("link.c"))
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(fs::read_to_string(dir.path().join("real.c")).unwrap(), "new\n");
    }

    #[test]
    fn test_no_stray_files_left_behind() {
        let dir = tempdir().unwrap();
        let cache = RealFileCache::new(dir.path().to_path_buf());
        cache.write(Path::new("a.txt"), "a").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("a.txt")]);
    }
}
