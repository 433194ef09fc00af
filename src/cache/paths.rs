// Cache path utilities.
// Constructs filesystem paths for cached pet data and the log file.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/petshelf on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "petshelf").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the application log file.
pub fn log_path(base: &Path) -> PathBuf {
    base.join("petshelf.log")
}

/// Path to the cached pet collection.
pub fn pets_path(base: &Path) -> PathBuf {
    base.join("pets.json")
}

/// Path to a single cached pet record.
pub fn pet_path(base: &Path, id: u64) -> PathBuf {
    base.join("pets").join(format!("{}.json", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_paths() {
        let base = Path::new("/tmp/petshelf-cache");

        assert!(pets_path(base).ends_with("petshelf-cache/pets.json"));
        assert!(pet_path(base, 42).ends_with("petshelf-cache/pets/42.json"));
        assert!(log_path(base).ends_with("petshelf-cache/petshelf.log"));
    }
}
