//! Kept copies of intermediate files for debugging.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use crate::error::{CoreError, CoreResult};

/// Prefix of the directories created for saved intermediates.
pub const TEMP_DIR_PREFIX: &str = "logos-format-tmp-";

/// Directory receiving the masked input and raw formatter output of each file.
///
/// The directory is never removed by logos-format.
#[derive(Debug, Clone)]
pub struct TempStore {
    dir: PathBuf,
}

impl TempStore {
    /// Create a fresh directory under `parent`.
    ///
    /// clang-format resolves `.clang-format` relative to the file it is given,
    /// so the directory lives inside the project rather than the system temp dir.
    pub fn create_in(parent: impl AsRef<Path>) -> CoreResult<Self> {
        let parent = parent.as_ref();
        let stamp = Utc::now().format("%Y%m%d-%H%M%S");
        let pid = std::process::id();

        for attempt in 0..100u32 {
            let dir = parent.join(format!("{}{}-{}-{}", TEMP_DIR_PREFIX, stamp, pid, attempt));
            match fs::create_dir(&dir) {
                Ok(()) => {
                    warn!("Saving logos-format temporary files in {:?}", dir);
                    return Ok(Self { dir });
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(CoreError::file_io(dir, e)),
            }
        }

        Err(CoreError::file_io(
            parent,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "could not create a unique temporary directory",
            ),
        ))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save one stage of one file, named after the file the formatter saw.
    pub fn save(&self, index: usize, assumed: &Path, stage: &str, content: &str) -> CoreResult<PathBuf> {
        let stem = assumed
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "source".to_string());
        let name = match assumed.extension() {
            Some(ext) => format!("{}-{}-{}.{}", index, stem, stage, ext.to_string_lossy()),
            None => format!("{}-{}-{}", index, stem, stage),
        };

        let path = self.dir.join(name);
        info!("Saving {} copy at {:?}", stage, path);
        fs::write(&path, content).map_err(|e| CoreError::file_io(&path, e))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_and_save() {
        let temp = tempdir().unwrap();
        let store = TempStore::create_in(temp.path()).unwrap();

        assert!(store.dir().is_dir());
        assert!(store
            .dir()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(TEMP_DIR_PREFIX));

        let saved = store
            .save(0, Path::new("src/Tweak.mm"), "masked", "@logosformatorig;\n")
            .unwrap();
        assert_eq!(saved.file_name().unwrap(), "0-Tweak-masked.mm");
        assert_eq!(fs::read_to_string(saved).unwrap(), "@logosformatorig;\n");
    }

    #[test]
    fn test_two_stores_do_not_collide() {
        let temp = tempdir().unwrap();
        let a = TempStore::create_in(temp.path()).unwrap();
        let b = TempStore::create_in(temp.path()).unwrap();
        assert_ne!(a.dir(), b.dir());
    }
}
