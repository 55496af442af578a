pub mod error;

use crate::identity::error::{IdentityError, Result as IdentityResult};

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use am_core::UserId;

use log::{info, warn};

/// Durable-enough-for-a-session storage of the identity scalar.
///
/// The file holds a single JSON number - the id of the logged-in account.
/// Anything else in the file is corruption and is healed by deleting it.
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Reads the stored identity.
    ///
    /// Returns:
    /// - `Ok(Some(id))` - a valid positive id was stored
    /// - `Ok(None)` - no file (first launch), or the file held a
    ///   non-numeric or non-positive value; corrupt files are deleted
    pub fn restore(&self) -> IdentityResult<Option<UserId>> {
        if !self.path.exists() {
            info!("No identity file at {:?} (first launch)", self.path);
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| IdentityError::file_read(self.path.clone(), e))?;

        match serde_json::from_str::<UserId>(contents.trim()) {
            Ok(id) if id > 0 => {
                info!("Restored identity {id}");
                Ok(Some(id))
            }
            Ok(out_of_range) => {
                warn!("Stored identity {out_of_range} is not a positive id; clearing");
                self.discard();
                Ok(None)
            }
            Err(e) => {
                warn!("Identity file corrupted at {:?}: {e}; clearing", self.path);
                self.discard();
                Ok(None)
            }
        }
    }

    /// Saves the identity using atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    ///
    /// This prevents corruption if the process dies mid-write.
    pub fn persist(&self, id: UserId) -> IdentityResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| IdentityError::dir_creation(parent.to_path_buf(), e))?;
        }

        let temp_path = self
            .path
            .with_extension(format!("tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;

            file.write_all(id.to_string().as_bytes())
                .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            IdentityError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        info!("Saved identity {id}");
        Ok(())
    }

    /// Removes the stored identity; missing file is a no-op.
    pub fn clear(&self) -> IdentityResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared identity at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(IdentityError::file_remove(self.path.clone(), e)),
        }
    }

    /// Best-effort removal during self-healing; never escalates.
    fn discard(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!("Could not delete corrupt identity file {:?}: {e}", self.path);
        }
    }
}
