//! Cross-process advisory locking for the flat-file backends.
//!
//! The lock lives on a sidecar `<data file>.lock` so it survives the data file
//! being replaced by an atomic rename. On Unix it is an exclusive `flock(2)`;
//! elsewhere only the in-process mutex of the repository applies.

use crate::libs::error::StorageError;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use nix::fcntl::{Flock, FlockArg};

/// Held for one logical repository operation; released on drop.
pub struct FileLock {
    #[cfg(unix)]
    _flock: Flock<File>,
    #[cfg(not(unix))]
    _file: File,
}

impl FileLock {
    pub fn acquire(data_path: &Path) -> Result<Self, StorageError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(lock_path(data_path))?;

        #[cfg(unix)]
        {
            // Blocks until every other holder has released the lock.
            let flock = Flock::lock(file, FlockArg::LockExclusive).map_err(|(_, errno)| std::io::Error::from(errno))?;
            Ok(FileLock { _flock: flock })
        }

        #[cfg(not(unix))]
        {
            Ok(FileLock { _file: file })
        }
    }
}

pub fn lock_path(data_path: &Path) -> PathBuf {
    let mut name: OsString = data_path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}
