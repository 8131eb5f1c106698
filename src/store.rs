use crate::error::ConfigFileError;
use log::{debug, warn};
use profile_file::lines_of;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Access to the config file an edit works on.
pub trait ConfigFiles {
    fn path(&self) -> &Path;

    /// Reads all lines. A file that does not exist reads as an empty sequence.
    fn read_lines(&self) -> Result<Vec<String>, ConfigFileError>;

    /// Replaces the whole content of the file.
    fn write_text(&self, content: &str) -> Result<(), ConfigFileError>;
}

/// Gets told after the config file was rewritten, so cached profile state can be reloaded.
pub trait ConfigWatcher {
    fn config_changed(&self, path: &Path) -> anyhow::Result<()>;
}

/// Notifies `watcher`. Failures are logged and otherwise ignored.
pub fn notify_config_changed(watcher: &impl ConfigWatcher, path: &Path) {
    if let Err(e) = watcher.config_changed(path) {
        warn!("Could not notify about changes to {}: {e}", path.display());
    }
}

#[derive(Debug, Clone)]
pub struct FileConfigFiles {
    path: PathBuf,
}

impl FileConfigFiles {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigFiles for FileConfigFiles {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_lines(&self) -> Result<Vec<String>, ConfigFileError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(lines_of(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Config file {} does not exist, treating it as empty", self.path.display());
                Ok(Vec::new())
            }
            Err(e) => Err(ConfigFileError::read(&self.path, e)),
        }
    }

    fn write_text(&self, content: &str) -> Result<(), ConfigFileError> {
        write_atomically(&self.path, content).map_err(|e| ConfigFileError::write(&self.path, e))
    }
}

/// Writes into a temporary file next to `path` and moves it over the target, so readers see
/// either the old or the new content. Permissions of an existing file are kept. Symlinks are
/// followed: the file they point to gets replaced, the link stays.
fn write_atomically(path: &Path, content: &str) -> io::Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let path = target.as_path();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;
    if let Ok(metadata) = fs::metadata(path) {
        file.as_file().set_permissions(metadata.permissions())?;
    }
    file.persist(path).map_err(|e| e.error)?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Watcher used by the command line: there is no long running profile cache to refresh,
/// so the change is only logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingWatcher;

impl ConfigWatcher for LoggingWatcher {
    fn config_changed(&self, path: &Path) -> anyhow::Result<()> {
        debug!("Profiles in {} changed", path.display());
        Ok(())
    }
}
