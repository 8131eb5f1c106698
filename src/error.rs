use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Exit code for failed reads or writes of the config file (`EX_IOERR` from sysexits.h).
pub const EXIT_IO_ERROR: i32 = 74;

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Reading config file {} failed: {source}", .file.display())]
    Read {
        file: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Writing config file {} failed: {source}", .file.display())]
    Write {
        file: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigFileError {
    pub fn read(file: &Path, source: io::Error) -> Self {
        Self::Read {
            file: file.to_path_buf(),
            source,
        }
    }

    pub fn write(file: &Path, source: io::Error) -> Self {
        Self::Write {
            file: file.to_path_buf(),
            source,
        }
    }
}

impl ExitCode for ConfigFileError {
    fn exit_code(&self) -> i32 {
        match self {
            ConfigFileError::Read { .. } | ConfigFileError::Write { .. } => EXIT_IO_ERROR,
        }
    }
}

pub trait ExitCode {
    fn exit_code(&self) -> i32;
}
