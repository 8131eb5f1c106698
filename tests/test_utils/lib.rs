use std::{
    fs::{self, create_dir_all},
    path::{Path, PathBuf},
};
use tempfile::{TempDir, tempdir};

/// Config with an sso-session, its role profile and unrelated sections around them.
pub const SAMPLE_CONFIG: &str = r"[default]
region = eu-central-1

[profile default]
region = us-east-1

[sso-session foo]
sso_start_url = https://x
sso_region = us-east-1
sso_registration_scopes = sso:account:access

[profile foo-AdminAccess]
sso_session = foo
sso_account_id = 123456789012
sso_role_name = AdminAccess

[sso-session bar]
sso_start_url = https://bar.awsapps.com/start
sso_region = eu-west-1

[profile reporting]
sso_session = bar
sso_account_id = 210987654321
sso_role_name = ReadOnly";

pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    /// Location of the config file, `<tmp>/.aws/config`. The file only exists after
    /// [`ConfigDir::write`] was called.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(".aws").join("config")
    }

    pub fn write(&self, content: &str) -> &Self {
        let path = self.config_path();
        create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn read(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Could not read config file")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

pub fn config_dir() -> ConfigDir {
    ConfigDir {
        dir: tempdir().expect("Failed to create a temporary directory"),
    }
}

/// Runs `test` against a temporary config file holding `content`.
pub fn with_temp_config<F>(content: &str, test: F)
where
    F: FnOnce(&ConfigDir),
{
    let dir = config_dir();
    dir.write(content);
    test(&dir);
}

pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n")
}
