use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Key the CLI stores the Gemini API key under
pub const API_KEY_NAME: &str = "GEMINI_API_KEY";

/// A small on-disk store for API keys.
///
/// Secrets live in a JSON object at `~/.dualchat/secrets.json` unless the
/// store is opened at an explicit path.
#[derive(Debug)]
pub struct SecretStore {
    secrets: HashMap<String, SecretString>,
    file_path: PathBuf,
}

impl SecretStore {
    /// Opens the store at the default location, creating the directory if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not find home directory")
        })?;
        Self::open_at(home_dir.join(".dualchat").join("secrets.json"))
    }

    /// Opens the store backed by `file_path`. A missing file is an empty store.
    pub fn open_at(file_path: impl Into<PathBuf>) -> io::Result<Self> {
        let file_path = file_path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut store = SecretStore {
            secrets: HashMap::new(),
            file_path,
        };
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load(&mut self) -> io::Result<()> {
        match File::open(&self.file_path) {
            Ok(mut file) => {
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                if contents.trim().is_empty() {
                    return Ok(());
                }
                let secrets: HashMap<String, String> = serde_json::from_str(&contents)
                    .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string()))?;
                self.secrets = secrets
                    .into_iter()
                    .map(|(key, value)| (key, SecretString::new(value)))
                    .collect();
                Ok(())
            }
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn save(&self) -> io::Result<()> {
        let secrets: HashMap<&str, &str> = self
            .secrets
            .iter()
            .map(|(key, value)| (key.as_str(), value.expose_secret().as_str()))
            .collect();
        let contents = serde_json::to_string_pretty(&secrets)?;
        let mut file = open_owner_only(&self.file_path)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    /// Stores `value` under `key` and writes the file.
    pub fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.secrets
            .insert(key.to_string(), SecretString::new(value.to_string()));
        self.save()
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.secrets.get(key).map(|secret| secret.expose_secret())
    }

    /// Retrieves a secret value without exposing it as a String
    pub fn get_secret(&self, key: &str) -> Option<&SecretString> {
        self.secrets.get(key)
    }

    /// Removes `key`. Returns whether it was present.
    pub fn delete(&mut self, key: &str) -> io::Result<bool> {
        let existed = self.secrets.remove(key).is_some();
        if existed {
            self.save()?;
        }
        Ok(existed)
    }
}

/// Creates the file as 0600 so the key is never world-readable, and
/// tightens a file that already existed with looser bits.
#[cfg(unix)]
fn open_owner_only(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    if file.metadata()?.permissions().mode() & 0o077 != 0 {
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    Ok(file)
}

#[cfg(not(unix))]
fn open_owner_only(path: &Path) -> io::Result<File> {
    File::create(path)
}
