//! Session handling: the stored bearer credential and the logout contract.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Owner of the user's session. The view calls [`SessionHandler::logout`]
/// instead of touching credentials itself.
pub trait SessionHandler {
    fn is_authenticated(&self) -> bool;

    /// Drop the stored credential. Logging out twice is not an error.
    fn logout(&mut self) -> AppResult<()>;
}

/// Bearer token kept in a plain file.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, token: &str) -> AppResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::Session("empty token".into()));
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    pub fn load(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s.trim().to_string()).filter(|t| !t.is_empty())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Token or a `Session` error telling the user to log in.
    pub fn require(&self) -> AppResult<String> {
        self.load()?
            .ok_or_else(|| AppError::Session("not logged in (run `workhistory login`)".into()))
    }

    /// Remove the token file. Returns whether a token was present.
    pub fn clear(&self) -> AppResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionHandler for TokenStore {
    fn is_authenticated(&self) -> bool {
        matches!(self.load(), Ok(Some(_)))
    }

    fn logout(&mut self) -> AppResult<()> {
        self.clear().map(|_| ())
    }
}
