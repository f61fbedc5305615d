use crate::config::Config;
use crate::errors::AppResult;
use crate::session::{SessionHandler, TokenStore};
use crate::ui::messages::{info, success};

/// Handle `login --token`.
pub fn login(cfg: &Config, token: &str) -> AppResult<()> {
    let store = TokenStore::new(cfg.token_path());
    store.save(token)?;
    success(format!("Logged in (token stored in {})", store.path().display()));
    Ok(())
}

/// Handle `logout`.
pub fn logout(cfg: &Config) -> AppResult<()> {
    let mut store = TokenStore::new(cfg.token_path());

    if !store.is_authenticated() {
        info("No active session.");
    }

    store.logout()?;
    success("Logged out.");
    Ok(())
}
