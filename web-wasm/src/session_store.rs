//! `sessionStorage`を使うセッションストア

use artwork_browser_common::{Error, Result, SessionStore};
use gloo::storage::{SessionStorage, Storage};

/// タブを閉じると消えるブラウザのセッションストレージ
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        SessionStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        SessionStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
