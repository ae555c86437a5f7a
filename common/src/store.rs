//! セッションスコープのキー/値ストア

use crate::error::Result;
use std::collections::HashMap;

/// 文字列のキー/値ストア
///
/// ブラウザでは`sessionStorage`、テストでは`MemoryStore`を使う。
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    /// 同じキーの既存の値は上書き
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
