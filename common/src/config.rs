//! ブラウザ設定

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.artic.edu/api/v1/artworks";
pub const DEFAULT_STORAGE_KEY: &str = "selectedRows";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 選択記録のないページへ移動したときの選択の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionCarryOver {
    /// 選択を空にする
    #[default]
    Clear,
    /// 前のページの選択を表示したままにする
    Keep,
}

/// 古いリクエストのレスポンスの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// 最後に発行したリクエスト以外の結果は捨てる
    #[default]
    Discard,
    /// 後から届いた結果で上書きする
    LastToSettleWins,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub api_url: String,
    pub page_size: u32,
    /// `limit`クエリを送るか（未送信ならサーバ既定のページサイズ）
    pub send_page_size: bool,
    pub page_link_size: u32,
    pub storage_key: String,
    pub selection_carry_over: SelectionCarryOver,
    pub stale_responses: StaleResponsePolicy,
    pub log_level: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            page_size: DEFAULT_PAGE_SIZE,
            send_page_size: false,
            page_link_size: 5,
            storage_key: DEFAULT_STORAGE_KEY.into(),
            selection_carry_over: SelectionCarryOver::default(),
            stale_responses: StaleResponsePolicy::default(),
            log_level: "info".into(),
        }
    }
}

impl BrowserConfig {
    /// JSONから読み込む。省略したフィールドはデフォルト値
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BrowserConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(Error::Config("api_url must not be empty".into()));
        }
        if self.storage_key.trim().is_empty() {
            return Err(Error::Config("storage_key must not be empty".into()));
        }
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".into()));
        }
        if self.page_link_size == 0 {
            return Err(Error::Config("page_link_size must be at least 1".into()));
        }
        Ok(())
    }

    /// リクエストに載せるページサイズ
    pub fn request_limit(&self) -> Option<u32> {
        self.send_page_size.then_some(self.page_size)
    }
}
