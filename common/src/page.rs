//! ページ番号とページ送りの計算

use std::fmt;

/// 1始まりのページ番号
///
/// UIのページャは0始まりのインデックスを返すので、変換はここに集約する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Page = Page(1);

    /// 0は`None`
    pub fn new(number: u32) -> Option<Self> {
        (number >= 1).then_some(Self(number))
    }

    /// 0始まりのUIインデックスから
    pub fn from_index(index: usize) -> Self {
        let number = u32::try_from(index).unwrap_or(u32::MAX - 1);
        Self(number.saturating_add(1))
    }

    /// 0始まりのUIインデックス
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 総ページ数 = ceil(総レコード数 / ページサイズ)
pub fn total_pages(total_records: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_records.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// ページャに並べるページ番号リンク
///
/// 現在ページを中心に`link_size`個、`[1, total_pages]`に収まるようにずらす。
pub fn page_links(current: Page, total_pages: u32, link_size: u32) -> Vec<Page> {
    if total_pages == 0 {
        return Vec::new();
    }

    let size = link_size.clamp(1, total_pages);
    let current = current.get().min(total_pages);

    // size <= total_pages なので end は total_pages を超えない
    let last_start = total_pages - (size - 1);
    let start = current.saturating_sub(size / 2).max(1).min(last_start);
    let end = start + (size - 1);

    (start..=end).map(Page).collect()
}
