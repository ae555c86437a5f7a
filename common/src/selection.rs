//! 行選択の管理
//!
//! 表示中ページの選択リストを保持し、変更のたびに
//! ページ番号 → 選択IDリスト のマップをセッションストアへ書き込む。

use crate::config::SelectionCarryOver;
use crate::page::Page;
use crate::store::SessionStore;
use crate::types::Artwork;
use std::collections::BTreeMap;

/// ページ番号 → 選択ID（JSONでは`{"1":[3,7]}`）
pub type SelectionMap = BTreeMap<u32, Vec<u64>>;

/// ストアからマップを読む。未保存・壊れている場合は空
pub fn load_selection_map<S: SessionStore>(store: &S, key: &str) -> SelectionMap {
    let Some(raw) = store.get(key) else {
        return SelectionMap::new();
    };

    match serde_json::from_str(&raw) {
        Ok(map) => map,
        Err(e) => {
            log::warn!("discarding unreadable selection map under {:?}: {}", key, e);
            SelectionMap::new()
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionTracker {
    storage_key: String,
    selected: Vec<Artwork>,
}

impl SelectionTracker {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            selected: Vec::new(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn selected(&self) -> &[Artwork] {
        &self.selected
    }

    pub fn selected_ids(&self) -> Vec<u64> {
        self.selected.iter().map(|a| a.id).collect()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.selected.iter().any(|a| a.id == id)
    }

    /// 1行のチェックを切り替えた後のIDリスト
    pub fn toggled_ids(&self, id: u64) -> Vec<u64> {
        let mut ids = self.selected_ids();
        if let Some(pos) = ids.iter().position(|&selected| selected == id) {
            ids.remove(pos);
        } else {
            ids.push(id);
        }
        ids
    }

    /// 選択を置き換えて`page`の記録を上書きする
    ///
    /// `records`にないIDと重複は落とす。順序は`ids`の順。
    pub fn set_selection<S: SessionStore>(
        &mut self,
        store: &mut S,
        page: Page,
        ids: &[u64],
        records: &[Artwork],
    ) {
        self.selected = pick_records(ids, records);
        self.persist(store, page);
    }

    /// 取得したページに対して記録済みの選択を復元する（ストアには書かない）
    pub fn restore<S: SessionStore>(
        &mut self,
        store: &S,
        page: Page,
        records: &[Artwork],
        carry_over: SelectionCarryOver,
    ) {
        let map = load_selection_map(store, &self.storage_key);
        match map.get(&page.get()) {
            Some(ids) => {
                self.selected = pick_records(ids, records);
                log::debug!("restored {} selected rows on page {}", self.selected.len(), page);
            }
            None => match carry_over {
                SelectionCarryOver::Clear => self.selected.clear(),
                SelectionCarryOver::Keep => {}
            },
        }
    }

    fn persist<S: SessionStore>(&self, store: &mut S, page: Page) {
        let mut map = load_selection_map(store, &self.storage_key);
        map.insert(page.get(), self.selected_ids());

        let serialized = match serde_json::to_string(&map) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("failed to serialize selection map: {}", e);
                return;
            }
        };

        if let Err(e) = store.set(&self.storage_key, &serialized) {
            log::warn!("failed to persist selection for page {}: {}", page, e);
        }
    }
}

fn pick_records(ids: &[u64], records: &[Artwork]) -> Vec<Artwork> {
    let mut picked: Vec<Artwork> = Vec::with_capacity(ids.len());
    for id in ids {
        if picked.iter().any(|a| a.id == *id) {
            continue;
        }
        if let Some(record) = records.iter().find(|r| r.id == *id) {
            picked.push(record.clone());
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::store::MemoryStore;

    const KEY: &str = "selectedRows";

    fn records(ids: &[u64]) -> Vec<Artwork> {
        ids.iter()
            .map(|&id| Artwork {
                id,
                title: format!("Artwork {}", id),
                ..Default::default()
            })
            .collect()
    }

    fn page(n: u32) -> Page {
        Page::new(n).unwrap()
    }

    struct FullStore;

    impl SessionStore for FullStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("QuotaExceededError".into()))
        }
    }

    #[test]
    fn test_set_selection_persists_page_entry() {
        let mut store = MemoryStore::new();
        let mut tracker = SelectionTracker::new(KEY);
        let rows = records(&[1, 2, 3, 4, 5, 6, 7]);

        tracker.set_selection(&mut store, page(1), &[3, 7], &rows);

        assert_eq!(tracker.selected_ids(), vec![3, 7]);
        assert_eq!(store.get(KEY).as_deref(), Some(r#"{"1":[3,7]}"#));
    }

    #[test]
    fn test_set_selection_overwrites_same_page() {
        let mut store = MemoryStore::new();
        let mut tracker = SelectionTracker::new(KEY);
        let rows = records(&[1, 2, 3]);

        tracker.set_selection(&mut store, page(1), &[1, 2], &rows);
        tracker.set_selection(&mut store, page(1), &[3], &rows);

        assert_eq!(store.get(KEY).as_deref(), Some(r#"{"1":[3]}"#));
    }

    #[test]
    fn test_set_selection_keeps_other_pages() {
        let mut store = MemoryStore::new();
        store.set(KEY, r#"{"1":[3,7]}"#).unwrap();
        let mut tracker = SelectionTracker::new(KEY);

        tracker.set_selection(&mut store, page(2), &[11], &records(&[11, 12]));

        let map = load_selection_map(&store, KEY);
        assert_eq!(map.get(&1), Some(&vec![3, 7]));
        assert_eq!(map.get(&2), Some(&vec![11]));
    }

    #[test]
    fn test_set_selection_drops_ids_not_on_page() {
        let mut store = MemoryStore::new();
        let mut tracker = SelectionTracker::new(KEY);

        tracker.set_selection(&mut store, page(1), &[2, 99, 2, 1], &records(&[1, 2, 3]));

        assert_eq!(tracker.selected_ids(), vec![2, 1]);
    }

    #[test]
    fn test_empty_selection_is_persisted() {
        let mut store = MemoryStore::new();
        let mut tracker = SelectionTracker::new(KEY);

        tracker.set_selection(&mut store, page(4), &[], &records(&[1]));

        assert_eq!(store.get(KEY).as_deref(), Some(r#"{"4":[]}"#));
    }

    #[test]
    fn test_toggled_ids() {
        let mut store = MemoryStore::new();
        let mut tracker = SelectionTracker::new(KEY);
        tracker.set_selection(&mut store, page(1), &[3, 7], &records(&[3, 5, 7]));

        assert_eq!(tracker.toggled_ids(5), vec![3, 7, 5]);
        assert_eq!(tracker.toggled_ids(3), vec![7]);
    }

    #[test]
    fn test_unreadable_map_is_replaced() {
        let mut store = MemoryStore::new();
        store.set(KEY, "not json").unwrap();
        let mut tracker = SelectionTracker::new(KEY);

        tracker.set_selection(&mut store, page(1), &[1], &records(&[1]));

        assert_eq!(store.get(KEY).as_deref(), Some(r#"{"1":[1]}"#));
    }

    #[test]
    fn test_storage_failure_keeps_in_memory_selection() {
        let mut store = FullStore;
        let mut tracker = SelectionTracker::new(KEY);

        tracker.set_selection(&mut store, page(1), &[1], &records(&[1, 2]));

        assert_eq!(tracker.selected_ids(), vec![1]);
    }

    #[test]
    fn test_restore_recorded_page() {
        let mut store = MemoryStore::new();
        store.set(KEY, r#"{"2":[12,14]}"#).unwrap();
        let mut tracker = SelectionTracker::new(KEY);

        tracker.restore(&store, page(2), &records(&[11, 12, 13, 14]), SelectionCarryOver::Clear);

        assert_eq!(tracker.selected_ids(), vec![12, 14]);
        assert_eq!(store.get(KEY).as_deref(), Some(r#"{"2":[12,14]}"#));
    }

    #[test]
    fn test_restore_unrecorded_page_clear() {
        let mut store = MemoryStore::new();
        let mut tracker = SelectionTracker::new(KEY);
        tracker.set_selection(&mut store, page(1), &[1], &records(&[1, 2]));

        tracker.restore(&store, page(2), &records(&[11, 12]), SelectionCarryOver::Clear);

        assert!(tracker.selected().is_empty());
    }

    #[test]
    fn test_restore_unrecorded_page_keep() {
        let mut store = MemoryStore::new();
        let mut tracker = SelectionTracker::new(KEY);
        tracker.set_selection(&mut store, page(1), &[1], &records(&[1, 2]));

        tracker.restore(&store, page(2), &records(&[11, 12]), SelectionCarryOver::Keep);

        assert_eq!(tracker.selected_ids(), vec![1]);
    }
}
