//! 作品ブラウザの状態遷移
//!
//! UIイベントとネットワークの完了を`BrowserEvent`として受け取り、
//! 状態を同期的に更新する。発行すべきリクエストがあれば`FetchRequest`を返し、
//! 実際の通信は呼び出し側（Web層）が行って`FetchSettled`で戻す。

use crate::bulk_select::BulkSelect;
use crate::config::{BrowserConfig, StaleResponsePolicy};
use crate::error::FetchError;
use crate::page::{self, Page};
use crate::parser::build_page_url;
use crate::selection::{load_selection_map, SelectionMap, SelectionTracker};
use crate::store::SessionStore;
use crate::types::{Artwork, ArtworkPage};

/// 発行済みリクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    page: Page,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn page(&self) -> Page {
        self.page
    }
}

/// 一覧APIへのリクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub url: String,
}

#[derive(Debug, Clone)]
pub enum BrowserEvent {
    /// 初回表示
    Mounted,
    /// ページャ操作（0始まり）
    PageChanged { index: usize },
    /// リクエスト完了（成功・失敗とも）
    FetchSettled {
        ticket: FetchTicket,
        outcome: Result<ArtworkPage, FetchError>,
    },
    /// グリッドから報告された新しい選択
    SelectionChanged { ids: Vec<u64> },
    /// 1行のチェック切り替え
    RowToggled { id: u64 },
    BulkSelectToggled,
    BulkSelectCountChanged { input: String },
    BulkSelectSubmitted,
}

pub struct ArtworkBrowser<S> {
    config: BrowserConfig,
    store: S,
    mounted: bool,
    page: Page,
    /// `records`が属するページ（取得成功時のみ更新）
    displayed_page: Page,
    records: Vec<Artwork>,
    total_records: u64,
    loading: bool,
    next_seq: u64,
    latest: Option<FetchTicket>,
    selection: SelectionTracker,
    bulk: BulkSelect,
}

impl<S: SessionStore> ArtworkBrowser<S> {
    pub fn new(config: BrowserConfig, store: S) -> Self {
        let selection = SelectionTracker::new(config.storage_key.clone());
        Self {
            config,
            store,
            mounted: false,
            page: Page::FIRST,
            displayed_page: Page::FIRST,
            records: Vec::new(),
            total_records: 0,
            loading: false,
            next_seq: 0,
            latest: None,
            selection,
            bulk: BulkSelect::default(),
        }
    }

    /// イベントを1件適用する
    pub fn handle(&mut self, event: BrowserEvent) -> Option<FetchRequest> {
        match event {
            BrowserEvent::Mounted => {
                if self.mounted {
                    return None;
                }
                self.mounted = true;
                Some(self.issue_fetch())
            }

            BrowserEvent::PageChanged { index } => {
                let page = Page::from_index(index);
                if page == self.page {
                    return None;
                }
                self.page = page;
                Some(self.issue_fetch())
            }

            BrowserEvent::FetchSettled { ticket, outcome } => {
                self.settle(ticket, outcome);
                None
            }

            BrowserEvent::SelectionChanged { .. }
            | BrowserEvent::RowToggled { .. }
            | BrowserEvent::BulkSelectSubmitted
                if self.loading =>
            {
                log::debug!("ignoring selection change while page {} is loading", self.page);
                None
            }

            BrowserEvent::SelectionChanged { ids } => {
                self.select(&ids);
                None
            }

            BrowserEvent::RowToggled { id } => {
                let ids = self.selection.toggled_ids(id);
                self.select(&ids);
                None
            }

            BrowserEvent::BulkSelectToggled => {
                self.bulk.toggle();
                None
            }

            BrowserEvent::BulkSelectCountChanged { input } => {
                self.bulk.set_count_input(&input);
                None
            }

            BrowserEvent::BulkSelectSubmitted => {
                let ids: Vec<u64> = self.bulk.submit(&self.records).iter().map(|a| a.id).collect();
                self.select(&ids);
                None
            }
        }
    }

    fn issue_fetch(&mut self) -> FetchRequest {
        let ticket = FetchTicket {
            seq: self.next_seq,
            page: self.page,
        };
        self.next_seq += 1;
        self.latest = Some(ticket);
        self.loading = true;

        log::debug!("fetching artworks page {} (request #{})", ticket.page, ticket.seq);
        FetchRequest {
            ticket,
            url: build_page_url(&self.config.api_url, ticket.page, self.config.request_limit()),
        }
    }

    fn settle(&mut self, ticket: FetchTicket, outcome: Result<ArtworkPage, FetchError>) {
        let stale = self.latest != Some(ticket);
        if stale && self.config.stale_responses == StaleResponsePolicy::Discard {
            log::debug!(
                "discarding stale response for page {} (request #{})",
                ticket.page,
                ticket.seq
            );
            return;
        }

        self.loading = false;
        match outcome {
            Ok(fetched) => {
                self.records = fetched.data;
                self.displayed_page = ticket.page;
                self.total_records = fetched.pagination.total;
                self.selection.restore(
                    &self.store,
                    ticket.page,
                    &self.records,
                    self.config.selection_carry_over,
                );
                log::debug!(
                    "loaded {} artworks for page {} (total {})",
                    self.records.len(),
                    ticket.page,
                    self.total_records
                );
            }
            Err(e) => {
                log::error!("Error fetching artworks (page {}): {}", ticket.page, e);
            }
        }
    }

    /// 選択は表示中の行が属するページに記録する
    fn select(&mut self, ids: &[u64]) {
        self.selection
            .set_selection(&mut self.store, self.displayed_page, ids, &self.records);
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// 表示中の行が属するページ。取得失敗後は`page()`と異なることがある
    pub fn displayed_page(&self) -> Page {
        self.displayed_page
    }

    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn total_pages(&self) -> u32 {
        page::total_pages(self.total_records, self.config.page_size)
    }

    pub fn page_links(&self) -> Vec<Page> {
        page::page_links(self.page, self.total_pages(), self.config.page_link_size)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected(&self) -> &[Artwork] {
        self.selection.selected()
    }

    pub fn selected_ids(&self) -> Vec<u64> {
        self.selection.selected_ids()
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(id)
    }

    pub fn record_ids(&self) -> Vec<u64> {
        self.records.iter().map(|a| a.id).collect()
    }

    /// 表示中の行がすべて選択されているか（行がなければfalse）
    pub fn all_selected(&self) -> bool {
        !self.records.is_empty() && self.records.iter().all(|a| self.selection.contains(a.id))
    }

    /// ヘッダーの全選択チェックで報告する選択
    pub fn select_all_ids(&self, checked: bool) -> Vec<u64> {
        if checked {
            self.record_ids()
        } else {
            Vec::new()
        }
    }

    pub fn bulk_select(&self) -> &BulkSelect {
        &self.bulk
    }

    /// ストアに記録されたページ別の選択
    pub fn selection_map(&self) -> SelectionMap {
        load_selection_map(&self.store, self.selection.storage_key())
    }
}
