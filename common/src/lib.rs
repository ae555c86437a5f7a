//! Artwork Browser Common Library
//!
//! Web(WASM)のフロントエンドとテストで共有される型と状態遷移

pub mod types;
pub mod error;
pub mod config;
pub mod page;
pub mod parser;
pub mod store;
pub mod selection;
pub mod bulk_select;
pub mod browser;

pub use types::{Artwork, ArtworkPage, Pagination};
pub use error::{Error, FetchError, Result};
pub use config::{BrowserConfig, SelectionCarryOver, StaleResponsePolicy};
pub use page::{page_links, total_pages, Page};
pub use parser::{build_page_url, parse_artwork_page};
pub use store::{MemoryStore, SessionStore};
pub use selection::{load_selection_map, SelectionMap, SelectionTracker};
pub use bulk_select::BulkSelect;
pub use browser::{ArtworkBrowser, BrowserEvent, FetchRequest, FetchTicket};
