pub mod header;
pub mod artwork_table;
pub mod bulk_select_popover;
pub mod paginator;
pub mod loading_overlay;
