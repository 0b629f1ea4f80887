//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `raw_catalog`: raw catalog text in the irregular upstream format
//! - `catalog`: the parsed catalog for `raw_catalog`
//! - `controller`: a fresh highlight controller over `catalog`

use catalog_lens::{Catalog, HighlightController};
use rstest::fixture;

/// Raw catalog text exercising every delimiter quirk: padded fields, empty
/// fields, pasted pairs, duplicates and a CRLF line.
///
/// Token indices:
/// 0 `NET_HTTP_GET`, 1 `NET_HTTP_POST`, 2 `net_dns`, 3 `FS_READ`, 4 `FS_WRITE`,
/// 5 `fs_sync`, 6 `IPC_PIPE`, 7 `net_dns`, 8 `MISC-http2`
pub const RAW_CATALOG: &str = "NET_HTTP_GET; NET_HTTP_POST;net_dns\n\
FS_READ;; FS_WRITE fs_sync \r\n\
IPC_PIPE ;net_dns;\n\
\n\
  MISC-http2  ";

#[fixture]
pub fn raw_catalog() -> &'static str {
    RAW_CATALOG
}

#[fixture]
pub fn catalog(raw_catalog: &'static str) -> Catalog {
    catalog_lens::tracing::init();
    Catalog::parse(raw_catalog)
}

#[fixture]
pub fn controller(catalog: Catalog) -> HighlightController {
    HighlightController::new(catalog)
}
