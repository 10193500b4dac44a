//! # dataprep-cmis
//!
//! CMIS 1.1 browser binding client. Implements the session traits from
//! `dataprep-core` with JSON-over-HTTP calls made through `reqwest`.

pub mod browser;

pub use browser::provider::BrowserSessionProvider;
pub use browser::session::BrowserSession;
