//! loggate-core — query model and pure pipeline layers for loggate.
//!
//! Nothing in this crate performs I/O. The store crate decides *where* a page
//! comes from; this crate defines *what* a page is and how both sources are
//! shaped into it.
//!
//! # Architecture
//!
//! ```text
//!                     ┌──► translate ──► (primary store) ──┐
//! QueryParams ──► ────┤                                    ├──► normalize ──► QueryResult
//!                     └──► filter ──► paginate (fixtures) ─┘
//! ```

pub mod config;
pub mod filter;
pub mod fixtures;
pub mod normalize;
pub mod paginate;
pub mod translate;
pub mod types;

pub use normalize::StoreRow;
pub use types::{
    LogLevel, LogRecord, LogStats, LogView, Pagination, QueryError, QueryParams, QueryResult,
    RawLogQuery,
};
