//! Synchronization engine for itemsync
//!
//! This crate turns a parsed copy behavior into live work against a
//! tracker, implementing:
//!
//! - **Column resolution**: Binding configured column names to live view columns
//! - **Value transfer**: Type-aware copying of one column value between items
//! - **Link matching**: Pairing target items with the source items that link them
//! - **Sync passes**: Query, match, and copy for every mapped column
//! - **Change coalescing**: Collapsing bursts of notifications into single passes
//!
//! # Architecture
//!
//! `itemsync-core` sits between the configuration layer and the host
//! abstraction:
//!
//! ```text
//!        itemsync-cli
//!             |
//!       itemsync-core
//!        |         |
//! itemsync-config itemsync-host
//! ```
//!
//! # Example
//!
//! ```ignore
//! use itemsync_core::{Behavior, CopyBehavior};
//!
//! fn attach(host: &dyn itemsync_host::TrackerHost, config: itemsync_config::CopyConfig)
//!     -> itemsync_core::Result<CopyBehavior>
//! {
//!     let mut behavior = CopyBehavior::from_config(config);
//!     behavior.initialize(host)?;
//!     Ok(behavior)
//! }
//! ```

pub mod behavior;
pub mod coalescer;
pub mod column;
pub mod error;
pub mod mapping;
pub mod matcher;
pub mod pass;
pub mod transfer;

pub use behavior::{Behavior, CopyBehavior};
pub use coalescer::{ChangeCoalescer, Decision};
pub use column::ColumnRef;
pub use error::{Error, Result};
pub use mapping::Mapping;
pub use matcher::match_items;
pub use pass::{PassReport, SyncPlan};
pub use transfer::{format_one_decimal, transfer};
