//! Shared test utilities for the itemsync workspace.
//!
//! This crate provides a scriptable in-memory [`TrackerHost`] so engine
//! and integration tests can run without a real tracker application. It
//! is a dev-dependency only - never published.
//!
//! # Modules
//!
//! - [`tracker`] - [`MemTracker`](tracker::MemTracker), the in-memory host
//!
//! [`TrackerHost`]: itemsync_host::TrackerHost

pub mod tracker;
