//! # sifter
//!
//! A factor-based equity screener.
//!
//! This crate provides a unified interface to the sifter workspace.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `math`: Normalization and aggregation primitives
//! - `engine`: The screening engine
//! - `provider`: Fundamentals snapshot loading and CSV export
//! - `cli`: The `screen` binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use sifter::engine::Screener;
//! use sifter::provider::{FundamentalsProvider, SnapshotProvider};
//!
//! let snapshot = SnapshotProvider::new("fundamentals_snapshot.csv").fetch()?;
//! let outcome = Screener::new().run(&snapshot.records);
//! for scored in outcome.top() {
//!     println!("{}: {:.3}", scored.ticker(), scored.score);
//! }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use sifter_primitives as primitives;

#[cfg(feature = "math")]
#[doc(inline)]
pub use sifter_math as math;

#[cfg(feature = "engine")]
#[doc(inline)]
pub use sifter_engine as engine;

#[cfg(feature = "provider")]
#[doc(inline)]
pub use sifter_provider as provider;
