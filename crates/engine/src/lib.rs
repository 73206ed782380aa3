#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sifter/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod cohort;
pub use cohort::complete_cohort;

mod scoring;
pub use scoring::score_cohort;

mod filter;
pub use filter::apply_criteria;

mod rank;
pub use rank::{DEFAULT_TOP_K, rank, top_k};

mod summary;
pub use summary::CohortSummary;

mod screen;
pub use screen::{ScreenConfig, ScreenOutcome, Screener};
