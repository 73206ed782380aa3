#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sifter/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod minmax;
pub use minmax::{DEGENERATE_FALLBACK, FactorRange, MinMaxScaler};

mod summary;
pub use summary::{mean, mean_present};
