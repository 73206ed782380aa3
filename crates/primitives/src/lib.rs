#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sifter/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod company;
pub use company::{CompanyRecord, Ticker};

mod factor;
pub use factor::{Direction, ScoreFactor};

mod weights;
pub use weights::FactorWeights;

mod criteria;
pub use criteria::FilterCriteria;

mod scored;
pub use scored::{NormalizedFactors, ScoredRecord};
