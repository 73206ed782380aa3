#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sifter/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod schema;
pub use schema::ColumnMap;

mod snapshot;
pub use snapshot::{
    FundamentalsProvider, Snapshot, SnapshotProvider, records_from_csv, records_from_dataframe,
};

mod export;
pub use export::{export_csv, to_dataframe, write_csv};

mod error;
pub use error::ProviderError;
