pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use model::profile::ScoringProfile;
pub use model::result::{ResultStatus, ScoreResult};
pub use model::score_input::ScoreInput;
pub use model::table::{ReferenceTable, ReferenceTables};
pub use pipeline::stage5_compile::{compile_center_results, compile_center_results_with_details};

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
pub(crate) mod test_support;
