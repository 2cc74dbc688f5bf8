pub mod backend;
pub mod repository;
pub mod stats;
pub mod types;
pub mod value;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use repository::{export_filename, AssessmentStore};
pub use stats::{SummaryStats, TierCounts};
pub use types::{AssessmentDraft, AssessmentRecord, ProjectInfo};
pub use value::parse_project_value;
