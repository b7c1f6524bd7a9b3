mod chart;
mod employee;
mod error;
mod metrics;
mod storage;
mod store;
mod theme;
mod validate;

pub use chart::{chart_options, radar_options, ChartKind};
pub use employee::{
    Employee, EmployeeDraft, EmployeeUpdate, PerformanceCategory, PerformanceRecord,
};
pub use error::StoreError;
pub use metrics::{
    average_score, department_distribution, score_ranges, score_series, top_performers,
    CategoryValue, SCORE_RANGES,
};
pub use storage::{JsonFileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{EmployeeStore, SubscriberId};
pub use theme::{Theme, ThemeStore, THEME_KEY};
pub use validate::{validate_draft, FieldViolation, Rule, Violation};
