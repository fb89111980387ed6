pub mod error;
pub mod loader;

pub use error::{IngestError, Result};
pub use loader::{
    OUTCOME_COLUMN, REGION_COLUMN, TIME_COLUMN, TREATMENT_COLUMN, read_panel,
    read_panel_from_reader,
};
