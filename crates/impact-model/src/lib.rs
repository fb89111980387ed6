pub mod error;
pub mod panel;
pub mod weights;

pub use error::{ModelError, Result};
pub use panel::{Panel, PanelRecord};
pub use weights::DonorWeights;
