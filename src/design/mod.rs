pub mod estimate;
pub mod options;
pub mod prompt;
pub mod selection;

pub use estimate::{material_details, MaterialDetails, MeasurementEstimate};
pub use prompt::build_image_prompt;
pub use selection::{DesignParams, DesignSelection, NO_ADJUSTMENT, NO_BLEND_SENTINEL};
