pub mod progress_overview;

pub use progress_overview::{LevelSummary, ProgressOverview, VisualizationInput, ANONYMOUS_NAME};
