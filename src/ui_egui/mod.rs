mod app;
pub mod surface;
pub mod touch;

pub use app::YearGlanceApp;
