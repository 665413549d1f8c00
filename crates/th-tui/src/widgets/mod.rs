//! UI Widgets

mod news;
mod status;
mod town;

pub use news::NewsWidget;
pub use status::StatusWidget;
pub use town::TownWidget;
