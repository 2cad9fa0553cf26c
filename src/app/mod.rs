pub mod app;
pub mod event;
pub mod mode;
pub mod text;

pub use app::App;
pub use event::{AppEvent, Report};
pub use mode::AppMode;
pub use text::{prepare_text, PreparedText};
