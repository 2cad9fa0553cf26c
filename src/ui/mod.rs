pub mod render;
pub mod theme;

pub use render::{notice_text, render_event, render_report};
pub use theme::Theme;
