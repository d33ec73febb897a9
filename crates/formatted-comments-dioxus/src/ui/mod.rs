pub mod app;
pub mod components;

pub use app::App;

pub(crate) const STYLE_CSS: &str = include_str!("../assets/style.css");
