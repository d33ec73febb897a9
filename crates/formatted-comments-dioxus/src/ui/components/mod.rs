pub mod error_screen;
pub mod formatted_text_display;
pub mod formatted_textarea;
pub mod formatting_toolbar;

pub use error_screen::ErrorScreen;
pub use formatted_text_display::FormattedTextDisplay;
pub use formatted_textarea::FormattedTextarea;
pub use formatting_toolbar::FormattingToolbar;
