use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

/// Output colours; `enabled == false` writes plain text
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub enabled: bool,
    pub prompt: Color,
    pub notice: Color,
    pub result: Color,
    pub dimmed: Color,
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            enabled: true,
            prompt: Color::Rgb { r: 169, g: 177, b: 214 }, // #A9B1D6 Light Blue
            notice: Color::Rgb { r: 247, g: 118, b: 142 }, // #F7768E Coral Red
            result: Color::Rgb { r: 158, g: 206, b: 106 }, // #9ECE6A Green
            dimmed: Color::Rgb { r: 100, g: 110, b: 150 }, // #646E96 Dimmed Blue
        }
    }

    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::midnight()
        }
    }

    /// Midnight on a terminal when colour is wanted, plain otherwise
    pub fn for_stdout(color: bool) -> Self {
        if color && std::io::stdout().is_tty() {
            Self::midnight()
        } else {
            Self::plain()
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_leaves_text_alone() {
        let theme = Theme::plain();
        assert_eq!(theme.paint("hello", theme.notice), "hello");
    }

    #[test]
    fn test_midnight_theme_adds_escape_codes() {
        let theme = Theme::midnight();
        let painted = theme.paint("hello", theme.notice);
        assert!(painted.contains("hello"));
        // crossterm drops colour codes when NO_COLOR is set
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(painted.starts_with('\u{1b}'));
        }
    }

    #[test]
    fn test_for_stdout_without_color_is_plain() {
        assert!(!Theme::for_stdout(false).enabled);
    }
}
