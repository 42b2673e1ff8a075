use ratatui::style::{Color, Modifier, Style};

use foliotui::DisplayMode;

/// Colors for one (page, mode) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub surface: Color,
}

/// Scale an RGB color towards black (`factor` in 0..=100 percent kept)
fn darken((r, g, b): (u8, u8, u8), factor: u16) -> (u8, u8, u8) {
    let scale = |c: u8| (c as u16 * factor / 100) as u8;
    (scale(r), scale(g), scale(b))
}

impl Palette {
    pub fn new(accent_rgb: (u8, u8, u8), mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Dark => {
                let (r, g, b) = accent_rgb;
                Self {
                    accent: Color::Rgb(r, g, b),
                    background: Color::Rgb(10, 10, 15),
                    text: Color::Rgb(230, 230, 235),
                    muted: Color::Rgb(140, 140, 150),
                    surface: Color::Rgb(28, 28, 36),
                }
            }
            DisplayMode::Light => {
                // Bright accents wash out on white
                let (r, g, b) = darken(accent_rgb, 65);
                Self {
                    accent: Color::Rgb(r, g, b),
                    background: Color::Rgb(248, 248, 250),
                    text: Color::Rgb(25, 25, 30),
                    muted: Color::Rgb(100, 100, 110),
                    surface: Color::Rgb(232, 232, 238),
                }
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn accent_bold(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Highlight for the selected card or tile
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
