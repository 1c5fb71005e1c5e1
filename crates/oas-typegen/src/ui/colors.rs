use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// The role a piece of console output plays; each role maps to one color per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
  Timestamp,
  Primary,
  Accent,
  Success,
  Label,
  Value,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
  Color::Rgb { r, g, b }
}

impl Theme {
  const fn color(self, role: Role) -> Color {
    match (self, role) {
      (Theme::Dark, Role::Timestamp) => rgb(118, 166, 166),
      (Theme::Dark, Role::Primary) => rgb(86, 156, 214),
      (Theme::Dark, Role::Accent) => rgb(206, 145, 120),
      (Theme::Dark, Role::Success) => rgb(106, 153, 85),
      (Theme::Dark, Role::Label) => rgb(78, 201, 176),
      (Theme::Dark, Role::Value) => rgb(220, 220, 170),
      (Theme::Light, Role::Timestamp) => rgb(92, 62, 38),
      (Theme::Light, Role::Primary) => rgb(0, 92, 197),
      (Theme::Light, Role::Accent) => rgb(163, 21, 21),
      (Theme::Light, Role::Success) => rgb(34, 134, 58),
      (Theme::Light, Role::Label) => rgb(38, 127, 153),
      (Theme::Light, Role::Value) => rgb(121, 94, 38),
    }
  }
}

/// Console palette. When disabled every role resolves to [`Color::Reset`].
#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, role: Role) -> Color {
    if self.enabled { self.theme.color(role) } else { Color::Reset }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(Role::Timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(Role::Primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(Role::Accent)
  }

  pub const fn success(&self) -> Color {
    self.pick(Role::Success)
  }

  pub const fn label(&self) -> Color {
    self.pick(Role::Label)
  }

  pub const fn value(&self) -> Color {
    self.pick(Role::Value)
  }
}

/// Converts a crossterm color into the equivalent `comfy-table` cell color.
pub fn to_comfy(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    Color::Black => ComfyColor::Black,
    Color::DarkGrey => ComfyColor::DarkGrey,
    Color::Red => ComfyColor::Red,
    Color::DarkRed => ComfyColor::DarkRed,
    Color::Green => ComfyColor::Green,
    Color::DarkGreen => ComfyColor::DarkGreen,
    Color::Yellow => ComfyColor::Yellow,
    Color::DarkYellow => ComfyColor::DarkYellow,
    Color::Blue => ComfyColor::Blue,
    Color::DarkBlue => ComfyColor::DarkBlue,
    Color::Magenta => ComfyColor::Magenta,
    Color::DarkMagenta => ComfyColor::DarkMagenta,
    Color::Cyan => ComfyColor::Cyan,
    Color::DarkCyan => ComfyColor::DarkCyan,
    Color::White => ComfyColor::White,
    Color::Grey => ComfyColor::Grey,
    Color::Reset => ComfyColor::Reset,
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => theme_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()),
  }
}

/// Reads the background slot of a `COLORFGBG` value (`fg;bg`); codes 8 and above are light.
fn theme_from_colorfgbg(value: Option<&str>) -> Theme {
  match value
    .and_then(|value| value.rsplit(';').next())
    .and_then(|background| background.parse::<u8>().ok())
  {
    Some(background) if background >= 8 => Theme::Light,
    _ => Theme::Dark,
  }
}
