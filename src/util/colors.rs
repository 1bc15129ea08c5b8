use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00ff8c42);
pub const SECONDARY: Color = Color::from_u32(0x00f472b6);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const ACCENT: Color = Color::from_u32(0x00c084fc);
