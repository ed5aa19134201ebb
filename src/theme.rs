use crate::doctor::{Congestion, SignalTone};
use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(28, 28, 30); // #1C1C1E
pub const FOREGROUND: Color = Color::Rgb(242, 242, 247); // #F2F2F7
pub const PRIMARY: Color = Color::Rgb(0, 122, 255); // #007AFF
pub const SECONDARY: Color = Color::Rgb(88, 86, 214); // #5856D6
pub const SUCCESS: Color = Color::Rgb(52, 199, 89); // #34C759
pub const WARNING: Color = Color::Rgb(255, 149, 0); // #FF9500
pub const DANGER: Color = Color::Rgb(255, 59, 48); // #FF3B30
pub const GRAY: Color = Color::Rgb(142, 142, 147); // #8E8E93
pub const DIMMED: Color = Color::Rgb(72, 72, 74); // #48484A
pub const SELECTION_BG: Color = Color::Rgb(44, 44, 46); // #2C2C2E

pub fn tone(tone: SignalTone) -> Color {
    match tone {
        SignalTone::Strong => SUCCESS,
        SignalTone::Moderate => WARNING,
        SignalTone::Weak => DANGER,
    }
}

pub fn congestion(congestion: Congestion) -> Color {
    match congestion {
        Congestion::Free => DIMMED,
        Congestion::Moderate => WARNING,
        Congestion::Congested => DANGER,
    }
}
