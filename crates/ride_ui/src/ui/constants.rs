//! Palette shared by the screens (mirrors the mobile design).

use eframe::egui::Color32;

pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
pub const DANGER_RED: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);
pub const INK: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37);
pub const MUTED: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
pub const MAP_BLUE: Color32 = Color32::from_rgb(0xdb, 0xea, 0xfe);

pub const MAP_HEIGHT: f32 = 260.0;
