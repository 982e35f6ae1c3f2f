//! Dark palette and egui visuals for the whole app.

use eframe::egui;

/// Near-black base with a gray ramp and three accent hues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: egui::Color32,
    pub panel_bg: egui::Color32,
    pub card_bg: egui::Color32,
    pub border: egui::Color32,
    pub border_strong: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,
    pub text_muted: egui::Color32,
    pub text_faint: egui::Color32,
    pub accent_emerald: egui::Color32,
    pub accent_blue: egui::Color32,
    pub accent_purple: egui::Color32,
    pub accent_red: egui::Color32,
    pub inverted_bg: egui::Color32,
    pub inverted_text: egui::Color32,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            bg: egui::Color32::from_rgb(0x09, 0x09, 0x0b),
            panel_bg: egui::Color32::from_rgb(0x18, 0x18, 0x1b),
            card_bg: egui::Color32::from_rgb(0x13, 0x13, 0x16),
            border: egui::Color32::from_rgb(0x27, 0x27, 0x2a),
            border_strong: egui::Color32::from_rgb(0x3f, 0x3f, 0x46),
            text_primary: egui::Color32::from_rgb(0xfa, 0xfa, 0xfa),
            text_secondary: egui::Color32::from_rgb(0xd4, 0xd4, 0xd8),
            text_muted: egui::Color32::from_rgb(0xa1, 0xa1, 0xaa),
            text_faint: egui::Color32::from_rgb(0x71, 0x71, 0x7a),
            accent_emerald: egui::Color32::from_rgb(0x10, 0xb9, 0x81),
            accent_blue: egui::Color32::from_rgb(0x3b, 0x82, 0xf6),
            accent_purple: egui::Color32::from_rgb(0xa8, 0x55, 0xf7),
            accent_red: egui::Color32::from_rgb(0xef, 0x44, 0x44),
            inverted_bg: egui::Color32::from_rgb(0xf4, 0xf4, 0xf5),
            inverted_text: egui::Color32::from_rgb(0x09, 0x09, 0x0b),
        }
    }
}

pub fn apply(ctx: &egui::Context, palette: &Palette) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = palette.bg;
    visuals.window_fill = palette.panel_bg;
    visuals.extreme_bg_color = palette.bg;
    visuals.override_text_color = Some(palette.text_secondary);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.border);
    visuals.widgets.inactive.bg_fill = palette.panel_bg;
    visuals.widgets.hovered.bg_fill = palette.border;
    visuals.widgets.active.bg_fill = palette.border_strong;
    visuals.selection.bg_fill = palette.border_strong;
    ctx.set_visuals(visuals);
}
