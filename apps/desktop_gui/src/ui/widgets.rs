//! Small painted primitives shared by the view panels.

use eframe::egui;

use crate::ui::theme::Palette;

/// Uppercase mono caption, the recurring section-label treatment.
pub fn mono_caption(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .monospace()
            .size(10.0)
            .color(color),
    );
}

pub fn section_heading(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.label(
        egui::RichText::new(text)
            .size(26.0)
            .strong()
            .color(palette.text_primary),
    );
}

pub fn hairline(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 1.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .line_segment([rect.left_center(), rect.right_center()], egui::Stroke::new(1.0, color));
}

/// Bordered rounded chip, e.g. a skill tag.
pub fn tag_chip(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    let galley = ui.painter().layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(11.0),
        palette.text_muted,
    );
    let padding = egui::vec2(10.0, 5.0);
    let (rect, _) = ui.allocate_exact_size(galley.size() + padding * 2.0, egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(5), palette.panel_bg);
    ui.painter().rect_stroke(
        rect,
        egui::CornerRadius::same(5),
        egui::Stroke::new(1.0, palette.border),
        egui::StrokeKind::Middle,
    );
    ui.painter().galley(rect.min + padding, galley, palette.text_muted);
}

/// Filled rounded pill button with centered text. Returns the click
/// response.
pub fn pill_button(
    ui: &mut egui::Ui,
    text: &str,
    fill: egui::Color32,
    text_color: egui::Color32,
) -> egui::Response {
    let galley = ui.painter().layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(14.0),
        text_color,
    );
    let padding = egui::vec2(28.0, 12.0);
    let size = galley.size() + padding * 2.0;
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let fill = if response.hovered() {
        fill.gamma_multiply(0.9)
    } else {
        fill
    };
    let radius = egui::CornerRadius::same((size.y / 2.0) as u8);
    ui.painter().rect_filled(rect, radius, fill);
    ui.painter()
        .galley(rect.min + padding, galley, text_color);
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Left-bordered block used for quotes and principles.
pub fn bordered_block(
    ui: &mut egui::Ui,
    palette: &Palette,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal_top(|ui| {
        let (bar, _) = ui.allocate_exact_size(egui::vec2(2.0, 0.0), egui::Sense::hover());
        ui.add_space(14.0);
        let inner = ui.vertical(|ui| add_contents(ui)).response.rect;
        let bar_rect = egui::Rect::from_min_max(
            egui::pos2(bar.left(), inner.top()),
            egui::pos2(bar.left() + 2.0, inner.bottom()),
        );
        ui.painter()
            .rect_filled(bar_rect, egui::CornerRadius::ZERO, palette.border);
    });
}

/// Horizontally centered column capped at `max_width`, the shared page
/// container for the scrolling views.
pub fn centered_column(
    ui: &mut egui::Ui,
    max_width: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let width = ui.available_width().min(max_width);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal_top(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui);
        });
    });
}

/// Horizontally centered row of known content width. Child groups are not
/// centered by `vertical_centered` (their size is unknown at placement), so
/// rows with fixed-size content pass that width here instead.
pub fn centered_row(ui: &mut egui::Ui, row_width: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
        add_contents(ui);
    });
}

/// Small pulsing status dot, alpha driven by the frame tick.
pub fn pulse_dot(ui: &mut egui::Ui, color: egui::Color32, tick: u64) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    let phase = (tick as f32 * 0.05).sin() * 0.5 + 0.5;
    ui.painter().circle_filled(
        rect.center(),
        3.0,
        color.gamma_multiply(0.4 + 0.6 * phase),
    );
}
