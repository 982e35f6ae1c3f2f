//! Contact view: headline, availability, external links, CV affordance.

use content::Catalog;
use eframe::egui;

use crate::controller::events::AppAction;
use crate::controller::orchestration::queue_action;
use crate::ui::theme::Palette;
use crate::ui::widgets;

const MAX_COLUMN_WIDTH: f32 = 760.0;
const LINK_CARD_SIZE: egui::Vec2 = egui::vec2(150.0, 96.0);

pub fn show(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    palette: &Palette,
    actions: &mut Vec<AppAction>,
) {
    let bounds = ui.max_rect();
    let top_pad = ((bounds.height() - 480.0) * 0.5).max(24.0);
    ui.add_space(top_pad);

    widgets::centered_column(ui, MAX_COLUMN_WIDTH, |ui| {
        ui.vertical_centered(|ui| {
            let mut headline = egui::text::LayoutJob::default();
            headline.append(
                "Let's build something ",
                0.0,
                egui::TextFormat {
                    font_id: egui::FontId::proportional(34.0),
                    color: palette.text_primary,
                    ..Default::default()
                },
            );
            headline.append(
                "meaningful",
                0.0,
                egui::TextFormat {
                    font_id: egui::FontId::proportional(34.0),
                    color: palette.text_faint,
                    italics: true,
                    ..Default::default()
                },
            );
            headline.append(
                ".",
                0.0,
                egui::TextFormat {
                    font_id: egui::FontId::proportional(34.0),
                    color: palette.text_primary,
                    ..Default::default()
                },
            );
            ui.label(headline);
            ui.add_space(14.0);
            ui.label(
                egui::RichText::new(&catalog.profile.availability)
                    .size(15.0)
                    .color(palette.text_muted),
            );
            ui.add_space(36.0);

            let count = catalog.contact_links.len() as f32;
            let row_width = count * LINK_CARD_SIZE.x + (count - 1.0) * 16.0;
            widgets::centered_row(ui, row_width, |ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for (index, link) in catalog.contact_links.iter().enumerate() {
                    if index > 0 {
                        ui.add_space(16.0);
                    }
                    if link_card(ui, &link.icon, &link.label, palette).clicked() {
                        queue_action(actions, AppAction::OpenExternal(link.url.clone()));
                    }
                }
            });

            ui.add_space(48.0);
            let cv = widgets::pill_button(
                ui,
                "Download Full CV (PDF)",
                palette.inverted_bg,
                palette.inverted_text,
            );
            if cv.clicked() {
                queue_action(
                    actions,
                    AppAction::SetStatus("CV available on request via the email link".to_string()),
                );
            }
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(&catalog.profile.location)
                    .monospace()
                    .size(10.0)
                    .color(palette.text_faint),
            );
        });
    });
}

fn link_card(
    ui: &mut egui::Ui,
    icon: &str,
    label: &str,
    palette: &Palette,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(LINK_CARD_SIZE, egui::Sense::click());
    let hovered = response.hovered();
    let fill = if hovered {
        palette.inverted_bg
    } else {
        egui::Color32::TRANSPARENT
    };
    let stroke = if hovered {
        palette.inverted_bg
    } else {
        palette.border
    };
    let text = if hovered {
        palette.inverted_text
    } else {
        palette.text_secondary
    };
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(14), fill);
    ui.painter().rect_stroke(
        rect,
        egui::CornerRadius::same(14),
        egui::Stroke::new(1.0, stroke),
        egui::StrokeKind::Middle,
    );
    ui.painter().text(
        rect.center() + egui::vec2(0.0, -14.0),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(20.0),
        text,
    );
    ui.painter().text(
        rect.center() + egui::vec2(0.0, 18.0),
        egui::Align2::CENTER_CENTER,
        label.to_uppercase(),
        egui::FontId::monospace(10.0),
        text,
    );
    if hovered {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}
