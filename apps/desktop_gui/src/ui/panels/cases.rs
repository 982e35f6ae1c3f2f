//! Case-study gallery: one section per case with a three-tab perspective
//! panel.

use std::collections::HashMap;

use chrono::Local;
use content::domain::{CaseStudy, CaseStudyId, Perspective};
use eframe::egui;
use interaction::UiStore;

use crate::controller::events::AppAction;
use crate::controller::orchestration::queue_action;
use crate::ui::theme::Palette;
use crate::ui::widgets;

const MAX_COLUMN_WIDTH: f32 = 1080.0;

pub fn show(
    ui: &mut egui::Ui,
    catalog: &content::Catalog,
    tabs: &mut HashMap<CaseStudyId, Perspective>,
    store: &UiStore,
    palette: &Palette,
    actions: &mut Vec<AppAction>,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            widgets::centered_column(ui, MAX_COLUMN_WIDTH, |ui| {
                ui.add_space(36.0);
                widgets::section_heading(ui, "Selected Cases", palette);
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(
                        "Proven solutions for complex business problems. Use the perspective \
                         toggle to audit the engineering depth behind each result.",
                    )
                    .size(15.0)
                    .color(palette.text_faint),
                );
                ui.add_space(48.0);

                for (index, case) in catalog.case_studies.iter().enumerate() {
                    case_section(ui, case, index, tabs, store, palette, actions);
                    ui.add_space(72.0);
                }
            });
        });
}

fn case_section(
    ui: &mut egui::Ui,
    case: &CaseStudy,
    index: usize,
    tabs: &mut HashMap<CaseStudyId, Perspective>,
    store: &UiStore,
    palette: &Palette,
    actions: &mut Vec<AppAction>,
) {
    let is_active = store.active_case() == Some(&case.id);
    let total = ui.available_width();
    let left_width = total * 0.42;
    let right_width = total - left_width - 28.0;

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(left_width);
            widgets::mono_caption(
                ui,
                &format!("0{} // Platform", index + 1),
                palette.text_faint,
            );
            ui.add_space(4.0);
            let title = ui.add(
                egui::Label::new(
                    egui::RichText::new(&case.title)
                        .size(21.0)
                        .strong()
                        .color(if is_active {
                            palette.text_primary
                        } else {
                            palette.text_secondary
                        }),
                )
                .sense(egui::Sense::click()),
            );
            if title.clicked() {
                queue_action(actions, AppAction::SelectCase(case.id.clone()));
            }
            ui.add_space(10.0);
            widgets::bordered_block(ui, palette, |ui| {
                ui.label(
                    egui::RichText::new(format!("\"{}\"", case.context))
                        .italics()
                        .size(13.0)
                        .color(palette.text_muted),
                );
            });

            ui.add_space(18.0);
            widgets::mono_caption(ui, "The Challenge", palette.text_faint);
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(&case.problem)
                    .size(13.0)
                    .color(palette.text_secondary),
            );

            ui.add_space(18.0);
            widgets::mono_caption(ui, "Engineered Solution", palette.text_faint);
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(&case.solution)
                    .size(13.0)
                    .color(palette.text_secondary),
            );
            ui.add_space(12.0);
            result_badge(ui, &case.result, palette);
        });

        ui.add_space(28.0);

        ui.vertical(|ui| {
            ui.set_width(right_width);
            perspective_panel(ui, case, index, tabs, palette, actions);
        });
    });
}

fn result_badge(ui: &mut egui::Ui, result: &str, palette: &Palette) {
    egui::Frame::new()
        .fill(egui::Color32::from_rgba_unmultiplied(16, 185, 129, 26))
        .stroke(egui::Stroke::new(
            1.0,
            egui::Color32::from_rgba_unmultiplied(16, 185, 129, 51),
        ))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(result.to_uppercase())
                    .monospace()
                    .size(9.0)
                    .color(palette.accent_emerald),
            );
        });
}

fn perspective_panel(
    ui: &mut egui::Ui,
    case: &CaseStudy,
    index: usize,
    tabs: &mut HashMap<CaseStudyId, Perspective>,
    palette: &Palette,
    actions: &mut Vec<AppAction>,
) {
    let active = *tabs.get(&case.id).unwrap_or(&Perspective::User);

    egui::Frame::new()
        .fill(palette.card_bg)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .corner_radius(egui::CornerRadius::same(14))
        .show(ui, |ui| {
            // Tab row.
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                let tab_width = ui.available_width() / Perspective::ALL.len() as f32;
                for perspective in Perspective::ALL {
                    let selected = perspective == active;
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(tab_width, 40.0),
                        egui::Sense::click(),
                    );
                    let fill = if selected {
                        palette.inverted_bg
                    } else if response.hovered() {
                        palette.panel_bg
                    } else {
                        egui::Color32::TRANSPARENT
                    };
                    ui.painter().rect_filled(rect, egui::CornerRadius::ZERO, fill);
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        perspective.label(),
                        egui::FontId::monospace(10.0),
                        if selected {
                            palette.inverted_text
                        } else {
                            palette.text_faint
                        },
                    );
                    if response.clicked() {
                        tabs.insert(case.id.clone(), perspective);
                        queue_action(
                            actions,
                            AppAction::SelectPerspective {
                                case: case.id.clone(),
                                perspective,
                            },
                        );
                    }
                }
            });
            widgets::hairline(ui, palette.border);

            egui::Frame::new()
                .inner_margin(egui::Margin::same(24))
                .show(ui, |ui| {
                    let note = case.perspectives.get(active);
                    widgets::mono_caption(
                        ui,
                        &format!("Audit Mode: {}", active.label()),
                        palette.text_faint,
                    );
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new(&note.title)
                            .size(19.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(&note.content)
                            .size(13.0)
                            .color(palette.text_muted),
                    );

                    ui.add_space(36.0);
                    widgets::hairline(ui, palette.border);
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "// timestamp: {}.0{}",
                                Local::now().format("%Y"),
                                index + 1
                            ))
                            .monospace()
                            .size(9.0)
                            .color(palette.text_faint),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new("// state: production_ready")
                                        .monospace()
                                        .size(9.0)
                                        .color(palette.text_faint),
                                );
                            },
                        );
                    });
                });
        });
}
