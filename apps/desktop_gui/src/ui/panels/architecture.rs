//! Architecture view: how this app is built, decision trade-offs, the skill
//! grid, and the experience summary.

use content::Catalog;
use eframe::egui;

use crate::ui::theme::Palette;
use crate::ui::widgets;

const MAX_COLUMN_WIDTH: f32 = 1080.0;

pub fn show(ui: &mut egui::Ui, catalog: &Catalog, palette: &Palette, tick: u64) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            widgets::centered_column(ui, MAX_COLUMN_WIDTH, |ui| {
                ui.add_space(36.0);
                widgets::section_heading(ui, "Engineering Depth", palette);
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(
                        "A look into how I make technical decisions and structure the systems \
                         I build.",
                    )
                    .size(15.0)
                    .color(palette.text_faint),
                );
                ui.add_space(40.0);

                let total = ui.available_width();
                let column = (total - 28.0) / 2.0;
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(column);
                        system_panel(ui, catalog, palette, tick);
                    });
                    ui.add_space(28.0);
                    ui.vertical(|ui| {
                        ui.set_width(column);
                        principles_panel(ui, catalog, palette);
                    });
                });

                ui.add_space(56.0);
                ui.label(
                    egui::RichText::new("Trade-offs & Decisions")
                        .size(20.0)
                        .strong()
                        .color(palette.text_primary),
                );
                ui.add_space(20.0);
                decision_grid(ui, catalog, palette);

                ui.add_space(56.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Technical Skills")
                            .size(20.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.add_space(12.0);
                    widgets::hairline(ui, palette.border);
                });
                ui.add_space(24.0);
                skills_grid(ui, catalog, palette);

                ui.add_space(40.0);
                experience_panel(ui, catalog, palette);
                ui.add_space(48.0);
            });
        });
}

fn system_panel(ui: &mut egui::Ui, catalog: &Catalog, palette: &Palette, tick: u64) {
    egui::Frame::new()
        .fill(palette.panel_bg)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .corner_radius(egui::CornerRadius::same(14))
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                widgets::pulse_dot(ui, palette.accent_blue, tick);
                ui.label(
                    egui::RichText::new("System Architecture (Portfolio)")
                        .size(15.0)
                        .strong()
                        .color(palette.text_primary),
                );
            });
            ui.add_space(14.0);
            for layer in &catalog.arch_layers {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(64.0, 26.0),
                        egui::Sense::hover(),
                    );
                    ui.painter().rect_stroke(
                        rect,
                        egui::CornerRadius::same(4),
                        egui::Stroke::new(1.0, palette.border_strong),
                        egui::StrokeKind::Middle,
                    );
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        layer.layer.to_uppercase(),
                        egui::FontId::monospace(9.0),
                        palette.text_muted,
                    );
                    ui.add_space(10.0);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        widgets::tag_chip(ui, &layer.implementation, palette);
                        ui.add_space(10.0);
                        widgets::hairline(ui, palette.border);
                    });
                });
                ui.add_space(8.0);
            }
            ui.add_space(10.0);
            egui::Frame::new()
                .fill(palette.bg.gamma_multiply(0.5))
                .stroke(egui::Stroke::new(1.0, palette.border.gamma_multiply(0.5)))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(
                            "\"The site itself acts as a proof of concept for interaction \
                             management and performance-first animation.\"",
                        )
                        .italics()
                        .size(11.0)
                        .color(palette.text_faint),
                    );
                });
        });
}

fn principles_panel(ui: &mut egui::Ui, catalog: &Catalog, palette: &Palette) {
    widgets::mono_caption(ui, "Core Principles", palette.text_faint);
    ui.add_space(10.0);
    for principle in &catalog.principles {
        egui::Frame::new()
            .fill(palette.panel_bg.gamma_multiply(0.3))
            .inner_margin(egui::Margin::same(14))
            .show(ui, |ui| {
                widgets::bordered_block(ui, palette, |ui| {
                    ui.label(
                        egui::RichText::new(&principle.title)
                            .size(13.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.label(
                        egui::RichText::new(&principle.detail)
                            .size(11.0)
                            .color(palette.text_muted),
                    );
                });
            });
        ui.add_space(10.0);
    }
}

fn decision_grid(ui: &mut egui::Ui, catalog: &Catalog, palette: &Palette) {
    let total = ui.available_width();
    let column = (total - 28.0) / 2.0;
    let mut iter = catalog.decisions.iter().peekable();
    while iter.peek().is_some() {
        ui.horizontal_top(|ui| {
            for _ in 0..2 {
                if let Some(decision) = iter.next() {
                    ui.vertical(|ui| {
                        ui.set_width(column);
                        decision_card(ui, decision, palette);
                    });
                    ui.add_space(28.0);
                }
            }
        });
        ui.add_space(28.0);
    }
}

fn decision_card(
    ui: &mut egui::Ui,
    decision: &content::domain::EngineeringDecision,
    palette: &Palette,
) {
    egui::Frame::new()
        .fill(palette.bg.gamma_multiply(0.5))
        .stroke(egui::Stroke::new(1.0, palette.border))
        .corner_radius(egui::CornerRadius::same(14))
        .inner_margin(egui::Margin::same(22))
        .show(ui, |ui| {
            widgets::mono_caption(
                ui,
                &format!("Decision // {}", decision.topic),
                palette.accent_blue,
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(&decision.decision)
                    .size(16.0)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(&decision.why)
                    .size(12.0)
                    .color(palette.text_muted),
            );
            ui.add_space(14.0);
            widgets::mono_caption(ui, "Trade-offs", palette.text_faint);
            ui.add_space(4.0);
            for tradeoff in &decision.tradeoffs {
                ui.horizontal_top(|ui| {
                    let (dot, _) =
                        ui.allocate_exact_size(egui::vec2(8.0, 14.0), egui::Sense::hover());
                    ui.painter().circle_filled(
                        dot.center(),
                        2.0,
                        palette.accent_red.gamma_multiply(0.5),
                    );
                    ui.label(
                        egui::RichText::new(tradeoff)
                            .size(11.0)
                            .color(palette.text_faint),
                    );
                });
            }
        });
}

fn skills_grid(ui: &mut egui::Ui, catalog: &Catalog, palette: &Palette) {
    let total = ui.available_width();
    let column = (total - 2.0 * 20.0) / 3.0;
    let mut iter = catalog.skill_categories.iter().peekable();
    while iter.peek().is_some() {
        ui.horizontal_top(|ui| {
            for _ in 0..3 {
                if let Some(category) = iter.next() {
                    ui.vertical(|ui| {
                        ui.set_width(column);
                        skill_card(ui, category, palette);
                    });
                    ui.add_space(20.0);
                }
            }
        });
        ui.add_space(20.0);
    }
}

fn skill_card(ui: &mut egui::Ui, category: &content::domain::SkillCategory, palette: &Palette) {
    egui::Frame::new()
        .fill(palette.bg.gamma_multiply(0.3))
        .stroke(egui::Stroke::new(1.0, palette.border))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let (dot, _) = ui.allocate_exact_size(egui::vec2(6.0, 12.0), egui::Sense::hover());
                ui.painter().circle_filled(
                    dot.center(),
                    2.0,
                    palette.accent_emerald.gamma_multiply(0.6),
                );
                ui.label(
                    egui::RichText::new(category.category.to_uppercase())
                        .size(11.0)
                        .strong()
                        .color(palette.text_secondary),
                );
            });
            ui.add_space(10.0);
            ui.horizontal_wrapped(|ui| {
                for skill in &category.skills {
                    widgets::tag_chip(ui, skill, palette);
                }
            });
        });
}

fn experience_panel(ui: &mut egui::Ui, catalog: &Catalog, palette: &Palette) {
    egui::Frame::new()
        .fill(palette.panel_bg.gamma_multiply(0.6))
        .stroke(egui::Stroke::new(1.0, palette.border))
        .corner_radius(egui::CornerRadius::same(14))
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                let (dot, _) = ui.allocate_exact_size(egui::vec2(8.0, 18.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(dot.center(), 3.0, palette.accent_blue);
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("2+ Years Commercial Experience")
                            .size(15.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(&catalog.profile.experience_summary)
                            .size(12.0)
                            .color(palette.text_muted),
                    );
                });
            });
            ui.add_space(18.0);

            let accents = [
                palette.accent_emerald,
                palette.accent_blue,
                palette.accent_purple,
            ];
            let total = ui.available_width();
            let column = (total - 2.0 * 16.0) / 3.0;
            ui.horizontal_top(|ui| {
                for (stat, accent) in catalog.stats.iter().zip(accents) {
                    ui.vertical(|ui| {
                        ui.set_width(column);
                        egui::Frame::new()
                            .fill(palette.bg.gamma_multiply(0.5))
                            .stroke(egui::Stroke::new(
                                1.0,
                                palette.border.gamma_multiply(0.5),
                            ))
                            .corner_radius(egui::CornerRadius::same(8))
                            .inner_margin(egui::Margin::same(14))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(&stat.value)
                                        .size(22.0)
                                        .strong()
                                        .color(accent),
                                );
                                widgets::mono_caption(ui, &stat.caption, palette.text_faint);
                            });
                    });
                    ui.add_space(16.0);
                }
            });
        });
}
