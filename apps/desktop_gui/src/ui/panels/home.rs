//! Home view: hero copy, the three-stage reorder puzzle, the navigation
//! gate, and the decorative background.

use content::domain::Profile;
use crossbeam_channel::Receiver;
use eframe::egui;
use interaction::{
    DragGesture, GateView, SequenceController, StageCard, StageCardId, StoreEvent, UiStore,
};

use crate::controller::events::{AppAction, Route};
use crate::controller::orchestration::queue_action;
use crate::ui::background::ParticleField;
use crate::ui::theme::Palette;
use crate::ui::widgets;

const CARD_SIZE: egui::Vec2 = egui::vec2(224.0, 112.0);
const CARD_GAP: f32 = 28.0;
const OVERLAY_SCALE: f32 = 1.1;

/// Everything the home view owns. Recreated on every entry to the route, so
/// the sequence always comes back scrambled.
pub struct HeroState {
    pub controller: SequenceController,
    pub gesture: DragGesture,
    pub selected: Option<StageCardId>,
    gate: GateView,
    gate_rx: Receiver<StoreEvent>,
    field: Option<ParticleField>,
}

impl HeroState {
    pub fn mount(store: &mut UiStore) -> Self {
        // Subscribe first so the mount-time publish is observed like any
        // later change.
        let gate_rx = store.subscribe();
        let controller = SequenceController::mount(store);
        let gate = GateView::from_store(store);
        Self {
            controller,
            gesture: DragGesture::new(),
            selected: None,
            gate,
            gate_rx,
            field: None,
        }
    }

    pub fn gate(&self) -> GateView {
        self.gate
    }

    fn drain_gate_events(&mut self) {
        while let Ok(event) = self.gate_rx.try_recv() {
            if let StoreEvent::CompletionChanged(complete) = event {
                self.gate = GateView::from_completion(complete);
            }
        }
    }
}

struct CardFrame {
    id: StageCardId,
    rect: egui::Rect,
    clicked: bool,
    drag_started: bool,
    drag_stopped: bool,
    release_pos: Option<egui::Pos2>,
}

pub fn show(
    ui: &mut egui::Ui,
    state: &mut HeroState,
    store: &mut UiStore,
    profile: &Profile,
    palette: &Palette,
    actions: &mut Vec<AppAction>,
    tick: u64,
) {
    let bounds = ui.max_rect();
    let pointer = ui.ctx().pointer_latest_pos();

    let field = state
        .field
        .get_or_insert_with(|| ParticleField::new(bounds));
    field.step(bounds, pointer);
    field.paint(ui.painter(), bounds);

    state.drain_gate_events();

    let content_height = 520.0;
    let top_pad = ((bounds.height() - content_height) * 0.5).max(16.0);
    ui.add_space(top_pad);

    ui.vertical_centered(|ui| {
        badge(ui, &profile.badge, palette);
        ui.add_space(18.0);
        hero_name(ui, profile, palette);
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(&profile.tagline)
                .size(19.0)
                .color(palette.text_muted),
        );
        ui.label(
            egui::RichText::new(&profile.hero_hint)
                .monospace()
                .size(12.0)
                .color(palette.text_faint),
        );
        ui.add_space(44.0);

        let frames = stage_row(ui, state, palette, tick);
        handle_gestures(ui, state, store, &frames);
        // A reorder committed above publishes synchronously; pick it up now
        // so the gate below renders the new state in the same frame.
        state.drain_gate_events();
        paint_drag_overlay(ui, state, palette, pointer);

        ui.add_space(40.0);
        gate_area(ui, state.gate, palette, actions, tick);
        ui.add_space(16.0);
        secondary_links(ui, palette, actions);
    });
}

fn badge(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    let galley = ui.painter().layout_no_wrap(
        text.to_uppercase(),
        egui::FontId::monospace(10.0),
        palette.text_faint,
    );
    let padding = egui::vec2(12.0, 5.0);
    let (rect, _) = ui.allocate_exact_size(galley.size() + padding * 2.0, egui::Sense::hover());
    let radius = egui::CornerRadius::same((rect.height() / 2.0) as u8);
    ui.painter()
        .rect_filled(rect, radius, palette.panel_bg.gamma_multiply(0.5));
    ui.painter().rect_stroke(
        rect,
        radius,
        egui::Stroke::new(1.0, palette.border),
        egui::StrokeKind::Middle,
    );
    ui.painter().galley(rect.min + padding, galley, palette.text_faint);
}

fn hero_name(ui: &mut egui::Ui, profile: &Profile, palette: &Palette) {
    let mut job = egui::text::LayoutJob::default();
    job.append(
        &profile.first_name,
        0.0,
        egui::TextFormat {
            font_id: egui::FontId::proportional(54.0),
            color: palette.text_primary,
            ..Default::default()
        },
    );
    job.append(
        &profile.last_name,
        14.0,
        egui::TextFormat {
            font_id: egui::FontId::proportional(54.0),
            color: palette.text_faint,
            ..Default::default()
        },
    );
    ui.label(job);
}

/// Lays out the three cards with connector segments and returns per-card
/// frame data for gesture handling.
fn stage_row(
    ui: &mut egui::Ui,
    state: &mut HeroState,
    palette: &Palette,
    tick: u64,
) -> Vec<CardFrame> {
    let solved = state.gate.is_unlocked();
    let mut frames = Vec::with_capacity(3);
    let row_width = 3.0 * CARD_SIZE.x + 2.0 * CARD_GAP;

    widgets::centered_row(ui, row_width, |ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        let cards: Vec<StageCard> = state.controller.sequence().cards().to_vec();
        for (index, card) in cards.iter().enumerate() {
            if index > 0 {
                ui.add_space(CARD_GAP);
            }
            let dragging = state.gesture.active_card() == Some(&card.id);
            let selected = state.selected.as_ref() == Some(&card.id);
            let (rect, response) =
                ui.allocate_exact_size(CARD_SIZE, egui::Sense::click_and_drag());
            paint_stage_card(
                ui.painter(),
                rect,
                card,
                index,
                solved,
                dragging,
                selected,
                palette,
                tick,
            );
            if response.hovered() && !state.gesture.is_dragging() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
            }
            frames.push(CardFrame {
                id: card.id.clone(),
                rect,
                clicked: response.clicked(),
                drag_started: response.drag_started(),
                drag_stopped: response.drag_stopped(),
                release_pos: response.interact_pointer_pos(),
            });
        }
    });

    // Connector segments across the gaps.
    let connector = if solved {
        egui::Color32::from_rgba_unmultiplied(16, 185, 129, 76)
    } else {
        palette.border_strong
    };
    for pair in frames.windows(2) {
        let from = egui::pos2(pair[0].rect.right(), pair[0].rect.center().y);
        let to = egui::pos2(pair[1].rect.left(), pair[1].rect.center().y);
        ui.painter()
            .line_segment([from, to], egui::Stroke::new(1.0, connector));
    }

    // Drop-target highlight while a drag is in flight.
    if let (Some(active), Some(pos)) = (state.gesture.active_card(), ui.ctx().pointer_latest_pos())
    {
        if let Some(frame) = frames
            .iter()
            .find(|frame| frame.rect.contains(pos) && &frame.id != active)
        {
            ui.painter().rect_stroke(
                frame.rect,
                egui::CornerRadius::same(16),
                egui::Stroke::new(1.5, palette.border_strong),
                egui::StrokeKind::Middle,
            );
        }
    }

    frames
}

#[allow(clippy::too_many_arguments)]
fn paint_stage_card(
    painter: &egui::Painter,
    rect: egui::Rect,
    card: &StageCard,
    index: usize,
    solved: bool,
    dragging: bool,
    selected: bool,
    palette: &Palette,
    tick: u64,
) {
    let fade = if dragging { 0.5 } else { 1.0 };
    let radius = egui::CornerRadius::same(16);

    let fill = if solved {
        egui::Color32::from_rgba_unmultiplied(16, 185, 129, 13)
    } else {
        egui::Color32::from_rgba_unmultiplied(0x18, 0x18, 0x1b, 204)
    };
    let stroke_color = if solved {
        egui::Color32::from_rgba_unmultiplied(16, 185, 129, 128)
    } else if selected {
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 51)
    } else {
        palette.border
    };
    painter.rect_filled(rect, radius, fill.gamma_multiply(fade));
    painter.rect_stroke(
        rect,
        radius,
        egui::Stroke::new(1.0, stroke_color.gamma_multiply(fade)),
        egui::StrokeKind::Middle,
    );

    let caption_color = if solved {
        egui::Color32::from_rgba_unmultiplied(16, 185, 129, 178)
    } else {
        palette.text_muted
    };
    painter.text(
        rect.center() + egui::vec2(0.0, -26.0),
        egui::Align2::CENTER_CENTER,
        format!("STAGE 0{}", index + 1),
        egui::FontId::monospace(10.0),
        caption_color.gamma_multiply(fade),
    );
    let label_color = if solved {
        egui::Color32::from_rgb(0xec, 0xfd, 0xf5)
    } else {
        palette.text_secondary
    };
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        card.label.display(),
        egui::FontId::proportional(21.0),
        label_color.gamma_multiply(fade),
    );
    let bar_color = if solved {
        egui::Color32::from_rgba_unmultiplied(16, 185, 129, 128)
    } else {
        palette.border_strong
    };
    let bar = egui::Rect::from_center_size(
        rect.center() + egui::vec2(0.0, 26.0),
        egui::vec2(32.0, 4.0),
    );
    painter.rect_filled(bar, egui::CornerRadius::same(2), bar_color.gamma_multiply(fade));

    if solved {
        let phase = (tick as f32 * 0.03).sin() * 0.5 + 0.5;
        let dot = palette.accent_emerald.gamma_multiply(0.3 + 0.5 * phase);
        painter.circle_filled(rect.left_top() + egui::vec2(-2.0, -2.0), 3.0, dot);
        let counter_phase = 1.0 - phase;
        let dot = palette
            .accent_emerald
            .gamma_multiply(0.3 + 0.5 * counter_phase);
        painter.circle_filled(rect.right_bottom() + egui::vec2(2.0, 2.0), 3.0, dot);
    }
}

fn handle_gestures(
    ui: &mut egui::Ui,
    state: &mut HeroState,
    store: &mut UiStore,
    frames: &[CardFrame],
) {
    for frame in frames {
        if frame.clicked {
            state.selected = Some(frame.id.clone());
        }
        if frame.drag_started {
            state.gesture.begin(frame.id.clone());
            state.selected = Some(frame.id.clone());
        }
        if frame.drag_stopped {
            let over = frame.release_pos.and_then(|pos| {
                frames
                    .iter()
                    .find(|other| other.rect.contains(pos))
                    .map(|other| other.id.clone())
            });
            if let Some(request) = state.gesture.release(over.as_ref()) {
                state
                    .controller
                    .reorder(&request.source, &request.target, store);
            }
        }
    }

    if state.gesture.is_dragging() && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        state.gesture.cancel();
    }

    // Arrow keys move the selected card through the same reorder entry
    // point the pointer path uses.
    if let Some(selected) = state.selected.clone() {
        let (left, right) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });
        if left || right {
            let sequence = state.controller.sequence();
            if let Some(position) = sequence.position_of(&selected) {
                let neighbor = if left && position > 0 {
                    sequence.card_at(position - 1)
                } else if right && position + 1 < sequence.cards().len() {
                    sequence.card_at(position + 1)
                } else {
                    None
                };
                if let Some(target) = neighbor.map(|card| card.id.clone()) {
                    state.controller.reorder(&selected, &target, store);
                }
            }
        }
    }
}

/// Elevated copy of the dragged card following the pointer on a foreground
/// layer.
fn paint_drag_overlay(
    ui: &egui::Ui,
    state: &HeroState,
    palette: &Palette,
    pointer: Option<egui::Pos2>,
) {
    let (Some(active), Some(pointer)) = (state.gesture.active_card(), pointer) else {
        return;
    };
    let sequence = state.controller.sequence();
    let Some(index) = sequence.position_of(active) else {
        return;
    };
    let Some(card) = sequence.card_at(index) else {
        return;
    };

    let painter = ui.ctx().layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("stage_drag_overlay"),
    ));
    let rect = egui::Rect::from_center_size(pointer, CARD_SIZE * OVERLAY_SCALE);
    let radius = egui::CornerRadius::same(16);
    painter.rect_filled(
        rect,
        radius,
        egui::Color32::from_rgba_unmultiplied(0x18, 0x18, 0x1b, 242),
    );
    painter.rect_stroke(
        rect,
        radius,
        egui::Stroke::new(2.0, egui::Color32::from_rgba_unmultiplied(255, 255, 255, 51)),
        egui::StrokeKind::Middle,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, -28.0),
        egui::Align2::CENTER_CENTER,
        format!("STAGE 0{}", index + 1),
        egui::FontId::monospace(10.0),
        palette.text_muted,
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        card.label.display(),
        egui::FontId::proportional(22.0),
        palette.text_primary,
    );
    let bar = egui::Rect::from_center_size(
        rect.center() + egui::vec2(0.0, 28.0),
        egui::vec2(48.0, 4.0),
    );
    painter.rect_filled(
        bar,
        egui::CornerRadius::same(2),
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 76),
    );
}

fn gate_area(
    ui: &mut egui::Ui,
    gate: GateView,
    palette: &Palette,
    actions: &mut Vec<AppAction>,
    tick: u64,
) {
    match gate {
        GateView::Proceed => {
            let response = widgets::pill_button(
                ui,
                "Open Case Studies \u{2192}",
                palette.inverted_bg,
                palette.inverted_text,
            );
            if response.clicked() {
                queue_action(actions, AppAction::Navigate(Route::Cases));
            }
        }
        GateView::Hint => {
            let phase = (tick as f32 * 0.04).sin() * 0.5 + 0.5;
            ui.label(
                egui::RichText::new("[ STATUS: LOGIC PIPELINE INCOMPLETE ]")
                    .monospace()
                    .size(11.0)
                    .color(palette.text_faint.gamma_multiply(0.5 + 0.5 * phase)),
            );
        }
    }
}

fn secondary_links(ui: &mut egui::Ui, palette: &Palette, actions: &mut Vec<AppAction>) {
    let measure = |ui: &egui::Ui, text: &str| {
        ui.painter()
            .layout_no_wrap(
                text.to_string(),
                egui::FontId::monospace(10.0),
                egui::Color32::PLACEHOLDER,
            )
            .size()
            .x
            + 8.0
    };
    let spacing = ui.spacing().item_spacing.x;
    let row_width = measure(ui, "DIRECT CONTACT") + measure(ui, "VIEW STACK") + 8.0 + 2.0 * spacing;

    widgets::centered_row(ui, row_width, |ui| {
        if mono_link(ui, "DIRECT CONTACT", palette).clicked() {
            queue_action(actions, AppAction::Navigate(Route::Contact));
        }
        ui.label(
            egui::RichText::new("/")
                .size(11.0)
                .color(palette.border_strong),
        );
        if mono_link(ui, "VIEW STACK", palette).clicked() {
            queue_action(actions, AppAction::Navigate(Route::Architecture));
        }
    });
}

fn mono_link(ui: &mut egui::Ui, text: &str, palette: &Palette) -> egui::Response {
    let galley = ui.painter().layout_no_wrap(
        text.to_string(),
        egui::FontId::monospace(10.0),
        palette.text_faint,
    );
    let (rect, response) = ui.allocate_exact_size(
        galley.size() + egui::vec2(8.0, 6.0),
        egui::Sense::click(),
    );
    let color = if response.hovered() {
        palette.text_muted
    } else {
        palette.text_faint
    };
    ui.painter()
        .galley(rect.min + egui::vec2(4.0, 3.0), galley, color);
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}
