//! App shell: route state, the shared store and its subscriptions, and the
//! frame loop.

use std::collections::HashMap;

use content::domain::{CaseStudyId, Perspective};
use content::Catalog;
use crossbeam_channel::Receiver;
use eframe::egui;
use interaction::{StoreEvent, UiStore};

use crate::controller::events::{AppAction, Route};
use crate::controller::orchestration::{action_name, queue_action};
use crate::ui::panels::home::HeroState;
use crate::ui::panels::{architecture, cases, contact, home};
use crate::ui::theme::{self, Palette};
use crate::ui::widgets;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub start_route: Route,
    pub catalog: Catalog,
}

pub struct PortfolioApp {
    catalog: Catalog,
    store: UiStore,
    store_rx: Receiver<StoreEvent>,
    route: Route,
    // Cached copy of the completion flag for the nav indicator; updated only
    // from broadcast events, never re-derived.
    nav_complete: bool,
    hero: Option<HeroState>,
    case_tabs: HashMap<CaseStudyId, Perspective>,
    actions: Vec<AppAction>,
    palette: Palette,
    status: String,
    tick: u64,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, startup: StartupConfig) -> Self {
        let palette = Palette::dark();
        theme::apply(&cc.egui_ctx, &palette);
        Self::from_startup(startup)
    }

    fn from_startup(startup: StartupConfig) -> Self {
        let mut store = UiStore::new();
        let store_rx = store.subscribe();
        let mut app = Self {
            catalog: startup.catalog,
            store,
            store_rx,
            route: startup.start_route,
            nav_complete: false,
            hero: None,
            case_tabs: HashMap::new(),
            actions: Vec::new(),
            palette: Palette::dark(),
            status: String::new(),
            tick: 0,
        };
        if app.route == Route::Home {
            app.hero = Some(HeroState::mount(&mut app.store));
        }
        app
    }

    fn process_store_events(&mut self) {
        while let Ok(event) = self.store_rx.try_recv() {
            match event {
                StoreEvent::CompletionChanged(complete) => {
                    self.nav_complete = complete;
                }
                StoreEvent::ActiveCaseChanged(case) => {
                    tracing::debug!(case = ?case.as_ref().map(|c| c.as_str()), "active case changed");
                }
            }
        }
    }

    fn set_route(&mut self, route: Route) {
        if self.route == route {
            return;
        }
        tracing::info!(from = self.route.slug(), to = route.slug(), "route change");
        // The sequence is scoped to the home view: leaving drops it, coming
        // back remounts it scrambled.
        if self.route == Route::Home {
            self.hero = None;
        }
        self.route = route;
        if route == Route::Home {
            self.hero = Some(HeroState::mount(&mut self.store));
        }
    }

    fn apply_actions(&mut self, ctx: &egui::Context) {
        let queued = std::mem::take(&mut self.actions);
        for action in queued {
            tracing::debug!(action = action_name(&action), "applying ui action");
            match action {
                AppAction::Navigate(route) => self.set_route(route),
                AppAction::SelectCase(id) => self.store.set_active_case(Some(id)),
                AppAction::SelectPerspective { case, perspective } => {
                    self.case_tabs.insert(case.clone(), perspective);
                    self.store.set_active_case(Some(case));
                }
                AppAction::OpenExternal(url) => {
                    tracing::info!(%url, "opening external link");
                    ctx.open_url(egui::OpenUrl::new_tab(url));
                }
                AppAction::SetStatus(message) => self.status = message,
            }
        }
    }

    fn show_nav(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        egui::TopBottomPanel::top("top_nav")
            .exact_height(52.0)
            .frame(
                egui::Frame::NONE
                    .fill(palette.bg.gamma_multiply(0.95))
                    .inner_margin(egui::Margin::symmetric(24, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let mut title = egui::text::LayoutJob::default();
                    title.append(
                        &self.catalog.profile.first_name,
                        0.0,
                        egui::TextFormat {
                            font_id: egui::FontId::proportional(16.0),
                            color: palette.text_primary,
                            ..Default::default()
                        },
                    );
                    title.append(
                        &self.catalog.profile.last_name,
                        5.0,
                        egui::TextFormat {
                            font_id: egui::FontId::proportional(16.0),
                            color: palette.text_faint,
                            ..Default::default()
                        },
                    );
                    let brand = ui.add(egui::Label::new(title).sense(egui::Sense::click()));
                    if brand.clicked() {
                        queue_action(&mut self.actions, AppAction::Navigate(Route::Home));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for route in Route::ALL.iter().rev() {
                            let selected = *route == self.route;
                            let label = ui.add(
                                egui::Label::new(
                                    egui::RichText::new(route.nav_label()).size(13.0).color(
                                        if selected {
                                            palette.text_primary
                                        } else {
                                            palette.text_faint
                                        },
                                    ),
                                )
                                .sense(egui::Sense::click()),
                            );
                            if label.hovered() {
                                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            }
                            if label.clicked() {
                                queue_action(&mut self.actions, AppAction::Navigate(*route));
                            }
                            ui.add_space(18.0);
                        }
                        // Second independent reader of the completion flag:
                        // a quiet indicator once the pipeline is assembled.
                        if self.nav_complete {
                            widgets::pulse_dot(ui, palette.accent_emerald, self.tick);
                            ui.add_space(6.0);
                        }
                    });
                });
                let rect = ui.max_rect();
                ui.painter().line_segment(
                    [
                        egui::pos2(rect.left() - 24.0, rect.bottom()),
                        egui::pos2(rect.right() + 24.0, rect.bottom()),
                    ],
                    egui::Stroke::new(1.0, palette.border),
                );
            });
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        egui::TopBottomPanel::bottom("footer")
            .exact_height(36.0)
            .frame(
                egui::Frame::NONE
                    .fill(palette.bg)
                    .inner_margin(egui::Margin::symmetric(24, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} // VERSION 1.0 // {}",
                            self.catalog.profile.full_name().to_uppercase(),
                            self.catalog.profile.role.to_uppercase(),
                        ))
                        .monospace()
                        .size(9.0)
                        .color(palette.text_faint),
                    );
                    if !self.status.is_empty() {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(&self.status)
                                        .monospace()
                                        .size(9.0)
                                        .color(palette.text_muted),
                                );
                            },
                        );
                    }
                });
            });
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick = self.tick.wrapping_add(1);
        self.process_store_events();

        self.show_nav(ctx);
        self.show_footer(ctx);

        let palette = self.palette;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(palette.bg))
            .show(ctx, |ui| match self.route {
                Route::Home => {
                    if let Some(hero) = self.hero.as_mut() {
                        home::show(
                            ui,
                            hero,
                            &mut self.store,
                            &self.catalog.profile,
                            &palette,
                            &mut self.actions,
                            self.tick,
                        );
                    }
                }
                Route::Cases => cases::show(
                    ui,
                    &self.catalog,
                    &mut self.case_tabs,
                    &self.store,
                    &palette,
                    &mut self.actions,
                ),
                Route::Architecture => architecture::show(ui, &self.catalog, &palette, self.tick),
                Route::Contact => contact::show(ui, &self.catalog, &palette, &mut self.actions),
            });

        self.apply_actions(ctx);

        // The background animates only on the home view; elsewhere a slow
        // cadence keeps pulse indicators alive without burning frames.
        if self.route == Route::Home {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interaction::{GateView, StageCardId};

    fn app(start: Route) -> PortfolioApp {
        PortfolioApp::from_startup(StartupConfig {
            start_route: start,
            catalog: Catalog::built_in(),
        })
    }

    #[test]
    fn starting_on_home_mounts_a_scrambled_hero() {
        let app = app(Route::Home);
        let hero = app.hero.as_ref().expect("hero mounted");
        assert!(!hero.controller.sequence().is_solved());
        assert_eq!(hero.gate(), GateView::Hint);
    }

    #[test]
    fn leaving_home_drops_the_hero_and_returning_remounts_it_scrambled() {
        let mut app = app(Route::Home);
        {
            let hero = app.hero.as_mut().expect("hero mounted");
            let solution = StageCardId::new("solution");
            let problem = StageCardId::new("problem");
            assert!(hero
                .controller
                .reorder(&solution, &problem, &mut app.store)
                .is_applied());
            assert!(app.store.is_complete());
        }

        app.set_route(Route::Cases);
        assert!(app.hero.is_none());

        app.set_route(Route::Home);
        let hero = app.hero.as_ref().expect("hero remounted");
        assert!(!hero.controller.sequence().is_solved());
        assert!(!app.store.is_complete());
    }

    #[test]
    fn nav_indicator_tracks_completion_through_the_broadcast() {
        let mut app = app(Route::Home);
        assert!(!app.nav_complete);
        app.store.set_complete(true);
        app.process_store_events();
        assert!(app.nav_complete);
        app.store.set_complete(false);
        app.process_store_events();
        assert!(!app.nav_complete);
    }

    #[test]
    fn starting_on_a_non_home_route_mounts_no_hero() {
        let app = app(Route::Contact);
        assert!(app.hero.is_none());
    }
}
