use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use eframe::egui::{self, Color32, RichText};
use perfection_common::view::{
    picker_label, Panel, PanelBody, APP_TAGLINE, APP_TITLE, COMPLETION_HEADING, LOADING_MESSAGE,
    NEED_TO_LEARN_BADGE, SAVE_LOCATIONS,
};
use perfection_common::{Endpoint, ResultsView, UploadController};

use crate::io::spawn_upload;
use crate::model::UiMessage;

pub struct DesktopApp {
    endpoint: Endpoint,
    controller: UploadController,
    results: Option<ResultsView>,
    source_path: Option<PathBuf>,
    upload_rx: Option<Receiver<UiMessage>>,
}

impl DesktopApp {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            controller: UploadController::new(),
            results: None,
            source_path: None,
            upload_rx: None,
        }
    }

    fn pick_and_submit(&mut self, ctx: &egui::Context) {
        if self.controller.is_uploading() {
            return;
        }
        let Some(path) = rfd::FileDialog::new().pick_file() else {
            return;
        };
        let Some(ticket) = self.controller.begin() else {
            return;
        };

        log::debug!("uploading {}", path.display());
        self.results = None;
        self.upload_rx = Some(spawn_upload(self.endpoint.clone(), path.clone(), ticket, ctx.clone()));
        self.source_path = Some(path);
    }

    fn poll_messages(&mut self) {
        let Some(rx) = &self.upload_rx else {
            return;
        };
        let Ok(UiMessage::Settled { ticket, outcome }) = rx.try_recv() else {
            return;
        };

        self.upload_rx = None;
        if self.controller.settle(ticket, outcome) {
            // 新しい結果ごとにタブはFishへ戻る
            self.results = self.controller.summary().cloned().map(ResultsView::new);
        }
    }

    fn render_results(&mut self, ui: &mut egui::Ui) {
        let Some(results) = &mut self.results else {
            return;
        };

        ui.heading("Your Progress");
        ui.horizontal(|ui| {
            for (tab, label, active) in results.tabs() {
                if ui.selectable_label(active, label).clicked() {
                    results.select(tab);
                }
            }
        });
        ui.separator();

        render_panel(ui, &results.panel());
    }
}

fn render_panel(ui: &mut egui::Ui, panel: &Panel) {
    egui::Grid::new(("stats", panel.tab.as_str())).num_columns(2).show(ui, |ui| {
        for stat in &panel.stats {
            ui.label(stat.label);
            ui.label(RichText::new(stat.value.to_string()).strong());
            ui.end_row();
        }
    });
    ui.add_space(8.0);

    match &panel.body {
        PanelBody::Missing { heading, items } => {
            ui.label(RichText::new(heading).heading());
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                for item in items {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&item.name).strong());
                        if item.need_to_learn {
                            ui.label(
                                RichText::new(NEED_TO_LEARN_BADGE).color(Color32::from_rgb(246, 196, 69)),
                            );
                        }
                    });
                    if let Some(ingredients) = &item.ingredients {
                        ui.label(RichText::new(format!("Ingredients: {ingredients}")).color(Color32::from_gray(170)));
                    }
                    ui.add_space(4.0);
                }
            });
        }
        PanelBody::Complete { message } => {
            ui.label(RichText::new(COMPLETION_HEADING).heading());
            ui.label(*message);
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.label(APP_TAGLINE);
            ui.horizontal(|ui| {
                let uploading = self.controller.is_uploading();
                if ui
                    .add_enabled(!uploading, egui::Button::new(picker_label(uploading)))
                    .clicked()
                {
                    self.pick_and_submit(ctx);
                }
                if let Some(path) = &self.source_path {
                    ui.label(RichText::new(path.display().to_string()).color(Color32::from_gray(170)));
                }
            });

            if self.controller.is_uploading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(LOADING_MESSAGE);
                });
            }
            if let Some(message) = self.controller.error_message() {
                ui.label(RichText::new("Error").strong().color(Color32::from_rgb(220, 80, 80)));
                ui.label(RichText::new(message).color(Color32::from_rgb(220, 80, 80)));
            }
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.label("Save file location: Your Stardew Valley saves are typically in:");
            for (os, path) in SAVE_LOCATIONS {
                ui.label(RichText::new(format!("{os}: {path}")).small());
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_results(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfection_common::{ActiveTab, AnalyzeError, Summary};
    use std::sync::mpsc;

    fn summary() -> Summary {
        let json = r#"{
            "fish": {"total": 2, "caught": 1, "uncaught": 1, "missingList": [{"id": "159", "name": "Crimsonfish"}]},
            "recipes": {"total": 1, "learned": 1, "cooked": 1, "missingToCook": 0, "missingList": []}
        }"#;
        parse_summary(json)
    }

    fn parse_summary(json: &str) -> Summary {
        perfection_common::interpret_response(&perfection_common::RawResponse {
            status: 200,
            body: json.to_string(),
        })
        .expect("valid summary")
    }

    fn app_with_pending() -> (DesktopApp, mpsc::Sender<UiMessage>, perfection_common::UploadTicket) {
        let mut app = DesktopApp::new(Endpoint::default());
        let ticket = app.controller.begin().unwrap();
        let (tx, rx) = mpsc::channel();
        app.upload_rx = Some(rx);
        (app, tx, ticket)
    }

    #[test]
    fn test_poll_without_message_keeps_uploading() {
        let (mut app, _tx, _ticket) = app_with_pending();
        app.poll_messages();
        assert!(app.controller.is_uploading());
        assert!(app.upload_rx.is_some());
    }

    #[test]
    fn test_settled_success_creates_results_on_fish() {
        let (mut app, tx, ticket) = app_with_pending();
        tx.send(UiMessage::Settled { ticket, outcome: Ok(summary()) }).unwrap();

        app.poll_messages();
        assert!(!app.controller.is_uploading());
        assert!(app.upload_rx.is_none());
        assert_eq!(app.results.as_ref().unwrap().active_tab(), ActiveTab::Fish);
    }

    #[test]
    fn test_settled_failure_shows_message() {
        let (mut app, tx, ticket) = app_with_pending();
        let outcome = Err(AnalyzeError::Http { status: 500, message: "bad save file".into() });
        tx.send(UiMessage::Settled { ticket, outcome }).unwrap();

        app.poll_messages();
        assert_eq!(app.controller.error_message(), Some("bad save file"));
        assert!(app.results.is_none());
    }
}
