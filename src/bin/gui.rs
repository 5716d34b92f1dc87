#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use ideal_gas_calculator::{
    config,
    form::{self, GasForm},
    i18n::{self, keys},
    logging,
    quantity::Quantity,
};
use std::env;
use tracing::{debug, warn};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    if let Err(e) = logging::setup_logging(0, false) {
        eprintln!("logging: {e}");
    }

    let app_cfg = config::load_or_default(config::DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
        warn!("using default configuration: {e}");
        config::Config::default()
    });
    let app = GasApp::new(app_cfg, cli_lang.as_deref().unwrap_or("auto"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 380.0])
            .with_resizable(false),
        ..Default::default()
    };
    let title = app.tr.t(keys::APP_TITLE);
    eframe::run_native(&title, options, Box::new(move |_cc| Box::new(app)))
}

struct GasApp {
    tr: i18n::Translator,
    form: GasForm,
}

impl GasApp {
    fn new(config: config::Config, cli_lang: &str) -> Self {
        let lang = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
        Self {
            tr: i18n::Translator::new_with_pack(&lang, config.language_pack_dir.as_deref()),
            form: GasForm::new(config.default_target, config.decimal_places),
        }
    }

    /// Calculate 버튼 또는 Enter 키.
    fn on_submit(&mut self) {
        match self.form.submit(&self.tr) {
            Ok(result) => debug!(%result, "gui calculation"),
            Err(e) => debug!("gui calculation failed: {e}"),
        }
    }
}

impl App for GasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(tr.t(keys::APP_TITLE));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(tr.t(keys::FORM_CHOOSE_TARGET));
                let mut selected = self.form.target();
                egui::ComboBox::from_id_source("target_choice")
                    .selected_text(form::quantity_label(selected, &tr))
                    .show_ui(ui, |ui| {
                        for q in Quantity::ALL {
                            ui.selectable_value(&mut selected, q, form::quantity_label(q, &tr));
                        }
                    });
                self.form.select_target(selected);
            });
            ui.add_space(8.0);

            let mut submit = false;
            egui::Grid::new("gas_fields")
                .num_columns(2)
                .spacing([12.0, 10.0])
                .show(ui, |ui| {
                    for q in Quantity::ALL {
                        ui.label(form::field_label(q, &tr));
                        let editable = self.form.is_editable(q);
                        let resp = ui.add_enabled(
                            editable,
                            egui::TextEdit::singleline(self.form.field_mut(q)).desired_width(160.0),
                        );
                        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            submit = true;
                        }
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button(tr.t(keys::FORM_CALCULATE)).clicked() {
                    submit = true;
                }
                if ui.button(tr.t(keys::FORM_CLEAR)).clicked() {
                    self.form.clear();
                }
            });
            if submit {
                self.on_submit();
            }

            if let Some(msg) = self.form.status() {
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, msg);
            }

            ui.add_space(16.0);
            ui.label(egui::RichText::new(tr.t(keys::FORM_ABOUT)).small().underline())
                .on_hover_text(tr.t(keys::FORM_ABOUT_TOOLTIP));
        });
    }
}
