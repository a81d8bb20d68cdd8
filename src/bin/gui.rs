#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, Points};
use engine_performance_estimator::{
    config::{self, Config, DisplayUnits, UnitSystem},
    engine::{self, inputs, Analysis, CycleType, DomainError, FuelType, PowerCurve},
    i18n::{self, keys},
    report,
    units::{convert_torque, power::from_kilowatt, TorqueUnit},
};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use tracing_subscriber::EnvFilter;

const BLUE: egui::Color32 = egui::Color32::from_rgb(46, 134, 193);
const RED: egui::Color32 = egui::Color32::from_rgb(231, 76, 60);
const ORANGE: egui::Color32 = egui::Color32::from_rgb(243, 156, 18);

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko)
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

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let config_path = Path::new(config::DEFAULT_CONFIG_PATH);
    let mut app_cfg = config::load_or_default(config_path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "설정을 불러오지 못해 기본값을 사용합니다");
        Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "IC Engine Performance Estimator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 시스템/프로젝트 폰트를 찾아 우선 적용한다.
/// 1) assets/fonts/*.ttf
/// 2) Windows 맑은 고딕
/// 3) Linux Noto CJK
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/malgun.ttf".into(),
        "assets/fonts/NanumGothic.ttf".into(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.push(fonts.join("malgun.ttf"));
        candidates.push(fonts.join("gulim.ttc"));
    }
    candidates.push("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into());
    candidates.push("/usr/share/fonts/truetype/nanum/NanumGothic.ttf".into());

    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; falling back to the default egui font.".into())
}

fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

struct GuiApp {
    config: Config,
    tr: i18n::Translator,
    lang_input: String,
    analysis: Result<Analysis, DomainError>,
    show_settings_modal: bool,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: Config) -> Self {
        let resolved = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&resolved, config.language_pack_dir.as_deref());
        let mut config = config;
        config.inputs = config.inputs.clamped();
        let analysis = engine::analyze(&config.inputs);
        Self {
            lang_input: config.language.clone(),
            config,
            tr,
            analysis,
            show_settings_modal: false,
            status: None,
        }
    }

    fn recalculate(&mut self) {
        self.analysis = engine::analyze(&self.config.inputs);
        if let Err(e) = &self.analysis {
            tracing::warn!(error = %e, "성능 계산 실패");
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.text(key, default)
    }

    /// 좌측 입력 폼. 값이 바뀌면 true.
    fn ui_inputs(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        let tr = self.tr.clone();
        let label = |key: &str| tr.t(key);
        let input = &mut self.config.inputs;

        ui.heading(label(keys::GEOMETRY_HEADING).trim().trim_matches('-').trim());
        egui::Grid::new("geometry_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                changed |= drag_row(ui, &label(keys::FIELD_BORE), &mut input.engine.bore_mm, inputs::BORE_MM, 1.0);
                changed |= drag_row(ui, &label(keys::FIELD_STROKE), &mut input.engine.stroke_mm, inputs::STROKE_MM, 1.0);
                ui.label(label(keys::FIELD_CYLINDERS));
                changed |= ui
                    .add(egui::DragValue::new(&mut input.engine.cylinders)
                            .clamp_range(inputs::CYLINDERS.min as u32..=inputs::CYLINDERS.max as u32))
                    .changed();
                ui.end_row();
            });
        ui.separator();

        ui.heading(label(keys::SPECIFICATIONS_HEADING).trim().trim_matches('-').trim());
        egui::Grid::new("spec_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(label(keys::FIELD_ENGINE_TYPE));
                let before = input.engine.cycle;
                egui::ComboBox::from_id_source("cycle_choice")
                    .selected_text(before.label())
                    .show_ui(ui, |ui| {
                        for cycle in [CycleType::FourStroke, CycleType::TwoStroke] {
                            ui.selectable_value(&mut input.engine.cycle, cycle, cycle.label());
                        }
                    });
                changed |= before != input.engine.cycle;
                ui.end_row();
                changed |= drag_row(ui, &label(keys::FIELD_COMPRESSION_RATIO), &mut input.engine.compression_ratio, inputs::COMPRESSION_RATIO, 0.1);
                changed |= drag_row(ui, &label(keys::FIELD_RPM), &mut input.engine.rpm, inputs::RPM, 100.0);
            });
        ui.separator();

        ui.heading(label(keys::POWER_INPUT_HEADING).trim().trim_matches('-').trim());
        egui::Grid::new("power_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                changed |= drag_row(ui, &label(keys::FIELD_IMEP), &mut input.operating.imep_bar, inputs::IMEP_BAR, 0.1);
                changed |= drag_row(ui, &label(keys::FIELD_TORQUE), &mut input.operating.torque_nm, inputs::TORQUE_NM, 1.0);
            });
        ui.separator();

        ui.heading(label(keys::FUEL_HEADING).trim().trim_matches('-').trim());
        egui::Grid::new("fuel_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(label(keys::FIELD_FUEL_TYPE));
                let mut fuel = input.fuel.fuel_type;
                egui::ComboBox::from_id_source("fuel_choice")
                    .selected_text(fuel.label())
                    .show_ui(ui, |ui| {
                        for f in [FuelType::Petrol, FuelType::Diesel] {
                            ui.selectable_value(&mut fuel, f, f.label());
                        }
                    });
                if fuel != input.fuel.fuel_type {
                    input.set_fuel_type(fuel);
                    changed = true;
                }
                ui.end_row();
                changed |= drag_row(ui, &label(keys::FIELD_CALORIFIC_VALUE), &mut input.fuel.calorific_value_kj_per_kg, inputs::CALORIFIC_VALUE, 100.0);
                changed |= drag_row(ui, &label(keys::FIELD_FUEL_CONSUMPTION), &mut input.fuel.fuel_consumption_kg_per_h, inputs::FUEL_CONSUMPTION, 0.1);
            });
        changed
    }

    fn ui_results(&self, ui: &mut egui::Ui, analysis: &Analysis) {
        ui.heading(self.txt(keys::RESULTS_HEADING, "Performance Results"));
        let cards = report::result_cards(&analysis.result, &self.config.display_units);
        ui.columns(3, |cols| {
            for card in &cards {
                let col = &mut cols[card.column];
                egui::Frame::group(col.style())
                    .stroke(egui::Stroke::new(2.0, BLUE))
                    .inner_margin(egui::Margin::same(10.0))
                    .show(col, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(self.txt(card.key, card.title)).strong());
                        ui.label(
                            egui::RichText::new(card.formatted_value())
                                .size(22.0)
                                .color(BLUE),
                        );
                    });
                col.add_space(6.0);
            }
        });
    }

    fn ui_charts(&self, ui: &mut egui::Ui, analysis: &Analysis) {
        ui.heading(self.txt(keys::ANALYSIS_HEADING, "Performance Analysis"));
        let current_name = self.txt(keys::CHART_CURRENT_POINT, "Current Operating Point");
        ui.columns(2, |cols| {
            let eff = &analysis.efficiency;
            cols[0].label(egui::RichText::new(self.txt(keys::CHART_EFFICIENCY_TITLE, "Brake Thermal Efficiency vs Compression Ratio")).strong());
            Plot::new("efficiency_plot")
                .height(360.0)
                .legend(Legend::default())
                .x_axis_label("Compression Ratio")
                .y_axis_label("Brake Thermal Efficiency (%)")
                .show(&mut cols[0], |plot_ui| {
                    let theoretical: Vec<[f64; 2]> = eff.theoretical.iter().map(|p| p.as_array()).collect();
                    let practical: Vec<[f64; 2]> = eff.practical.iter().map(|p| p.as_array()).collect();
                    plot_ui.line(
                        Line::new(theoretical)
                            .name(self.txt(keys::CHART_THEORETICAL, "Theoretical Efficiency"))
                            .color(BLUE)
                            .width(3.0),
                    );
                    plot_ui.line(
                        Line::new(practical)
                            .name(self.txt(keys::CHART_PRACTICAL, "Practical Efficiency"))
                            .color(RED)
                            .width(3.0)
                            .style(LineStyle::dashed_loose()),
                    );
                    plot_ui.points(
                        Points::new(vec![eff.current.as_array()])
                            .name(&current_name)
                            .shape(MarkerShape::Diamond)
                            .radius(7.0)
                            .color(ORANGE),
                    );
                });
            cols[0].label(report::idealized_efficiency(
                self.config.inputs.fuel.fuel_type,
                self.config.inputs.engine.compression_ratio,
            ));

            let series = PowerSeries::new(&analysis.power, &self.config.display_units);
            cols[1].label(egui::RichText::new(self.txt(keys::CHART_POWER_TITLE, "Brake Power and Torque vs RPM")).strong());
            Plot::new("power_plot")
                .height(220.0)
                .legend(Legend::default())
                .x_axis_label("RPM")
                .y_axis_label(format!("Brake Power ({})", series.power_unit))
                .show(&mut cols[1], |plot_ui| {
                    plot_ui.line(
                        Line::new(series.power.clone())
                            .name(self.txt(keys::CHART_POWER, "Power"))
                            .color(BLUE)
                            .width(3.0),
                    );
                    plot_ui.points(
                        Points::new(vec![series.current])
                            .name(&current_name)
                            .shape(MarkerShape::Diamond)
                            .radius(7.0)
                            .color(ORANGE),
                    );
                });
            // egui_plot에는 보조 y축이 없어 토크는 아래 별도 그래프로 그린다.
            Plot::new("torque_plot")
                .height(140.0)
                .legend(Legend::default())
                .x_axis_label("RPM")
                .y_axis_label(format!("Torque ({})", series.torque_unit))
                .show(&mut cols[1], |plot_ui| {
                    plot_ui.line(
                        Line::new(series.torque.clone())
                            .name(self.txt(keys::CHART_TORQUE, "Torque"))
                            .color(RED)
                            .width(3.0)
                            .style(LineStyle::dashed_loose()),
                    );
                });
        });
    }

    fn ui_information(&self, ui: &mut egui::Ui, analysis: &Analysis) {
        ui.heading(self.txt(keys::INFO_HEADING, "Engine Information"));
        let info = report::engine_information(&self.config.inputs, &analysis.result);
        let (configuration, conditions) = info.split_once("\n\n").unwrap_or((info.as_str(), ""));
        ui.columns(2, |cols| {
            egui::Frame::group(cols[0].style()).show(&mut cols[0], |ui| {
                ui.set_width(ui.available_width());
                ui.label(configuration);
            });
            egui::Frame::group(cols[1].style()).show(&mut cols[1], |ui| {
                ui.set_width(ui.available_width());
                ui.label(conditions);
            });
        });
        ui.separator();
        ui.label(egui::RichText::new(self.txt(keys::NOTES_HEADING, "Calculation Notes")).strong());
        for note in report::CALCULATION_NOTES {
            ui.label(format!("- {note}"));
        }
    }

    fn export_csv(&mut self) {
        let Ok(analysis) = &self.analysis else {
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("engine_curves.csv")
            .save_file()
        else {
            return;
        };
        self.status = Some(
            match report::write_curves_csv(&path, &analysis.efficiency, &analysis.power) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "곡선 CSV를 저장했습니다");
                    fill_template("Saved: {path}", &[("path", path.display().to_string())])
                }
                Err(e) => format!("Export error: {e}"),
            },
        );
    }

    fn export_report(&mut self) {
        let Ok(analysis) = &self.analysis else {
            return;
        };
        let text = report::render_report(&self.config.inputs, analysis, &self.config.display_units);
        let Some(path) = FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name("engine_report.txt")
            .save_file()
        else {
            return;
        };
        self.status = Some(match fs::write(&path, text) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "보고서를 저장했습니다");
                fill_template("Saved: {path}", &[("path", path.display().to_string())])
            }
            Err(e) => format!("Export error: {e}"),
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        let mut new_system = self.config.unit_system;
        let mut save_clicked = false;
        egui::Window::new(self.txt("gui.settings.title", "Settings"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Unit system");
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut new_system, UnitSystem::Metric, "Metric (kW, cc, bar, Nm)");
                    ui.selectable_value(&mut new_system, UnitSystem::Imperial, "Imperial (hp, in³, psi, lb·ft)");
                });
                ui.separator();
                ui.label(format!("Language (active: {})", self.tr.language_code()));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.clone())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), "System");
                        ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                        ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                    });
                save_clicked = ui.button("Save settings").clicked();
            });
        if new_system != self.config.unit_system {
            self.config.apply_unit_system(new_system);
        }
        if save_clicked {
            self.config.language = self.lang_input.clone();
            let resolved = i18n::resolve_language(&self.config.language, None);
            self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
            self.status = Some(match self.config.save(Path::new(config::DEFAULT_CONFIG_PATH)) {
                Ok(()) => "Saved.".to_string(),
                Err(e) => format!("Save error: {e}"),
            });
        }
        self.show_settings_modal = open;
    }
}

/// 동력 차트용 좌표. 동력과 토크를 표시 단위로 환산해 둔다.
struct PowerSeries {
    power: Vec<[f64; 2]>,
    torque: Vec<[f64; 2]>,
    current: [f64; 2],
    power_unit: &'static str,
    torque_unit: &'static str,
}

impl PowerSeries {
    fn new(curve: &PowerCurve, units: &DisplayUnits) -> Self {
        let power = |kw: f64| from_kilowatt(kw, units.power);
        Self {
            power: curve.power.iter().map(|p| [p.x, power(p.y)]).collect(),
            torque: curve
                .torque
                .iter()
                .map(|p| [p.x, convert_torque(p.y, TorqueUnit::NewtonMeter, units.torque)])
                .collect(),
            current: [curve.current.x, power(curve.current.y)],
            power_unit: units.power.symbol(),
            torque_unit: units.torque.symbol(),
        }
    }
}

fn drag_row(ui: &mut egui::Ui, text: &str, value: &mut f64, range: inputs::InputRange, speed: f64) -> bool {
    ui.label(text);
    let changed = ui
        .add(
            egui::DragValue::new(value)
                .speed(speed)
                .clamp_range(range.min..=range.max),
        )
        .changed();
    ui.end_row();
    changed
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.txt(keys::APP_TITLE, "IC Engine Performance Estimator"));
                ui.separator();
                if ui.button("Export curves (CSV)").clicked() {
                    self.export_csv();
                }
                if ui.button("Export report").clicked() {
                    self.export_report();
                }
                if ui.button("Save inputs").clicked() {
                    self.status = Some(match self.config.save(Path::new(config::DEFAULT_CONFIG_PATH)) {
                        Ok(()) => "Saved.".to_string(),
                        Err(e) => format!("Save error: {e}"),
                    });
                }
                if ui.button(self.txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if let Some(msg) = &self.status {
                    ui.label(msg.as_str());
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        let mut changed = false;
        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(260.0)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    changed = self.ui_inputs(ui);
                });
            });
        if changed {
            self.recalculate();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match &self.analysis {
                    Ok(analysis) => {
                        self.ui_results(ui, analysis);
                        ui.add_space(12.0);
                        self.ui_charts(ui, analysis);
                        ui.add_space(12.0);
                        self.ui_information(ui, analysis);
                    }
                    Err(e) => {
                        ui.colored_label(RED, format!("{}: {e}", self.txt(keys::ERROR_PREFIX, "Error")));
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_computes_default_analysis() {
        let app = GuiApp::new(Config::default());
        let analysis = app.analysis.as_ref().expect("default inputs are valid");
        assert!((analysis.result.brake_power_kw - 47.1238898).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_config_is_clamped_on_start() {
        let mut cfg = Config::default();
        cfg.inputs.operating.torque_nm = 0.0;
        let app = GuiApp::new(cfg);
        assert_eq!(app.config.inputs.operating.torque_nm, inputs::TORQUE_NM.min);
        assert!(app.analysis.is_ok());
    }

    #[test]
    fn power_chart_follows_display_units() {
        let app = GuiApp::new(Config::default());
        let analysis = app.analysis.as_ref().expect("default inputs are valid");
        let imperial = DisplayUnits::preset(UnitSystem::Imperial);
        let series = PowerSeries::new(&analysis.power, &imperial);
        assert_eq!(series.power_unit, "hp");
        assert_eq!(series.torque_unit, "lb·ft");
        assert_eq!(series.power.len(), analysis.power.power.len());
        let kw = analysis.power.current.y;
        assert!((series.current[1] - kw / 0.745_699_872).abs() < 1e-9);
        let metric = PowerSeries::new(&analysis.power, &DisplayUnits::default());
        assert_eq!(metric.current, analysis.power.current.as_array());
    }

    #[test]
    fn template_fills_placeholders() {
        assert_eq!(fill_template("Saved: {path}", &[("path", "a.csv".into())]), "Saved: a.csv");
    }
}
