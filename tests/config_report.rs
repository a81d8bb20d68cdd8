use engine_performance_estimator::{
    config::{self, Config, ConfigError, DisplayUnits, UnitSystem},
    engine::{self, EngineInputs, FuelType},
    report,
    units::{PowerUnit, VolumeUnit},
};
use pretty_assertions::assert_eq;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default(&path).unwrap();
    assert!(path.exists());
    assert_eq!(cfg, Config::default());
}

#[test]
fn config_round_trips_through_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "ko".into();
    cfg.apply_unit_system(UnitSystem::Imperial);
    cfg.inputs.set_fuel_type(FuelType::Diesel);
    cfg.inputs.engine.rpm = 4200.0;
    cfg.save(&path).unwrap();
    let loaded = config::load_or_default(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en-us\"\n").unwrap();
    let cfg = config::load_or_default(&path).unwrap();
    assert_eq!(cfg.language, "en-us");
    assert_eq!(cfg.inputs, EngineInputs::default());
    assert_eq!(cfg.display_units, DisplayUnits::preset(UnitSystem::Metric));
}

#[test]
fn partial_nested_table_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let text = "[inputs.engine]\nrpm = 4000.0\n\n[display_units]\npower = \"Horsepower\"\n";
    std::fs::write(&path, text).unwrap();
    let cfg = config::load_or_default(&path).unwrap();
    let mut expected = EngineInputs::default();
    expected.engine.rpm = 4000.0;
    assert_eq!(cfg.inputs, expected);
    assert_eq!(
        cfg.display_units,
        DisplayUnits {
            power: PowerUnit::Horsepower,
            ..DisplayUnits::default()
        }
    );
}

#[test]
fn broken_config_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = [").unwrap();
    assert!(matches!(
        config::load_or_default(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn result_cards_are_laid_out_column_major() {
    let analysis = engine::analyze(&EngineInputs::default()).unwrap();
    let cards = report::result_cards(&analysis.result, &DisplayUnits::default());
    let keys: Vec<&str> = cards.iter().map(|c| c.key).collect();
    assert_eq!(
        keys,
        vec![
            "card.swept_volume",
            "card.brake_power",
            "card.brake_thermal_efficiency",
            "card.indicated_power",
            "card.friction_power",
            "card.bsfc",
            "card.mechanical_efficiency",
            "card.torque",
            "card.isfc",
        ]
    );
    let columns: Vec<usize> = cards.iter().map(|c| c.column).collect();
    assert_eq!(columns, vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
    assert_eq!(cards[1].formatted_value(), "47.12 kW");
    assert_eq!(cards[0].formatted_value(), "1809.56 cc");
}

#[test]
fn imperial_cards_convert_display_units() {
    let analysis = engine::analyze(&EngineInputs::default()).unwrap();
    let units = DisplayUnits::preset(UnitSystem::Imperial);
    assert_eq!(units.power, PowerUnit::Horsepower);
    assert_eq!(units.displacement, VolumeUnit::CubicInch);
    let cards = report::result_cards(&analysis.result, &units);
    assert_eq!(cards[0].formatted_value(), "110.43 in³");
    assert_eq!(cards[1].formatted_value(), "63.19 hp");
    assert_eq!(cards[7].formatted_value(), "110.63 lb·ft");
}

#[test]
fn thousands_separator() {
    assert_eq!(report::with_thousands(999.0), "999");
    assert_eq!(report::with_thousands(3000.0), "3,000");
    assert_eq!(report::with_thousands(44_000.0), "44,000");
    assert_eq!(report::with_thousands(1_234_567.4), "1,234,567");
    assert_eq!(report::with_thousands(-1500.0), "-1,500");
}

#[test]
fn engine_information_summarises_inputs() {
    let inputs = EngineInputs::default();
    let analysis = engine::analyze(&inputs).unwrap();
    let info = report::engine_information(&inputs, &analysis.result);
    assert!(info.starts_with("Engine Configuration:\n- Type: 4-Stroke\n"));
    assert!(info.contains("- Bore × Stroke: 80.0 × 90.0 mm"));
    assert!(info.contains("- Displacement: 1810 cc"));
    assert!(info.contains("- Compression Ratio: 9.5:1"));
    assert!(info.contains("\n\nOperating Conditions:\n- RPM: 3,000\n"));
    assert!(info.contains("- Calorific Value: 44,000 kJ/kg"));
}

#[test]
fn text_report_has_all_sections() {
    let inputs = EngineInputs::default();
    let analysis = engine::analyze(&inputs).unwrap();
    let text = report::render_report(&inputs, &analysis, &DisplayUnits::default());
    for heading in [
        "=== Performance Results ===",
        "=== Engine Information ===",
        "=== Performance Analysis ===",
        "Calculation Notes:",
    ] {
        assert!(text.contains(heading), "missing {heading}");
    }
    for note in report::CALCULATION_NOTES {
        assert!(text.contains(note));
    }
    assert!(text.contains("Ideal cycle: theoretical "));
}

#[test]
fn idealized_efficiency_reports_both_curves_at_ratio() {
    // 1 - 10^-0.4 = 0.601893
    assert_eq!(
        report::idealized_efficiency(FuelType::Petrol, 10.0),
        "theoretical 60.19 % / practical 36.11 % at CR 10.0"
    );
    let diesel = report::idealized_efficiency(FuelType::Diesel, 18.0);
    assert!(diesel.ends_with("at CR 18.0"), "{diesel}");
}

#[test]
fn curve_csv_has_header_and_one_row_per_sample() {
    let analysis = engine::analyze(&EngineInputs::default()).unwrap();
    let mut buf = Vec::new();
    report::write_curves(&mut buf, &analysis.efficiency, &analysis.power).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 51);
    assert_eq!(
        lines[0],
        concat!(
            "compression_ratio,theoretical_efficiency_pct,practical_efficiency_pct,",
            "rpm,torque_nm,brake_power_kw"
        )
    );
    assert_eq!(lines[0], report::CSV_HEADER);
    assert!(lines[1].starts_with("6.000000,"));
    assert!(lines[50].starts_with("20.000000,"));
    assert!(lines.iter().all(|l| l.split(',').count() == 6));
}

#[test]
fn curve_csv_is_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curves.csv");
    let analysis = engine::analyze(&EngineInputs::default()).unwrap();
    report::write_curves_csv(&path, &analysis.efficiency, &analysis.power).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 51);
}
