use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::engine::inputs::{self, InputRange};
use crate::engine::{self, CycleType, EngineInputs, FuelType};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::report;
use crate::units::power::from_kilowatt;
use crate::units::{convert_torque, TorqueUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Geometry,
    Specifications,
    PowerInput,
    Fuel,
    Results,
    Curves,
    Export,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("\n=== {} ===", tr.t(keys::APP_TITLE));
    for key in [
        keys::MAIN_MENU_GEOMETRY,
        keys::MAIN_MENU_SPECIFICATIONS,
        keys::MAIN_MENU_POWER_INPUT,
        keys::MAIN_MENU_FUEL,
        keys::MAIN_MENU_RESULTS,
        keys::MAIN_MENU_CURVES,
        keys::MAIN_MENU_EXPORT,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 메뉴 번호 문자열을 선택지로 바꾼다.
pub fn parse_menu_choice(s: &str) -> Option<MenuChoice> {
    match s.trim() {
        "1" => Some(MenuChoice::Geometry),
        "2" => Some(MenuChoice::Specifications),
        "3" => Some(MenuChoice::PowerInput),
        "4" => Some(MenuChoice::Fuel),
        "5" => Some(MenuChoice::Results),
        "6" => Some(MenuChoice::Curves),
        "7" => Some(MenuChoice::Export),
        "8" => Some(MenuChoice::UnitConversion),
        "9" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 보어/스트로크/실린더 수 입력.
pub fn handle_geometry(tr: &Translator, inputs: &mut EngineInputs) -> Result<(), AppError> {
    println!("{}", tr.t(keys::GEOMETRY_HEADING));
    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    inputs.engine.bore_mm =
        read_in_range(tr, keys::FIELD_BORE, inputs.engine.bore_mm, inputs::BORE_MM)?;
    inputs.engine.stroke_mm =
        read_in_range(tr, keys::FIELD_STROKE, inputs.engine.stroke_mm, inputs::STROKE_MM)?;
    let cylinders = read_in_range(
        tr,
        keys::FIELD_CYLINDERS,
        f64::from(inputs.engine.cylinders),
        inputs::CYLINDERS,
    )?;
    inputs.engine.cylinders = cylinders.round() as u32;
    Ok(())
}

/// 행정 형식/압축비/회전수 입력.
pub fn handle_specifications(tr: &Translator, inputs: &mut EngineInputs) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SPECIFICATIONS_HEADING));
    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    let current = match inputs.engine.cycle {
        CycleType::FourStroke => "1",
        CycleType::TwoStroke => "2",
    };
    let sel = read_line(&format!("{} [{current}]: ", tr.t(keys::FIELD_ENGINE_TYPE)))?;
    match sel.trim() {
        "" => {}
        "1" => inputs.engine.cycle = CycleType::FourStroke,
        "2" => inputs.engine.cycle = CycleType::TwoStroke,
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    inputs.engine.compression_ratio = read_in_range(
        tr,
        keys::FIELD_COMPRESSION_RATIO,
        inputs.engine.compression_ratio,
        inputs::COMPRESSION_RATIO,
    )?;
    inputs.engine.rpm = read_in_range(tr, keys::FIELD_RPM, inputs.engine.rpm, inputs::RPM)?;
    Ok(())
}

/// IMEP/토크 입력.
pub fn handle_power_input(tr: &Translator, inputs: &mut EngineInputs) -> Result<(), AppError> {
    println!("{}", tr.t(keys::POWER_INPUT_HEADING));
    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    inputs.operating.imep_bar =
        read_in_range(tr, keys::FIELD_IMEP, inputs.operating.imep_bar, inputs::IMEP_BAR)?;
    inputs.operating.torque_nm =
        read_in_range(tr, keys::FIELD_TORQUE, inputs.operating.torque_nm, inputs::TORQUE_NM)?;
    Ok(())
}

/// 연료 종류/발열량/소비량 입력. 연료를 바꾸면 발열량 기본값이 바뀐다.
pub fn handle_fuel(tr: &Translator, inputs: &mut EngineInputs) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FUEL_HEADING));
    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    let current = match inputs.fuel.fuel_type {
        FuelType::Petrol => "1",
        FuelType::Diesel => "2",
    };
    let sel = read_line(&format!("{} [{current}]: ", tr.t(keys::FIELD_FUEL_TYPE)))?;
    match sel.trim() {
        "" => {}
        "1" => inputs.set_fuel_type(FuelType::Petrol),
        "2" => inputs.set_fuel_type(FuelType::Diesel),
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    inputs.fuel.calorific_value_kj_per_kg = read_in_range(
        tr,
        keys::FIELD_CALORIFIC_VALUE,
        inputs.fuel.calorific_value_kj_per_kg,
        inputs::CALORIFIC_VALUE,
    )?;
    inputs.fuel.fuel_consumption_kg_per_h = read_in_range(
        tr,
        keys::FIELD_FUEL_CONSUMPTION,
        inputs.fuel.fuel_consumption_kg_per_h,
        inputs::FUEL_CONSUMPTION,
    )?;
    Ok(())
}

/// 결과 카드와 엔진 정보를 출력한다.
pub fn show_results(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let inputs = cfg.inputs.clamped();
    let analysis = engine::analyze(&inputs)?;
    println!("\n-- {} --", tr.t(keys::RESULTS_HEADING));
    for card in report::result_cards(&analysis.result, &cfg.display_units) {
        println!(
            "{:<30} {}",
            tr.text(card.key, card.title),
            card.formatted_value()
        );
    }
    println!("\n-- {} --", tr.t(keys::INFO_HEADING));
    print!("{}", report::engine_information(&inputs, &analysis.result));
    println!("\n-- {} --", tr.t(keys::NOTES_HEADING));
    for note in report::CALCULATION_NOTES {
        println!("- {note}");
    }
    Ok(())
}

/// 두 곡선을 나란히 표로 출력한다. 현재 운전점은 표 아래에 따로 표시한다.
/// 토크와 동력은 설정된 표시 단위로 환산한다.
pub fn show_curves(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let inputs = cfg.inputs.clamped();
    let analysis = engine::analyze(&inputs)?;
    let units = &cfg.display_units;
    let power = |kw: f64| from_kilowatt(kw, units.power);
    let torque = |nm: f64| convert_torque(nm, TorqueUnit::NewtonMeter, units.torque);
    let eff = &analysis.efficiency;
    let pow = &analysis.power;
    println!("\n-- {} --", tr.t(keys::ANALYSIS_HEADING));
    println!(
        "{}",
        tr.t(keys::CURVES_TABLE_HEADER)
            .replace("{torque}", units.torque.symbol())
            .replace("{power}", units.power.symbol())
    );
    for ((t, p), (tq, pw)) in eff
        .theoretical
        .iter()
        .zip(&eff.practical)
        .zip(pow.torque.iter().zip(&pow.power))
    {
        println!(
            "{:>9.2} {:>9.2} {:>10.2} | {:>7.0} {:>11.2} {:>10.2}",
            t.x,
            t.y,
            p.y,
            tq.x,
            torque(tq.y),
            power(pw.y)
        );
    }
    println!(
        "{}: CR {:.1} → {:.2} % | {:.0} rpm → {:.2} {}",
        tr.t(keys::CHART_CURRENT_POINT),
        eff.current.x,
        eff.current.y,
        pow.current.x,
        power(pow.current.y),
        units.power.symbol()
    );
    println!(
        "{}",
        report::idealized_efficiency(inputs.fuel.fuel_type, inputs.engine.compression_ratio)
    );
    Ok(())
}

/// 곡선 데이터를 CSV로 저장한다.
pub fn handle_export(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let analysis = engine::analyze(&cfg.inputs.clamped())?;
    let path = read_line(&tr.t(keys::EXPORT_PROMPT_PATH))?;
    let path = path.trim();
    if path.is_empty() {
        return Ok(());
    }
    report::write_curves_csv(Path::new(path), &analysis.efficiency, &analysis.power)?;
    tracing::info!(path, "곡선 CSV를 저장했습니다");
    println!("{} {path}", tr.t(keys::EXPORT_DONE));
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    for (i, kind) in QuantityKind::ALL.iter().enumerate() {
        println!("{}) {:?}  [{}]", i + 1, kind, kind.unit_hint());
    }
    let kind = loop {
        let sel = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        match parse_quantity_selection(&sel) {
            Some(kind) => break kind,
            None => println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED)),
        }
    };
    let value = read_f64(tr, &tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let system = match sel.trim() {
        "" => return Ok(()),
        "1" => UnitSystem::Metric,
        "2" => UnitSystem::Imperial,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.apply_unit_system(system);
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

/// 변환기 항목 선택. 목록 번호(1부터)나 물리량 이름(`torque`, `배기량` 등)을 받는다.
pub fn parse_quantity_selection(s: &str) -> Option<QuantityKind> {
    let s = s.trim();
    match s.parse::<usize>() {
        Ok(n) => n
            .checked_sub(1)
            .and_then(|i| QuantityKind::ALL.get(i).copied()),
        Err(_) => conversion::parse_quantity(s).ok(),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 현재 값을 보여주고 새 값을 읽는다. 빈 입력은 현재 값 유지, 범위 밖 값은 경계로 보정한다.
fn read_in_range(
    tr: &Translator,
    field_key: &str,
    current: f64,
    range: InputRange,
) -> Result<f64, AppError> {
    let prompt = format!(
        "{} [{}~{}] ({current}): ",
        tr.t(field_key),
        range.min,
        range.max
    );
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) => {
                let clamped = range.clamp(v);
                if clamped != v {
                    println!("{} {clamped}", tr.t(keys::WARN_CLAMPED));
                }
                return Ok(clamped);
            }
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!(parse_menu_choice(" 5\n"), Some(MenuChoice::Results));
        assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("42"), None);
    }

    #[test]
    fn converter_accepts_number_or_name() {
        assert_eq!(parse_quantity_selection("1\n"), Some(QuantityKind::Length));
        assert_eq!(parse_quantity_selection("7"), Some(QuantityKind::SpecificEnergy));
        assert_eq!(parse_quantity_selection("0"), None);
        assert_eq!(parse_quantity_selection("8"), None);
        assert_eq!(parse_quantity_selection("Torque"), Some(QuantityKind::Torque));
        assert_eq!(parse_quantity_selection("배기량"), Some(QuantityKind::Volume));
        assert_eq!(parse_quantity_selection("temperature"), None);
    }
}
