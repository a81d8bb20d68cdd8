use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_GEOMETRY: &str = "main_menu.geometry";
    pub const MAIN_MENU_SPECIFICATIONS: &str = "main_menu.specifications";
    pub const MAIN_MENU_POWER_INPUT: &str = "main_menu.power_input";
    pub const MAIN_MENU_FUEL: &str = "main_menu.fuel";
    pub const MAIN_MENU_RESULTS: &str = "main_menu.results";
    pub const MAIN_MENU_CURVES: &str = "main_menu.curves";
    pub const MAIN_MENU_EXPORT: &str = "main_menu.export";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const PROMPT_KEEP_HINT: &str = "prompt.keep_hint";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const WARN_CLAMPED: &str = "warn.clamped";

    pub const GEOMETRY_HEADING: &str = "geometry.heading";
    pub const FIELD_BORE: &str = "field.bore";
    pub const FIELD_STROKE: &str = "field.stroke";
    pub const FIELD_CYLINDERS: &str = "field.cylinders";

    pub const SPECIFICATIONS_HEADING: &str = "specifications.heading";
    pub const FIELD_ENGINE_TYPE: &str = "field.engine_type";
    pub const FIELD_COMPRESSION_RATIO: &str = "field.compression_ratio";
    pub const FIELD_RPM: &str = "field.rpm";

    pub const POWER_INPUT_HEADING: &str = "power_input.heading";
    pub const FIELD_IMEP: &str = "field.imep";
    pub const FIELD_TORQUE: &str = "field.torque";

    pub const FUEL_HEADING: &str = "fuel.heading";
    pub const FIELD_FUEL_TYPE: &str = "field.fuel_type";
    pub const FIELD_CALORIFIC_VALUE: &str = "field.calorific_value";
    pub const FIELD_FUEL_CONSUMPTION: &str = "field.fuel_consumption";

    pub const RESULTS_HEADING: &str = "results.heading";
    pub const ANALYSIS_HEADING: &str = "analysis.heading";
    pub const INFO_HEADING: &str = "info.heading";
    pub const NOTES_HEADING: &str = "notes.heading";
    pub const CHART_EFFICIENCY_TITLE: &str = "chart.efficiency_title";
    pub const CHART_POWER_TITLE: &str = "chart.power_title";
    pub const CHART_THEORETICAL: &str = "chart.theoretical";
    pub const CHART_PRACTICAL: &str = "chart.practical";
    pub const CHART_POWER: &str = "chart.power";
    pub const CHART_TORQUE: &str = "chart.torque";
    pub const CHART_CURRENT_POINT: &str = "chart.current_point";
    pub const CURVES_TABLE_HEADER: &str = "curves.table_header";

    pub const EXPORT_PROMPT_PATH: &str = "export.prompt_path";
    pub const EXPORT_DONE: &str = "export.done";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const CARD_SWEPT_VOLUME: &str = "card.swept_volume";
    pub const CARD_BRAKE_POWER: &str = "card.brake_power";
    pub const CARD_BRAKE_THERMAL_EFFICIENCY: &str = "card.brake_thermal_efficiency";
    pub const CARD_INDICATED_POWER: &str = "card.indicated_power";
    pub const CARD_FRICTION_POWER: &str = "card.friction_power";
    pub const CARD_BSFC: &str = "card.bsfc";
    pub const CARD_MECHANICAL_EFFICIENCY: &str = "card.mechanical_efficiency";
    pub const CARD_TORQUE: &str = "card.torque";
    pub const CARD_ISFC: &str = "card.isfc";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 실제로 적용된 언어 코드(ko/en).
    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 언어팩에서 키를 조회한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 키 자체 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        self.text(key, key)
    }

    /// `t`와 같지만 어디에도 없으면 `default`를 돌려준다.
    pub fn text(&self, key: &str, default: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let built_in = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        built_in.unwrap_or(default).to_string()
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 중첩 테이블은 `a.b` 형태의 점 표기 키로 펼친다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }
    Some(map)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "내연기관 성능 추정기",
        MAIN_MENU_GEOMETRY => "1) 엔진 형상",
        MAIN_MENU_SPECIFICATIONS => "2) 엔진 사양",
        MAIN_MENU_POWER_INPUT => "3) 동력 입력",
        MAIN_MENU_FUEL => "4) 연료 특성",
        MAIN_MENU_RESULTS => "5) 성능 결과 보기",
        MAIN_MENU_CURVES => "6) 성능 곡선 표",
        MAIN_MENU_EXPORT => "7) 곡선 CSV 내보내기",
        MAIN_MENU_UNIT_CONVERSION => "8) 단위 변환기",
        MAIN_MENU_SETTINGS => "9) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        PROMPT_KEEP_HINT => "(엔터 입력 시 현재 값 유지)",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        WARN_CLAMPED => "허용 범위를 벗어나 경계값으로 보정했습니다:",
        GEOMETRY_HEADING => "\n-- 엔진 형상 --",
        FIELD_BORE => "보어 (mm)",
        FIELD_STROKE => "스트로크 (mm)",
        FIELD_CYLINDERS => "실린더 수",
        SPECIFICATIONS_HEADING => "\n-- 엔진 사양 --",
        FIELD_ENGINE_TYPE => "엔진 형식 (1=4행정, 2=2행정)",
        FIELD_COMPRESSION_RATIO => "압축비",
        FIELD_RPM => "회전수 (rpm)",
        POWER_INPUT_HEADING => "\n-- 동력 입력 --",
        FIELD_IMEP => "도시평균유효압력 (bar)",
        FIELD_TORQUE => "토크 (Nm)",
        FUEL_HEADING => "\n-- 연료 특성 --",
        FIELD_FUEL_TYPE => "연료 (1=휘발유, 2=경유)",
        FIELD_CALORIFIC_VALUE => "발열량 (kJ/kg)",
        FIELD_FUEL_CONSUMPTION => "연료 소비량 (kg/hr)",
        RESULTS_HEADING => "성능 결과",
        ANALYSIS_HEADING => "성능 분석",
        INFO_HEADING => "엔진 정보",
        NOTES_HEADING => "계산 참고",
        CHART_EFFICIENCY_TITLE => "압축비에 따른 제동 열효율",
        CHART_POWER_TITLE => "회전수에 따른 제동 동력과 토크",
        CHART_THEORETICAL => "이론 효율",
        CHART_PRACTICAL => "실사용 효율",
        CHART_POWER => "동력",
        CHART_TORQUE => "토크",
        CHART_CURRENT_POINT => "현재 운전점",
        CURVES_TABLE_HEADER => "   압축비  이론(%)  실사용(%) |     rpm  토크({torque})  동력({power})",
        EXPORT_PROMPT_PATH => "저장할 CSV 경로: ",
        EXPORT_DONE => "곡선 데이터를 저장했습니다:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호 또는 이름 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위: ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위: ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 항목입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) Metric (kW, cc, bar, Nm)  2) Imperial (hp, in³, psi, lb·ft)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다:",
        CARD_SWEPT_VOLUME => "행정체적",
        CARD_BRAKE_POWER => "제동 동력 (BP)",
        CARD_BRAKE_THERMAL_EFFICIENCY => "제동 열효율",
        CARD_INDICATED_POWER => "도시 동력 (IP)",
        CARD_FRICTION_POWER => "마찰 동력 (FP)",
        CARD_BSFC => "제동 연료소비율 (BSFC)",
        CARD_MECHANICAL_EFFICIENCY => "기계효율",
        CARD_TORQUE => "토크",
        CARD_ISFC => "도시 연료소비율 (ISFC)",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "IC Engine Performance Estimator",
        MAIN_MENU_GEOMETRY => "1) Engine Geometry",
        MAIN_MENU_SPECIFICATIONS => "2) Engine Specifications",
        MAIN_MENU_POWER_INPUT => "3) Power Input",
        MAIN_MENU_FUEL => "4) Fuel Properties",
        MAIN_MENU_RESULTS => "5) Show Performance Results",
        MAIN_MENU_CURVES => "6) Performance Curves Table",
        MAIN_MENU_EXPORT => "7) Export Curves to CSV",
        MAIN_MENU_UNIT_CONVERSION => "8) Unit Converter",
        MAIN_MENU_SETTINGS => "9) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        PROMPT_KEEP_HINT => "(press Enter to keep the current value)",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        WARN_CLAMPED => "Value outside the allowed range was clamped to:",
        GEOMETRY_HEADING => "\n-- Engine Geometry --",
        FIELD_BORE => "Bore (mm)",
        FIELD_STROKE => "Stroke (mm)",
        FIELD_CYLINDERS => "Number of Cylinders",
        SPECIFICATIONS_HEADING => "\n-- Engine Specifications --",
        FIELD_ENGINE_TYPE => "Engine Type (1=4-Stroke, 2=2-Stroke)",
        FIELD_COMPRESSION_RATIO => "Compression Ratio",
        FIELD_RPM => "RPM",
        POWER_INPUT_HEADING => "\n-- Power Input --",
        FIELD_IMEP => "Indicated Mean Effective Pressure (bar)",
        FIELD_TORQUE => "Torque (Nm)",
        FUEL_HEADING => "\n-- Fuel Properties --",
        FIELD_FUEL_TYPE => "Fuel Type (1=Petrol, 2=Diesel)",
        FIELD_CALORIFIC_VALUE => "Calorific Value (kJ/kg)",
        FIELD_FUEL_CONSUMPTION => "Fuel Consumption (kg/hr)",
        RESULTS_HEADING => "Performance Results",
        ANALYSIS_HEADING => "Performance Analysis",
        INFO_HEADING => "Engine Information",
        NOTES_HEADING => "Calculation Notes",
        CHART_EFFICIENCY_TITLE => "Brake Thermal Efficiency vs Compression Ratio",
        CHART_POWER_TITLE => "Brake Power and Torque vs RPM",
        CHART_THEORETICAL => "Theoretical Efficiency",
        CHART_PRACTICAL => "Practical Efficiency",
        CHART_POWER => "Power",
        CHART_TORQUE => "Torque",
        CHART_CURRENT_POINT => "Current Operating Point",
        CURVES_TABLE_HEADER => "      CR theor(%) pract(%) |   rpm torque({torque}) power({power})",
        EXPORT_PROMPT_PATH => "CSV path to save: ",
        EXPORT_DONE => "Curve data saved to",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number or name: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit: ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit: ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Metric (kW, cc, bar, Nm)  2) Imperial (hp, in³, psi, lb·ft)",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        CARD_SWEPT_VOLUME => "Swept Volume",
        CARD_BRAKE_POWER => "Brake Power (BP)",
        CARD_BRAKE_THERMAL_EFFICIENCY => "Brake Thermal Efficiency",
        CARD_INDICATED_POWER => "Indicated Power (IP)",
        CARD_FRICTION_POWER => "Friction Power (FP)",
        CARD_BSFC => "BSFC",
        CARD_MECHANICAL_EFFICIENCY => "Mechanical Efficiency",
        CARD_TORQUE => "Torque",
        CARD_ISFC => "ISFC",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english_then_default() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t(keys::CARD_TORQUE), "토크");
        assert_eq!(tr.text("no.such.key", "fallback"), "fallback");
        let en = Translator::new("en-us");
        assert_eq!(en.t(keys::CARD_BSFC), "BSFC");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[card]\ntorque = \"Drehmoment\"\n").unwrap();
        assert_eq!(map.get("card.torque").map(String::as_str), Some("Drehmoment"));
    }

    #[test]
    fn unknown_codes_resolve_to_english() {
        assert_eq!(Translator::new("ko-KR").language_code(), "ko");
        assert_eq!(Translator::new("fr").language_code(), "en");
    }

    #[test]
    fn explicit_language_beats_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-uk")), "en-us");
    }
}
