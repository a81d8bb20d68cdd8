use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
/// 보어/스트로크 입력은 mm가 기본이므로 엔진 계산 전에 반드시 미터로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Centimeter,
    Inch,
}

/// 주어진 길이를 미터로 변환한다.
pub fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Centimeter => value / 100.0,
        LengthUnit::Inch => value * 0.0254,
    }
}

/// 미터 값을 원하는 단위로 변환한다.
pub fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Millimeter => value_m * 1000.0,
        LengthUnit::Centimeter => value_m * 100.0,
        LengthUnit::Inch => value_m / 0.0254,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}
