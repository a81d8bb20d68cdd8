use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 bar이다.
/// 평균유효압력(IMEP)은 사이클 평균 압력차이므로 게이지/절대 구분 없이 단순 배율로만 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    Pascal,
    KiloPascal,
    MegaPascal,
    KgPerCm2,
    Psi,
}

impl PressureUnit {
    /// 화면 표시용 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::KgPerCm2 => "kgf/cm²",
            PressureUnit::Psi => "psi",
        }
    }
}

pub const PA_PER_BAR: f64 = 100_000.0;

/// 주어진 압력을 bar 로 변환한다.
pub fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::Pascal => value / PA_PER_BAR,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MegaPascal => value * 10.0,
        PressureUnit::KgPerCm2 => value * 0.980665,
        PressureUnit::Psi => value * 0.0689476,
    }
}

/// bar 값을 원하는 단위로 변환한다.
pub fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::Pascal => value_bar * PA_PER_BAR,
        PressureUnit::KiloPascal => value_bar * 100.0,
        PressureUnit::MegaPascal => value_bar / 10.0,
        PressureUnit::KgPerCm2 => value_bar / 0.980665,
        PressureUnit::Psi => value_bar / 0.0689476,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let bar = to_bar(value, from);
    from_bar(bar, to)
}
