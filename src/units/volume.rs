use serde::{Deserialize, Serialize};

/// 체적(배기량) 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    /// cc (= mL)
    CubicCentimeter,
    CubicInch,
}

impl VolumeUnit {
    /// 화면 표시용 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::Liter => "L",
            VolumeUnit::CubicCentimeter => "cc",
            VolumeUnit::CubicInch => "in³",
        }
    }
}

const M3_PER_CUBIC_INCH: f64 = 1.6387064e-5;

/// 주어진 체적을 입방미터로 변환한다.
pub fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::CubicCentimeter => value / 1_000_000.0,
        VolumeUnit::CubicInch => value * M3_PER_CUBIC_INCH,
    }
}

/// 입방미터 값을 원하는 단위로 변환한다.
pub fn from_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value * 1000.0,
        VolumeUnit::CubicCentimeter => value * 1_000_000.0,
        VolumeUnit::CubicInch => value / M3_PER_CUBIC_INCH,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let m3 = to_cubic_meter(value, from);
    from_cubic_meter(m3, to)
}
