use serde::{Deserialize, Serialize};

/// 동력 단위. 내부 기준은 kW이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Kilowatt,
    Watt,
    /// 영국 마력(hp, 550 ft·lbf/s)
    Horsepower,
    /// 미터 마력(PS)
    MetricHorsepower,
}

impl PowerUnit {
    /// 화면 표시용 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Watt => "W",
            PowerUnit::Horsepower => "hp",
            PowerUnit::MetricHorsepower => "PS",
        }
    }
}

const KW_PER_HP: f64 = 0.745_699_872;
const KW_PER_PS: f64 = 0.735_498_75;

fn to_kilowatt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => value,
        PowerUnit::Watt => value / 1000.0,
        PowerUnit::Horsepower => value * KW_PER_HP,
        PowerUnit::MetricHorsepower => value * KW_PER_PS,
    }
}

/// kW 값을 원하는 단위로 변환한다.
pub fn from_kilowatt(value_kw: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => value_kw,
        PowerUnit::Watt => value_kw * 1000.0,
        PowerUnit::Horsepower => value_kw / KW_PER_HP,
        PowerUnit::MetricHorsepower => value_kw / KW_PER_PS,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let kw = to_kilowatt(value, from);
    from_kilowatt(kw, to)
}
