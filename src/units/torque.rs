use serde::{Deserialize, Serialize};

/// 토크 단위. 내부 기준은 N·m이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TorqueUnit {
    NewtonMeter,
    PoundFoot,
    KilogramForceMeter,
}

impl TorqueUnit {
    /// 화면 표시용 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            TorqueUnit::NewtonMeter => "Nm",
            TorqueUnit::PoundFoot => "lb·ft",
            TorqueUnit::KilogramForceMeter => "kgf·m",
        }
    }
}

const NM_PER_LBFT: f64 = 1.355_817_948;
const NM_PER_KGFM: f64 = 9.80665;

fn to_newton_meter(value: f64, unit: TorqueUnit) -> f64 {
    match unit {
        TorqueUnit::NewtonMeter => value,
        TorqueUnit::PoundFoot => value * NM_PER_LBFT,
        TorqueUnit::KilogramForceMeter => value * NM_PER_KGFM,
    }
}

fn from_newton_meter(value_nm: f64, unit: TorqueUnit) -> f64 {
    match unit {
        TorqueUnit::NewtonMeter => value_nm,
        TorqueUnit::PoundFoot => value_nm / NM_PER_LBFT,
        TorqueUnit::KilogramForceMeter => value_nm / NM_PER_KGFM,
    }
}

/// 토크를 변환한다.
pub fn convert_torque(value: f64, from: TorqueUnit, to: TorqueUnit) -> f64 {
    let nm = to_newton_meter(value, from);
    from_newton_meter(nm, to)
}
