//! 차트용 곡선 생성: 압축비-열효율, 회전수-토크/동력.
//!
//! 두 곡선 모두 이상화된 곡선 위에 실제 계산값(현재 운전점)을 함께 표시한다.
//! 현재 운전점은 곡선 위의 값이 아니라 `PerformanceResult`의 값이다.

use serde::{Deserialize, Serialize};

use super::inputs::FuelType;
use super::performance::brake_power_kw;

/// 곡선당 샘플 수.
pub const CURVE_SAMPLES: usize = 50;

/// 압축비 샘플 구간.
pub const COMPRESSION_RATIO_DOMAIN: (f64, f64) = (6.0, 20.0);
/// 실사용 효율 = 이론 효율 × 0.6
pub const PRACTICAL_FACTOR: f64 = 0.6;
/// 디젤 근사 보정 계수.
pub const DIESEL_DERATING: f64 = 0.9;

/// 회전수 샘플 구간.
pub const RPM_DOMAIN: (f64, f64) = (1000.0, 6000.0);
pub const PEAK_TORQUE_RPM: f64 = 3000.0;
/// 최대 토크 이후 지수 감쇠율 [1/rpm].
pub const TORQUE_DECAY_PER_RPM: f64 = 0.0005;

/// 차트의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// egui_plot 등에서 쓰는 `[x, y]` 형태.
    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// `[start, end]`를 `n`개로 균등 분할한다. 양 끝점을 포함하며 마지막 값은 정확히 `end`이다.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// 연료별 비열비 γ. 휘발유는 공기 표준 Otto, 경유는 Diesel 근사.
pub fn specific_heat_ratio(fuel: FuelType) -> f64 {
    match fuel {
        FuelType::Petrol => 1.4,
        FuelType::Diesel => 1.35,
    }
}

/// 이론 열효율 [%] = (1 - 1/r^(γ-1))·100, 경유는 추가로 0.9배.
pub fn theoretical_efficiency_pct(fuel: FuelType, compression_ratio: f64) -> f64 {
    let gamma = specific_heat_ratio(fuel);
    let eta = (1.0 - 1.0 / compression_ratio.powf(gamma - 1.0)) * 100.0;
    match fuel {
        FuelType::Petrol => eta,
        FuelType::Diesel => eta * DIESEL_DERATING,
    }
}

/// 손실을 반영한 실사용 열효율 [%].
pub fn practical_efficiency_pct(fuel: FuelType, compression_ratio: f64) -> f64 {
    theoretical_efficiency_pct(fuel, compression_ratio) * PRACTICAL_FACTOR
}

/// 압축비-열효율 곡선 묶음.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyCurve {
    pub theoretical: Vec<CurvePoint>,
    pub practical: Vec<CurvePoint>,
    /// (입력 압축비, 계산된 제동 열효율)
    pub current: CurvePoint,
}

/// 압축비 6~20 구간의 이론/실사용 열효율 곡선을 만든다.
pub fn efficiency_curve(
    fuel: FuelType,
    compression_ratio: f64,
    brake_thermal_efficiency_pct: f64,
) -> EfficiencyCurve {
    let (lo, hi) = COMPRESSION_RATIO_DOMAIN;
    let ratios = linspace(lo, hi, CURVE_SAMPLES);
    let theoretical: Vec<CurvePoint> = ratios
        .iter()
        .map(|&r| CurvePoint::new(r, theoretical_efficiency_pct(fuel, r)))
        .collect();
    let practical = theoretical
        .iter()
        .map(|p| CurvePoint::new(p.x, p.y * PRACTICAL_FACTOR))
        .collect();
    EfficiencyCurve {
        theoretical,
        practical,
        current: CurvePoint::new(compression_ratio, brake_thermal_efficiency_pct),
    }
}

/// 단순화한 토크 곡선 [N·m]. 3000rpm까지 선형 증가, 이후 지수 감쇠.
pub fn synthetic_torque_nm(peak_torque_nm: f64, rpm: f64) -> f64 {
    if rpm <= PEAK_TORQUE_RPM {
        peak_torque_nm * (rpm / PEAK_TORQUE_RPM)
    } else {
        peak_torque_nm * (-TORQUE_DECAY_PER_RPM * (rpm - PEAK_TORQUE_RPM)).exp()
    }
}

/// 회전수-토크/동력 곡선 묶음.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCurve {
    pub torque: Vec<CurvePoint>,
    pub power: Vec<CurvePoint>,
    /// (입력 회전수, 계산된 제동 동력)
    pub current: CurvePoint,
}

impl PowerCurve {
    /// 샘플링된 동력 곡선에서 최대 동력 점. 곡선이 비어 있으면 None.
    pub fn peak_power(&self) -> Option<CurvePoint> {
        self.power
            .iter()
            .copied()
            .max_by(|a, b| a.y.total_cmp(&b.y))
    }
}

/// 1000~6000rpm 구간의 토크/동력 곡선을 만든다.
pub fn power_curve(peak_torque_nm: f64, rpm: f64, brake_power_kw_actual: f64) -> PowerCurve {
    let (lo, hi) = RPM_DOMAIN;
    let speeds = linspace(lo, hi, CURVE_SAMPLES);
    let torque: Vec<CurvePoint> = speeds
        .iter()
        .map(|&r| CurvePoint::new(r, synthetic_torque_nm(peak_torque_nm, r)))
        .collect();
    let power = torque
        .iter()
        .map(|t| CurvePoint::new(t.x, brake_power_kw(t.x, t.y)))
        .collect();
    PowerCurve {
        torque,
        power,
        current: CurvePoint::new(rpm, brake_power_kw_actual),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let xs = linspace(6.0, 20.0, 50);
        assert_eq!(xs.len(), 50);
        assert_eq!(xs[0], 6.0);
        assert_eq!(xs[49], 20.0);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }
}
