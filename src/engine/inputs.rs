//! 엔진 성능 계산 입력값과 입력 범위표.
//!
//! 계산 코어는 범위를 다시 검증하지 않는다. 입력 화면(CLI/GUI)이 `clamped()`나
//! `validate()`로 범위를 맞춘 뒤 코어를 호출한다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 행정 사이클 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleType {
    FourStroke,
    TwoStroke,
}

impl CycleType {
    pub fn label(&self) -> &'static str {
        match self {
            CycleType::FourStroke => "4-Stroke",
            CycleType::TwoStroke => "2-Stroke",
        }
    }
}

/// 연료 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
}

impl FuelType {
    /// 연료별 기본 발열량 [kJ/kg]. 연료를 바꾸면 입력 화면은 이 값으로 되돌린다.
    pub fn default_calorific_value(&self) -> f64 {
        match self {
            FuelType::Petrol => 44_000.0,
            FuelType::Diesel => 42_000.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
        }
    }
}

/// 엔진 형상 및 운전 회전수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSpec {
    /// 보어 [mm]
    pub bore_mm: f64,
    /// 스트로크 [mm]
    pub stroke_mm: f64,
    /// 실린더 수
    pub cylinders: u32,
    pub cycle: CycleType,
    /// 압축비 [-]
    pub compression_ratio: f64,
    /// 회전수 [rpm]
    pub rpm: f64,
}

/// 운전점 입력. 토크는 IMEP와 독립적으로 입력받는 제동 토크이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingPoint {
    /// 도시평균유효압력 [bar]
    pub imep_bar: f64,
    /// 제동 토크 [N·m]
    pub torque_nm: f64,
}

/// 연료 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelSpec {
    pub fuel_type: FuelType,
    /// 저위발열량 [kJ/kg]
    pub calorific_value_kj_per_kg: f64,
    /// 연료 소비량 [kg/h]
    pub fuel_consumption_kg_per_h: f64,
}

/// 입력 필드 하나의 허용 범위와 기본값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl InputRange {
    const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// 범위 밖 값은 가까운 경계로 맞춘다. NaN은 기본값으로 대체한다.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

pub const BORE_MM: InputRange = InputRange::new(10.0, 1000.0, 80.0);
pub const STROKE_MM: InputRange = InputRange::new(10.0, 500.0, 90.0);
pub const CYLINDERS: InputRange = InputRange::new(1.0, 12.0, 4.0);
pub const COMPRESSION_RATIO: InputRange = InputRange::new(6.0, 20.0, 9.5);
pub const RPM: InputRange = InputRange::new(0.0, 8000.0, 3000.0);
pub const IMEP_BAR: InputRange = InputRange::new(1.0, 30.0, 8.0);
pub const TORQUE_NM: InputRange = InputRange::new(10.0, 1000.0, 150.0);
/// 기본값은 휘발유 기준. 경유는 `FuelType::default_calorific_value` 참고.
pub const CALORIFIC_VALUE: InputRange = InputRange::new(30_000.0, 50_000.0, 44_000.0);
pub const FUEL_CONSUMPTION: InputRange = InputRange::new(0.1, 100.0, 5.0);

/// 입력 범위 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} 값 {value}이(가) 허용 범위 [{min}, {max}]를 벗어났습니다")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// 한 번의 계산에 필요한 전체 입력 묶음.
/// 각 부분은 입력 범위표의 기본값으로 채워진다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineInputs {
    pub engine: EngineSpec,
    pub operating: OperatingPoint,
    pub fuel: FuelSpec,
}

impl Default for EngineSpec {
    fn default() -> Self {
        Self {
            bore_mm: BORE_MM.default,
            stroke_mm: STROKE_MM.default,
            cylinders: CYLINDERS.default as u32,
            cycle: CycleType::FourStroke,
            compression_ratio: COMPRESSION_RATIO.default,
            rpm: RPM.default,
        }
    }
}

impl Default for OperatingPoint {
    fn default() -> Self {
        Self {
            imep_bar: IMEP_BAR.default,
            torque_nm: TORQUE_NM.default,
        }
    }
}

impl Default for FuelSpec {
    fn default() -> Self {
        Self {
            fuel_type: FuelType::Petrol,
            calorific_value_kj_per_kg: FuelType::Petrol.default_calorific_value(),
            fuel_consumption_kg_per_h: FUEL_CONSUMPTION.default,
        }
    }
}

impl EngineInputs {
    fn fields(&self) -> [(&'static str, f64, InputRange); 9] {
        [
            ("bore_mm", self.engine.bore_mm, BORE_MM),
            ("stroke_mm", self.engine.stroke_mm, STROKE_MM),
            ("cylinders", f64::from(self.engine.cylinders), CYLINDERS),
            ("compression_ratio", self.engine.compression_ratio, COMPRESSION_RATIO),
            ("rpm", self.engine.rpm, RPM),
            ("imep_bar", self.operating.imep_bar, IMEP_BAR),
            ("torque_nm", self.operating.torque_nm, TORQUE_NM),
            ("calorific_value_kj_per_kg", self.fuel.calorific_value_kj_per_kg, CALORIFIC_VALUE),
            ("fuel_consumption_kg_per_h", self.fuel.fuel_consumption_kg_per_h, FUEL_CONSUMPTION),
        ]
    }

    /// 범위를 벗어난 필드를 모두 모아 반환한다. 비어 있으면 유효한 입력이다.
    pub fn validate(&self) -> Vec<InputError> {
        self.fields()
            .into_iter()
            .filter(|(_, value, range)| !range.contains(*value))
            .map(|(field, value, range)| InputError::OutOfRange {
                field,
                value,
                min: range.min,
                max: range.max,
            })
            .collect()
    }

    /// 모든 필드를 범위표에 맞게 보정한 사본을 돌려준다.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        out.engine.bore_mm = BORE_MM.clamp(self.engine.bore_mm);
        out.engine.stroke_mm = STROKE_MM.clamp(self.engine.stroke_mm);
        out.engine.cylinders = self
            .engine
            .cylinders
            .clamp(CYLINDERS.min as u32, CYLINDERS.max as u32);
        out.engine.compression_ratio = COMPRESSION_RATIO.clamp(self.engine.compression_ratio);
        out.engine.rpm = RPM.clamp(self.engine.rpm);
        out.operating.imep_bar = IMEP_BAR.clamp(self.operating.imep_bar);
        out.operating.torque_nm = TORQUE_NM.clamp(self.operating.torque_nm);
        out.fuel.calorific_value_kj_per_kg =
            CALORIFIC_VALUE.clamp(self.fuel.calorific_value_kj_per_kg);
        out.fuel.fuel_consumption_kg_per_h =
            FUEL_CONSUMPTION.clamp(self.fuel.fuel_consumption_kg_per_h);
        out
    }

    /// 연료 종류를 바꾸고 발열량을 해당 연료 기본값으로 되돌린다.
    pub fn set_fuel_type(&mut self, fuel_type: FuelType) {
        if self.fuel.fuel_type != fuel_type {
            self.fuel.fuel_type = fuel_type;
            self.fuel.calorific_value_kj_per_kg = fuel_type.default_calorific_value();
        }
    }
}
