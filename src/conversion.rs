use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnsupportedQuantity(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `mm`, `cc`, `bar`, `hp`, `lbft`, `kg/h`, `kJ/kg` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
        QuantityKind::Torque => {
            let from = parse_torque_unit(from_unit_str)?;
            let to = parse_torque_unit(to_unit_str)?;
            Ok(convert_torque(value, from, to))
        }
        QuantityKind::MassFlow => {
            let from = parse_mass_flow_unit(from_unit_str)?;
            let to = parse_mass_flow_unit(to_unit_str)?;
            Ok(convert_mass_flow(value, from, to))
        }
        QuantityKind::SpecificEnergy => {
            let from = parse_specific_energy_unit(from_unit_str)?;
            let to = parse_specific_energy_unit(to_unit_str)?;
            Ok(convert_specific_energy(value, from, to))
        }
    }
}

/// 물리량 이름(영문/한글)을 `QuantityKind`로 해석한다.
pub fn parse_quantity(s: &str) -> Result<QuantityKind, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "length" | "길이" => Ok(QuantityKind::Length),
        "volume" | "displacement" | "체적" | "배기량" => Ok(QuantityKind::Volume),
        "pressure" | "압력" => Ok(QuantityKind::Pressure),
        "power" | "동력" | "출력" => Ok(QuantityKind::Power),
        "torque" | "토크" => Ok(QuantityKind::Torque),
        "massflow" | "mass_flow" | "fuel" | "유량" => Ok(QuantityKind::MassFlow),
        "calorific" | "specific_energy" | "발열량" => Ok(QuantityKind::SpecificEnergy),
        other => Err(ConversionError::UnsupportedQuantity(other.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "cc" | "cm3" | "ml" => Ok(VolumeUnit::CubicCentimeter),
        "in3" | "cuin" | "ci" => Ok(VolumeUnit::CubicInch),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "bar" => Ok(PressureUnit::Bar),
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "kg/cm2" | "kgf/cm2" => Ok(PressureUnit::KgPerCm2),
        "psi" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kw" => Ok(PowerUnit::Kilowatt),
        "w" => Ok(PowerUnit::Watt),
        "hp" | "bhp" => Ok(PowerUnit::Horsepower),
        "ps" | "cv" => Ok(PowerUnit::MetricHorsepower),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_torque_unit(s: &str) -> Result<TorqueUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "nm" | "n·m" | "n.m" => Ok(TorqueUnit::NewtonMeter),
        "lbft" | "lb-ft" | "lbf·ft" | "ftlb" => Ok(TorqueUnit::PoundFoot),
        "kgfm" | "kgf·m" | "kgm" => Ok(TorqueUnit::KilogramForceMeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_mass_flow_unit(s: &str) -> Result<MassFlowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg/h" | "kg/hr" => Ok(MassFlowUnit::KilogramPerHour),
        "g/s" => Ok(MassFlowUnit::GramPerSecond),
        "kg/s" => Ok(MassFlowUnit::KilogramPerSecond),
        "lb/h" | "lb/hr" => Ok(MassFlowUnit::PoundPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_specific_energy_unit(s: &str) -> Result<SpecificEnergyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kj/kg" => Ok(SpecificEnergyUnit::KjPerKg),
        "mj/kg" => Ok(SpecificEnergyUnit::MjPerKg),
        "kcal/kg" => Ok(SpecificEnergyUnit::KcalPerKg),
        "btu/lb" | "btu/lbm" => Ok(SpecificEnergyUnit::BtuPerPound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
