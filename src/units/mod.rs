//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod mass_flow;
pub mod power;
pub mod pressure;
pub mod specific_energy;
pub mod torque;
pub mod volume;

pub use length::{convert_length, LengthUnit};
pub use mass_flow::{convert_mass_flow, MassFlowUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use specific_energy::{convert_specific_energy, SpecificEnergyUnit};
pub use torque::{convert_torque, TorqueUnit};
pub use volume::{convert_volume, VolumeUnit};
