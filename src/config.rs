use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::engine::EngineInputs;
use crate::units::*;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// kW, cc, bar, N·m. 내부 계산 기본값.
    Metric,
    /// hp, in³, psi, lb·ft
    Imperial,
}

/// 결과 표시용 단위. 계산 자체는 항상 SI 기준으로 수행한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub power: PowerUnit,
    pub displacement: VolumeUnit,
    pub pressure: PressureUnit,
    pub torque: TorqueUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self::preset(UnitSystem::Metric)
    }
}

impl DisplayUnits {
    /// 프리셋에 해당하는 표시 단위 묶음.
    pub fn preset(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self {
                power: PowerUnit::Kilowatt,
                displacement: VolumeUnit::CubicCentimeter,
                pressure: PressureUnit::Bar,
                torque: TorqueUnit::NewtonMeter,
            },
            UnitSystem::Imperial => Self {
                power: PowerUnit::Horsepower,
                displacement: VolumeUnit::CubicInch,
                pressure: PressureUnit::Psi,
                torque: TorqueUnit::PoundFoot,
            },
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en-us)
    pub language: String,
    /// 외부 언어팩(TOML) 디렉터리
    pub language_pack_dir: Option<String>,
    pub unit_system: UnitSystem,
    pub display_units: DisplayUnits,
    /// 마지막으로 사용한 입력값. 프로그램 시작 시 입력 화면 초기값으로 쓴다.
    pub inputs: EngineInputs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            unit_system: UnitSystem::Metric,
            display_units: DisplayUnits::default(),
            inputs: EngineInputs::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "설정 파일을 불러왔습니다");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::debug!(path = %path.display(), "기본 설정 파일을 생성했습니다");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "설정을 저장했습니다");
        Ok(())
    }

    /// 프리셋을 바꾸고 표시 단위를 프리셋 값으로 맞춘다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.display_units = DisplayUnits::preset(system);
    }
}
