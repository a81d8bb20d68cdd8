use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::engine::{self, DomainError};
use crate::i18n::{self, Translator};
use crate::report::{self, ReportError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 표준 입력이 닫힘 (EOF)
    #[error("입력 스트림이 닫혔습니다")]
    InputClosed,
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 성능 계산 오류
    #[error("성능 계산 오류: {0}")]
    Domain(#[from] DomainError),
    /// 보고서/CSV 저장 오류
    #[error("보고서 오류: {0}")]
    Report(#[from] ReportError),
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 종료 시 입력값과 설정을 저장한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu(tr) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        let outcome = match choice {
            MenuChoice::Geometry => ui_cli::handle_geometry(tr, &mut config.inputs),
            MenuChoice::Specifications => ui_cli::handle_specifications(tr, &mut config.inputs),
            MenuChoice::PowerInput => ui_cli::handle_power_input(tr, &mut config.inputs),
            MenuChoice::Fuel => ui_cli::handle_fuel(tr, &mut config.inputs),
            MenuChoice::Results => ui_cli::show_results(tr, config),
            MenuChoice::Curves => ui_cli::show_curves(tr, config),
            MenuChoice::Export => ui_cli::handle_export(tr, config),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr),
            MenuChoice::Settings => ui_cli::handle_settings(tr, config)
                .and_then(|_| config.save(config_path).map_err(AppError::from)),
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::InputClosed) => {
                config.save(config_path)?;
                break;
            }
            // 계산/변환 오류는 메뉴로 돌아가 다시 입력받는다.
            Err(e @ (AppError::Domain(_) | AppError::Conversion(_) | AppError::Report(_))) => {
                tracing::warn!(error = %e, "메뉴 처리 실패");
                println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// 설정에 저장된 입력으로 한 번 계산해 보고서를 출력한다. `export`가 있으면 곡선 CSV도 저장한다.
pub fn run_once(config: &Config, export: Option<&Path>) -> Result<(), AppError> {
    let inputs = config.inputs.clamped();
    let analysis = engine::analyze(&inputs)?;
    print!(
        "{}",
        report::render_report(&inputs, &analysis, &config.display_units)
    );
    if let Some(path) = export {
        report::write_curves_csv(path, &analysis.efficiency, &analysis.power)?;
        tracing::info!(path = %path.display(), "곡선 CSV를 저장했습니다");
    }
    Ok(())
}
