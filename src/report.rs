//! 계산 결과를 카드/텍스트 보고서/CSV로 정리한다.
//!
//! CLI와 GUI가 같은 문자열과 순서를 쓰도록 표시 로직을 여기에 모아둔다.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::config::DisplayUnits;
use crate::engine::curves::{practical_efficiency_pct, theoretical_efficiency_pct};
use crate::engine::{
    Analysis, EfficiencyCurve, EngineInputs, FuelType, PerformanceResult, PowerCurve,
};
use crate::units::power::from_kilowatt;
use crate::units::pressure::from_bar;
use crate::units::volume::{convert_volume, VolumeUnit};
use crate::units::{convert_torque, TorqueUnit};

/// 보고서 작성 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] io::Error),
}

/// 결과 카드 한 장.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    /// 번역 키
    pub key: &'static str,
    /// 기본(영문) 제목
    pub title: &'static str,
    /// 표시 단위로 환산된 값
    pub value: f64,
    pub unit: &'static str,
    /// 0..3 열 위치
    pub column: usize,
}

impl ResultCard {
    /// 소수 둘째 자리까지 표시한다.
    pub fn formatted_value(&self) -> String {
        format!("{:.2} {}", self.value, self.unit)
    }
}

/// 결과 카드 9장을 3열 배치 순서(열 우선)로 만든다.
pub fn result_cards(result: &PerformanceResult, units: &DisplayUnits) -> Vec<ResultCard> {
    let power = |kw: f64| from_kilowatt(kw, units.power);
    let card = |key, title, value, unit, column| ResultCard {
        key,
        title,
        value,
        unit,
        column,
    };
    vec![
        card(
            "card.swept_volume",
            "Swept Volume",
            convert_volume(
                result.swept_volume_cc,
                VolumeUnit::CubicCentimeter,
                units.displacement,
            ),
            units.displacement.symbol(),
            0,
        ),
        card(
            "card.brake_power",
            "Brake Power (BP)",
            power(result.brake_power_kw),
            units.power.symbol(),
            0,
        ),
        card(
            "card.brake_thermal_efficiency",
            "Brake Thermal Efficiency",
            result.brake_thermal_efficiency_pct,
            "%",
            0,
        ),
        card(
            "card.indicated_power",
            "Indicated Power (IP)",
            power(result.indicated_power_kw),
            units.power.symbol(),
            1,
        ),
        card(
            "card.friction_power",
            "Friction Power (FP)",
            power(result.friction_power_kw),
            units.power.symbol(),
            1,
        ),
        card("card.bsfc", "BSFC", result.bsfc_g_per_kwh, "g/kWh", 1),
        card(
            "card.mechanical_efficiency",
            "Mechanical Efficiency",
            result.mechanical_efficiency_pct,
            "%",
            2,
        ),
        card(
            "card.torque",
            "Torque",
            convert_torque(result.torque_nm, TorqueUnit::NewtonMeter, units.torque),
            units.torque.symbol(),
            2,
        ),
        card("card.isfc", "ISFC", result.isfc_g_per_kwh, "g/kWh", 2),
    ]
}

/// 하단 계산 설명.
pub const CALCULATION_NOTES: [&str; 3] = [
    "Friction power is calculated as the difference between indicated and brake power",
    "BSFC and ISFC are calculated based on the fuel consumption and their respective power outputs",
    "Charts show theoretical performance curves for analysis",
];

/// 정수부에 천 단위 구분 쉼표를 넣는다. 소수점 이하는 버리지 않고 반올림한다.
pub fn with_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 엔진 구성과 운전 조건 요약.
pub fn engine_information(inputs: &EngineInputs, result: &PerformanceResult) -> String {
    let e = &inputs.engine;
    let f = &inputs.fuel;
    format!(
        "Engine Configuration:\n\
         - Type: {cycle}\n\
         - Cylinders: {cylinders}\n\
         - Bore × Stroke: {bore:.1} × {stroke:.1} mm\n\
         - Displacement: {swept:.0} cc\n\
         - Compression Ratio: {cr:.1}:1\n\
         \n\
         Operating Conditions:\n\
         - RPM: {rpm}\n\
         - Fuel: {fuel}\n\
         - iMEP: {imep:.1} bar\n\
         - Fuel Consumption: {fc:.1} kg/hr\n\
         - Calorific Value: {cv} kJ/kg\n",
        cycle = e.cycle.label(),
        cylinders = e.cylinders,
        bore = e.bore_mm,
        stroke = e.stroke_mm,
        swept = result.swept_volume_cc,
        cr = e.compression_ratio,
        rpm = with_thousands(e.rpm),
        fuel = f.fuel_type.label(),
        imep = result.imep_bar,
        fc = f.fuel_consumption_kg_per_h,
        cv = with_thousands(f.calorific_value_kj_per_kg),
    )
}

/// 입력 압축비에서의 이상 사이클 열효율 요약. 실제 제동 열효율과 나란히 보여준다.
pub fn idealized_efficiency(fuel: FuelType, compression_ratio: f64) -> String {
    format!(
        "theoretical {:.2} % / practical {:.2} % at CR {:.1}",
        theoretical_efficiency_pct(fuel, compression_ratio),
        practical_efficiency_pct(fuel, compression_ratio),
        compression_ratio
    )
}

/// 카드, 엔진 정보, 곡선 요약, 계산 설명을 묶은 텍스트 보고서.
pub fn render_report(inputs: &EngineInputs, analysis: &Analysis, units: &DisplayUnits) -> String {
    let mut s = String::from("=== Performance Results ===\n");
    for card in result_cards(&analysis.result, units) {
        s.push_str(&format!("{:<28} {}\n", card.title, card.formatted_value()));
    }
    s.push_str(&format!(
        "{:<28} {:.2} {}\n\n",
        "iMEP",
        from_bar(analysis.result.imep_bar, units.pressure),
        units.pressure.symbol()
    ));

    s.push_str("=== Engine Information ===\n");
    s.push_str(&engine_information(inputs, &analysis.result));

    s.push_str("\n=== Performance Analysis ===\n");
    let eff = &analysis.efficiency;
    s.push_str(&format!(
        "Current operating point: CR {:.1} → BTE {:.2} %\n",
        eff.current.x, eff.current.y
    ));
    s.push_str(&format!(
        "Ideal cycle: {}\n",
        idealized_efficiency(inputs.fuel.fuel_type, inputs.engine.compression_ratio)
    ));
    if let Some(peak) = analysis.power.peak_power() {
        s.push_str(&format!(
            "Synthetic curve peak power: {:.2} {} @ {} rpm\n",
            from_kilowatt(peak.y, units.power),
            units.power.symbol(),
            with_thousands(peak.x)
        ));
    }

    s.push_str("\nCalculation Notes:\n");
    for note in CALCULATION_NOTES {
        s.push_str(&format!("- {note}\n"));
    }
    s
}

/// 곡선 CSV 헤더.
pub const CSV_HEADER: &str = "compression_ratio,theoretical_efficiency_pct,\
practical_efficiency_pct,rpm,torque_nm,brake_power_kw";

/// 두 차트의 곡선 데이터를 CSV로 내보낸다. 첫 줄은 헤더이다.
pub fn write_curves_csv<P: AsRef<Path>>(
    path: P,
    efficiency: &EfficiencyCurve,
    power: &PowerCurve,
) -> Result<(), ReportError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    write_curves(&mut w, efficiency, power)?;
    w.flush()?;
    Ok(())
}

/// CSV 본문을 임의의 writer에 기록한다.
pub fn write_curves<W: Write>(
    w: &mut W,
    efficiency: &EfficiencyCurve,
    power: &PowerCurve,
) -> io::Result<()> {
    writeln!(w, "{CSV_HEADER}")?;
    let rows = efficiency
        .theoretical
        .len()
        .max(power.torque.len());
    for i in 0..rows {
        let cell = |v: Option<f64>| v.map(|x| format!("{x:.6}")).unwrap_or_default();
        let cols = [
            cell(efficiency.theoretical.get(i).map(|p| p.x)),
            cell(efficiency.theoretical.get(i).map(|p| p.y)),
            cell(efficiency.practical.get(i).map(|p| p.y)),
            cell(power.torque.get(i).map(|p| p.x)),
            cell(power.torque.get(i).map(|p| p.y)),
            cell(power.power.get(i).map(|p| p.y)),
        ];
        writeln!(w, "{}", cols.join(","))?;
    }
    Ok(())
}
