/// 단위 변환기에서 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    Volume,
    Pressure,
    Power,
    Torque,
    MassFlow,
    SpecificEnergy,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 7] = [
        QuantityKind::Length,
        QuantityKind::Volume,
        QuantityKind::Pressure,
        QuantityKind::Power,
        QuantityKind::Torque,
        QuantityKind::MassFlow,
        QuantityKind::SpecificEnergy,
    ];

    /// 변환기 화면에 보여줄 단위 예시.
    pub fn unit_hint(&self) -> &'static str {
        match self {
            QuantityKind::Length => "mm, cm, m, in",
            QuantityKind::Volume => "cc, L, m3, in3",
            QuantityKind::Pressure => "bar, Pa, kPa, MPa, kg/cm2, psi",
            QuantityKind::Power => "kW, W, hp, PS",
            QuantityKind::Torque => "Nm, lbft, kgfm",
            QuantityKind::MassFlow => "kg/h, g/s, kg/s, lb/h",
            QuantityKind::SpecificEnergy => "kJ/kg, MJ/kg, kcal/kg, Btu/lb",
        }
    }
}
