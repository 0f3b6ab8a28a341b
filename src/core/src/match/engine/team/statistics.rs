use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShotStatistics {
    pub total: u32,
    pub on_target: u32,
    pub off_target: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamStatistics {
    pub goals: u32,
    pub shots: ShotStatistics,
    pub corners: u32,
    pub freekicks: u32,
    pub penalties: u32,
    pub fouls: u32,
}
