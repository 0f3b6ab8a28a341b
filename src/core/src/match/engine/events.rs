use crate::r#match::engine::team::TeamSide;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RestartKind {
    KickOff,
    ThrowIn,
    Corner,
    GoalKick,
    FreeKick,
    Penalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Card {
    Yellow,
    Red,
}

/// Something that happened during a tick. Player fields carry player ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MatchEvent {
    Goal {
        side: TeamSide,
        scorer: u32,
        own_goal: bool,
    },
    Shot {
        side: TeamSide,
        player: u32,
    },
    Save {
        side: TeamSide,
        keeper: u32,
    },
    KeeperClaim {
        side: TeamSide,
        keeper: u32,
    },
    Deflection {
        side: TeamSide,
        player: u32,
        remaining_power: f32,
    },
    Tackle {
        side: TeamSide,
        player: u32,
        won: bool,
    },
    Foul {
        side: TeamSide,
        player: u32,
    },
    Card {
        side: TeamSide,
        player: u32,
        card: Card,
    },
    Injury {
        side: TeamSide,
        player: u32,
    },
    Offside {
        side: TeamSide,
        player: u32,
    },
    Restart {
        kind: RestartKind,
        side: TeamSide,
    },
}

/// Per-tick trace. Cleared at the start of every iteration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IterationLog {
    events: Vec<MatchEvent>,
    lines: Vec<String>,
}

impl IterationLog {
    pub fn new() -> Self {
        IterationLog::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.lines.clear();
    }

    pub fn record(&mut self, event: MatchEvent, line: String) {
        debug!("Match event: {:?}", event);

        self.events.push(event);
        self.lines.push(line);
    }

    pub fn note(&mut self, line: String) {
        debug!("{}", line);

        self.lines.push(line);
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.lines.is_empty()
    }
}
