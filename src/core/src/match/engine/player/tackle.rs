use crate::r#match::engine::events::{Card, MatchEvent};
use crate::r#match::engine::player::injury::roll_injury;
use crate::r#match::engine::restarts::award_set_piece;
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::PlayerRef;
use crate::utils::{random_number, was_foul, within_envelope};
use serde::Serialize;

const TACKLER_INJURY_ON_WIN: i32 = 15000;
const HOLDER_INJURY_ON_WIN: i32 = 14000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TackleKind {
    Standing,
    Slide,
}

impl TackleKind {
    /// `(x, y)` for the `random(0, x) < y / 2` foul roll.
    pub fn foul_roll(&self) -> (i32, i32) {
        match self {
            TackleKind::Standing => (10, 18),
            TackleKind::Slide => (11, 20),
        }
    }

    pub fn nudge(&self) -> f32 {
        match self {
            TackleKind::Standing => 1.0,
            TackleKind::Slide => 3.0,
        }
    }

    /// Per-axis distance at which the holder can be reached.
    pub fn reach(&self) -> f32 {
        match self {
            TackleKind::Standing => 2.0,
            TackleKind::Slide => 4.0,
        }
    }

    /// Foul intensity above which a yellow / red card is shown.
    pub fn card_thresholds(&self) -> (i32, i32) {
        match self {
            TackleKind::Standing => (80, 97),
            TackleKind::Slide => (65, 90),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TackleOutcome {
    /// Nobody on the other team holds the ball.
    NoTarget,
    Foul { card: Option<Card> },
    Won,
    Lost,
}

/// Whether the opposing carrier stands within reach of `tackler`.
pub fn can_reach_holder(state: &MatchState, tackler: PlayerRef, kind: TackleKind) -> bool {
    match state.ball.carrier() {
        Some(holder) if holder.side != tackler.side => within_envelope(
            &(state.player(holder).current - state.player(tackler).current),
            kind.reach(),
            kind.reach(),
        ),
        _ => false,
    }
}

/// Resolves a tackle on the current carrier. The foul is rolled first; without
/// a foul, tackling skill is compared against the holder's retention.
pub fn resolve_tackle(
    state: &mut MatchState,
    tackler: PlayerRef,
    kind: TackleKind,
) -> TackleOutcome {
    let holder = match state.ball.carrier() {
        Some(holder) if holder.side != tackler.side => holder,
        _ => return TackleOutcome::NoTarget,
    };

    state.player_mut(tackler).statistics.tackles.total += 1;
    state.note(format!(
        "{} {} tackles {}",
        state.describe(tackler),
        match kind {
            TackleKind::Standing => "standing",
            TackleKind::Slide => "slide",
        },
        state.describe(holder)
    ));

    let (x, y) = kind.foul_roll();
    if was_foul(&mut state.rng, x, y) {
        let card = commit_foul(state, tackler, holder, kind);
        return TackleOutcome::Foul { card };
    }

    let attacker = state.player(tackler);
    let defender = state.player(holder);

    let tackle_base = (attacker.skills.tackling + attacker.skills.strength) as f32 / 2.0;
    let retention_base = (defender.skills.agility + defender.skills.strength) as f32 / 2.0;

    let tackle_score = tackle_base + random_number(&mut state.rng, -5, 5) as f32;
    let retention_score = retention_base + random_number(&mut state.rng, -5, 5) as f32;

    let won = tackle_score > retention_score;
    let axis = state.attack_sign(tackler.side) * kind.nudge();

    let (tackler_shift, holder_shift) = if won { (axis, -axis) } else { (-axis, axis) };
    nudge(state, tackler, tackler_shift);
    nudge(state, holder, holder_shift);

    if won {
        let position = state.player(tackler).current;
        state.ball.give_to(tackler, position);
        state.player_mut(tackler).statistics.tackles.won += 1;
    } else {
        let position = state.player(holder).current;
        state.ball.place(position);
        state.player_mut(tackler).statistics.tackles.lost += 1;
    }

    let event = MatchEvent::Tackle {
        side: tackler.side,
        player: state.player(tackler).id,
        won,
    };
    let line = format!(
        "{} {} the tackle",
        state.describe(tackler),
        if won { "wins" } else { "loses" }
    );
    state.record(event, line);

    let (tackler_threshold, holder_threshold) = if won {
        (TACKLER_INJURY_ON_WIN, HOLDER_INJURY_ON_WIN)
    } else {
        (HOLDER_INJURY_ON_WIN, TACKLER_INJURY_ON_WIN)
    };

    roll_injury(state, tackler, tackler_threshold);
    roll_injury(state, holder, holder_threshold);

    if won { TackleOutcome::Won } else { TackleOutcome::Lost }
}

fn nudge(state: &mut MatchState, player: PlayerRef, shift: f32) {
    let current = state.player(player).current;
    let moved = state.pitch.clamp(current + nalgebra::Vector2::new(0.0, shift));

    state.player_mut(player).current = moved;
}

/// Books the foul, rolls a card and hands the fouled side its set piece.
fn commit_foul(
    state: &mut MatchState,
    tackler: PlayerRef,
    holder: PlayerRef,
    kind: TackleKind,
) -> Option<Card> {
    state.teams.get_mut(tackler.side).statistics.fouls += 1;
    state.player_mut(tackler).statistics.tackles.fouls += 1;

    let event = MatchEvent::Foul {
        side: tackler.side,
        player: state.player(tackler).id,
    };
    let line = format!(
        "Foul by {} on {}",
        state.describe(tackler),
        state.describe(holder)
    );
    state.record(event, line);

    let intensity = random_number(&mut state.rng, 1, 99);
    let (yellow, red) = kind.card_thresholds();

    let card = if intensity > red {
        Some(Card::Red)
    } else if intensity > yellow {
        Some(Card::Yellow)
    } else {
        None
    };

    let shown = card.map(|card| {
        let shown = state.player_mut(tackler).cards.book(card);

        let event = MatchEvent::Card {
            side: tackler.side,
            player: state.player(tackler).id,
            card: shown,
        };
        let line = format!("{:?} card for {}", shown, state.describe(tackler));
        state.record(event, line);

        shown
    });

    let spot = state.player(holder).current;
    award_set_piece(state, holder.side, spot);

    shown
}
