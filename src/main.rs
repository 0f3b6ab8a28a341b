use color_eyre::eyre::WrapErr;
use env_logger::Env;
use log::info;
use matchday_core::utils::TimeEstimation;
use matchday_core::{
    DEFAULT_TICKS_PER_HALF, EngineConfig, FootballEngine, PitchDescriptor, PlayerDescriptor,
    PlayerSkills, TeamDescriptor,
};
use std::env;
use std::str::FromStr;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let is_replay = env::var("MODE") == Ok(String::from("REPLAY"));

    let config = EngineConfig {
        seed: env_number("SEED")?,
        ticks_per_half: env_number("TICKS_PER_HALF")?.unwrap_or(DEFAULT_TICKS_PER_HALF),
        record_positions: is_replay,
    };

    let pitch = PitchDescriptor::default();
    let home = demo_team(1, "Northside", 1, "4-4-2");
    let away = demo_team(2, "Harbour", 101, "4-3-3");

    info!(
        "{} vs {}, seed {:?}, {} ticks per half",
        home.name, away.name, config.seed, config.ticks_per_half
    );

    let (result, estimated) =
        TimeEstimation::estimate(|| FootballEngine::play(&pitch, &home, &away, &config));
    let result = result?;

    info!("match played: {} ms", estimated);

    let (home_goals, away_goals) = result.score();
    info!("{} {} - {} {}", home.name, home_goals, away_goals, away.name);

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn env_number<T>(name: &str) -> color_eyre::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(name)
        .ok()
        .map(|value| value.parse::<T>())
        .transpose()
        .wrap_err_with(|| format!("{} must be a non-negative integer", name))
}

fn demo_team(id: u32, name: &str, first_id: u32, formation: &str) -> TeamDescriptor {
    let positions: [&str; 11] = match formation {
        "4-3-3" => ["GK", "LB", "CB", "CB", "RB", "CM", "CM", "CM", "LW", "ST", "RW"],
        _ => ["GK", "LB", "CB", "CB", "RB", "LM", "CM", "CM", "RM", "ST", "ST"],
    };

    let players = positions
        .iter()
        .enumerate()
        .map(|(slot, position)| {
            let keeper = *position == "GK";
            let attacking = matches!(*position, "ST" | "LW" | "RW");
            let spread = (slot as u32 * 7) % 15;

            PlayerDescriptor {
                id: first_id + slot as u32,
                name: format!("{} #{}", name, slot + 1),
                position: position.to_string(),
                skills: PlayerSkills {
                    passing: 50 + spread,
                    shooting: if attacking { 70 + spread } else { 40 + spread },
                    tackling: if attacking { 40 } else { 55 + spread },
                    saving: if keeper { 75 } else { 10 },
                    agility: 55 + spread,
                    strength: 50 + spread,
                    penalty_taking: if attacking { 75 } else { 45 + spread },
                    jumping: 25 + spread,
                },
                fitness: 100.0,
                injured: false,
            }
        })
        .collect();

    TeamDescriptor {
        id,
        name: name.to_string(),
        formation: formation.to_string(),
        players,
    }
}
