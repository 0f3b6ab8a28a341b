use crate::r#match::engine::actions::{ACTION_SLOTS, Action, ActionWeights};
use crate::utils::random_number;
use rand::Rng;

/// Replicates each action by its weight and draws one entry uniformly, so
/// `P(a) = weight(a) / sum(weights)`. An empty pool yields `Wait`.
pub fn select_action<R: Rng + ?Sized>(rng: &mut R, weights: &ActionWeights) -> Action {
    let pool: Vec<Action> = ACTION_SLOTS
        .iter()
        .zip(weights.iter())
        .flat_map(|(action, weight)| std::iter::repeat_n(*action, *weight as usize))
        .collect();

    if pool.is_empty() {
        return Action::Wait;
    }

    let index = random_number(rng, 0, pool.len() as i32 - 1) as usize;

    pool[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_single_weight_always_wins() {
        let mut rng = StdRng::seed_from_u64(10);

        for (slot, expected) in ACTION_SLOTS.iter().enumerate() {
            let mut weights = [0; 11];
            weights[slot] = 7;

            for _ in 0..50 {
                assert_eq!(select_action(&mut rng, &weights), *expected);
            }
        }
    }

    #[test]
    fn test_all_zero_weights_wait() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            assert_eq!(select_action(&mut rng, &[0; 11]), Action::Wait);
        }
    }

    #[test]
    fn test_draw_follows_relative_weights() {
        let mut rng = StdRng::seed_from_u64(12);
        let weights = [0, 0, 20, 80, 0, 0, 0, 0, 0, 0, 0];
        let mut counts: HashMap<Action, u32> = HashMap::new();

        for _ in 0..10_000 {
            *counts.entry(select_action(&mut rng, &weights)).or_default() += 1;
        }

        let cross = counts.get(&Action::Cross).copied().unwrap_or(0);
        let pass = counts.get(&Action::Pass).copied().unwrap_or(0);

        assert_eq!(cross + pass, 10_000);
        assert!((7_500..8_500).contains(&cross), "cross drawn {} times", cross);
    }
}
