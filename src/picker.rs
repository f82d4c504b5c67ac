//! Random selection of the dead cell revived by the periodic rule.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Chooses one id out of a candidate list.
pub trait CellPicker: Send {
    /// Return one of `candidates`, or `None` if the slice is empty.
    fn pick(&mut self, candidates: &[usize]) -> Option<usize>;
}

/// Uniform picker backed by a seedable ChaCha stream.
pub struct SeededPicker {
    rng: ChaCha8Rng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        SeededPicker {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        SeededPicker {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl CellPicker for SeededPicker {
    fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        candidates.choose(&mut self.rng).copied()
    }
}

impl<F> CellPicker for F
where
    F: FnMut(&[usize]) -> Option<usize> + Send,
{
    fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        self(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_candidates() {
        let mut picker = SeededPicker::new(1);
        assert_eq!(picker.pick(&[]), None);
    }

    #[test]
    fn test_pick_is_a_candidate() {
        let mut picker = SeededPicker::from_entropy();
        let candidates = [3, 9, 27];
        for _ in 0..50 {
            let id = picker.pick(&candidates).unwrap();
            assert!(candidates.contains(&id));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let candidates: Vec<usize> = (0..100).collect();
        let mut a = SeededPicker::new(42);
        let mut b = SeededPicker::new(42);
        for _ in 0..20 {
            assert_eq!(a.pick(&candidates), b.pick(&candidates));
        }
    }

    #[test]
    fn test_closure_picker() {
        let mut last = |c: &[usize]| c.last().copied();
        assert_eq!(last.pick(&[1, 2, 3]), Some(3));
    }
}
