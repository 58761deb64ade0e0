use crate::domain::ports::OrderNumberSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub const ORDER_NUMBER_LIMIT: u32 = 10_000;

pub struct RandomOrderNumbers {
    rng: StdRng,
}

impl RandomOrderNumbers {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl Default for RandomOrderNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderNumberSource for RandomOrderNumbers {
    fn next_order_number(&mut self) -> u32 {
        self.rng.gen_range(0..ORDER_NUMBER_LIMIT)
    }
}

/// Replays a fixed list of numbers, repeating the last one once exhausted.
#[derive(Debug, Clone)]
pub struct FixedOrderNumbers {
    numbers: VecDeque<u32>,
    last: u32,
}

impl FixedOrderNumbers {
    pub fn new<I: IntoIterator<Item = u32>>(numbers: I) -> Self {
        let numbers: VecDeque<u32> = numbers
            .into_iter()
            .map(|n| n % ORDER_NUMBER_LIMIT)
            .collect();
        let last = numbers.front().copied().unwrap_or(0);
        Self { numbers, last }
    }
}

impl OrderNumberSource for FixedOrderNumbers {
    fn next_order_number(&mut self) -> u32 {
        if let Some(next) = self.numbers.pop_front() {
            self.last = next;
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_numbers_stay_in_range() {
        let mut source = RandomOrderNumbers::new();
        for _ in 0..1_000 {
            assert!(source.next_order_number() < ORDER_NUMBER_LIMIT);
        }
    }

    #[test]
    fn test_seeded_sources_are_reproducible() {
        let mut first = RandomOrderNumbers::seeded(42);
        let mut second = RandomOrderNumbers::from_seed(Some(42));
        let a: Vec<u32> = (0..5).map(|_| first.next_order_number()).collect();
        let b: Vec<u32> = (0..5).map(|_| second.next_order_number()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_numbers_replay_then_repeat_last() {
        let mut source = FixedOrderNumbers::new([7, 12_345]);
        assert_eq!(source.next_order_number(), 7);
        assert_eq!(source.next_order_number(), 2_345);
        assert_eq!(source.next_order_number(), 2_345);
    }
}
