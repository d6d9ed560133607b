//! Uniform draw sources.
//!
//! Everything that makes a random choice (persona addins, canned replies, dice)
//! takes a `DrawSource` instead of calling an ambient RNG, so tests can script
//! the sequence.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws in `[0, 1)`, shareable across event tasks.
pub trait DrawSource: Send + Sync {
    fn draw(&self) -> f64;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngDraws;

impl DrawSource for ThreadRngDraws {
    fn draw(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible source seeded from a `u64`.
pub struct SeededDraws {
    rng: Mutex<StdRng>,
}

impl SeededDraws {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl DrawSource for SeededDraws {
    fn draw(&self) -> f64 {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, wrapping around when exhausted.
pub struct ScriptedDraws {
    values: Vec<f64>,
    next: AtomicUsize,
}

impl ScriptedDraws {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: AtomicUsize::new(0),
        }
    }

    /// Number of draws taken so far.
    pub fn taken(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.values[i % self.values.len()]
    }
}

/// Pick one entry uniformly. `None` only for an empty list.
pub fn pick<'a, T>(options: &'a [T], draws: &dyn DrawSource) -> Option<&'a T> {
    if options.is_empty() {
        return None;
    }
    let idx = (draws.draw() * options.len() as f64) as usize;
    options.get(idx.min(options.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_draws_wrap_around() {
        let draws = ScriptedDraws::new(vec![0.1, 0.9]);
        assert_eq!(draws.draw(), 0.1);
        assert_eq!(draws.draw(), 0.9);
        assert_eq!(draws.draw(), 0.1);
        assert_eq!(draws.taken(), 3);
    }

    #[test]
    fn pick_maps_draw_onto_index() {
        let options = ["a", "b", "c", "d"];
        assert_eq!(pick(&options, &ScriptedDraws::new(vec![0.0])), Some(&"a"));
        assert_eq!(pick(&options, &ScriptedDraws::new(vec![0.5])), Some(&"c"));
        assert_eq!(pick(&options, &ScriptedDraws::new(vec![0.999])), Some(&"d"));
    }

    #[test]
    fn pick_from_empty_is_none() {
        let options: [&str; 0] = [];
        assert!(pick(&options, &ThreadRngDraws).is_none());
    }

    #[test]
    fn seeded_draws_are_reproducible_and_in_range() {
        let a = SeededDraws::new(7);
        let b = SeededDraws::new(7);
        for _ in 0..100 {
            let x = a.draw();
            assert_eq!(x, b.draw());
            assert!((0.0..1.0).contains(&x));
        }
    }
}
