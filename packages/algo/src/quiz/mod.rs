//! Quiz Generation
//!
//! Builds multiple-choice questions from a snapshot of word pairs.
//!
//! Steps per quiz:
//! - Shuffle the whole pool and take the first `min(size, |pool|)` pairs,
//!   so no two questions share the same correct pair
//! - For each pair, draw distractor translations uniformly from the entire pool
//!   until the option set is full or the attempt bound is hit
//! - Shuffle the options so the correct answer's position carries no signal
//!
//! Randomness always comes from a caller-supplied [`Rng`]; [`QuizGenerator`]
//! bundles a seedable ChaCha8 source for callers that just want a quiz.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::types::{
    QuizQuestion, WordPair, DEFAULT_QUIZ_SIZE, DISTRACTOR_ATTEMPT_LIMIT, OPTIONS_PER_QUESTION,
};

/// Generate up to `size` questions from `pool`.
///
/// Pools with fewer than [`OPTIONS_PER_QUESTION`] distinct translations yield
/// short option lists; that is degenerate input, not an error.
pub fn generate_quiz<R: Rng + ?Sized>(
    pool: &[WordPair],
    size: usize,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    if pool.is_empty() || size == 0 {
        return Vec::new();
    }

    let mut order: Vec<&WordPair> = pool.iter().collect();
    order.shuffle(rng);
    order.truncate(size.min(pool.len()));

    order
        .into_iter()
        .map(|pair| build_question(pair, pool, rng))
        .collect()
}

fn build_question<R: Rng + ?Sized>(
    pair: &WordPair,
    pool: &[WordPair],
    rng: &mut R,
) -> QuizQuestion {
    let mut options = Vec::with_capacity(OPTIONS_PER_QUESTION);
    options.push(pair.translation.clone());

    let mut attempts = 0;
    while options.len() < OPTIONS_PER_QUESTION && attempts < DISTRACTOR_ATTEMPT_LIMIT {
        attempts += 1;
        let Some(candidate) = pool.choose(rng) else {
            break;
        };
        // the correct answer is already in `options`, so this also rejects it
        if !options.contains(&candidate.translation) {
            options.push(candidate.translation.clone());
        }
    }

    options.shuffle(rng);

    QuizQuestion {
        word_id: pair.id.clone(),
        prompt: pair.source.clone(),
        options,
        correct_answer: pair.translation.clone(),
    }
}

// ==================== Generator ====================

/// Quiz generator owning its random source
///
/// Construct one per request with [`QuizGenerator::new`]; tests use
/// [`QuizGenerator::with_seed`] for reproducible output.
#[derive(Debug, Clone)]
pub struct QuizGenerator {
    rng: ChaCha8Rng,
    size: usize,
}

impl QuizGenerator {
    /// Seeded from OS entropy, default quiz size
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            size: DEFAULT_QUIZ_SIZE,
        }
    }

    /// Deterministic generator (for testing)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            size: DEFAULT_QUIZ_SIZE,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Generate a quiz of the configured size
    pub fn generate(&mut self, pool: &[WordPair]) -> Vec<QuizQuestion> {
        generate_quiz(pool, self.size, &mut self.rng)
    }
}

impl Default for QuizGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Unit Tests ====================
