use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Samples up to `count` distinct distractors from the pool, never equal to
/// the answer and never repeating. A pool with fewer eligible values yields
/// fewer distractors; the caller accepts the shorter option list.
pub fn pick_distractors<R: Rng>(
    pool: &[String],
    answer: &str,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates: Vec<&String> = Vec::new();

    for value in pool {
        if value == answer {
            continue;
        }
        if seen.insert(value.as_str()) {
            candidates.push(value);
        }
    }

    candidates.shuffle(rng);
    candidates.into_iter().take(count).cloned().collect()
}

/// Correct answer plus three distractors, shuffled independently of the
/// order they were picked in.
pub fn build_options<R: Rng>(answer: &str, pool: &[String], rng: &mut R) -> Vec<String> {
    let mut options = pick_distractors(pool, answer, 3, rng);
    options.push(answer.to_string());
    options.shuffle(rng);
    options
}
