//! Trivia quiz rules: category scoping, difficulty bounds and the random
//! pick of the next unseen question.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::CoreError;
use crate::types::DbId;

/// Category id the quiz front end sends for "all categories".
pub const ALL_CATEGORIES: DbId = 0;

/// Allowed question difficulty.
pub const DIFFICULTY_RANGE: RangeInclusive<i32> = 1..=5;

/// Map the quiz category id onto an optional category filter.
///
/// `0` means no filter; negative ids are rejected.
pub fn category_filter(category_id: DbId) -> Result<Option<DbId>, CoreError> {
    match category_id {
        ALL_CATEGORIES => Ok(None),
        id if id > 0 => Ok(Some(id)),
        id => Err(CoreError::BadRequest(format!(
            "quiz category id must be 0 or positive, got {id}"
        ))),
    }
}

/// Check a difficulty value against [`DIFFICULTY_RANGE`].
pub fn validate_difficulty(difficulty: i32) -> Result<i32, CoreError> {
    if DIFFICULTY_RANGE.contains(&difficulty) {
        Ok(difficulty)
    } else {
        Err(CoreError::Validation(format!(
            "difficulty must be between {} and {}, got {difficulty}",
            DIFFICULTY_RANGE.start(),
            DIFFICULTY_RANGE.end()
        )))
    }
}

/// Pick one candidate uniformly at random, skipping any whose id was already
/// played. Returns `None` once every candidate has been seen.
pub fn pick_next<'a, T, R>(
    candidates: &'a [T],
    previous: &[DbId],
    id_of: impl Fn(&T) -> DbId,
    rng: &mut R,
) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let seen: HashSet<DbId> = previous.iter().copied().collect();
    let unseen: Vec<&T> = candidates
        .iter()
        .filter(|c| !seen.contains(&id_of(c)))
        .collect();
    unseen.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn zero_category_means_all() {
        assert_eq!(category_filter(0).unwrap(), None);
        assert_eq!(category_filter(4).unwrap(), Some(4));
        assert_matches!(category_filter(-1), Err(CoreError::BadRequest(_)));
    }

    #[test]
    fn difficulty_bounds() {
        assert_eq!(validate_difficulty(1).unwrap(), 1);
        assert_eq!(validate_difficulty(5).unwrap(), 5);
        assert_matches!(validate_difficulty(0), Err(CoreError::Validation(_)));
        assert_matches!(validate_difficulty(6), Err(CoreError::Validation(_)));
    }

    #[test]
    fn never_repeats_previous_questions() {
        let ids: Vec<DbId> = (1..=6).collect();
        let previous = [1, 2, 3, 5];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let picked = *pick_next(&ids, &previous, |id| *id, &mut rng).unwrap();
            assert!(picked == 4 || picked == 6, "picked {picked}");
        }
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let ids: Vec<DbId> = vec![10, 11];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_next(&ids, &[10, 11], |id| *id, &mut rng).is_none());
        let empty: Vec<DbId> = Vec::new();
        assert!(pick_next(&empty, &[], |id| *id, &mut rng).is_none());
    }

    #[test]
    fn every_unseen_candidate_is_reachable() {
        let ids: Vec<DbId> = (1..=4).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits = HashSet::new();
        for _ in 0..200 {
            hits.insert(*pick_next(&ids, &[2], |id| *id, &mut rng).unwrap());
        }
        assert_eq!(hits, HashSet::from([1, 3, 4]));
    }
}
