//! Profile number allocation
//!
//! Numbers freed by deleted profiles are handed out again before the
//! sequence grows, so `[1, 3]` yields 2 rather than 4.

/// Return the smallest positive integer not present in `used`
///
/// `used` does not need to be sorted. Zero never counts as taken since
/// profile numbers start at 1.
pub fn next_profile_number(used: &[u64]) -> u64 {
    let Some(&max) = used.iter().max() else {
        return 1;
    };

    // The range is one wider than the largest number, so it always has a hole.
    // Only `max == u64::MAX` saturates, and then `used` would need u64::MAX
    // distinct entries to leave no hole below it.
    let top = max.saturating_add(1);
    (1..=top)
        .find(|candidate| !used.contains(candidate))
        .unwrap_or(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(next_profile_number(&[]), 1);
    }

    #[test]
    fn test_contiguous_appends() {
        assert_eq!(next_profile_number(&[1, 2, 3]), 4);
    }

    #[test]
    fn test_fills_gap() {
        assert_eq!(next_profile_number(&[1, 3]), 2);
        assert_eq!(next_profile_number(&[1, 2, 4, 5, 7]), 3);
    }

    #[test]
    fn test_fills_leading_gap() {
        assert_eq!(next_profile_number(&[2, 3]), 1);
    }

    #[test]
    fn test_zero_is_not_a_profile_number() {
        assert_eq!(next_profile_number(&[0]), 1);
        assert_eq!(next_profile_number(&[0, 1]), 2);
    }

    #[test]
    fn test_huge_max_still_fills_gap() {
        assert_eq!(next_profile_number(&[1, u64::MAX]), 2);
    }

    #[test]
    fn test_unsorted_input() {
        assert_eq!(next_profile_number(&[3, 1, 2]), 4);
        assert_eq!(next_profile_number(&[4, 1, 2]), 3);
    }

    #[test]
    fn test_matches_minimum_free_number() {
        let sets: [&[u64]; 6] = [&[], &[1], &[2], &[1, 2, 3, 5], &[5, 6, 7], &[1, 1, 2]];
        for used in sets {
            let expected = (1..).find(|n| !used.contains(n)).unwrap();
            assert_eq!(next_profile_number(used), expected, "used = {:?}", used);
        }
    }
}
