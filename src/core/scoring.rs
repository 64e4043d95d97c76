//! Scoring module - line clear rewards
//!
//! Base reward is 100 points per cleared row. Clearing more than one row in a
//! single lock adds a further 50 points per row, so multi-row clears are
//! rewarded disproportionately while a single clear stays at the base rate:
//! 100 / 250 / 400 / 600 for 1-4 rows.

/// Score awarded for clearing `cleared` rows in one lock.
pub fn line_clear_score(cleared: u32) -> u32 {
    let mut score = cleared * 100;
    if cleared > 1 {
        score += cleared * 50;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 250);
        assert_eq!(line_clear_score(3), 400);
        assert_eq!(line_clear_score(4), 600);
    }
}
