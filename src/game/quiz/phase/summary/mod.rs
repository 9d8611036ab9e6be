
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SummaryStats {
    pub correct_count: usize,
    pub total: usize,
    pub percent: usize,
    pub skipped_count: usize,
}

impl SummaryStats {
    pub fn new(correct_count: usize, total: usize, skipped_count: usize) -> Self {
        // Rounds half up
        let percent = if total > 0 {
            (200 * correct_count + total) / (2 * total)
        } else {
            0
        };
        SummaryStats {
            correct_count,
            total,
            percent,
            skipped_count,
        }
    }
}
