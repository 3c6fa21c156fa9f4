use crate::summary::ExecutionDurationStats;

impl ExecutionDurationStats {
    /// Summarizes a set of durations; every field is 0 for an empty set.
    pub fn from_durations(durations: &[f64]) -> Self {
        if durations.is_empty() {
            return Self::default();
        }

        let min = durations.iter().copied().fold(f64::INFINITY, f64::min);
        let max = durations.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            min,
            max,
            avg: mean(durations),
            std: population_std_dev(durations),
            med: median(durations),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation dividing by N, not N - 1.
#[allow(clippy::cast_precision_loss)]
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let avg = mean(values);
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - avg;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}

/// Median over a sorted copy; `values` keeps its order.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_empty_durations_yield_zeroes() {
        assert_eq!(
            ExecutionDurationStats::from_durations(&[]),
            ExecutionDurationStats::default()
        );
    }

    #[test]
    fn test_two_durations() {
        let stats = ExecutionDurationStats::from_durations(&[20.0, 40.0]);

        assert_eq!(stats.min, 20.0);
        assert_eq!(stats.max, 40.0);
        assert_eq!(stats.avg, 30.0);
        assert_eq!(stats.std, 10.0);
        assert_eq!(stats.med, 30.0);
    }

    #[test]
    fn test_single_duration() {
        let stats = ExecutionDurationStats::from_durations(&[20.0]);

        assert_eq!(stats.min, 20.0);
        assert_eq!(stats.max, 20.0);
        assert_eq!(stats.avg, 20.0);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.med, 20.0);
    }

    #[test]
    fn test_unsorted_durations() {
        let durations = [
            9.0, 2.0, 5.0, 4.0, 12.0, 7.0, 8.0, 11.0, 9.0, 3.0, 7.0, 4.0, 12.0, 5.0, 4.0, 10.0, 9.0,
            6.0, 9.0, 4.0,
        ];
        let stats = ExecutionDurationStats::from_durations(&durations);

        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 12.0);
        assert!((stats.avg - 7.0).abs() < EPSILON);
        assert!((stats.std - 2.983_286_778).abs() < 1e-6);
        assert_eq!(stats.med, 7.0);
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[30.0, 10.0, 20.0]), 20.0);
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(median(&[40.0, 10.0, 30.0, 20.0]), 25.0);
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let values = vec![3.0, 1.0, 2.0];
        let _ = median(&values);
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_population_std_dev_divides_by_count() {
        // Sample std of [2, 4] would be sqrt(2)
        assert!((population_std_dev(&[2.0, 4.0]) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_durations_are_valid() {
        let stats = ExecutionDurationStats::from_durations(&[0.0, 0.0]);
        assert_eq!(stats, ExecutionDurationStats::default());
    }
}
