//! Common utilities for HTTP handlers

/// Bytes to mebibytes, rounded to two decimals for display.
///
/// Aggregates must sum raw byte counts first and round the final figure;
/// rounding per-file and then summing accumulates error.
pub fn size_mb(bytes: u64) -> f64 {
    let mb = bytes as f64 / (1024.0 * 1024.0);
    (mb * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(size_mb(0), 0.0);
        assert_eq!(size_mb(1_048_576), 1.0);
        assert_eq!(size_mb(1_572_864), 1.5);
        assert_eq!(size_mb(157_286), 0.15);
        assert_eq!(size_mb(10_485), 0.01);
    }

    #[test]
    fn summing_raw_bytes_beats_summing_rounded_figures() {
        //* Given
        // Three files just above the half-a-hundredth boundary each.
        let sizes = [5_243u64, 5_243, 5_243];

        //* When
        let sum_then_round = size_mb(sizes.iter().sum());
        let round_then_sum: f64 = sizes.iter().map(|s| size_mb(*s)).sum();

        //* Then
        assert_eq!(sum_then_round, 0.02);
        // Rounding each file first would have reported 0.03.
        assert_eq!((round_then_sum * 100.0).round() / 100.0, 0.03);
    }
}
