use thiserror::Error;

/// Errors returned by the mean calculator.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum MeanError {
    #[error("count must be positive")]
    DivisionByZero,

    #[error("count {count} exceeds sequence length {len}")]
    IndexOutOfRange { count: usize, len: usize },

    #[error("sum of elements overflows the accumulator")]
    Overflow,
}

/// Intermediate values of a single mean computation.
#[derive(Debug, PartialEq)]
pub struct MeanReport {
    pub count: usize,
    pub sum: i64,
    pub mean: f64,
}

/// Compute the arithmetic mean of the first `count` elements of `seq`.
///
/// The sum is accumulated as an integer and converted to `f64` before
/// dividing, so the result is never truncated.
///
/// # Errors
/// Returns [`MeanError::DivisionByZero`] if `count` is zero,
/// [`MeanError::IndexOutOfRange`] if `count` exceeds `seq.len()`,
/// and [`MeanError::Overflow`] if the sum does not fit in an `i64`.
pub fn average(seq: &[i32], count: usize) -> Result<f64, MeanError> {
    summarize(seq, count).map(|report| report.mean)
}

/// Same as [`average`], but also returns the count and integer sum.
pub fn summarize(seq: &[i32], count: usize) -> Result<MeanReport, MeanError> {
    if count == 0 {
        return Err(MeanError::DivisionByZero);
    }
    let len = seq.len();
    if count > len {
        return Err(MeanError::IndexOutOfRange { count, len });
    }

    let sum = seq[..count]
        .iter()
        .try_fold(0i64, |acc, &val| acc.checked_add(i64::from(val)))
        .ok_or(MeanError::Overflow)?;

    Ok(MeanReport {
        count,
        sum,
        mean: sum as f64 / count as f64,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn small_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<i32>> {
        proptest::collection::vec(-1_000_000_i32..1_000_000, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn single_element_is_its_own_mean(val in any::<i32>()) {
            prop_assert_eq!(average(&[val], 1), Ok(val as f64));
        }

        #[test]
        fn constant_sequence_mean_is_constant(
            val in any::<i32>(),
            len in 1_usize..100,
            count_frac in 0.0_f64..1.0,
        ) {
            let seq = vec![val; len];
            let count = 1 + (count_frac * (len - 1) as f64) as usize;
            prop_assert_eq!(average(&seq, count), Ok(val as f64));
        }

        #[test]
        fn mean_scales_linearly(seq in small_vec(1, 100), k in -100_i32..100) {
            let scaled: Vec<i32> = seq.iter().map(|&val| val * k).collect();
            let mean = average(&seq, seq.len()).unwrap();
            let scaled_mean = average(&scaled, scaled.len()).unwrap();
            let tol = 1e-9 * (1.0 + scaled_mean.abs());
            prop_assert!(
                (scaled_mean - k as f64 * mean).abs() <= tol,
                "scaled mean {} differs from {} * {}",
                scaled_mean,
                k,
                mean
            );
        }

        #[test]
        fn mean_is_bounded_by_extremes(seq in small_vec(1, 100)) {
            let mean = average(&seq, seq.len()).unwrap();
            let min = *seq.iter().min().unwrap() as f64;
            let max = *seq.iter().max().unwrap() as f64;
            prop_assert!(min <= mean && mean <= max);
        }

        #[test]
        fn count_past_end_is_rejected(seq in small_vec(0, 50), extra in 1_usize..10) {
            let count = seq.len() + extra;
            prop_assert_eq!(
                average(&seq, count),
                Err(MeanError::IndexOutOfRange { count, len: seq.len() })
            );
        }
    }
}
