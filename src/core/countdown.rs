use crate::domain::model::{ProbeSettings, Settled, Verdict};
use crate::utils::error::{ProbeError, Result};

/// Decrements `start` while it is strictly greater than half of itself.
///
/// `/` truncates toward zero, so any positive start settles at 0 after
/// `start` steps and any non-positive start settles immediately.
pub fn settle(start: i64, max_iterations: u64) -> Result<Settled> {
    let mut n = start;
    let mut iterations: u64 = 0;

    while n > n / 2 {
        if iterations == max_iterations {
            return Err(ProbeError::IterationBudgetExceeded {
                start,
                budget: max_iterations,
            });
        }
        // n > n / 2 implies n > 0, so this never underflows
        n -= 1;
        iterations += 1;
        tracing::trace!(n, iterations, "decremented");
    }

    tracing::debug!(start, final_value = n, iterations, "loop settled");

    Ok(Settled {
        start,
        final_value: n,
        iterations,
    })
}

pub fn judge(settled: Settled, threshold: i64) -> Verdict {
    Verdict {
        start: settled.start,
        threshold,
        final_value: settled.final_value,
        iterations: settled.iterations,
        below_threshold: settled.final_value < threshold,
    }
}

pub fn probe(settings: &ProbeSettings) -> Result<Verdict> {
    let settled = settle(settings.start, settings.max_iterations)?;
    Ok(judge(settled, settings.threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 直接照迴圈語義算出預期值，不寫死答案
    fn reference(start: i64) -> (i64, u64) {
        let mut n = start;
        let mut steps = 0;
        while n > n / 2 {
            n -= 1;
            steps += 1;
        }
        (n, steps)
    }

    #[test]
    fn test_settle_from_default_start() {
        let settled = settle(26, 1_000).unwrap();
        assert_eq!(settled.final_value, 0);
        assert_eq!(settled.iterations, 26);
    }

    #[test]
    fn test_default_settings_print_true() {
        let verdict = probe(&ProbeSettings::default()).unwrap();
        assert!(verdict.below_threshold);
        assert_eq!(verdict.token(), "true");
    }

    #[test]
    fn test_settle_matches_reference_loop() {
        for start in [40, 26, 19, 2, 1, 0, -1, -7, -40] {
            let (expected_final, expected_steps) = reference(start);
            let settled = settle(start, 1_000).unwrap();
            assert_eq!(settled.final_value, expected_final, "start = {}", start);
            assert_eq!(settled.iterations, expected_steps, "start = {}", start);
        }
    }

    #[test]
    fn test_non_positive_start_does_not_loop() {
        for start in [0, -1, -3, i64::MIN] {
            let settled = settle(start, 1).unwrap();
            assert_eq!(settled.final_value, start);
            assert_eq!(settled.iterations, 0);
        }
    }

    #[test]
    fn test_judge_respects_threshold() {
        let settled = settle(-30, 1).unwrap();
        assert!(judge(settled, -29).below_threshold);
        assert!(!judge(settled, -30).below_threshold);
        assert!(!judge(settled, -31).below_threshold);
    }

    #[test]
    fn test_budget_is_enforced() {
        assert!(settle(10, 10).is_ok());
        match settle(10, 5) {
            Err(ProbeError::IterationBudgetExceeded { start, budget }) => {
                assert_eq!(start, 10);
                assert_eq!(budget, 5);
            }
            other => panic!("expected budget error, got {:?}", other),
        }
    }

    #[test]
    fn test_probe_is_idempotent() {
        let settings = ProbeSettings::default();
        assert_eq!(probe(&settings).unwrap(), probe(&settings).unwrap());
    }
}
