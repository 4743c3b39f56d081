//! Analysis budget gauge: the upstream claim-extraction pipeline spends
//! metered units (LLM calls, record lookups), and the pipeline consults an
//! injected gauge before running. Deliberately a collaborator interface,
//! never ambient global state, and the scoring core itself never touches
//! it.

use std::sync::Mutex;

/// Reserve-then-record interface for metered analysis work.
pub trait AnalysisBudget: Send + Sync {
    /// Reserve capacity for `units` of work, failing when the budget is
    /// exhausted.
    fn check_and_reserve(&self, units: u32) -> Result<(), BudgetError>;
    /// Record `units` actually spent after the work completes.
    fn record(&self, units: u32);
}

#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    #[error("analysis budget exhausted: {reserved} of {limit} units reserved")]
    Exhausted { reserved: u64, limit: u64 },
}

/// Mutex-guarded counting gauge with a fixed unit limit.
pub struct CountingBudget {
    limit: u64,
    counters: Mutex<Counters>,
}

#[derive(Default)]
struct Counters {
    reserved: u64,
    recorded: u64,
}

impl CountingBudget {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            counters: Mutex::new(Counters::default()),
        }
    }

    /// Units recorded as actually spent so far.
    pub fn spent(&self) -> u64 {
        self.counters.lock().expect("budget mutex poisoned").recorded
    }
}

impl AnalysisBudget for CountingBudget {
    fn check_and_reserve(&self, units: u32) -> Result<(), BudgetError> {
        let mut counters = self.counters.lock().expect("budget mutex poisoned");
        let requested = counters.reserved + u64::from(units);
        if requested > self.limit {
            return Err(BudgetError::Exhausted {
                reserved: counters.reserved,
                limit: self.limit,
            });
        }
        counters.reserved = requested;
        Ok(())
    }

    fn record(&self, units: u32) {
        let mut counters = self.counters.lock().expect("budget mutex poisoned");
        counters.recorded += u64::from(units);
    }
}

/// Gauge that never denies; the default for interactive and test use.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnmeteredBudget;

impl AnalysisBudget for UnmeteredBudget {
    fn check_and_reserve(&self, _units: u32) -> Result<(), BudgetError> {
        Ok(())
    }

    fn record(&self, _units: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_budget_denies_past_the_limit() {
        let budget = CountingBudget::new(2);

        assert!(budget.check_and_reserve(1).is_ok());
        assert!(budget.check_and_reserve(1).is_ok());
        let denied = budget.check_and_reserve(1);
        assert!(matches!(
            denied,
            Err(BudgetError::Exhausted {
                reserved: 2,
                limit: 2
            })
        ));
    }

    #[test]
    fn recorded_spend_is_tracked_separately_from_reservations() {
        let budget = CountingBudget::new(10);
        budget.check_and_reserve(3).expect("within limit");
        budget.record(2);
        assert_eq!(budget.spent(), 2);
    }

    #[test]
    fn unmetered_budget_always_allows() {
        let budget = UnmeteredBudget;
        assert!(budget.check_and_reserve(u32::MAX).is_ok());
    }
}
