//! Loan rules: period, per-user limit and late fines.

use crate::{Config, ReturnOutcome};
use chrono::{Days, NaiveDate};

/// Rules applied by the store to every checkout and return
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanPolicy {
    pub loan_period_days: u32,
    pub max_loans: usize,
    pub fine_per_day: u64,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for LoanPolicy {
    fn from(config: &Config) -> Self {
        Self {
            loan_period_days: config.loans.period_days,
            max_loans: config.loans.max_per_user,
            fine_per_day: config.loans.fine_per_day,
        }
    }
}

impl LoanPolicy {
    /// Due date for a loan starting on `start`
    pub fn due_date(&self, start: NaiveDate) -> NaiveDate {
        start
            .checked_add_days(Days::new(u64::from(self.loan_period_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Whole days past `due` as of `today`, never negative
    pub fn days_late(&self, due: NaiveDate, today: NaiveDate) -> i64 {
        (today - due).num_days().max(0)
    }

    /// Assess a return made on `today` against the loan's due date
    pub fn assess(&self, due: NaiveDate, today: NaiveDate) -> ReturnOutcome {
        let days = self.days_late(due, today);
        if days > 0 {
            ReturnOutcome::Late {
                days,
                fine: (days as u64).saturating_mul(self.fine_per_day),
            }
        } else {
            ReturnOutcome::OnTime
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_policy() {
        let policy = LoanPolicy::default();
        assert_eq!(policy.loan_period_days, 7);
        assert_eq!(policy.max_loans, 3);
        assert_eq!(policy.fine_per_day, 500);
    }

    #[test]
    fn test_due_date_crosses_month() {
        let policy = LoanPolicy::default();
        assert_eq!(policy.due_date(date(2024, 2, 26)), date(2024, 3, 4));
    }

    #[test]
    fn test_on_time_and_early_returns() {
        let policy = LoanPolicy::default();
        let due = date(2024, 1, 8);
        assert_eq!(policy.assess(due, date(2024, 1, 4)), ReturnOutcome::OnTime);
        assert_eq!(policy.assess(due, due), ReturnOutcome::OnTime);
    }

    #[test]
    fn test_late_return_fine() {
        let policy = LoanPolicy::default();
        let due = date(2024, 1, 8);
        assert_eq!(
            policy.assess(due, date(2024, 1, 11)),
            ReturnOutcome::Late { days: 3, fine: 1500 }
        );
    }

    #[test]
    fn test_policy_from_config() {
        let mut config = Config::default();
        config.loans.period_days = 14;
        config.loans.fine_per_day = 100;

        let policy = LoanPolicy::from(&config);
        assert_eq!(policy.due_date(date(2024, 1, 1)), date(2024, 1, 15));
        assert_eq!(policy.assess(date(2024, 1, 15), date(2024, 1, 17)).fine(), 200);
    }
}
