//! Month-over-month trend series

use crate::models::{BudgetSummary, MonthlyBudget};

use super::summary::calculate_summary;

/// One month's entry in a trend series
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// "YYYY-MM" period key
    pub period: String,
    pub summary: BudgetSummary,
}

/// Derive a chronological trend series from a set of monthly budgets.
///
/// Budgets are ordered ascending by (year, month) regardless of input
/// order; missing months simply have no entry. The iterator is lazy (each
/// summary is computed when pulled) and `Clone`, so it can be restarted.
pub fn monthly_trend(budgets: &[MonthlyBudget]) -> impl Iterator<Item = TrendPoint> + Clone + '_ {
    let mut ordered: Vec<&MonthlyBudget> = budgets.iter().collect();
    ordered.sort_by_key(|budget| (budget.year, budget.month));

    ordered.into_iter().map(|budget| TrendPoint {
        period: budget.period_key(),
        summary: calculate_summary(budget),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contributor, IncomeItem, Money};
    use chrono::NaiveDate;

    fn budget_with_income(month: u32, year: i32, amount: i64) -> MonthlyBudget {
        let mut budget = MonthlyBudget::empty(month, year).unwrap();
        budget.incomes.push(IncomeItem::new(
            "Salary",
            Money::from_major(amount),
            Contributor::Alex,
            "Alex salary",
            NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
        ));
        budget
    }

    #[test]
    fn test_sorted_ascending_regardless_of_input_order() {
        let budgets = vec![
            budget_with_income(3, 2024, 300),
            budget_with_income(1, 2024, 100),
            budget_with_income(11, 2023, 50),
        ];

        let periods: Vec<String> = monthly_trend(&budgets).map(|p| p.period).collect();
        assert_eq!(periods, vec!["2023-11", "2024-01", "2024-03"]);
    }

    #[test]
    fn test_gap_months_produce_no_entries() {
        // January and March only: exactly two points, January first.
        let budgets = vec![
            budget_with_income(3, 2024, 300),
            budget_with_income(1, 2024, 100),
        ];

        let points: Vec<TrendPoint> = monthly_trend(&budgets).collect();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].period, "2024-01");
        assert_eq!(points[1].period, "2024-03");
        assert_eq!(points[0].summary.total_income, Money::from_major(100));
        assert_eq!(points[1].summary.total_income, Money::from_major(300));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(monthly_trend(&[]).count(), 0);
    }

    #[test]
    fn test_restartable() {
        let budgets = vec![
            budget_with_income(2, 2024, 200),
            budget_with_income(1, 2024, 100),
        ];

        let trend = monthly_trend(&budgets);
        let first_pass: Vec<TrendPoint> = trend.clone().collect();
        let second_pass: Vec<TrendPoint> = trend.collect();
        assert_eq!(first_pass, second_pass);
    }
}
