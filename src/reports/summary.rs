//! Budget summary derivation
//!
//! The central calculation behind the dashboard, budget, and reports views.

use crate::models::{BudgetSummary, Money, MonthlyBudget};

/// Compute the summary figures for one monthly budget.
///
/// Pure and deterministic: the same budget value always yields the same
/// summary, and the input is never mutated. An empty budget produces a valid
/// zero summary, and a negative `available_amount` is a deficit, not an
/// error.
///
/// The derivation:
/// - `tithe_amount` and `savings_amount` are percentages of total income
/// - income minus both deductions gives the spendable budget
/// - what remains after expenses is `available_amount`
/// - `budget_balance` mirrors `available_amount`; consumers read either name
pub fn calculate_summary(budget: &MonthlyBudget) -> BudgetSummary {
    let total_income: Money = budget.incomes.iter().map(|item| item.amount).sum();
    let total_expenses: Money = budget.expenses.iter().map(|item| item.amount).sum();

    let tithe_amount = total_income.percent(budget.tithe_percentage);
    let savings_amount = total_income.percent(budget.savings_percentage);

    let after_deductions = total_income - tithe_amount - savings_amount;
    let available_amount = after_deductions - total_expenses;

    BudgetSummary {
        total_income,
        total_expenses,
        tithe_amount,
        savings_amount,
        available_amount,
        budget_balance: available_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contributor, ExpenseCategory, ExpenseItem, ExpenseType, IncomeItem};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn income(amount: i64) -> IncomeItem {
        IncomeItem::new(
            "Salary",
            Money::from_major(amount),
            Contributor::Alex,
            "Alex salary",
            date(15),
        )
    }

    fn expense(amount: i64) -> ExpenseItem {
        ExpenseItem::new(
            "Rent",
            Money::from_major(amount),
            ExpenseCategory::Housing,
            "Rent",
            ExpenseType::Essential,
            date(2),
            Contributor::Shared,
        )
    }

    #[test]
    fn test_single_income_and_expense() {
        // One income of 1,000,000 at 10% tithe and 10% savings, one expense
        // of 200,000: available = 1,000,000 - 100,000 - 100,000 - 200,000.
        let mut budget = MonthlyBudget::empty(1, 2024).unwrap();
        budget.incomes.push(income(1_000_000));
        budget.expenses.push(expense(200_000));

        let summary = calculate_summary(&budget);
        assert_eq!(summary.total_income, Money::from_major(1_000_000));
        assert_eq!(summary.tithe_amount, Money::from_major(100_000));
        assert_eq!(summary.savings_amount, Money::from_major(100_000));
        assert_eq!(summary.total_expenses, Money::from_major(200_000));
        assert_eq!(summary.available_amount, Money::from_major(600_000));
    }

    #[test]
    fn test_deficit_is_valid() {
        let mut budget = MonthlyBudget::empty(1, 2024).unwrap();
        budget.expenses.push(expense(50_000));

        let summary = calculate_summary(&budget);
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.tithe_amount, Money::zero());
        assert_eq!(summary.savings_amount, Money::zero());
        assert_eq!(summary.available_amount, Money::from_major(-50_000));
    }

    #[test]
    fn test_empty_budget_is_zero_summary() {
        let budget = MonthlyBudget::empty(6, 2024).unwrap();
        let summary = calculate_summary(&budget);
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expenses, Money::zero());
        assert_eq!(summary.available_amount, Money::zero());
        assert_eq!(summary.budget_balance, Money::zero());
    }

    #[test]
    fn test_available_identity() {
        let mut budget = MonthlyBudget::empty(1, 2024).unwrap();
        budget.incomes.push(income(750_000));
        budget.incomes.push(income(250_000));
        budget.expenses.push(expense(120_000));
        budget.expenses.push(expense(80_000));
        budget.tithe_percentage = 7;
        budget.savings_percentage = 15;

        let summary = calculate_summary(&budget);
        assert_eq!(
            summary.available_amount,
            summary.total_income
                - summary.tithe_amount
                - summary.savings_amount
                - summary.total_expenses
        );
    }

    #[test]
    fn test_balance_mirrors_available() {
        let mut budget = MonthlyBudget::empty(1, 2024).unwrap();
        budget.incomes.push(income(300_000));
        budget.expenses.push(expense(500_000));

        let summary = calculate_summary(&budget);
        assert_eq!(summary.budget_balance, summary.available_amount);
    }

    #[test]
    fn test_idempotent() {
        let mut budget = MonthlyBudget::empty(1, 2024).unwrap();
        budget.incomes.push(income(123_456));
        budget.expenses.push(expense(9_876));

        assert_eq!(calculate_summary(&budget), calculate_summary(&budget));
    }
}
