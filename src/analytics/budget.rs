//! Budget planning
//!
//! Derives a proportional budget template from historical spending averages
//! and compares it against actual transactions. Unclassified records land
//! under the uncategorized label here instead of failing: planning over a
//! partially-labelled history is a supported use, unlike the category
//! breakdown where labels are a precondition.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::models::Transaction;

/// Reserved label for the fixed savings allocation
pub const SAVINGS_LABEL: &str = "savings";

/// Fraction of income reserved as savings, added on top of the category
/// allocations rather than carved out of them
pub const SAVINGS_RATE: f64 = 0.10;

/// Share of total spending above which a category draws a recommendation
const RECOMMENDATION_THRESHOLD_PERCENT: f64 = 30.0;

/// Historical spending profile: per-category averages plus flags for
/// categories that dominate the total
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpendingAnalysis {
    /// Arithmetic mean of amounts per category
    pub average_spending: BTreeMap<String, f64>,

    /// One message per category holding at least
    /// [`RECOMMENDATION_THRESHOLD_PERCENT`] of total spending
    pub recommendations: Vec<String>,
}

impl SpendingAnalysis {
    /// Profile a transaction history
    ///
    /// Amounts are pooled per category as they appear, signed. With zero
    /// total spending no share can be computed, so no recommendations are
    /// emitted rather than dividing by zero.
    pub fn from_history(transactions: &[Transaction]) -> Self {
        let mut amounts: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for txn in transactions {
            amounts
                .entry(txn.category_or_default().to_string())
                .or_default()
                .push(txn.amount);
        }

        // every entry holds at least one amount, so the mean is safe
        let average_spending: BTreeMap<String, f64> = amounts
            .iter()
            .map(|(category, values)| {
                (
                    category.clone(),
                    values.iter().sum::<f64>() / values.len() as f64,
                )
            })
            .collect();

        let total_spending: f64 = amounts.values().flatten().sum();

        let mut recommendations = Vec::new();
        if total_spending != 0.0 {
            for (category, values) in &amounts {
                let percent = values.iter().sum::<f64>() / total_spending * 100.0;
                if percent >= RECOMMENDATION_THRESHOLD_PERCENT {
                    recommendations.push(format!(
                        "consider cutting spending in category {category}: {percent:.1}% of the total"
                    ));
                }
            }
        }

        Self {
            average_spending,
            recommendations,
        }
    }
}

/// Proposed allocation per category, derived from historical averages
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BudgetTemplate {
    /// Category label to allocated amount; includes the savings entry
    pub allocations: BTreeMap<String, f64>,
}

impl BudgetTemplate {
    /// Allocate `income` across categories proportionally to their share of
    /// the summed historical averages
    ///
    /// Category allocations sum to `income`; the savings entry is added on
    /// top. An analysis with a zero average total produces only the savings
    /// entry instead of a division error.
    pub fn build(analysis: &SpendingAnalysis, income: f64) -> Self {
        let average_total: f64 = analysis.average_spending.values().sum();

        let mut allocations: BTreeMap<String, f64> = BTreeMap::new();
        if average_total != 0.0 {
            for (category, average) in &analysis.average_spending {
                allocations.insert(category.clone(), income * (average / average_total));
            }
        }
        allocations.insert(SAVINGS_LABEL.to_string(), income * SAVINGS_RATE);

        Self { allocations }
    }

    /// Compare the plan against an actual transaction batch
    ///
    /// Actuals are summed per category, with unclassified records landing
    /// under the uncategorized label. Every planned category gets a row
    /// (`actual` defaults to 0); categories that appear only in the actuals
    /// get a row with a zero plan, so overspending outside the plan stays
    /// visible.
    pub fn compare(
        &self,
        actual_transactions: &[Transaction],
    ) -> BTreeMap<String, BudgetComparison> {
        let mut actual_by_category: BTreeMap<String, f64> = BTreeMap::new();
        for txn in actual_transactions {
            *actual_by_category
                .entry(txn.category_or_default().to_string())
                .or_default() += txn.amount;
        }

        let mut comparison = BTreeMap::new();
        for (category, &planned) in &self.allocations {
            let actual = actual_by_category.get(category).copied().unwrap_or(0.0);
            comparison.insert(category.clone(), BudgetComparison::new(planned, actual));
        }
        for (category, &actual) in &actual_by_category {
            comparison
                .entry(category.clone())
                .or_insert_with(|| BudgetComparison::new(0.0, actual));
        }
        comparison
    }
}

/// Whether an actual stayed within its planned allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// `planned - actual >= 0`
    InBudget,
    /// `planned - actual < 0`
    OverBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InBudget => write!(f, "in budget"),
            Self::OverBudget => write!(f, "over budget"),
        }
    }
}

/// One plan-vs-actual row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetComparison {
    /// Planned allocation
    pub planned: f64,

    /// Summed actual amounts
    pub actual: f64,

    /// `planned - actual`
    pub diff: f64,

    /// Within or over budget
    pub status: BudgetStatus,
}

impl BudgetComparison {
    fn new(planned: f64, actual: f64) -> Self {
        let diff = planned - actual;
        let status = if diff >= 0.0 {
            BudgetStatus::InBudget
        } else {
            BudgetStatus::OverBudget
        };
        Self {
            planned,
            actual,
            diff,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(amount: f64, category: &str) -> Transaction {
        Transaction::with_category("2024-01-15", amount, category, "")
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_from_history_averages() {
        let history = vec![
            txn(100.0, "Еда"),
            txn(300.0, "Еда"),
            txn(500.0, "Транспорт"),
        ];
        let analysis = SpendingAnalysis::from_history(&history);
        assert!(approx(analysis.average_spending["Еда"], 200.0));
        assert!(approx(analysis.average_spending["Транспорт"], 500.0));
    }

    #[test]
    fn test_from_history_defaults_missing_category() {
        let history = vec![Transaction::new("2024-01-15", 150.0, "")];
        let analysis = SpendingAnalysis::from_history(&history);
        assert!(approx(analysis.average_spending["other"], 150.0));
    }

    #[test]
    fn test_from_history_recommendation_threshold() {
        // Еда is 600/1000 = 60% of total, Транспорт 400/1000 = 40%,
        // both over the 30% threshold
        let history = vec![txn(600.0, "Еда"), txn(400.0, "Транспорт")];
        let analysis = SpendingAnalysis::from_history(&history);
        assert_eq!(analysis.recommendations.len(), 2);
        assert!(analysis.recommendations[0].contains("Еда"));
        assert!(analysis.recommendations[0].contains("60.0%"));
    }

    #[test]
    fn test_from_history_below_threshold_no_recommendations() {
        let history = vec![
            txn(250.0, "a"),
            txn(250.0, "b"),
            txn(250.0, "c"),
            txn(250.0, "d"),
        ];
        let analysis = SpendingAnalysis::from_history(&history);
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_from_history_zero_total_spending() {
        let history = vec![txn(500.0, "a"), txn(-500.0, "b")];
        let analysis = SpendingAnalysis::from_history(&history);
        assert!(analysis.recommendations.is_empty());
        assert!(approx(analysis.average_spending["a"], 500.0));
    }

    #[test]
    fn test_from_history_empty() {
        let analysis = SpendingAnalysis::from_history(&[]);
        assert!(analysis.average_spending.is_empty());
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_build_budget_proportional() {
        let mut analysis = SpendingAnalysis::default();
        analysis.average_spending.insert("Food".to_string(), 100.0);
        analysis.average_spending.insert("Rent".to_string(), 200.0);

        let budget = BudgetTemplate::build(&analysis, 3000.0);
        assert!(approx(budget.allocations["Food"], 1000.0));
        assert!(approx(budget.allocations["Rent"], 2000.0));
        assert!(approx(budget.allocations[SAVINGS_LABEL], 300.0));
    }

    #[test]
    fn test_build_budget_allocations_sum_to_income() {
        let history = vec![txn(120.0, "a"), txn(80.0, "b"), txn(300.0, "c")];
        let analysis = SpendingAnalysis::from_history(&history);
        let income = 45000.0;
        let budget = BudgetTemplate::build(&analysis, income);

        let category_total: f64 = budget
            .allocations
            .iter()
            .filter(|(category, _)| category.as_str() != SAVINGS_LABEL)
            .map(|(_, amount)| amount)
            .sum();
        assert!(approx(category_total, income));
        assert!(approx(budget.allocations[SAVINGS_LABEL], income * SAVINGS_RATE));
    }

    #[test]
    fn test_build_budget_empty_analysis() {
        let budget = BudgetTemplate::build(&SpendingAnalysis::default(), 3000.0);
        assert_eq!(budget.allocations.len(), 1);
        assert!(approx(budget.allocations[SAVINGS_LABEL], 300.0));
    }

    #[test]
    fn test_compare_over_budget() {
        let mut budget = BudgetTemplate::default();
        budget.allocations.insert("Food".to_string(), 1000.0);

        let actuals = vec![txn(1200.0, "Food")];
        let comparison = budget.compare(&actuals);

        let food = &comparison["Food"];
        assert!(approx(food.planned, 1000.0));
        assert!(approx(food.actual, 1200.0));
        assert!(approx(food.diff, -200.0));
        assert_eq!(food.status, BudgetStatus::OverBudget);
        assert_eq!(food.status.to_string(), "over budget");
    }

    #[test]
    fn test_compare_in_budget_and_missing_actual() {
        let mut budget = BudgetTemplate::default();
        budget.allocations.insert("Food".to_string(), 1000.0);
        budget.allocations.insert("Rent".to_string(), 2000.0);

        let actuals = vec![txn(800.0, "Food")];
        let comparison = budget.compare(&actuals);

        assert_eq!(comparison["Food"].status, BudgetStatus::InBudget);
        assert!(approx(comparison["Food"].diff, 200.0));

        // planned category with no actuals: actual defaults to 0
        assert!(approx(comparison["Rent"].actual, 0.0));
        assert_eq!(comparison["Rent"].status, BudgetStatus::InBudget);
    }

    #[test]
    fn test_compare_includes_unplanned_categories() {
        let mut budget = BudgetTemplate::default();
        budget.allocations.insert("Food".to_string(), 1000.0);

        let actuals = vec![txn(500.0, "Food"), txn(350.0, "Такси")];
        let comparison = budget.compare(&actuals);

        let taxi = &comparison["Такси"];
        assert!(approx(taxi.planned, 0.0));
        assert!(approx(taxi.actual, 350.0));
        assert_eq!(taxi.status, BudgetStatus::OverBudget);
    }

    #[test]
    fn test_compare_uncategorized_actuals_pool_under_other() {
        let mut budget = BudgetTemplate::default();
        budget.allocations.insert("other".to_string(), 400.0);

        let actuals = vec![
            Transaction::new("2024-01-15", 150.0, ""),
            Transaction::new("2024-01-16", 100.0, ""),
        ];
        let comparison = budget.compare(&actuals);
        assert!(approx(comparison["other"].actual, 250.0));
        assert_eq!(comparison["other"].status, BudgetStatus::InBudget);
    }

    #[test]
    fn test_compare_empty_actuals() {
        let budget = BudgetTemplate::build(&SpendingAnalysis::default(), 1000.0);
        let comparison = budget.compare(&[]);
        assert_eq!(comparison.len(), 1);
        assert!(approx(comparison[SAVINGS_LABEL].actual, 0.0));
    }
}
