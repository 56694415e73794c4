//! Aggregation helpers for the profit/loss dashboard.

use farmledger_domain::FarmLedger;
use uuid::Uuid;

/// Income, expense, and profit totals for one filter scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub profit: f64,
}

/// Answers aggregate financial queries over the ledger.
///
/// Every query is a linear scan over the in-memory collections; nothing is
/// cached.
pub struct SummaryService;

impl SummaryService {
    /// Sums expense amounts, optionally narrowed to a single crop.
    pub fn total_expenses(ledger: &FarmLedger, crop: Option<Uuid>) -> f64 {
        ledger.total_expenses(crop)
    }

    /// Sums income amounts, optionally narrowed to a single crop.
    pub fn total_income(ledger: &FarmLedger, crop: Option<Uuid>) -> f64 {
        ledger.total_income(crop)
    }

    /// Total income minus total expenses for the given scope.
    pub fn profit(ledger: &FarmLedger, crop: Option<Uuid>) -> f64 {
        ledger.profit(crop)
    }

    /// Bundles the three dashboard figures for one scope.
    pub fn totals(ledger: &FarmLedger, crop: Option<Uuid>) -> ProfitSummary {
        let total_income = ledger.total_income(crop);
        let total_expenses = ledger.total_expenses(crop);
        ProfitSummary {
            total_income,
            total_expenses,
            profit: total_income - total_expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CropService, ExpenseService, IncomeService};
    use chrono::NaiveDate;
    use farmledger_domain::{
        CropStatus, ExpenseCategory, NewCrop, NewExpense, NewIncome, Season, User,
    };

    fn prepared_ledger() -> (FarmLedger, Uuid) {
        let mut ledger = FarmLedger::new();
        let owner = User::new().with_email("ravi@example.com");
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        let crop = CropService::add(
            &mut ledger,
            &owner,
            NewCrop {
                name: "Cotton".into(),
                area: 3.0,
                area_unit: "acre".into(),
                planting_date: date,
                season: Season::Kharif,
                status: CropStatus::Active,
                expected_harvest_date: None,
                notes: None,
            },
        )
        .unwrap();

        ExpenseService::add(
            &mut ledger,
            &owner,
            NewExpense {
                crop_id: Some(crop.id),
                category: ExpenseCategory::Pesticide,
                amount: 150.0,
                description: "Spraying".into(),
                date,
                receipt: None,
            },
        )
        .unwrap();

        IncomeService::add(
            &mut ledger,
            &owner,
            NewIncome {
                crop_id: crop.id,
                quantity: 5.0,
                unit: "quintal".into(),
                price_per_unit: 100.0,
                buyer: "Ginning mill".into(),
                date,
                notes: None,
            },
        )
        .unwrap();

        (ledger, crop.id)
    }

    #[test]
    fn totals_bundle_matches_individual_queries() {
        let (ledger, crop) = prepared_ledger();
        for filter in [None, Some(crop)] {
            let summary = SummaryService::totals(&ledger, filter);
            assert_eq!(summary.total_income, SummaryService::total_income(&ledger, filter));
            assert_eq!(
                summary.total_expenses,
                SummaryService::total_expenses(&ledger, filter)
            );
            assert_eq!(summary.profit, summary.total_income - summary.total_expenses);
        }
    }

    #[test]
    fn scoped_summary_ignores_other_crops() {
        let (ledger, crop) = prepared_ledger();
        let summary = SummaryService::totals(&ledger, Some(crop));
        assert!((summary.total_income - 500.0).abs() < f64::EPSILON);
        assert!((summary.total_expenses - 150.0).abs() < f64::EPSILON);
        assert!((summary.profit - 350.0).abs() < f64::EPSILON);

        let unknown = SummaryService::totals(&ledger, Some(Uuid::new_v4()));
        assert_eq!(unknown.total_income, 0.0);
        assert_eq!(unknown.total_expenses, 0.0);
        assert_eq!(unknown.profit, 0.0);
    }

    #[test]
    fn empty_ledger_summarizes_to_zero() {
        let ledger = FarmLedger::new();
        let summary = SummaryService::totals(&ledger, None);
        assert_eq!(summary.profit, 0.0);
    }
}
