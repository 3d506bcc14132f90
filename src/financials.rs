// 💵 Financials - Income statement rollups and bank account balances
//
// Section totals are read as authored; nothing is re-summed from children.
//   gross_profit = revenue − cost_of_goods
//   net_income   = gross_profit − operating_expenses

use crate::controls::ExpandedRows;
use crate::entities::line_item::{LineItem, LineRow};
use crate::metrics::calculate_percentage;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

pub const REVENUE_SECTION: &str = "Revenue";
pub const COGS_SECTION: &str = "Cost of Goods Sold";
pub const OPEX_SECTION: &str = "Operating Expenses";

// ============================================================================
// FINANCIAL STATEMENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatement {
    pub title: String,

    /// Column order for period amounts
    pub periods: Vec<String>,

    pub sections: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub revenue: f64,
    pub cost_of_goods: f64,
    pub gross_profit: f64,
    pub operating_expenses: f64,
    pub net_income: f64,
    pub gross_margin_pct: String,
    pub net_margin_pct: String,
}

impl FinancialStatement {
    pub fn section(&self, name: &str) -> Option<&LineItem> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Authored total of a top-level section (0 when absent)
    pub fn section_total(&self, name: &str) -> f64 {
        self.section(name).map(|s| s.total).unwrap_or(0.0)
    }

    /// Find any row by its full name path (section first)
    pub fn find(&self, path: &[&str]) -> Option<&LineItem> {
        let (first, rest) = path.split_first()?;
        let section = self.section(first)?;
        if rest.is_empty() {
            Some(section)
        } else {
            section.find(rest)
        }
    }

    pub fn summary(&self) -> FinancialSummary {
        let revenue = self.section_total(REVENUE_SECTION);
        let cost_of_goods = self.section_total(COGS_SECTION);
        let operating_expenses = self.section_total(OPEX_SECTION);
        let gross_profit = revenue - cost_of_goods;
        let net_income = gross_profit - operating_expenses;

        FinancialSummary {
            revenue,
            cost_of_goods,
            gross_profit,
            operating_expenses,
            net_income,
            gross_margin_pct: calculate_percentage(gross_profit, revenue),
            net_margin_pct: calculate_percentage(net_income, revenue),
        }
    }

    /// Net income for a single period column
    pub fn period_net_income(&self, period: &str) -> f64 {
        let amount = |name: &str| self.section(name).map(|s| s.amount_for(period)).unwrap_or(0.0);
        amount(REVENUE_SECTION) - amount(COGS_SECTION) - amount(OPEX_SECTION)
    }

    /// Table rows honoring which parents are expanded
    pub fn visible_rows<'a>(&'a self, expanded: &ExpandedRows) -> Vec<LineRow<'a>> {
        self.sections
            .iter()
            .flat_map(|section| section.walk_filtered(&mut |path: &[&str]| expanded.is_expanded(path)))
            .collect()
    }

    /// Every row, fully expanded
    pub fn all_rows(&self) -> Vec<LineRow<'_>> {
        self.sections.iter().flat_map(|s| s.walk()).collect()
    }

    /// Paths of every row that has sub-accounts
    pub fn expandable_paths(&self) -> Vec<Vec<&str>> {
        self.all_rows()
            .into_iter()
            .filter(|row| !row.item.is_leaf())
            .map(|row| row.path)
            .collect()
    }

    /// Rows whose authored total differs from their children's sum
    pub fn discrepancies(&self, tolerance: f64) -> Vec<(Vec<&str>, f64)> {
        self.all_rows()
            .into_iter()
            .filter(|row| row.item.children_discrepancy().abs() > tolerance)
            .map(|row| (row.path.clone(), row.item.children_discrepancy()))
            .collect()
    }
}

// ============================================================================
// BANK ACCOUNTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    pub name: String,
    pub bank: String,
    pub account_type: String,
    pub balance: f64,
}

/// Sum of balances for the selected accounts
pub fn total_balance(accounts: &[BankAccount], selection: &Selection<String>) -> f64 {
    selection
        .filter(accounts, |a| &a.id)
        .iter()
        .fold(0.0, |acc, a| acc + a.balance)
}

// ============================================================================
// SAMPLE DATA
// ============================================================================

const MONTHS: [&str; 3] = ["Jul", "Aug", "Sep"];

fn row(name: &str, total: f64, by_month: [f64; 3]) -> LineItem {
    let periods: Vec<(&str, f64)> = MONTHS.iter().copied().zip(by_month).collect();
    LineItem::new(name, total, &periods)
}

/// Third-quarter income statement across all locations
pub fn sample_income_statement() -> FinancialStatement {
    FinancialStatement {
        title: "Income Statement - Q3 2024".to_string(),
        periods: MONTHS.iter().map(|m| m.to_string()).collect(),
        sections: vec![
            row(REVENUE_SECTION, 3_118_000.0, [1_021_000.0, 1_062_000.0, 1_035_000.0]).with_children(vec![
                row("Food Sales", 2_245_000.0, [735_000.0, 765_000.0, 745_000.0]),
                row("Beverage Sales", 748_000.0, [245_000.0, 255_000.0, 248_000.0]).with_children(vec![
                    row("Beer", 212_000.0, [70_000.0, 72_000.0, 70_000.0]),
                    row("Wine", 318_000.0, [104_000.0, 108_000.0, 106_000.0]),
                    row("Cocktails", 218_000.0, [71_000.0, 75_000.0, 72_000.0]),
                ]),
                row("Catering", 125_000.0, [41_000.0, 42_000.0, 42_000.0]),
            ]),
            row(COGS_SECTION, 983_250.0, [322_400.0, 333_100.0, 327_750.0]).with_children(vec![
                row("Food Purchases", 745_000.0, [244_000.0, 252_000.0, 249_000.0]),
                row("Beverage Purchases", 238_250.0, [78_400.0, 81_100.0, 78_750.0]),
            ]),
            // Authored total runs ahead of its sub-accounts by 4,600
            row(OPEX_SECTION, 1_438_000.0, [472_000.0, 487_000.0, 479_000.0]).with_children(vec![
                row("Labor", 943_380.0, [309_000.0, 320_000.0, 314_380.0]).with_children(vec![
                    row("Kitchen Wages", 412_000.0, [135_000.0, 140_000.0, 137_000.0]),
                    row("Front of House Wages", 376_380.0, [123_000.0, 128_000.0, 125_380.0]),
                    row("Payroll Taxes", 155_000.0, [51_000.0, 52_000.0, 52_000.0]),
                ]),
                row("Rent", 270_000.0, [90_000.0, 90_000.0, 90_000.0]),
                row("Utilities", 96_020.0, [31_500.0, 33_020.0, 31_500.0]),
                row("Marketing", 124_000.0, [40_000.0, 43_000.0, 41_000.0]),
            ]),
        ],
    }
}

pub fn sample_bank_accounts() -> Vec<BankAccount> {
    let account = |id: &str, name: &str, bank: &str, account_type: &str, balance: f64| BankAccount {
        id: id.to_string(),
        name: name.to_string(),
        bank: bank.to_string(),
        account_type: account_type.to_string(),
        balance,
    };

    vec![
        account("acct-operating", "Operating Account", "First Republic", "Checking", 482_350.75),
        account("acct-payroll", "Payroll Account", "First Republic", "Checking", 156_200.00),
        account("acct-reserve", "Tax Reserve", "Chase", "Savings", 310_000.00),
        account("acct-card", "Corporate Card", "American Express", "Credit", -24_815.40),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
