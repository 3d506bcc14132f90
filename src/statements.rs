// 📄 Statements - Owner statement filtering and rollups
//
// Owners and restaurants are filtered with the same "all"-sentinel
// selection used for locations.

use crate::entities::statement::{Owner, OwnerStatement, StatementStatus};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementFilter {
    #[serde(default)]
    pub owners: Selection<String>,
    #[serde(default)]
    pub restaurants: Selection<String>,
    #[serde(default)]
    pub status: Option<StatementStatus>,
    #[serde(default)]
    pub period: Option<String>,
}

impl StatementFilter {
    pub fn matches(&self, statement: &OwnerStatement) -> bool {
        self.owners.contains(&statement.owner_id)
            && self.restaurants.contains(&statement.restaurant_id)
            && self.status.map_or(true, |s| s == statement.status)
            && self.period.as_ref().map_or(true, |p| *p == statement.period)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: StatementStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub count: usize,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net: f64,
    pub by_status: Vec<StatusCount>,
}

impl StatementSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} statements: revenue ${:.2}, expenses ${:.2}, net ${:.2}",
            self.count, self.total_revenue, self.total_expenses, self.net
        )
    }

    pub fn count_for(&self, status: StatementStatus) -> usize {
        self.by_status
            .iter()
            .find(|s| s.status == status)
            .map(|s| s.count)
            .unwrap_or(0)
    }
}

pub fn filter<'a>(statements: &'a [OwnerStatement], filter: &StatementFilter) -> Vec<&'a OwnerStatement> {
    statements.iter().filter(|s| filter.matches(s)).collect()
}

pub fn summarize(statements: &[OwnerStatement], statement_filter: &StatementFilter) -> StatementSummary {
    let selected = filter(statements, statement_filter);

    let total_revenue = selected.iter().fold(0.0, |acc, s| acc + s.revenue);
    let total_expenses = selected.iter().fold(0.0, |acc, s| acc + s.expenses);

    StatementSummary {
        count: selected.len(),
        total_revenue,
        total_expenses,
        net: total_revenue - total_expenses,
        by_status: StatementStatus::all()
            .iter()
            .map(|status| StatusCount {
                status: *status,
                count: selected.iter().filter(|s| s.status == *status).count(),
            })
            .collect(),
    }
}

/// Restaurants reachable through the selected owners
pub fn restaurants_for_owners(owners: &[Owner], selection: &Selection<String>) -> Vec<String> {
    let mut ids: Vec<String> = selection
        .filter(owners, |o| &o.id)
        .iter()
        .flat_map(|o| o.restaurant_ids.iter().cloned())
        .collect();
    ids.sort();
    ids.dedup();
    ids
}

/// Most recent statements first
pub fn latest_first(statements: &[OwnerStatement]) -> Vec<&OwnerStatement> {
    let mut sorted: Vec<&OwnerStatement> = statements.iter().collect();
    sorted.sort_by(|a, b| b.issued_on.cmp(&a.issued_on).then_with(|| a.id.cmp(&b.id)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::statement::{sample_owners, sample_statements};

    fn one(id: &str) -> Selection<String> {
        Selection::from_ids(vec![id.to_string()])
    }

    #[test]
    fn test_unfiltered_summary() {
        let statements = sample_statements();
        let s = summarize(&statements, &StatementFilter::default());

        assert_eq!(s.count, 7);
        assert_eq!(s.count_for(StatementStatus::Downloaded), 2);
        assert_eq!(s.count_for(StatementStatus::Sent), 2);
        assert_eq!(s.count_for(StatementStatus::Viewed), 2);
        assert_eq!(s.count_for(StatementStatus::Draft), 1);
        assert_eq!(s.net, s.total_revenue - s.total_expenses);
    }

    #[test]
    fn test_filter_by_owner_and_period() {
        let statements = sample_statements();
        let f = StatementFilter {
            owners: one("owner-rivera"),
            period: Some("2024-09".to_string()),
            ..Default::default()
        };
        let s = summarize(&statements, &f);

        assert_eq!(s.count, 2);
        assert_eq!(s.total_revenue, 557_000.0);
        assert_eq!(s.net, 557_000.0 - 422_700.0);
    }

    #[test]
    fn test_filter_by_restaurant_and_status() {
        let statements = sample_statements();
        let f = StatementFilter {
            restaurants: one("downtown-bistro"),
            status: Some(StatementStatus::Sent),
            ..Default::default()
        };
        let picked = filter(&statements, &f);

        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, "stmt-1005");
    }

    #[test]
    fn test_restaurants_for_owners() {
        let owners = sample_owners();

        assert_eq!(
            restaurants_for_owners(&owners, &one("owner-nakamura")),
            vec!["downtown-bistro", "garden-cafe"]
        );
        assert_eq!(restaurants_for_owners(&owners, &Selection::All).len(), 4);
    }

    #[test]
    fn test_latest_first() {
        let statements = sample_statements();
        let sorted = latest_first(&statements);

        assert_eq!(sorted[0].id, "stmt-1004");
        assert_eq!(sorted.last().unwrap().id, "stmt-0902");
    }
}
