// 📄 Owner Statements - Per owner/restaurant/period revenue and expense figures
//
// `status` describes the document lifecycle (draft → sent → viewed →
// downloaded) but is fixed data: nothing in this crate transitions it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// STATEMENT STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementStatus {
    Draft,
    Sent,
    Viewed,
    Downloaded,
}

impl StatementStatus {
    pub fn all() -> [StatementStatus; 4] {
        [
            StatementStatus::Draft,
            StatementStatus::Sent,
            StatementStatus::Viewed,
            StatementStatus::Downloaded,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatementStatus::Draft => "draft",
            StatementStatus::Sent => "sent",
            StatementStatus::Viewed => "viewed",
            StatementStatus::Downloaded => "downloaded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatementStatus::Draft => "Draft",
            StatementStatus::Sent => "Sent",
            StatementStatus::Viewed => "Viewed",
            StatementStatus::Downloaded => "Downloaded",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_lowercase().as_str() {
            "draft" => Ok(StatementStatus::Draft),
            "sent" => Ok(StatementStatus::Sent),
            "viewed" => Ok(StatementStatus::Viewed),
            "downloaded" => Ok(StatementStatus::Downloaded),
            other => Err(format!("Unknown statement status: {}", other)),
        }
    }
}

// ============================================================================
// OWNER & STATEMENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub email: String,

    /// Location ids this owner holds a stake in
    pub restaurant_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerStatement {
    pub id: String,
    pub owner_id: String,
    pub restaurant_id: String,

    /// Period label (e.g., "2024-09")
    pub period: String,

    pub revenue: f64,
    pub expenses: f64,
    pub status: StatementStatus,
    pub issued_on: NaiveDate,
}

impl OwnerStatement {
    pub fn net(&self) -> f64 {
        self.revenue - self.expenses
    }
}

// ============================================================================
// SAMPLE DATA
// ============================================================================

fn owner(id: &str, name: &str, email: &str, restaurant_ids: &[&str]) -> Owner {
    Owner {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        restaurant_ids: restaurant_ids.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn sample_owners() -> Vec<Owner> {
    vec![
        owner(
            "owner-rivera",
            "Elena Rivera",
            "elena@riverahospitality.com",
            &["downtown-bistro", "harbor-grill"],
        ),
        owner(
            "owner-whitfield",
            "Marcus Whitfield",
            "marcus@whitfieldgroup.com",
            &["uptown-steakhouse"],
        ),
        owner(
            "owner-nakamura",
            "Kenji Nakamura",
            "kenji@nakamuraventures.com",
            &["garden-cafe", "downtown-bistro"],
        ),
    ]
}

fn statement(
    id: &str,
    owner_id: &str,
    restaurant_id: &str,
    period: &str,
    amounts: (f64, f64),
    status: StatementStatus,
    issued: (i32, u32, u32),
) -> OwnerStatement {
    OwnerStatement {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        period: period.to_string(),
        revenue: amounts.0,
        expenses: amounts.1,
        status,
        issued_on: NaiveDate::from_ymd_opt(issued.0, issued.1, issued.2).unwrap_or(NaiveDate::MIN),
    }
}

pub fn sample_statements() -> Vec<OwnerStatement> {
    use StatementStatus::*;

    vec![
        statement("stmt-1001", "owner-rivera", "downtown-bistro", "2024-09", (325_000.0, 241_500.0), Downloaded, (2024, 10, 3)),
        statement("stmt-1002", "owner-rivera", "harbor-grill", "2024-09", (232_000.0, 181_200.0), Viewed, (2024, 10, 3)),
        statement("stmt-1003", "owner-whitfield", "uptown-steakhouse", "2024-09", (395_000.0, 302_800.0), Sent, (2024, 10, 4)),
        statement("stmt-1004", "owner-nakamura", "garden-cafe", "2024-09", (83_000.0, 71_900.0), Draft, (2024, 10, 5)),
        statement("stmt-1005", "owner-nakamura", "downtown-bistro", "2024-09", (325_000.0, 241_500.0), Sent, (2024, 10, 5)),
        statement("stmt-0901", "owner-rivera", "downtown-bistro", "2024-08", (318_000.0, 236_400.0), Downloaded, (2024, 9, 4)),
        statement("stmt-0902", "owner-whitfield", "uptown-steakhouse", "2024-08", (402_500.0, 310_100.0), Viewed, (2024, 9, 4)),
    ]
}
