// 👩‍🍳 Employee Entity - Identity, compensation and benefits
//
// Compensation is salary XOR hourly; the enum makes "both" unrepresentable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Working weeks per year used for hourly annualisation
pub const WEEKS_PER_YEAR: f64 = 52.0;

// ============================================================================
// COMPENSATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Compensation {
    Salary { annual: f64 },
    Hourly { rate: f64, weekly_hours: f64 },
}

impl Compensation {
    pub fn annual_cost(&self) -> f64 {
        match self {
            Compensation::Salary { annual } => *annual,
            Compensation::Hourly { rate, weekly_hours } => rate * weekly_hours * WEEKS_PER_YEAR,
        }
    }

    pub fn is_hourly(&self) -> bool {
        matches!(self, Compensation::Hourly { .. })
    }

    pub fn hourly_rate(&self) -> Option<f64> {
        match self {
            Compensation::Hourly { rate, .. } => Some(*rate),
            Compensation::Salary { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Benefits {
    pub health: bool,
    pub dental: bool,
    pub retirement: bool,
}

// ============================================================================
// EMPLOYEE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,

    /// Location the employee is assigned to
    pub location_id: String,

    pub hire_date: NaiveDate,
    pub compensation: Compensation,
    pub benefits: Benefits,

    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn annual_cost(&self) -> f64 {
        self.compensation.annual_cost()
    }

    pub fn monthly_cost(&self) -> f64 {
        self.annual_cost() / 12.0
    }

    pub fn has_certification(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.certifications.iter().any(|c| c.to_lowercase() == lower)
    }
}

// ============================================================================
// SAMPLE DATA
// ============================================================================

struct Seed<'a> {
    id: &'a str,
    name: (&'a str, &'a str),
    position: &'a str,
    department: &'a str,
    location_id: &'a str,
    hired: (i32, u32, u32),
    compensation: Compensation,
    benefits: Benefits,
    certifications: &'a [&'a str],
}

fn employee(seed: Seed<'_>) -> Employee {
    let (year, month, day) = seed.hired;
    Employee {
        id: seed.id.to_string(),
        first_name: seed.name.0.to_string(),
        last_name: seed.name.1.to_string(),
        email: format!(
            "{}.{}@restaurantgroup.com",
            seed.name.0.to_lowercase(),
            seed.name.1.to_lowercase()
        ),
        position: seed.position.to_string(),
        department: seed.department.to_string(),
        location_id: seed.location_id.to_string(),
        hire_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
        compensation: seed.compensation,
        benefits: seed.benefits,
        certifications: seed.certifications.iter().map(|c| c.to_string()).collect(),
    }
}

const FULL: Benefits = Benefits {
    health: true,
    dental: true,
    retirement: true,
};

const HEALTH_ONLY: Benefits = Benefits {
    health: true,
    dental: false,
    retirement: false,
};

const NONE: Benefits = Benefits {
    health: false,
    dental: false,
    retirement: false,
};

/// Sample staff across the four locations
pub fn sample_employees() -> Vec<Employee> {
    vec![
        employee(Seed {
            id: "emp-001",
            name: ("Maria", "Santos"),
            position: "General Manager",
            department: "Management",
            location_id: "downtown-bistro",
            hired: (2019, 3, 15),
            compensation: Compensation::Salary { annual: 85_000.0 },
            benefits: FULL,
            certifications: &["ServSafe Manager", "Alcohol Awareness"],
        }),
        employee(Seed {
            id: "emp-002",
            name: ("James", "Chen"),
            position: "Executive Chef",
            department: "Kitchen",
            location_id: "uptown-steakhouse",
            hired: (2020, 7, 1),
            compensation: Compensation::Salary { annual: 92_000.0 },
            benefits: FULL,
            certifications: &["ServSafe Manager"],
        }),
        employee(Seed {
            id: "emp-003",
            name: ("Aisha", "Johnson"),
            position: "Line Cook",
            department: "Kitchen",
            location_id: "downtown-bistro",
            hired: (2022, 1, 10),
            compensation: Compensation::Hourly {
                rate: 22.50,
                weekly_hours: 40.0,
            },
            benefits: HEALTH_ONLY,
            certifications: &["ServSafe Food Handler"],
        }),
        employee(Seed {
            id: "emp-004",
            name: ("Diego", "Ramirez"),
            position: "Server",
            department: "Front of House",
            location_id: "harbor-grill",
            hired: (2023, 5, 22),
            compensation: Compensation::Hourly {
                rate: 18.00,
                weekly_hours: 32.0,
            },
            benefits: NONE,
            certifications: &["Alcohol Awareness"],
        }),
        employee(Seed {
            id: "emp-005",
            name: ("Priya", "Patel"),
            position: "Bartender",
            department: "Front of House",
            location_id: "uptown-steakhouse",
            hired: (2021, 11, 3),
            compensation: Compensation::Hourly {
                rate: 20.00,
                weekly_hours: 36.0,
            },
            benefits: HEALTH_ONLY,
            certifications: &["Alcohol Awareness", "Sommelier Level 1"],
        }),
        employee(Seed {
            id: "emp-006",
            name: ("Tom", "Becker"),
            position: "Barista",
            department: "Front of House",
            location_id: "garden-cafe",
            hired: (2024, 2, 12),
            compensation: Compensation::Hourly {
                rate: 17.25,
                weekly_hours: 25.0,
            },
            benefits: NONE,
            certifications: &[],
        }),
        employee(Seed {
            id: "emp-007",
            name: ("Grace", "Okafor"),
            position: "Assistant Manager",
            department: "Management",
            location_id: "harbor-grill",
            hired: (2021, 8, 30),
            compensation: Compensation::Salary { annual: 62_000.0 },
            benefits: FULL,
            certifications: &["ServSafe Manager"],
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compensation_annualisation() {
        let hourly = Compensation::Hourly {
            rate: 20.0,
            weekly_hours: 40.0,
        };
        assert_eq!(hourly.annual_cost(), 41_600.0);
        assert_eq!(hourly.hourly_rate(), Some(20.0));

        let salary = Compensation::Salary { annual: 60_000.0 };
        assert_eq!(salary.annual_cost(), 60_000.0);
        assert_eq!(salary.hourly_rate(), None);
        assert!(!salary.is_hourly());
    }

    #[test]
    fn test_employee_helpers() {
        let staff = sample_employees();
        let maria = &staff[0];

        assert_eq!(maria.full_name(), "Maria Santos");
        assert_eq!(maria.email, "maria.santos@restaurantgroup.com");
        assert!((maria.monthly_cost() - 85_000.0 / 12.0).abs() < 1e-9);
        assert!(maria.has_certification("servsafe manager"));
        assert_eq!(maria.hire_date, NaiveDate::from_ymd_opt(2019, 3, 15).unwrap());
    }

    #[test]
    fn test_compensation_serde_tagged() {
        let json = serde_json::to_value(Compensation::Salary { annual: 1.0 }).unwrap();
        assert_eq!(json["type"], "salary");

        let back: Compensation =
            serde_json::from_str(r#"{"type":"hourly","rate":15.0,"weekly_hours":20.0}"#).unwrap();
        assert!(back.is_hourly());
    }
}
