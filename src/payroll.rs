// 💼 Payroll - Headcount and compensation rollups over a location selection

use crate::entities::employee::Employee;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentCost {
    pub department: String,
    pub headcount: usize,
    pub annual_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    pub headcount: usize,
    pub salaried_count: usize,
    pub hourly_count: usize,
    pub total_annual_payroll: f64,
    pub monthly_payroll: f64,

    /// Mean hourly rate; NaN when nobody selected is hourly
    pub average_hourly_rate: f64,

    pub health_enrolled: usize,
    pub dental_enrolled: usize,
    pub retirement_enrolled: usize,
    pub by_department: Vec<DepartmentCost>,
}

impl PayrollSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} employees ({} salaried, {} hourly): ${:.2}/year, ${:.2}/month",
            self.headcount,
            self.salaried_count,
            self.hourly_count,
            self.total_annual_payroll,
            self.monthly_payroll
        )
    }
}

pub fn employees_at<'a>(employees: &'a [Employee], locations: &Selection<String>) -> Vec<&'a Employee> {
    locations.filter(employees, |e| &e.location_id)
}

pub fn summarize(employees: &[Employee], locations: &Selection<String>) -> PayrollSummary {
    let selected = employees_at(employees, locations);

    let hourly_rates: Vec<f64> = selected
        .iter()
        .filter_map(|e| e.compensation.hourly_rate())
        .collect();
    let total_annual_payroll = selected.iter().fold(0.0, |acc, e| acc + e.annual_cost());

    let mut departments: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for e in &selected {
        let entry = departments.entry(e.department.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += e.annual_cost();
    }

    PayrollSummary {
        headcount: selected.len(),
        salaried_count: selected.len() - hourly_rates.len(),
        hourly_count: hourly_rates.len(),
        total_annual_payroll,
        monthly_payroll: total_annual_payroll / 12.0,
        average_hourly_rate: hourly_rates.iter().fold(0.0, |acc, r| acc + r) / hourly_rates.len() as f64,
        health_enrolled: selected.iter().filter(|e| e.benefits.health).count(),
        dental_enrolled: selected.iter().filter(|e| e.benefits.dental).count(),
        retirement_enrolled: selected.iter().filter(|e| e.benefits.retirement).count(),
        by_department: departments
            .into_iter()
            .map(|(department, (headcount, annual_cost))| DepartmentCost {
                department: department.to_string(),
                headcount,
                annual_cost,
            })
            .collect(),
    }
}

pub fn employees_with_certification<'a>(employees: &'a [Employee], name: &str) -> Vec<&'a Employee> {
    employees.iter().filter(|e| e.has_certification(name)).collect()
}
