// 🗂️ Dataset - Every page's sample records in one bundle
//
// Built once from literals (or read from a JSON file) and never mutated.

use crate::entities::employee::{sample_employees, Employee};
use crate::entities::inventory_item::{sample_inventory, InventoryItem};
use crate::entities::location::{sample_locations, Location, LocationRegistry};
use crate::entities::statement::{sample_owners, sample_statements, Owner, OwnerStatement};
use crate::financials::{sample_bank_accounts, sample_income_statement, BankAccount, FinancialStatement};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub locations: Vec<Location>,
    pub income_statement: FinancialStatement,
    pub bank_accounts: Vec<BankAccount>,
    pub inventory: Vec<InventoryItem>,
    pub employees: Vec<Employee>,
    pub owners: Vec<Owner>,
    pub statements: Vec<OwnerStatement>,
}

impl Dataset {
    /// The hardcoded sample data for every page
    pub fn sample() -> Self {
        Dataset {
            locations: sample_locations(),
            income_statement: sample_income_statement(),
            bank_accounts: sample_bank_accounts(),
            inventory: sample_inventory(),
            employees: sample_employees(),
            owners: sample_owners(),
            statements: sample_statements(),
        }
    }

    /// Load a dataset from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read dataset file: {:?}", path.as_ref()))?;

        let dataset: Dataset =
            serde_json::from_str(&content).context("Failed to parse dataset JSON")?;

        Ok(dataset)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize dataset")
    }

    pub fn location_registry(&self) -> LocationRegistry {
        LocationRegistry::from_locations(self.locations.clone())
    }

    pub fn location_ids(&self) -> Vec<String> {
        self.locations.iter().map(|l| l.id.clone()).collect()
    }

    pub fn owner_ids(&self) -> Vec<String> {
        self.owners.iter().map(|o| o.id.clone()).collect()
    }

    pub fn bank_account_ids(&self) -> Vec<String> {
        self.bank_accounts.iter().map(|a| a.id.clone()).collect()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::sample()
    }
}
