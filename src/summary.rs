//! Roster summary: head counts and the names of every individual

use crate::types::{Employee, EmployeeKind};

/// Individuals strictly younger than this are counted separately
pub const AGE_THRESHOLD: i64 = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub total: usize,
    pub individuals: usize,
    pub companies: usize,
    pub individuals_under_threshold: usize,
    /// "First Last" for every individual, in roster order
    pub individual_names: Vec<String>,
}

impl RosterSummary {
    pub fn from_roster(roster: &[Employee]) -> Self {
        let mut summary = RosterSummary {
            total: roster.len(),
            ..Default::default()
        };

        for employee in roster {
            match employee.kind() {
                EmployeeKind::Individual(individual) => {
                    summary.individuals += 1;
                    if individual.age() < AGE_THRESHOLD {
                        summary.individuals_under_threshold += 1;
                    }
                    summary.individual_names.push(individual.full_name());
                }
                EmployeeKind::Company(_) => summary.companies += 1,
            }
        }

        summary
    }
}
