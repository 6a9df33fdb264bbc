use derive_more::Display;

use crate::{
    report::{IssueType, ReportId},
    role::Role,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CaseStatus {
    Open,
    Investigating,
    Closed,
}

impl CaseStatus {
    /// The one status a case may move to from here. Closed cases stay closed.
    pub fn next(self) -> Option<CaseStatus> {
        match self {
            CaseStatus::Open => Some(CaseStatus::Investigating),
            CaseStatus::Investigating => Some(CaseStatus::Closed),
            CaseStatus::Closed => None,
        }
    }

    /// Button label for moving on from this status.
    pub fn next_action(self) -> Option<&'static str> {
        match self {
            CaseStatus::Open => Some("Start Investigation"),
            CaseStatus::Investigating => Some("Close Case"),
            CaseStatus::Closed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceCase {
    pub id: &'static str,
    pub title: &'static str,
    /// One line shown on the case card.
    pub summary: &'static str,
    /// The longer description sent for analysis.
    pub finding: &'static str,
    pub status: CaseStatus,
}

impl ComplianceCase {
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: "1092",
                title: "Illegal Dumping Case #1092",
                summary: "Reported dumping of mixed waste near residential \
                          zone...",
                finding: "Illegal dumping of electronics and chemical fluids \
                          near wetland boundary.",
                status: CaseStatus::Open,
            },
            Self {
                id: "2092",
                title: "Illegal Dumping Case #2092",
                summary: "Reported dumping of mixed waste near residential \
                          zone...",
                finding: "Construction rubble and household bags left on a \
                          drainage channel after market day.",
                status: CaseStatus::Open,
            },
        ]
    }

    /// Move one step along open, investigating, closed. Returns whether
    /// the status changed.
    pub fn advance(&mut self) -> bool {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitizenReport {
    pub id: ReportId,
    pub issue: IssueType,
    pub area: &'static str,
    pub submitted: &'static str,
    pub status: CaseStatus,
}

impl CitizenReport {
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: ReportId::new(2024, 89),
                issue: IssueType::IllegalDumping,
                area: "Nyabugogo",
                submitted: "Oct 24",
                status: CaseStatus::Open,
            },
            Self {
                id: ReportId::new(2024, 88),
                issue: IssueType::MissedPickup,
                area: "Kicukiro",
                submitted: "Oct 24",
                status: CaseStatus::Investigating,
            },
            Self {
                id: ReportId::new(2024, 85),
                issue: IssueType::DamagedBin,
                area: "Gisozi",
                submitted: "Oct 22",
                status: CaseStatus::Closed,
            },
            Self {
                id: ReportId::new(2024, 81),
                issue: IssueType::HazardousWaste,
                area: "Gikondo",
                submitted: "Oct 20",
                status: CaseStatus::Investigating,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AccountStatus {
    Active,
    Suspended,
    #[display("Pending Verification")]
    PendingVerification,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub name: &'static str,
    pub role: Role,
    pub sector: &'static str,
    pub status: AccountStatus,
}

impl RegistryEntry {
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                name: "Uwase household",
                role: Role::Household,
                sector: "Kimironko",
                status: AccountStatus::Active,
            },
            Self {
                name: "Green Hauliers Ltd",
                role: Role::Collector,
                sector: "Gasabo",
                status: AccountStatus::Active,
            },
            Self {
                name: "EcoPlastics Rwanda",
                role: Role::Recycler,
                sector: "Masoro",
                status: AccountStatus::PendingVerification,
            },
            Self {
                name: "Habimana household",
                role: Role::Household,
                sector: "Remera",
                status: AccountStatus::Suspended,
            },
        ]
    }
}

/// Registry rows for one role, or all rows when `role` is `None`.
pub fn filter_registry(
    rows: &[RegistryEntry],
    role: Option<Role>,
) -> Vec<&RegistryEntry> {
    rows.iter()
        .filter(|row| role.is_none_or(|r| row.role == r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cases_advance_one_step_at_a_time() {
        let mut case = ComplianceCase::seed().remove(0);
        assert_eq!(case.status, CaseStatus::Open);

        assert!(case.advance());
        assert_eq!(case.status, CaseStatus::Investigating);
        assert!(case.advance());
        assert_eq!(case.status, CaseStatus::Closed);
    }

    #[test]
    fn closed_cases_stay_closed() {
        assert_eq!(CaseStatus::Closed.next(), None);
        assert_eq!(CaseStatus::Closed.next_action(), None);

        let mut case = ComplianceCase::seed().remove(1);
        case.status = CaseStatus::Closed;
        assert!(!case.advance());
        assert!(!case.advance());
        assert_eq!(case.status, CaseStatus::Closed);
    }

    #[test]
    fn every_open_status_offers_an_action() {
        for status in [CaseStatus::Open, CaseStatus::Investigating] {
            assert!(status.next().is_some());
            assert!(status.next_action().is_some());
        }
    }

    #[test]
    fn registry_filters_by_role() {
        let rows = RegistryEntry::seed();
        assert_eq!(filter_registry(&rows, None).len(), rows.len());
        let households = filter_registry(&rows, Some(Role::Household));
        assert_eq!(households.len(), 2);
        assert!(filter_registry(&rows, Some(Role::Official)).is_empty());
    }

    #[test]
    fn seeded_report_ids_use_the_public_format() {
        let first = &CitizenReport::seed()[0];
        assert_eq!(first.id.to_string(), "RPT-2024-089");
    }
}
