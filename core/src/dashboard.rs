//! The "Apicella Health" records viewer demo. Read-only.

use crate::{AppSignal, MiniAppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientStatus {
    Stable,
    Critical,
}

impl PatientStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: u32,
    pub name: &'static str,
    pub status: PatientStatus,
}

const RECORDS: [Patient; 2] = [
    Patient {
        id: 1,
        name: "Sarah Connor",
        status: PatientStatus::Stable,
    },
    Patient {
        id: 2,
        name: "Rick Deckard",
        status: PatientStatus::Critical,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    SelectNext,
    SelectPrev,
    Logout,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    records: Vec<Patient>,
    selected: usize,
}

impl Dashboard {
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(RECORDS.to_vec())
    }

    #[must_use]
    pub fn with_records(records: Vec<Patient>) -> Self {
        Self {
            records,
            selected: 0,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Patient] {
        &self.records
    }

    /// Index of the highlighted row; `None` when there are no records.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        (!self.records.is_empty()).then_some(self.selected)
    }

    #[must_use]
    pub fn critical_count(&self) -> usize {
        self.records
            .iter()
            .filter(|p| p.status == PatientStatus::Critical)
            .count()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniAppState for Dashboard {
    type Action = DashboardAction;

    fn handle(&mut self, action: DashboardAction) -> AppSignal {
        let last = self.records.len().saturating_sub(1);
        match action {
            DashboardAction::SelectNext => self.selected = (self.selected + 1).min(last),
            DashboardAction::SelectPrev => self.selected = self.selected.saturating_sub(1),
            DashboardAction::Logout => return AppSignal::Close,
        }
        AppSignal::Continue
    }
}
