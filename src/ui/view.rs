use phf::phf_map;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Dashboard,
    Table,
    Charts,
    Calendar,
    Kanban,
    Settings,
}

static VIEW_IDS: phf::Map<&'static str, View> = phf_map! {
    "dashboard" => View::Dashboard,
    "table" => View::Table,
    "charts" => View::Charts,
    "calendar" => View::Calendar,
    "kanban" => View::Kanban,
    "settings" => View::Settings,
};

impl View {
    /// Sidebar order.
    pub const ALL: [View; 6] = [
        View::Dashboard,
        View::Table,
        View::Charts,
        View::Calendar,
        View::Kanban,
        View::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Table => "table",
            View::Charts => "charts",
            View::Calendar => "calendar",
            View::Kanban => "kanban",
            View::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Table => "Data Table",
            View::Charts => "Charts",
            View::Calendar => "Calendar",
            View::Kanban => "Kanban",
            View::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            View::Dashboard => "D",
            View::Table => "T",
            View::Charts => "C",
            View::Calendar => "Cal",
            View::Kanban => "K",
            View::Settings => "S",
        }
    }

    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    /// Zero-based sidebar position.
    pub fn nth(n: usize) -> Option<View> {
        Self::ALL.get(n).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for View {
    fn default() -> Self {
        View::Dashboard
    }
}

impl FromStr for View {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VIEW_IDS
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::UnknownView, s))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_resolve() {
        for view in View::ALL.iter() {
            assert_eq!(view.id().parse::<View>().unwrap(), *view);
        }
        assert_eq!("  Calendar ".parse::<View>().unwrap(), View::Calendar);
    }

    #[test]
    fn unknown_id() {
        let err = "reports".parse::<View>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownView));
    }

    #[test]
    fn cycling_reaches_every_view() {
        let mut view = View::Dashboard;
        for expected in View::ALL.iter().skip(1) {
            view = view.next();
            assert_eq!(view, *expected);
        }
        assert_eq!(view.next(), View::Dashboard);
        assert_eq!(View::Dashboard.prev(), View::Settings);
    }

    #[test]
    fn nth() {
        assert_eq!(View::nth(3), Some(View::Calendar));
        assert_eq!(View::nth(6), None);
    }
}
