use serde::{Deserialize, Serialize};

/// The pair of junctions picked by the user; either side may still be unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSelection {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Outcome of validating a selection before any request is made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCheck<'a> {
    Incomplete,
    SameEndpoints,
    Ready { start: &'a str, end: &'a str },
}

impl RouteSelection {
    #[must_use]
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self { start: non_empty(start), end: non_empty(end) }
    }

    #[must_use]
    pub fn between(start: &str, end: &str) -> Self {
        Self::new(Some(start.to_string()), Some(end.to_string()))
    }

    #[must_use]
    pub fn check(&self) -> SelectionCheck<'_> {
        match (self.start.as_deref(), self.end.as_deref()) {
            (Some(start), Some(end)) if start == end => SelectionCheck::SameEndpoints,
            (Some(start), Some(end)) => SelectionCheck::Ready { start, end },
            _ => SelectionCheck::Incomplete,
        }
    }
}

// A select element reports "no choice" as an empty string
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A computed route: junction identifiers in travel order and the estimated time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub path: Vec<String>,
    pub time_minutes: f64,
}

impl RouteResult {
    /// Path rendered for the result panel, e.g. `Koramangala → Silk Board`
    #[must_use]
    pub fn path_text(&self) -> String {
        self.path.join(" → ")
    }

    #[must_use]
    pub fn time_text(&self) -> String {
        format!("{} minutes", format_minutes(self.time_minutes))
    }
}

/// Whole minutes print without a fractional part
fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 && minutes.abs() < 1e15 {
        format!("{minutes:.0}")
    } else {
        format!("{minutes}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_incomplete() {
        assert_eq!(RouteSelection::default().check(), SelectionCheck::Incomplete);
        assert_eq!(
            RouteSelection::new(Some("Hebbal".to_string()), None).check(),
            SelectionCheck::Incomplete
        );
        assert_eq!(
            RouteSelection::new(Some(String::new()), Some("Hebbal".to_string())).check(),
            SelectionCheck::Incomplete
        );
    }

    #[test]
    fn test_check_same_endpoints() {
        assert_eq!(RouteSelection::between("Hebbal", "Hebbal").check(), SelectionCheck::SameEndpoints);
    }

    #[test]
    fn test_check_ready() {
        assert_eq!(
            RouteSelection::between("Hebbal", "Majestic").check(),
            SelectionCheck::Ready { start: "Hebbal", end: "Majestic" }
        );
    }

    #[test]
    fn test_result_text() {
        let result = RouteResult {
            path: vec!["Koramangala".into(), "Silk Board".into(), "Indiranagar".into()],
            time_minutes: 18.0,
        };
        assert_eq!(result.path_text(), "Koramangala → Silk Board → Indiranagar");
        assert_eq!(result.time_text(), "18 minutes");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0.0), "0");
        assert_eq!(format_minutes(42.0), "42");
        assert_eq!(format_minutes(12.5), "12.5");
    }
}
