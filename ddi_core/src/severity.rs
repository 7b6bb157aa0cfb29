//! Severity display classes.

/// Clinical risk level of a predicted interaction, as far as the UI cares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    Major,
    Moderate,
    Minor,
    #[default]
    Unknown,
}

impl Severity {
    /// Case-insensitive and total: anything unrecognized, including an
    /// absent value, is `Unknown`.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("major") => Severity::Major,
            Some("moderate") => Severity::Moderate,
            Some("minor") => Severity::Minor,
            _ => Severity::Unknown,
        }
    }

    /// CSS class for the severity badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Major => "severity-major",
            Severity::Moderate => "severity-moderate",
            Severity::Minor => "severity-minor",
            Severity::Unknown => "severity-unknown",
        }
    }
}
