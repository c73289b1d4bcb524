use std::fmt;

/// Imagery quality tier requested from the solar API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    High,
    Medium,
}

impl Quality {
    /// Value of the `requiredQuality` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::High => "HIGH",
            Quality::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
