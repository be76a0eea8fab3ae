use std::fmt;
use std::str::FromStr;

/// Review outcome reported by the status API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    /// Wire name used by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    /// Human-readable text sent to the user
    pub fn text(&self) -> &'static str {
        match self {
            Verdict::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            Verdict::Reviewing => "The work has been taken for review by a reviewer.",
            Verdict::Rejected => "The work has been reviewed: the reviewer has some remarks.",
        }
    }
}

impl FromStr for Verdict {
    type Err = ();

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verdict::ALL
            .into_iter()
            .find(|verdict| verdict.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
