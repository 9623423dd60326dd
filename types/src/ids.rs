use std::fmt;

/// Stable identifier of a project card.
///
/// Project ids double as routing keys: a project without an external link
/// is opened as the mini-app its id resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(&'static str);

impl ProjectId {
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The embedded demo applications the host can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MiniAppKind {
    Calculator,
    Quiz,
    Dashboard,
    Store,
}

impl MiniAppKind {
    pub const ALL: [Self; 4] = [Self::Calculator, Self::Quiz, Self::Dashboard, Self::Store];

    /// Resolve the mini-app a project id launches, if any.
    #[must_use]
    pub fn from_project_id(id: ProjectId) -> Option<Self> {
        match id.as_str() {
            "ai-calculator" => Some(Self::Calculator),
            "psymetrics" => Some(Self::Quiz),
            "apicella" => Some(Self::Dashboard),
            "ecommerce" => Some(Self::Store),
            _ => None,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Calculator => "AI Calc",
            Self::Quiz => "Psymetrics",
            Self::Dashboard => "Apicella Health",
            Self::Store => "DevStore",
        }
    }
}

impl fmt::Display for MiniAppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
