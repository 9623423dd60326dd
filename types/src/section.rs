/// Named anchors on the portfolio page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::About, Self::Skills, Self::Projects, Self::Contact];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::About => 0,
            Self::Skills => 1,
            Self::Projects => 2,
            Self::Contact => 3,
        }
    }

    /// Keyboard shortcut shown in the navigation bar and section menu.
    #[must_use]
    pub const fn hotkey(self) -> char {
        match self {
            Self::About => '1',
            Self::Skills => '2',
            Self::Projects => '3',
            Self::Contact => '4',
        }
    }

    #[must_use]
    pub fn from_hotkey(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.hotkey() == c)
    }
}
