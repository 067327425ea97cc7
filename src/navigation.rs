//! Two-page navigation shell. Holds no book data.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    /// Collection management: form, search, filtered list.
    #[default]
    Home,
    /// Aggregate statistics.
    Stats,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Stats];

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Stats => "stats",
        }
    }

    /// Resolve a page name; anything unrecognised lands on Home.
    pub fn from_name(name: &str) -> Self {
        match name {
            "stats" => Page::Stats,
            _ => Page::Home,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Page,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }

    pub fn go_to(&mut self, page: Page) {
        self.current = page;
    }
}
