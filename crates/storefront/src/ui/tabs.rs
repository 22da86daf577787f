//! Tabbed content panel state.

/// A row of named tabs with exactly one active panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
    tabs: Vec<String>,
    active: usize,
}

impl TabPanel {
    /// Create a panel with the first tab active.
    #[must_use]
    pub fn new(tabs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    /// Activate the tab named `id`.
    ///
    /// Returns `false` (and changes nothing) for an unknown id.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(index) = self.tabs.iter().position(|tab| tab == id) else {
            return false;
        };

        self.active = index;
        true
    }

    /// Name of the active tab, if the panel has any tabs.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.tabs.get(self.active).map(String::as_str)
    }

    /// Whether the tab named `id` is the active one.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    /// All tab names, in display order.
    #[must_use]
    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }
}
