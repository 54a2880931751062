//! Query sessions
//!
//! Each tab owns one `ConstraintSet`; tabs never share constraints. The
//! dictionary they query is shared read-only and lives outside this module.

use crate::constraints::ConstraintSet;

/// One named query session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub name: String,
    pub constraints: ConstraintSet,
}

/// Ordered set of tabs with one active
///
/// There is always at least one tab.
///
/// # Examples
/// ```
/// use word_sieve::session::Sessions;
///
/// let mut sessions = Sessions::new(5);
/// sessions.active_mut().constraints.set_correct('a', [0]);
/// sessions.duplicate_active();
///
/// assert_eq!(sessions.len(), 2);
/// assert_eq!(sessions.active_index(), 1);
/// assert!(!sessions.active().constraints.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sessions {
    tabs: Vec<Tab>,
    active: usize,
    opened: usize,
}

impl Sessions {
    /// One empty tab for words of `size` letters
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut sessions = Self {
            tabs: Vec::new(),
            active: 0,
            opened: 0,
        };
        sessions.open(size);
        sessions
    }

    /// Open an empty tab and make it active
    pub fn open(&mut self, size: usize) -> usize {
        self.push(ConstraintSet::new(size))
    }

    /// Open a tab seeded with a copy of the active tab's constraints
    pub fn duplicate_active(&mut self) -> usize {
        let seed = self.active().constraints.clone();
        self.push(seed)
    }

    /// Close the active tab; returns false if it is the last one
    pub fn close_active(&mut self) -> bool {
        if self.tabs.len() == 1 {
            return false;
        }
        self.tabs.remove(self.active);
        if self.active >= self.tabs.len() {
            self.active = self.tabs.len() - 1;
        }
        true
    }

    pub fn focus_next(&mut self) {
        self.active = (self.active + 1) % self.tabs.len();
    }

    pub fn focus_previous(&mut self) {
        self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
    }

    /// Make tab `index` active; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = index;
        }
    }

    #[must_use]
    pub fn active(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.active]
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    fn push(&mut self, constraints: ConstraintSet) -> usize {
        self.opened += 1;
        self.tabs.push(Tab {
            name: format!("tab {}", self.opened),
            constraints,
        });
        self.active = self.tabs.len() - 1;
        self.active
    }
}
