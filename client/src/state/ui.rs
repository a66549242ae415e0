//! Root view state: which tab is showing and the list reload channel.
//!
//! DESIGN
//! ======
//! The list view cannot be reached imperatively from its parent. Instead the
//! root bumps `reload_seq` and the list view reloads whenever the value it
//! last saw changes.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Views the root can display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Create,
    List,
}

impl Tab {
    /// Tabs in the order the tab bar renders them.
    pub const ALL: [Self; 2] = [Self::Create, Self::List];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Create Campaign",
            Self::List => "View Campaigns",
        }
    }
}

/// UI state shared through context by the root page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    /// Bumped once per externally requested list reload.
    pub reload_seq: u64,
}

impl UiState {
    pub fn select(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// A campaign was created: request one list reload and show the list.
    pub fn campaign_created(&mut self) {
        self.reload_seq = self.reload_seq.wrapping_add(1);
        self.active_tab = Tab::List;
    }
}

/// Whether the list should reload for `seq`, given the value it last saw.
///
/// Records `seq` as seen. The list seeds `seen` with the value current at
/// mount, so a bump that happened before mounting is covered by the mount
/// load and does not trigger a second one.
pub fn take_reload(seen: &mut u64, seq: u64) -> bool {
    if *seen == seq {
        return false;
    }
    *seen = seq;
    true
}
