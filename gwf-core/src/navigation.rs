//! View state machine for the dashboard.
//!
//! The dashboard shows either the regional overview or one well's detail
//! page. Every user action maps to a [`NavEvent`]; [`View::apply`] is the
//! whole transition table. Nothing is rejected or queued: the newest
//! event decides the next view.

use crate::well::WellKey;

/// Sidebar option value standing for the overview page.
pub const HOME: &str = "home";

/// Which page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Overview,
    WellDetail(WellKey),
}

/// A user action that can change the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Sidebar station selector changed; `None` is "Home".
    SidebarSelect(Option<WellKey>),
    /// A map marker was clicked; carries the marker's tooltip text.
    MarkerClicked(String),
    /// The "Back to Regional Map" button.
    Back,
}

impl View {
    /// Next view after `event`.
    pub fn apply(self, event: &NavEvent) -> View {
        match event {
            NavEvent::SidebarSelect(Some(key)) => View::WellDetail(*key),
            NavEvent::SidebarSelect(None) | NavEvent::Back => View::Overview,
            NavEvent::MarkerClicked(tooltip) => match match_marker_tooltip(tooltip) {
                Some(key) => View::WellDetail(key),
                None => {
                    log::warn!("marker tooltip '{}' names no known well", tooltip);
                    self
                }
            },
        }
    }

    /// The well on screen, if any.
    pub fn selected_well(&self) -> Option<WellKey> {
        match self {
            View::Overview => None,
            View::WellDetail(key) => Some(*key),
        }
    }

    /// Value of the sidebar `<select>` that mirrors this view.
    pub fn sidebar_value(&self) -> &'static str {
        self.selected_well().map_or(HOME, |key| key.as_str())
    }
}

/// Decode a sidebar `<select>` value into the event payload.
pub fn parse_sidebar_value(value: &str) -> anyhow::Result<Option<WellKey>> {
    if value.trim().eq_ignore_ascii_case(HOME) {
        Ok(None)
    } else {
        Ok(Some(value.parse()?))
    }
}

/// Find the well whose key occurs in a marker tooltip, ignoring case.
///
/// Substring matching means a key contained in another key or in the rest
/// of the tooltip text could be picked up by mistake. When several keys
/// match, the longest one wins so the result does not depend on
/// iteration order.
pub fn match_marker_tooltip(tooltip: &str) -> Option<WellKey> {
    let lowered = tooltip.to_lowercase();
    WellKey::ALL
        .into_iter()
        .filter(|key| lowered.contains(key.as_str()))
        .max_by_key(|key| key.as_str().len())
}
