//! Navigation state types.
//!
//! - `View`: the screen shown in the main content area
//! - `DealTab`: tabs of the deal lifecycle screen

use serde::Serialize;

// =============================================================================
// VIEW ENUM
// =============================================================================

/// Current screen of the application.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// Landing page with portfolio and pipeline summaries
    #[default]
    Dashboard,

    /// Admin user management
    Users,

    /// Investment pipeline
    Pipeline,

    /// Deal lifecycle with tabbed interface
    DealDetail {
        /// Id of the deal being viewed
        deal_id: String,
        /// Active tab
        tab: DealTab,
    },

    /// Explore portfolio
    Portfolio,

    /// Ventures founded by the current member
    MyVentures,

    /// Venture management page
    VentureDetail { venture_id: String },

    /// First-run onboarding wizard
    Onboarding,
}

impl View {
    /// Open a deal on its first tab.
    pub fn deal(deal_id: impl Into<String>) -> Self {
        Self::DealDetail {
            deal_id: deal_id.into(),
            tab: DealTab::default(),
        }
    }

    pub fn venture(venture_id: impl Into<String>) -> Self {
        Self::VentureDetail {
            venture_id: venture_id.into(),
        }
    }

    /// Screen title for headers and breadcrumbs.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Users => "User Management",
            Self::Pipeline => "Investment Pipeline",
            Self::DealDetail { .. } => "Deal",
            Self::Portfolio => "Explore Portfolio",
            Self::MyVentures => "My Ventures",
            Self::VentureDetail { .. } => "Venture",
            Self::Onboarding => "Onboarding",
        }
    }

    /// The list a detail screen returns to. `None` for top-level screens.
    pub fn parent(&self) -> Option<View> {
        match self {
            Self::DealDetail { .. } => Some(Self::Pipeline),
            Self::VentureDetail { .. } => Some(Self::MyVentures),
            _ => None,
        }
    }

    pub fn current_deal(&self) -> Option<&str> {
        match self {
            Self::DealDetail { deal_id, .. } => Some(deal_id),
            _ => None,
        }
    }

    pub fn current_tab(&self) -> Option<DealTab> {
        match self {
            Self::DealDetail { tab, .. } => Some(*tab),
            _ => None,
        }
    }
}

// =============================================================================
// DEAL TAB ENUM
// =============================================================================

/// Tabs of the deal lifecycle screen, in lifecycle order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DealTab {
    #[default]
    DueDiligence,
    Terms,
    Closing,
}

impl DealTab {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DueDiligence => "Due Diligence",
            Self::Terms => "Terms",
            Self::Closing => "Closing",
        }
    }

    pub const fn all() -> &'static [DealTab] {
        &[Self::DueDiligence, Self::Terms, Self::Closing]
    }

    /// 0-based position in the tab strip.
    pub fn index(&self) -> usize {
        match self {
            Self::DueDiligence => 0,
            Self::Terms => 1,
            Self::Closing => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::DueDiligence),
            1 => Some(Self::Terms),
            2 => Some(Self::Closing),
            _ => None,
        }
    }

    /// Parse a tab key such as `due-diligence` or `terms`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "due_diligence" | "diligence" => Some(Self::DueDiligence),
            "terms" => Some(Self::Terms),
            "closing" => Some(Self::Closing),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_indices_round_trip() {
        for tab in DealTab::all() {
            assert_eq!(DealTab::from_index(tab.index()), Some(*tab));
        }
        assert_eq!(DealTab::from_index(3), None);
    }

    #[test]
    fn tab_keys() {
        assert_eq!(DealTab::from_key("due-diligence"), Some(DealTab::DueDiligence));
        assert_eq!(DealTab::from_key("Closing"), Some(DealTab::Closing));
        assert_eq!(DealTab::from_key("cap-table"), None);
    }

    #[test]
    fn detail_views_have_parents() {
        let view = View::deal("d-101");
        assert_eq!(view.current_deal(), Some("d-101"));
        assert_eq!(view.current_tab(), Some(DealTab::DueDiligence));
        assert_eq!(view.parent(), Some(View::Pipeline));
        assert_eq!(View::venture("v-201").parent(), Some(View::MyVentures));
        assert_eq!(View::Users.parent(), None);
    }
}
