//! Screen view models.
//!
//! Each screen receives one view model exposing its operations instead of
//! a bundle of callbacks. [`Workspace`] owns all of them plus the current
//! [`View`] and the docked assistant panel.

mod deal_detail;
mod onboarding;
mod pipeline;
mod portfolio;
mod users;
mod ventures;

use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;
use venture_data::{RecordSource, SampleCatalog};
use venture_model::{Deal, Venture};

use crate::error::PanelError;
use crate::navigation::{DealTab, View};
use crate::panel::{DEFAULT_AGENTS, DockedPanel, DragSurface, PanelConfig};

pub use deal_detail::{ClosingChecklist, DetailView, lookup};
pub use onboarding::{
    DIRECTION_STEP, INTELLIGENCE_STEP, INTEREST_AREAS, MINDSET_STEP, OnboardingFlow,
    OnboardingSummary, PROFILE_STEP, ROLE_STEP,
};
pub use pipeline::{DealPipeline, StageSummary, deal_fields};
pub use portfolio::{PortfolioExplorer, PortfolioSummary, venture_fields};
pub use users::{UserDirectory, user_fields};
pub use ventures::MyVentures;

/// Page-level container for every screen of a signed-in member.
pub struct Workspace {
    catalog: SampleCatalog,
    view: View,
    history: Vec<View>,
    pub users: UserDirectory,
    pub pipeline: DealPipeline,
    pub portfolio: PortfolioExplorer,
    pub my_ventures: MyVentures,
    pub panel: DockedPanel,
    checklists: BTreeMap<String, ClosingChecklist>,
}

impl Workspace {
    /// Build every screen over `catalog` for the member named `member`.
    pub fn new(
        catalog: SampleCatalog,
        member: &str,
        panel: PanelConfig,
        surface: Rc<dyn DragSurface>,
    ) -> Result<Self, PanelError> {
        let panel =
            DockedPanel::new(panel, surface)?.with_agents(DEFAULT_AGENTS.iter().copied());
        Ok(Self {
            users: UserDirectory::new(catalog.users.clone()),
            pipeline: DealPipeline::new(catalog.deals.clone()),
            portfolio: PortfolioExplorer::new(catalog.ventures.clone()),
            my_ventures: MyVentures::new(catalog.ventures.clone(), member),
            catalog,
            view: View::default(),
            history: Vec::new(),
            panel,
            checklists: BTreeMap::new(),
        })
    }

    /// Start on `view` instead of the dashboard, with no history.
    #[must_use]
    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self.history.clear();
        self
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn catalog(&self) -> &SampleCatalog {
        &self.catalog
    }

    pub fn navigate(&mut self, view: View) {
        if view == self.view {
            return;
        }
        debug!(from = self.view.title(), to = view.title(), "navigate");
        let previous = std::mem::replace(&mut self.view, view);
        self.history.push(previous);
    }

    /// Return to the previous screen, or the detail's parent list when
    /// there is no history. Returns the view now shown.
    pub fn back(&mut self) -> &View {
        let target = self
            .history
            .pop()
            .or_else(|| self.view.parent())
            .unwrap_or_default();
        debug!(to = target.title(), "navigate back");
        self.view = target;
        &self.view
    }

    pub fn open_deal(&mut self, id: &str) {
        let view = self.pipeline.open_deal(id);
        self.navigate(view);
    }

    /// Switch tabs on the deal screen. Ignored elsewhere.
    pub fn select_tab(&mut self, tab: DealTab) {
        if let View::DealDetail { tab: current, .. } = &mut self.view {
            *current = tab;
        }
    }

    /// The deal the current view points at.
    pub fn deal_detail(&self) -> Option<DetailView<'_, Deal>> {
        let id = self.view.current_deal()?;
        Some(lookup::<Deal>(
            self.catalog.deals.as_ref(),
            id,
            View::Pipeline,
        ))
    }

    pub fn venture_detail(&self) -> Option<DetailView<'_, Venture>> {
        match &self.view {
            View::VentureDetail { venture_id } => Some(lookup::<Venture>(
                self.catalog.ventures.as_ref(),
                venture_id,
                View::MyVentures,
            )),
            _ => None,
        }
    }

    /// Closing flags for `deal_id`, fresh for a deal not seen before.
    /// `None` when the catalog has no such deal.
    pub fn checklist(&mut self, deal_id: &str) -> Option<&mut ClosingChecklist> {
        self.catalog.deals.find(deal_id)?;
        Some(self.checklists.entry(deal_id.to_string()).or_default())
    }
}
