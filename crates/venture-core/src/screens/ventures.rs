//! Ventures founded by the signed-in member.

use std::sync::Arc;

use venture_data::RecordSource;
use venture_model::Venture;

use crate::collection::{CollectionView, FilterSortSpec, SortDirection};
use crate::navigation::View;

use super::portfolio::{PortfolioSummary, venture_fields};

/// The my-ventures screen. The founder filter is pinned, so search and
/// sort never surface another founder's ventures.
pub struct MyVentures {
    founder: String,
    view: CollectionView<Venture>,
}

impl MyVentures {
    pub fn new(source: Arc<dyn RecordSource<Venture>>, founder: impl Into<String>) -> Self {
        let founder = founder.into();
        let spec = FilterSortSpec::new().sorted_by("founded", SortDirection::Desc);
        let view = CollectionView::new(source, venture_fields())
            .with_spec(spec)
            .with_pinned_filter("founder", founder.clone());
        Self { founder, view }
    }

    pub fn founder(&self) -> &str {
        &self.founder
    }

    pub fn view(&self) -> &CollectionView<Venture> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CollectionView<Venture> {
        &mut self.view
    }

    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary::of(self.view.visible())
    }

    pub fn open_venture(&mut self, id: &str) -> View {
        self.view.select_item(id);
        View::venture(id)
    }
}
