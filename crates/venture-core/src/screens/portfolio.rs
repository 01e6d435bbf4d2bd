//! Explore portfolio.

use std::sync::Arc;

use serde::Serialize;
use venture_data::RecordSource;
use venture_model::{FieldValue, Venture, VentureStage};

use crate::collection::{ALL_SENTINEL, CollectionView, FieldMap, FilterSortSpec, SortDirection};
use crate::navigation::View;

pub fn venture_fields() -> FieldMap<Venture> {
    FieldMap::<Venture>::new()
        .field("name", "Venture", |v| Some(FieldValue::Text(&v.name)))
        .field("industry", "Industry", |v| Some(FieldValue::Text(&v.industry)))
        .field("stage", "Stage", |v| Some(FieldValue::Text(v.stage.as_str())))
        .field("founder", "Founder", |v| Some(FieldValue::Text(&v.founder)))
        .field("ownership", "Ownership", |v| {
            Some(FieldValue::Number(v.ownership_pct))
        })
        .field("invested", "Invested", |v| Some(FieldValue::Number(v.invested)))
        .field("current_value", "Value", |v| {
            Some(FieldValue::Number(v.current_value))
        })
        .field("multiple", "Multiple", |v| v.multiple().map(FieldValue::Number))
        .field("founded", "Founded", |v| Some(FieldValue::Date(v.founded)))
        .field("tags", "Tags", |v| Some(FieldValue::List(&v.tags)))
        .searchable(&["name", "industry", "founder", "tags"])
}

/// Totals over a set of ventures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub ventures: usize,
    pub invested: f64,
    pub current_value: f64,
    /// `None` when nothing was invested.
    pub multiple: Option<f64>,
}

impl PortfolioSummary {
    pub fn of<'a>(ventures: impl IntoIterator<Item = &'a Venture>) -> Self {
        let (count, invested, current_value) = ventures.into_iter().fold(
            (0, 0.0, 0.0),
            |(count, invested, value), venture| {
                (count + 1, invested + venture.invested, value + venture.current_value)
            },
        );
        Self {
            ventures: count,
            invested,
            current_value,
            multiple: (invested > 0.0).then(|| current_value / invested),
        }
    }
}

/// The explore-portfolio screen.
pub struct PortfolioExplorer {
    view: CollectionView<Venture>,
}

impl PortfolioExplorer {
    pub fn new(source: Arc<dyn RecordSource<Venture>>) -> Self {
        let spec = FilterSortSpec::new()
            .with_filter("industry", ALL_SENTINEL)
            .with_filter("stage", ALL_SENTINEL)
            .sorted_by("current_value", SortDirection::Desc);
        Self {
            view: CollectionView::new(source, venture_fields()).with_spec(spec),
        }
    }

    pub fn view(&self) -> &CollectionView<Venture> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CollectionView<Venture> {
        &mut self.view
    }

    pub fn filter_industry(&mut self, industry: Option<&str>) {
        self.view.set_filter("industry", industry.unwrap_or(ALL_SENTINEL));
    }

    pub fn filter_stage(&mut self, stage: Option<VentureStage>) {
        self.view
            .set_filter("stage", stage.map_or(ALL_SENTINEL, |stage| stage.as_str()));
    }

    /// Distinct industries in source order, for the filter dropdown.
    pub fn industries(&self) -> Vec<&str> {
        let mut industries: Vec<&str> = Vec::new();
        for venture in self.view.source().records() {
            if !industries.contains(&venture.industry.as_str()) {
                industries.push(&venture.industry);
            }
        }
        industries
    }

    /// Totals over the visible ventures.
    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary::of(self.view.visible())
    }

    pub fn open_venture(&mut self, id: &str) -> View {
        self.view.select_item(id);
        View::venture(id)
    }
}
