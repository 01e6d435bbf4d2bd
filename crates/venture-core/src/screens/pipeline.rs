//! Investment pipeline.

use std::sync::Arc;

use serde::Serialize;
use venture_data::RecordSource;
use venture_model::{Deal, DealStage, FieldValue};

use crate::collection::{ALL_SENTINEL, CollectionView, FieldMap, FilterSortSpec, SortDirection};
use crate::navigation::View;

pub fn deal_fields() -> FieldMap<Deal> {
    FieldMap::<Deal>::new()
        .field("company", "Company", |d| Some(FieldValue::Text(&d.company)))
        .field("sector", "Sector", |d| Some(FieldValue::Text(&d.sector)))
        .field("stage", "Stage", |d| Some(FieldValue::Text(d.stage.as_str())))
        .field("amount", "Amount", |d| Some(FieldValue::Number(d.amount)))
        .field("valuation", "Valuation", |d| d.valuation.map(FieldValue::Number))
        .field("lead_investor", "Lead", |d| {
            Some(FieldValue::Text(&d.lead_investor))
        })
        .field("expected_close", "Expected close", |d| {
            d.expected_close.map(FieldValue::Date)
        })
        .field("tags", "Tags", |d| Some(FieldValue::List(&d.tags)))
        .searchable(&["company", "sector", "lead_investor", "tags"])
}

/// Deal count and volume of one pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageSummary {
    pub stage: DealStage,
    pub count: usize,
    pub amount: f64,
}

/// The investment pipeline screen.
pub struct DealPipeline {
    view: CollectionView<Deal>,
}

impl DealPipeline {
    pub fn new(source: Arc<dyn RecordSource<Deal>>) -> Self {
        let spec = FilterSortSpec::new()
            .with_filter("stage", ALL_SENTINEL)
            .sorted_by("amount", SortDirection::Desc);
        Self {
            view: CollectionView::new(source, deal_fields()).with_spec(spec),
        }
    }

    pub fn view(&self) -> &CollectionView<Deal> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CollectionView<Deal> {
        &mut self.view
    }

    pub fn filter_stage(&mut self, stage: Option<DealStage>) {
        self.view
            .set_filter("stage", stage.map_or(ALL_SENTINEL, |stage| stage.as_str()));
    }

    /// One entry per stage in lifecycle order, over the visible deals.
    pub fn stage_summary(&self) -> Vec<StageSummary> {
        let visible = self.view.visible();
        DealStage::all()
            .iter()
            .map(|stage| {
                let deals = visible.iter().filter(|deal| deal.stage == *stage);
                let (count, amount) = deals.fold((0, 0.0), |(count, amount), deal| {
                    (count + 1, amount + deal.amount)
                });
                StageSummary {
                    stage: *stage,
                    count,
                    amount,
                }
            })
            .collect()
    }

    /// Select a deal row and return the detail view to navigate to.
    pub fn open_deal(&mut self, id: &str) -> View {
        self.view.select_item(id);
        View::deal(id)
    }
}
