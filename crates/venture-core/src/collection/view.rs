//! Stateful collection view owned by a screen.

use std::sync::Arc;

use tracing::debug;

use venture_data::{RecordAction, RecordSource, RequestOutcome};
use venture_model::Identified;

use super::fields::FieldMap;
use super::pipeline::apply_spec;
use super::spec::{FilterSortSpec, SortDirection};

type SelectCallback = Box<dyn FnMut(&str)>;

/// A filterable, sortable projection of a record source.
///
/// The view owns its [`FilterSortSpec`]; the records stay in the source and
/// every call to [`visible`](Self::visible) derives a fresh list from them.
pub struct CollectionView<T: Identified + 'static> {
    source: Arc<dyn RecordSource<T>>,
    fields: FieldMap<T>,
    initial_spec: FilterSortSpec,
    spec: FilterSortSpec,
    /// Filters the user cannot change, applied on top of `spec`.
    pinned: Vec<(String, String)>,
    on_select: Option<SelectCallback>,
}

impl<T: Identified + 'static> CollectionView<T> {
    pub fn new(source: Arc<dyn RecordSource<T>>, fields: FieldMap<T>) -> Self {
        Self {
            source,
            fields,
            initial_spec: FilterSortSpec::default(),
            spec: FilterSortSpec::default(),
            pinned: Vec::new(),
            on_select: None,
        }
    }

    /// Start from `spec`; [`reset`](Self::reset) returns to it.
    #[must_use]
    pub fn with_spec(mut self, spec: FilterSortSpec) -> Self {
        self.initial_spec = spec.clone();
        self.spec = spec;
        self
    }

    /// Constrain `field` to `value` regardless of the user's filters.
    #[must_use]
    pub fn with_pinned_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.pinned.push((field.into(), value.into()));
        self
    }

    /// Register the selection callback.
    #[must_use]
    pub fn on_select(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn spec(&self) -> &FilterSortSpec {
        &self.spec
    }

    pub fn fields(&self) -> &FieldMap<T> {
        &self.fields
    }

    pub fn source(&self) -> &Arc<dyn RecordSource<T>> {
        &self.source
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.spec.search_query = query.into();
    }

    /// Select `value` for `field`; pass [`ALL_SENTINEL`](super::ALL_SENTINEL)
    /// to disable the filter.
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.spec.field_filters.insert(field.into(), value.into());
    }

    pub fn set_sort(&mut self, key: impl Into<String>, direction: SortDirection) {
        self.spec.sort_key = Some(key.into());
        self.spec.sort_direction = direction;
    }

    /// Column-header behaviour: the active key flips direction, a new key
    /// starts ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.spec.sort_key.as_deref() == Some(key) {
            self.spec.sort_direction = self.spec.sort_direction.toggled();
        } else {
            self.set_sort(key, SortDirection::Asc);
        }
    }

    pub fn reset(&mut self) {
        self.spec = self.initial_spec.clone();
    }

    /// Records passing the current spec, in display order.
    pub fn visible(&self) -> Vec<&T> {
        let records = self.source.records();
        let visible = if self.pinned.is_empty() {
            apply_spec(records, &self.spec, &self.fields)
        } else {
            let mut effective = self.spec.clone();
            for (field, value) in &self.pinned {
                effective.field_filters.insert(field.clone(), value.clone());
            }
            apply_spec(records, &effective, &self.fields)
        };
        debug!(
            kind = self.source.kind(),
            total = records.len(),
            visible = visible.len(),
            query = %self.spec.search_query,
            "collection view derived"
        );
        visible
    }

    pub fn total(&self) -> usize {
        self.source.records().len()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.source.find(id)
    }

    /// Notify the selection callback. The derived list does not change.
    pub fn select_item(&mut self, id: &str) {
        debug!(kind = self.source.kind(), id, "item selected");
        if let Some(callback) = self.on_select.as_mut() {
            callback(id);
        }
    }

    /// Forward an edit/delete request to the read-only source.
    pub fn request(&self, action: RecordAction, id: &str) -> RequestOutcome {
        self.source.request(action, id)
    }
}
