//! Filterable, sortable, selectable collection views.

mod compare;
mod fields;
mod pipeline;
mod selection;
mod spec;
mod view;

pub use compare::{compare_values, locale_cmp};
pub use fields::{Accessor, Field, FieldMap};
pub use pipeline::{apply_filters, apply_sort, apply_spec};
pub use selection::SelectionSet;
pub use spec::{ALL_SENTINEL, FilterSortSpec, SortDirection};
pub use view::CollectionView;
