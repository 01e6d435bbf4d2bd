//! Admin user management.

use std::collections::BTreeMap;
use std::sync::Arc;

use venture_data::{RecordAction, RecordSource, RequestOutcome};
use venture_model::{FieldValue, User, UserRole, UserStatus};

use crate::collection::{ALL_SENTINEL, CollectionView, FieldMap, FilterSortSpec, SortDirection};

/// Fields of [`User`] available to search, filters and sort.
pub fn user_fields() -> FieldMap<User> {
    FieldMap::<User>::new()
        .field("name", "Name", |u| Some(FieldValue::Text(&u.name)))
        .field("email", "Email", |u| Some(FieldValue::Text(&u.email)))
        .field("role", "Role", |u| Some(FieldValue::Text(u.role.as_str())))
        .field("status", "Status", |u| Some(FieldValue::Text(u.status.as_str())))
        .field("company", "Company", |u| {
            u.company.as_deref().map(FieldValue::Text)
        })
        .field("joined", "Joined", |u| Some(FieldValue::Date(u.joined)))
        .searchable(&["name", "email", "company"])
}

/// The user management screen.
pub struct UserDirectory {
    view: CollectionView<User>,
}

impl UserDirectory {
    pub fn new(source: Arc<dyn RecordSource<User>>) -> Self {
        let spec = FilterSortSpec::new()
            .with_filter("role", ALL_SENTINEL)
            .with_filter("status", ALL_SENTINEL)
            .sorted_by("name", SortDirection::Asc);
        Self {
            view: CollectionView::new(source, user_fields()).with_spec(spec),
        }
    }

    pub fn view(&self) -> &CollectionView<User> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CollectionView<User> {
        &mut self.view
    }

    /// Restrict to one role; `None` shows every role.
    pub fn filter_role(&mut self, role: Option<UserRole>) {
        self.view
            .set_filter("role", role.map_or(ALL_SENTINEL, |role| role.as_str()));
    }

    pub fn filter_status(&mut self, status: Option<UserStatus>) {
        self.view
            .set_filter("status", status.map_or(ALL_SENTINEL, |status| status.as_str()));
    }

    /// Members per role across the whole directory, ignoring filters.
    pub fn role_counts(&self) -> BTreeMap<UserRole, usize> {
        let mut counts: BTreeMap<UserRole, usize> =
            UserRole::all().iter().map(|role| (*role, 0)).collect();
        for user in self.view.source().records() {
            *counts.entry(user.role).or_default() += 1;
        }
        counts
    }

    pub fn edit(&self, id: &str) -> RequestOutcome {
        self.view.request(RecordAction::Edit, id)
    }

    pub fn delete(&self, id: &str) -> RequestOutcome {
        self.view.request(RecordAction::Delete, id)
    }
}
