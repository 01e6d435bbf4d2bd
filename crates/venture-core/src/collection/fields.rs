//! Typed field accessors for generic collection views.

use venture_model::FieldValue;

/// Reads one field of a record, `None` when the record has no value.
pub type Accessor<T> = for<'r> fn(&'r T) -> Option<FieldValue<'r>>;

/// A named field of a record type.
pub struct Field<T> {
    name: &'static str,
    label: &'static str,
    access: Accessor<T>,
}

impl<T> Field<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Column header for tables.
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value<'r>(&self, record: &'r T) -> Option<FieldValue<'r>> {
        (self.access)(record)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            label: self.label,
            access: self.access,
        }
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// The fields a collection exposes, plus which of them the search box
/// looks at.
///
/// # Example
///
/// ```
/// use venture_core::collection::FieldMap;
/// use venture_model::{FieldValue, User};
///
/// let fields = FieldMap::<User>::new()
///     .field("name", "Name", |u| Some(FieldValue::Text(&u.name)))
///     .field("company", "Company", |u| u.company.as_deref().map(FieldValue::Text))
///     .searchable(&["name", "company"]);
/// assert_eq!(fields.search_fields(), &["name", "company"]);
/// ```
pub struct FieldMap<T> {
    fields: Vec<Field<T>>,
    search: Vec<&'static str>,
}

impl<T> FieldMap<T> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            search: Vec::new(),
        }
    }

    /// Register a field. A later registration with the same name replaces
    /// the earlier one.
    #[must_use]
    pub fn field(mut self, name: &'static str, label: &'static str, access: Accessor<T>) -> Self {
        let field = Field {
            name,
            label,
            access,
        };
        match self.fields.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Mark fields as searched by the free-text query. Unknown names are
    /// kept and simply never match.
    #[must_use]
    pub fn searchable(mut self, names: &[&'static str]) -> Self {
        for name in names {
            if !self.search.contains(name) {
                self.search.push(name);
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Field<T>> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Value of `name` on `record`; `None` for unknown fields too.
    pub fn value<'r>(&self, record: &'r T, name: &str) -> Option<FieldValue<'r>> {
        self.get(name).and_then(|field| field.value(record))
    }

    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    pub fn search_fields(&self) -> &[&'static str] {
        &self.search
    }
}

impl<T> Default for FieldMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FieldMap<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            search: self.search.clone(),
        }
    }
}

impl<T> std::fmt::Debug for FieldMap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldMap")
            .field("fields", &self.fields)
            .field("search", &self.search)
            .finish()
    }
}
