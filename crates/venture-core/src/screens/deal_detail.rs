//! Deal lifecycle detail: lookup, tabs and the closing checklist.

use serde::Serialize;
use tracing::{debug, warn};
use venture_data::RecordSource;
use venture_model::Identified;

use crate::navigation::View;

/// Result of resolving a detail route.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<'a, T> {
    Found(&'a T),
    /// The id did not resolve; `back` is where the "return" link leads.
    NotFound { id: String, back: View },
}

impl<'a, T> DetailView<'a, T> {
    pub fn found(&self) -> Option<&'a T> {
        match self {
            Self::Found(record) => Some(*record),
            Self::NotFound { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Resolve `id` in `source`, falling back to a not-found view.
pub fn lookup<'a, T: Identified>(
    source: &'a dyn RecordSource<T>,
    id: &str,
    back: View,
) -> DetailView<'a, T> {
    match source.find(id) {
        Some(record) => DetailView::Found(record),
        None => {
            warn!(kind = source.kind(), id, "detail lookup found no record");
            DetailView::NotFound {
                id: id.to_string(),
                back,
            }
        }
    }
}

/// Agreement flags on the closing tab. Nothing is persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClosingChecklist {
    pub agreement_generated: bool,
    pub agreement_signed: bool,
}

impl ClosingChecklist {
    pub fn generate_agreement(&mut self) {
        self.agreement_generated = true;
        debug!("agreement generated");
    }

    /// Sign the generated agreement. Ignored until one is generated;
    /// returns whether the agreement is signed afterwards.
    pub fn sign_agreement(&mut self) -> bool {
        if !self.agreement_generated {
            debug!("ignoring signature before the agreement exists");
            return false;
        }
        self.agreement_signed = true;
        debug!("agreement signed");
        true
    }

    pub fn is_complete(&self) -> bool {
        self.agreement_generated && self.agreement_signed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signing_requires_generation() {
        let mut checklist = ClosingChecklist::default();
        assert!(!checklist.sign_agreement());
        assert!(!checklist.agreement_signed);
        checklist.generate_agreement();
        assert!(checklist.sign_agreement());
        assert!(checklist.is_complete());
    }
}
