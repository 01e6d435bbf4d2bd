//! The complete set of sample collections.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use venture_model::{Deal, User, Venture};

use crate::error::Result;
use crate::loaders::{load_deals, load_users, load_ventures};
use crate::paths::{deals_path, sample_data_root, users_path, ventures_path};
use crate::repository::InMemorySource;

/// Users, deals and ventures loaded from one sample data directory.
#[derive(Debug, Clone)]
pub struct SampleCatalog {
    pub users: Arc<InMemorySource<User>>,
    pub deals: Arc<InMemorySource<Deal>>,
    pub ventures: Arc<InMemorySource<Venture>>,
}

impl SampleCatalog {
    /// Load all collections from `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let users = InMemorySource::new("user", load_users(&users_path(root))?)?;
        let deals = InMemorySource::new("deal", load_deals(&deals_path(root))?)?;
        let ventures = InMemorySource::new("venture", load_ventures(&ventures_path(root))?)?;
        info!(
            root = %root.display(),
            users = users.len(),
            deals = deals.len(),
            ventures = ventures.len(),
            "sample data loaded"
        );
        Ok(Self {
            users: Arc::new(users),
            deals: Arc::new(deals),
            ventures: Arc::new(ventures),
        })
    }

    /// Load from [`sample_data_root`].
    pub fn load_default() -> Result<Self> {
        Self::load(&sample_data_root())
    }
}
