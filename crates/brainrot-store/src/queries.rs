//! Common query patterns over the collection.

use crate::error::Result;
use crate::store::CollectionStore;
use brainrot_core::CreatureInstance;

impl CollectionStore {
    /// Instances of a base, highest effective income first.
    ///
    /// Instances with equal income keep their stored order.
    pub fn instances_by_income(&self, base_name: &str) -> Result<Vec<CreatureInstance>> {
        let mut instances = self.find_base(base_name)?.brainrots;
        sort_by_income(&mut instances);
        Ok(instances)
    }
}

/// Sort instances by descending effective income, keeping ties in order.
pub fn sort_by_income(instances: &mut [CreatureInstance]) {
    instances.sort_by(|a, b| b.effective_income().total_cmp(&a.effective_income()));
}
