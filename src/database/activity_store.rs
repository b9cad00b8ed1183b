use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::database::seed;
use crate::models::Activity;

/// Process-scoped activity directory. Cloning shares the same underlying map,
/// so one instance is built at startup and handed to the router as state.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    activities: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityStore {
    pub fn new<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = (S, Activity)>,
        S: Into<String>,
    {
        let map = activities
            .into_iter()
            .map(|(name, activity)| (name.into(), activity))
            .collect();
        Self {
            activities: Arc::new(RwLock::new(map)),
        }
    }

    /// A fresh store holding the school's fixed activity set.
    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub async fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    /// Runs `f` against the named activity while holding the write lock, so a
    /// membership check and the mutation that depends on it cannot interleave
    /// with another writer. Returns `None` when the activity does not exist.
    pub async fn update<T, E>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> Result<T, E>,
    ) -> Option<Result<T, E>> {
        let mut activities = self.activities.write().await;
        activities.get_mut(name).map(f)
    }
}
