//! Application state shared across all handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::fixtures;
use crate::list::{Entity, ListController};
use crate::models::{
    Admin, Clan, Community, EthnicGroup, Event, Family, FamilyHistory, NewsArticle, Role,
    SubClan, VerificationItem,
};

/// Access to the collection holding entities of type `T`.
pub trait HasCollection<T: Entity> {
    fn collection(&self) -> &RwLock<ListController<T>>;
}

/// Every console collection, each behind its own lock.
#[derive(Default)]
pub struct Collections {
    pub admins: RwLock<ListController<Admin>>,
    pub ethnic_groups: RwLock<ListController<EthnicGroup>>,
    pub clans: RwLock<ListController<Clan>>,
    pub sub_clans: RwLock<ListController<SubClan>>,
    pub roles: RwLock<ListController<Role>>,
    pub communities: RwLock<ListController<Community>>,
    pub events: RwLock<ListController<Event>>,
    pub news: RwLock<ListController<NewsArticle>>,
    pub families: RwLock<ListController<Family>>,
    pub family_histories: RwLock<ListController<FamilyHistory>>,
    pub verifications: RwLock<ListController<VerificationItem>>,
}

impl Collections {
    /// Collections preloaded with the bundled fixture data.
    pub fn seeded() -> Self {
        Self {
            admins: seed(fixtures::admins()),
            ethnic_groups: seed(fixtures::ethnic_groups()),
            clans: seed(fixtures::clans()),
            sub_clans: seed(fixtures::sub_clans()),
            roles: seed(fixtures::roles()),
            communities: seed(fixtures::communities()),
            events: seed(fixtures::events()),
            news: seed(fixtures::news()),
            families: seed(fixtures::families()),
            family_histories: seed(fixtures::family_histories()),
            verifications: seed(fixtures::verifications()),
        }
    }
}

fn seed<T: Entity>(items: Vec<T>) -> RwLock<ListController<T>> {
    tracing::debug!(collection = T::COLLECTION, count = items.len(), "seeding");
    RwLock::new(ListController::with_items(items))
}

macro_rules! has_collection {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            impl HasCollection<$ty> for Collections {
                fn collection(&self) -> &RwLock<ListController<$ty>> {
                    &self.$field
                }
            }
        )*
    };
}

has_collection! {
    admins: Admin,
    ethnic_groups: EthnicGroup,
    clans: Clan,
    sub_clans: SubClan,
    roles: Role,
    communities: Community,
    events: Event,
    news: NewsArticle,
    families: Family,
    family_histories: FamilyHistory,
    verifications: VerificationItem,
}

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub collections: Arc<Collections>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let collections = if config.seed_fixtures {
            Collections::seeded()
        } else {
            Collections::default()
        };
        Self {
            collections: Arc::new(collections),
            config: Arc::new(config),
        }
    }

    pub fn collection<T: Entity>(&self) -> &RwLock<ListController<T>>
    where
        Collections: HasCollection<T>,
    {
        <Collections as HasCollection<T>>::collection(&self.collections)
    }

    /// Wait out the configured artificial latency before a mutation.
    pub async fn simulate_latency(&self) {
        let delay = self.config.mock_latency;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
