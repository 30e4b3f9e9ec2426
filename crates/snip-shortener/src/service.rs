use async_trait::async_trait;
use rand::rngs::StdRng;
use snip_core::{
    AllocError, AllocateParams, IdStrategy, Link, LinkId, ReadRepository, Repository, Shortener,
    StorageError,
};
use snip_generator::{Generator, RandomGenerator, ReadableGenerator, WordLists};
use std::sync::Arc;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

/// Default bound on insert attempts for randomized strategies.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Tunables of the allocation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct AllocatorSettings {
    /// Insert attempts before a randomized allocation gives up with
    /// [`AllocError::Exhausted`]. Zero is treated as one.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,
}

impl AllocatorSettings {
    fn attempt_bound(&self) -> usize {
        self.max_attempts.max(1)
    }
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// The allocator: picks ids, stores links and retries collisions.
///
/// `R` is the link store, `A` draws [`IdStrategy::RandomOpaque`] candidates
/// and `B` draws [`IdStrategy::ReadableWordPair`] candidates. Uniqueness
/// rests entirely on [`Repository::insert_if_absent`]; the service never
/// checks for an id before inserting it.
///
/// Clones share the store and the generators.
#[derive(Debug)]
pub struct ShortenerService<R, A, B> {
    repository: Arc<R>,
    random: Arc<A>,
    readable: Arc<B>,
    settings: AllocatorSettings,
}

impl<R, A, B> Clone for ShortenerService<R, A, B> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            random: Arc::clone(&self.random),
            readable: Arc::clone(&self.readable),
            settings: self.settings,
        }
    }
}

impl<R: Repository> ShortenerService<R, RandomGenerator<StdRng>, ReadableGenerator<StdRng>> {
    /// Eight-character ids over the unambiguous charset and word-pair ids
    /// over `words`, both seeded from the operating system.
    pub fn standard(repository: R, words: WordLists) -> Self {
        Self::new(
            repository,
            RandomGenerator::default(),
            ReadableGenerator::from_os_rng(words),
        )
    }
}

impl<R: Repository, A: Generator, B: Generator> ShortenerService<R, A, B> {
    pub fn new(repository: R, random: A, readable: B) -> Self {
        Self {
            repository: Arc::new(repository),
            random: Arc::new(random),
            readable: Arc::new(readable),
            settings: AllocatorSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: AllocatorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &AllocatorSettings {
        &self.settings
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    async fn allocate_custom(
        &self,
        literal: String,
        target: String,
        creator_ip: String,
    ) -> Result<Link, AllocError> {
        let id = LinkId::new(literal)?;
        let link = Link::new(id, target, creator_ip);

        match self.repository.insert_if_absent(link.clone()).await {
            Ok(()) => {
                info!(id = %link.id, strategy = "custom", attempts = 1, "allocated link");
                Ok(link)
            }
            Err(StorageError::Conflict(id)) => Err(AllocError::IdentifierTaken(id)),
            Err(err) => Err(err.into()),
        }
    }

    async fn allocate_generated<G: Generator>(
        &self,
        generator: &G,
        strategy: &IdStrategy,
        target: String,
        creator_ip: String,
    ) -> Result<Link, AllocError> {
        let max_attempts = self.settings.attempt_bound();

        for attempt in 1..=max_attempts {
            // fresh id and fresh timestamp for every attempt
            let link = Link::new(generator.generate(), target.clone(), creator_ip.clone());

            match self.repository.insert_if_absent(link.clone()).await {
                Ok(()) => {
                    info!(id = %link.id, %strategy, attempts = attempt, "allocated link");
                    return Ok(link);
                }
                Err(StorageError::Conflict(id)) => {
                    debug!(%id, %strategy, attempt, "id already taken, drawing another");
                }
                Err(err) => return Err(err.into()),
            }
        }

        warn!(%strategy, attempts = max_attempts, "no free id found");
        Err(AllocError::Exhausted {
            attempts: max_attempts,
        })
    }
}

#[async_trait]
impl<R: Repository, A: Generator, B: Generator> Shortener for ShortenerService<R, A, B> {
    async fn allocate(&self, params: AllocateParams) -> Result<Link, AllocError> {
        let AllocateParams {
            strategy,
            target,
            creator_ip,
        } = params;

        if target.is_empty() {
            return Err(AllocError::InvalidTarget(
                "target URL cannot be empty".to_string(),
            ));
        }

        match strategy {
            IdStrategy::Custom(literal) => self.allocate_custom(literal, target, creator_ip).await,
            IdStrategy::RandomOpaque => {
                self.allocate_generated(&*self.random, &IdStrategy::RandomOpaque, target, creator_ip)
                    .await
            }
            IdStrategy::ReadableWordPair => {
                self.allocate_generated(
                    &*self.readable,
                    &IdStrategy::ReadableWordPair,
                    target,
                    creator_ip,
                )
                .await
            }
        }
    }

    async fn lookup(&self, id: &str) -> Result<Option<Link>, AllocError> {
        // nothing can be stored under an id that fails validation
        let Ok(id) = LinkId::new(id) else {
            return Ok(None);
        };

        Ok(self.repository.get(&id).await?)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AllocError> {
        let Ok(link_id) = LinkId::new(id) else {
            return Err(AllocError::NotFound(id.to_string()));
        };

        if self.repository.delete(&link_id).await? {
            info!(id = %link_id, "deleted link");
            Ok(())
        } else {
            Err(AllocError::NotFound(link_id.into_string()))
        }
    }
}
