use crate::link::Link;
use crate::strategy::IdStrategy;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::AllocError>;

/// Parameters for creating a link.
#[derive(Debug, Clone)]
pub struct AllocateParams {
    /// How to pick the id.
    pub strategy: IdStrategy,
    /// The URL the link points at. Must not be empty.
    pub target: String,
    /// Textual IP address of the requesting client.
    pub creator_ip: String,
}

impl AllocateParams {
    pub fn new(
        strategy: IdStrategy,
        target: impl Into<String>,
        creator_ip: impl Into<String>,
    ) -> Self {
        Self {
            strategy,
            target: target.into(),
            creator_ip: creator_ip.into(),
        }
    }
}

/// The operations the transport layer calls into.
///
/// No authorization happens here; whoever exposes `delete_by_id` decides
/// who may call it.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Stores a new link under a freshly allocated id.
    async fn allocate(&self, params: AllocateParams) -> Result<Link>;

    /// Looks up the link stored under `id`.
    async fn lookup(&self, id: &str) -> Result<Option<Link>>;

    /// Deletes the link stored under `id`.
    /// Returns `Err(AllocError::NotFound)` if there is none.
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}
