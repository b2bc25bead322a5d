//! Shared fixtures for handler tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::{
    InMemoryColliRepository, InMemoryCommentRepository, InMemoryEventBus,
    InMemoryLetterRepository, InMemoryUserRepository,
};
use crate::domain::colli::{Colli, MemberRole};
use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode, EventEnvelope, UserId};
use crate::domain::user::{User, UserRole};
use crate::ports::{ColliRepository, EventPublisher};

/// Publisher whose broker is always down.
pub(crate) struct FailingEventPublisher;

#[async_trait]
impl EventPublisher for FailingEventPublisher {
    async fn publish(&self, _event: EventEnvelope) -> Result<(), DomainError> {
        Err(DomainError::new(ErrorCode::EventPublishFailed, "broker unavailable"))
    }

    async fn publish_all(&self, _events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        Err(DomainError::new(ErrorCode::EventPublishFailed, "broker unavailable"))
    }
}

pub(crate) fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub(crate) fn as_user(id: &str) -> CommandMetadata {
    CommandMetadata::new(user(id)).with_correlation_id("test-correlation")
}

/// In-memory ports seeded with `root` (admin) and `alice`, `bob`, `carol`,
/// `dave` (regular users).
pub(crate) struct Fixture {
    pub collis: Arc<InMemoryColliRepository>,
    pub letters: Arc<InMemoryLetterRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub bus: Arc<InMemoryEventBus>,
}

impl Fixture {
    pub fn new() -> Self {
        let users = InMemoryUserRepository::with_users(
            [
                ("root", UserRole::Admin),
                ("alice", UserRole::User),
                ("bob", UserRole::User),
                ("carol", UserRole::User),
                ("dave", UserRole::User),
            ]
            .into_iter()
            .map(|(id, role)| User::new(user(id), id, role)),
        );
        Self {
            collis: Arc::new(InMemoryColliRepository::new()),
            letters: Arc::new(InMemoryLetterRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            users: Arc::new(users),
            bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    /// A PENDING Colli created by alice.
    pub async fn pending_colli(&self) -> Colli {
        let colli = Colli::create("Plumes Croisées", "Voyages", user("alice"), None).unwrap();
        self.collis.save(&colli).await.unwrap()
    }

    /// An ACTIVE Colli managed by alice, with bob ACCEPTED and carol PENDING.
    pub async fn active_colli(&self) -> Colli {
        let mut colli = Colli::create("Plumes Croisées", "Voyages", user("alice"), None).unwrap();
        colli.approve(Some(user("root"))).unwrap();
        colli.add_member(user("bob"), MemberRole::Member).unwrap();
        colli.accept_member(&user("bob")).unwrap();
        colli.add_member(user("carol"), MemberRole::Member).unwrap();
        self.collis.save(&colli).await.unwrap()
    }

    pub async fn reload(&self, colli: &Colli) -> Colli {
        self.collis.find_by_id(colli.id()).await.unwrap().unwrap()
    }
}
