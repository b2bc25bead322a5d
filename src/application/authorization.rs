//! Actor-level permission checks.
//!
//! The Colli aggregate answers membership questions; these helpers turn
//! the answers into allow/deny decisions for a given actor.

use tracing::warn;

use crate::domain::colli::{Colli, ColliError, ColliStatus};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::UserRepository;

use super::UseCaseError;

/// True when the user exists and holds the platform ADMIN role.
pub(crate) async fn is_admin(
    users: &dyn UserRepository,
    user_id: &UserId,
) -> Result<bool, DomainError> {
    Ok(users
        .find_by_id(user_id)
        .await?
        .is_some_and(|user| user.is_admin()))
}

/// Admin override when a user repository is wired.
///
/// Without one the override is skipped: the answer is `false`, never an error.
pub(crate) async fn is_admin_if_wired(
    users: Option<&dyn UserRepository>,
    user_id: &UserId,
) -> Result<bool, DomainError> {
    match users {
        Some(users) => is_admin(users, user_id).await,
        None => Ok(false),
    }
}

pub(crate) async fn require_admin(
    users: &dyn UserRepository,
    actor: &UserId,
    action: &str,
) -> Result<(), UseCaseError> {
    if is_admin(users, actor).await? {
        return Ok(());
    }
    warn!(user_id = %actor, action, "Denied: admin role required");
    Err(UseCaseError::forbidden(format!("only administrators can {action}")))
}

pub(crate) async fn require_manager_or_admin(
    colli: &Colli,
    users: &dyn UserRepository,
    actor: &UserId,
    action: &str,
) -> Result<(), UseCaseError> {
    if colli.is_manager(actor) || is_admin(users, actor).await? {
        return Ok(());
    }
    warn!(colli_id = %colli.id(), user_id = %actor, action, "Denied: manager or admin required");
    Err(UseCaseError::forbidden(format!(
        "only the colli manager or an administrator can {action}"
    )))
}

pub(crate) fn require_member_manager(
    colli: &Colli,
    actor: &UserId,
    action: &str,
) -> Result<(), UseCaseError> {
    let allowed = colli
        .get_member(actor)
        .is_some_and(|m| m.can_manage_members());
    if allowed {
        return Ok(());
    }
    warn!(colli_id = %colli.id(), user_id = %actor, action, "Denied: manager required");
    Err(UseCaseError::forbidden(format!("only colli managers can {action}")))
}

/// Posting letters and comments: an ACTIVE Colli and an ACCEPTED member,
/// checked in that order.
pub(crate) fn require_writer(
    colli: &Colli,
    actor: &UserId,
    action: &'static str,
) -> Result<(), UseCaseError> {
    if !colli.is_active() {
        return Err(ColliError::Inactive {
            current: colli.status(),
            attempted: action,
        }
        .into());
    }
    require_accepted_member(colli, actor, action)
}

/// Reading letters and comments: like writing, except a COMPLETED Colli
/// stays readable to its members.
pub(crate) fn require_reader(
    colli: &Colli,
    actor: &UserId,
    action: &'static str,
) -> Result<(), UseCaseError> {
    if !matches!(colli.status(), ColliStatus::Active | ColliStatus::Completed) {
        return Err(ColliError::Inactive {
            current: colli.status(),
            attempted: action,
        }
        .into());
    }
    require_accepted_member(colli, actor, action)
}

fn require_accepted_member(
    colli: &Colli,
    actor: &UserId,
    action: &'static str,
) -> Result<(), UseCaseError> {
    if !colli.is_member(actor) {
        warn!(colli_id = %colli.id(), user_id = %actor, action, "Denied: not an accepted member");
        return Err(UseCaseError::forbidden(format!(
            "only accepted members can {action}"
        )));
    }
    Ok(())
}

/// Deletion of a letter or comment: author, Colli manager, or admin.
///
/// Checks run cheapest first; the user repository is consulted only when
/// the actor is neither author nor manager.
pub(crate) async fn can_delete_content(
    is_author: bool,
    colli: Option<&Colli>,
    users: Option<&dyn UserRepository>,
    actor: &UserId,
) -> Result<bool, DomainError> {
    if is_author || colli.is_some_and(|c| c.is_manager(actor)) {
        return Ok(true);
    }
    is_admin_if_wired(users, actor).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryUserRepository;
    use crate::domain::colli::MemberRole;
    use crate::domain::user::{User, UserRole};

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn active_colli() -> Colli {
        let mut colli = Colli::create("Plumes Croisées", "Voyages", user("alice"), None).unwrap();
        colli.approve(None).unwrap();
        colli.add_member(user("bob"), MemberRole::Member).unwrap();
        colli.accept_member(&user("bob")).unwrap();
        colli
    }

    fn users() -> InMemoryUserRepository {
        InMemoryUserRepository::with_users([
            User::new(user("root"), "Root", UserRole::Admin),
            User::new(user("bob"), "Bob", UserRole::User),
        ])
    }

    #[tokio::test]
    async fn author_and_manager_may_delete_without_user_repository() {
        let colli = active_colli();
        assert!(can_delete_content(true, Some(&colli), None, &user("bob")).await.unwrap());
        assert!(can_delete_content(false, Some(&colli), None, &user("alice")).await.unwrap());
    }

    #[tokio::test]
    async fn admin_override_is_skipped_without_user_repository() {
        let colli = active_colli();
        assert!(!can_delete_content(false, Some(&colli), None, &user("root")).await.unwrap());
    }

    #[tokio::test]
    async fn admin_override_applies_with_user_repository() {
        let colli = active_colli();
        let users = users();
        assert!(can_delete_content(false, Some(&colli), Some(&users), &user("root"))
            .await
            .unwrap());
        assert!(!can_delete_content(false, Some(&colli), Some(&users), &user("bob"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn missing_colli_leaves_only_author_and_admin() {
        let users = users();
        assert!(!can_delete_content(false, None, None, &user("alice")).await.unwrap());
        assert!(can_delete_content(false, None, Some(&users), &user("root")).await.unwrap());
    }

    #[tokio::test]
    async fn require_admin_rejects_regular_and_unknown_users() {
        let users = users();
        assert!(require_admin(&users, &user("root"), "approve collis").await.is_ok());
        assert!(matches!(
            require_admin(&users, &user("bob"), "approve collis").await,
            Err(UseCaseError::Forbidden(_))
        ));
        assert!(matches!(
            require_admin(&users, &user("ghost"), "approve collis").await,
            Err(UseCaseError::Forbidden(_))
        ));
    }

    #[test]
    fn require_writer_checks_status_before_membership() {
        let pending = Colli::create("Lettres du Nord", "Hiver", user("alice"), None).unwrap();
        assert!(matches!(
            require_writer(&pending, &user("mallory"), "post letter"),
            Err(UseCaseError::Colli(ColliError::Inactive { .. }))
        ));

        let colli = active_colli();
        assert!(require_writer(&colli, &user("bob"), "post letter").is_ok());
        assert!(matches!(
            require_writer(&colli, &user("mallory"), "post letter"),
            Err(UseCaseError::Forbidden(_))
        ));
    }

    #[test]
    fn completed_colli_is_readable_but_not_writable() {
        let mut colli = active_colli();
        colli.complete().unwrap();

        assert!(require_reader(&colli, &user("bob"), "read letters").is_ok());
        assert!(matches!(
            require_reader(&colli, &user("mallory"), "read letters"),
            Err(UseCaseError::Forbidden(_))
        ));
        assert!(matches!(
            require_writer(&colli, &user("bob"), "post letter"),
            Err(UseCaseError::Colli(ColliError::Inactive { .. }))
        ));
    }

    #[test]
    fn pending_colli_is_not_readable() {
        let pending = Colli::create("Lettres du Nord", "Hiver", user("alice"), None).unwrap();
        assert!(matches!(
            require_reader(&pending, &user("alice"), "read letters"),
            Err(UseCaseError::Colli(ColliError::Inactive { .. }))
        ));
    }

    #[test]
    fn require_member_manager_needs_accepted_manager() {
        let colli = active_colli();
        assert!(require_member_manager(&colli, &user("alice"), "accept members").is_ok());
        assert!(require_member_manager(&colli, &user("bob"), "accept members").is_err());
    }
}
