//! Member role hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a member within a Colli.
///
/// Totally ordered: `Manager > Moderator > Patron > Member`. Variants are
/// declared lowest first so the derived `Ord` is the hierarchy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    #[default]
    Member,
    Patron,
    Moderator,
    Manager,
}

impl MemberRole {
    /// All roles, lowest first.
    pub const ALL: [MemberRole; 4] = [
        MemberRole::Member,
        MemberRole::Patron,
        MemberRole::Moderator,
        MemberRole::Manager,
    ];

    /// Returns true if this role ranks strictly above `other`.
    pub fn outranks(&self, other: &MemberRole) -> bool {
        self > other
    }

    /// Returns the storage/wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Member => "MEMBER",
            MemberRole::Patron => "PATRON",
            MemberRole::Moderator => "MODERATOR",
            MemberRole::Manager => "MANAGER",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hierarchy_is_manager_moderator_patron_member() {
        assert!(MemberRole::Manager > MemberRole::Moderator);
        assert!(MemberRole::Moderator > MemberRole::Patron);
        assert!(MemberRole::Patron > MemberRole::Member);
    }

    #[test]
    fn sorting_yields_declared_order() {
        let mut roles = vec![
            MemberRole::Patron,
            MemberRole::Manager,
            MemberRole::Member,
            MemberRole::Moderator,
        ];
        roles.sort();
        assert_eq!(roles, MemberRole::ALL.to_vec());
    }

    #[test]
    fn default_role_is_member() {
        assert_eq!(MemberRole::default(), MemberRole::Member);
    }

    fn any_role() -> impl Strategy<Value = MemberRole> {
        prop::sample::select(MemberRole::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn order_is_total_and_antisymmetric(a in any_role(), b in any_role()) {
            let exactly_one = [a < b, a == b, a > b].iter().filter(|x| **x).count();
            prop_assert_eq!(exactly_one, 1);
            prop_assert_eq!(a.outranks(&b), b < a);
        }

        #[test]
        fn order_is_transitive(a in any_role(), b in any_role(), c in any_role()) {
            if a >= b && b >= c {
                prop_assert!(a >= c);
            }
        }
    }
}
