//! User directory - In-memory user records with credential lookup.
//!
//! Records are kept in insertion order. Deletion is not performed here; it is
//! forwarded to the injected [`DeletionGateway`].

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use common::DirectoryConfig;
use domain::{DomainError, DomainResult, DuplicateIdPolicy, GatewayError, User};

use crate::gateway::{DeletionGateway, UnavailableGateway};

/// Ordered collection of user records.
///
/// `add` is the only way to change the contents. Ids are not checked on
/// insertion; see [`DuplicateIdPolicy`] for how collisions are treated by
/// [`UserDirectory::get_all_by_id`].
///
/// Mutation takes `&mut self`. Share across threads behind an external lock.
pub struct UserDirectory {
    users: Vec<User>,
    gateway: Arc<dyn DeletionGateway>,
    duplicate_ids: DuplicateIdPolicy,
}

impl UserDirectory {
    /// Create an empty directory that forwards deletions to `gateway`
    pub fn new(gateway: Arc<dyn DeletionGateway>) -> Self {
        Self {
            users: Vec::new(),
            gateway,
            duplicate_ids: DuplicateIdPolicy::default(),
        }
    }

    /// Create an empty directory using the settings from `config`
    pub fn with_config(gateway: Arc<dyn DeletionGateway>, config: &DirectoryConfig) -> Self {
        Self::new(gateway).with_duplicate_id_policy(config.duplicate_ids)
    }

    pub fn with_duplicate_id_policy(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }

    pub fn duplicate_id_policy(&self) -> DuplicateIdPolicy {
        self.duplicate_ids
    }

    /// Append users in the order given. Accepts any number, including none.
    pub fn add<I>(&mut self, users: I)
    where
        I: IntoIterator<Item = User>,
    {
        let before = self.users.len();
        self.users.extend(users);
        debug!(
            added = self.users.len() - before,
            total = self.users.len(),
            "users added"
        );
    }

    pub fn add_one(&mut self, user: User) {
        self.add(std::iter::once(user));
    }

    /// All records in insertion order
    pub fn get_all(&self) -> &[User] {
        &self.users
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Find the first record, by insertion order, matching both credentials.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidArgument`] with the message
    /// "username or password is null" if either argument is `None`.
    pub fn login(
        &self,
        user_name: Option<&str>,
        password: Option<&str>,
    ) -> DomainResult<Option<&User>> {
        let (Some(user_name), Some(password)) = (user_name, password) else {
            return Err(DomainError::null_credentials());
        };

        let found = self
            .users
            .iter()
            .find(|user| user.matches_credentials(user_name, password));

        match found {
            Some(user) => debug!(id = user.id(), "login succeeded"),
            None => debug!(user_name, "login found no matching user"),
        }

        Ok(found)
    }

    /// Map every record by its id.
    ///
    /// # Errors
    /// With [`DuplicateIdPolicy::Reject`], returns [`DomainError::DuplicateKey`]
    /// for the first id seen twice.
    pub fn get_all_by_id(&self) -> DomainResult<HashMap<i32, User>> {
        let mut by_id = HashMap::with_capacity(self.users.len());

        for user in &self.users {
            match by_id.entry(user.id()) {
                Entry::Vacant(slot) => {
                    slot.insert(user.clone());
                }
                Entry::Occupied(mut slot) => match self.duplicate_ids {
                    DuplicateIdPolicy::Reject => {
                        warn!(id = user.id(), "duplicate user id rejected");
                        return Err(DomainError::duplicate_key(user.id()));
                    }
                    DuplicateIdPolicy::FirstWins => {
                        warn!(id = user.id(), "duplicate user id, keeping first record");
                    }
                    DuplicateIdPolicy::LastWins => {
                        warn!(id = user.id(), "duplicate user id, keeping last record");
                        slot.insert(user.clone());
                    }
                },
            }
        }

        Ok(by_id)
    }

    /// Ids held by more than one record, in order of first occurrence
    pub fn duplicate_ids(&self) -> Vec<i32> {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for user in &self.users {
            *counts.entry(user.id()).or_default() += 1;
        }

        let mut reported = HashSet::new();
        self.users
            .iter()
            .map(User::id)
            .filter(|id| counts[id] > 1 && reported.insert(*id))
            .collect()
    }

    /// Ask the gateway to delete `id`.
    ///
    /// The in-memory records are left untouched. The gateway's answer and any
    /// failure it raises are returned as is.
    pub fn delete(&self, id: i32) -> Result<bool, GatewayError> {
        match self.gateway.delete(id) {
            Ok(deleted) => {
                debug!(id, deleted, "delete forwarded to gateway");
                Ok(deleted)
            }
            Err(e) => {
                debug!(id, error = %e, "gateway failed to delete user");
                Err(e)
            }
        }
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new(Arc::new(UnavailableGateway))
    }
}

impl std::fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDirectory")
            .field("users", &self.users)
            .field("duplicate_ids", &self.duplicate_ids)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a UserDirectory {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}

impl Extend<User> for UserDirectory {
    fn extend<I: IntoIterator<Item = User>>(&mut self, iter: I) {
        self.add(iter);
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::gateway::MockDeletionGateway;

    fn ivan() -> User {
        User::of(1, "Ivan", "123")
    }

    fn petr() -> User {
        User::of(2, "Petr", "456")
    }

    fn directory_with(gateway: MockDeletionGateway) -> UserDirectory {
        UserDirectory::new(Arc::new(gateway))
    }

    #[test]
    fn test_users_empty_if_no_user_added() {
        let directory = UserDirectory::default();

        assert!(directory.get_all().is_empty());
        assert!(directory.is_empty());
    }

    #[test]
    fn test_users_size_if_users_added() {
        let mut directory = UserDirectory::default();
        directory.add_one(ivan());
        directory.add_one(petr());

        assert_eq!(directory.get_all().len(), 2);
    }

    #[test]
    fn test_add_nothing_leaves_directory_unchanged() {
        let mut directory = UserDirectory::default();
        directory.add(Vec::new());

        assert_eq!(directory.len(), 0);
    }

    #[test]
    fn test_add_keeps_duplicates_and_order() {
        let mut directory = UserDirectory::default();
        directory.add([petr(), ivan()]);
        directory.add([petr()]);

        assert_eq!(directory.get_all(), &[petr(), ivan(), petr()]);
    }

    #[test]
    fn test_extend_goes_through_add() {
        let mut directory = UserDirectory::default();
        directory.extend(vec![ivan(), petr()]);

        let ids: Vec<i32> = directory.iter().map(User::id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_login_rejects_missing_credentials() {
        let mut directory = UserDirectory::default();
        directory.add([ivan()]);

        let err = directory.login(None, Some("dummy")).unwrap_err();
        assert_eq!(err.to_string(), "username or password is null");
        assert_eq!(
            directory.login(Some("dummy"), None),
            Err(DomainError::InvalidArgument(
                "username or password is null".to_string()
            ))
        );
        assert!(directory.login(None, None).is_err());
    }

    #[test]
    fn test_login_fail_if_password_is_not_correct() {
        let mut directory = UserDirectory::default();
        directory.add([ivan()]);

        let user = directory.login(Some(ivan().password()), Some("dummy")).unwrap();
        assert!(user.is_none());
    }

    #[test]
    fn test_login_fail_if_user_does_not_exist() {
        let mut directory = UserDirectory::default();
        directory.add([ivan()]);

        let user = directory.login(Some("dummy"), Some(ivan().password())).unwrap();
        assert!(user.is_none());
    }

    #[test]
    fn test_login_on_empty_directory() {
        let directory = UserDirectory::default();
        assert_eq!(directory.login(Some("Ivan"), Some("123")), Ok(None));
    }

    #[test]
    fn test_login_first_match_wins() {
        let first = User::of(10, "Ivan", "123");
        let second = User::of(11, "Ivan", "123");

        let mut directory = UserDirectory::default();
        directory.add([first.clone(), second]);

        let user = directory.login(Some("Ivan"), Some("123")).unwrap();
        assert_eq!(user.map(User::id), Some(10));
    }

    #[test]
    fn test_login_is_case_sensitive() {
        let mut directory = UserDirectory::default();
        directory.add([ivan()]);

        assert_eq!(directory.login(Some("IVAN"), Some("123")), Ok(None));
    }

    #[test]
    fn test_users_converted_to_map_by_id() {
        let mut directory = UserDirectory::default();
        directory.add([ivan(), petr()]);

        let users = directory.get_all_by_id().unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users.get(&1), Some(&ivan()));
        assert_eq!(users.get(&2), Some(&petr()));
    }

    #[test]
    fn test_empty_directory_maps_to_empty() {
        let directory = UserDirectory::default();
        assert!(directory.get_all_by_id().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected_by_default() {
        let mut directory = UserDirectory::default();
        directory.add([ivan(), petr(), User::of(1, "Other", "000")]);

        assert_eq!(
            directory.get_all_by_id(),
            Err(DomainError::DuplicateKey { id: 1 })
        );
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let mut directory =
            UserDirectory::default().with_duplicate_id_policy(DuplicateIdPolicy::FirstWins);
        directory.add([ivan(), User::of(1, "Other", "000")]);

        let users = directory.get_all_by_id().unwrap();
        assert_eq!(users.get(&1), Some(&ivan()));
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let other = User::of(1, "Other", "000");
        let mut directory =
            UserDirectory::default().with_duplicate_id_policy(DuplicateIdPolicy::LastWins);
        directory.add([ivan(), petr(), other.clone()]);

        let users = directory.get_all_by_id().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users.get(&1), Some(&other));
    }

    #[test]
    fn test_duplicate_ids_report() {
        let mut directory = UserDirectory::default();
        directory.add([
            User::of(3, "a", "a"),
            User::of(1, "b", "b"),
            User::of(3, "c", "c"),
            User::of(2, "d", "d"),
            User::of(1, "e", "e"),
            User::of(3, "f", "f"),
        ]);

        assert_eq!(directory.duplicate_ids(), vec![3, 1]);
    }

    #[test]
    fn test_should_delete_existed_user() {
        let mut gateway = MockDeletionGateway::new();
        gateway
            .expect_delete()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));

        let mut directory = directory_with(gateway);
        directory.add([ivan()]);

        assert_eq!(directory.delete(ivan().id()), Ok(true));
        // the record itself stays in memory
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_delete_returns_gateway_answer() {
        let mut gateway = MockDeletionGateway::new();
        gateway.expect_delete().returning(|_| Ok(false));

        let directory = directory_with(gateway);
        assert_eq!(directory.delete(42), Ok(false));
    }

    #[test]
    fn test_throw_error_if_database_is_not_available() {
        let mut gateway = MockDeletionGateway::new();
        gateway
            .expect_delete()
            .with(eq(1))
            .times(1)
            .returning(|_| Err(GatewayError::unavailable("database is down")));

        let directory = directory_with(gateway);

        assert_eq!(
            directory.delete(1),
            Err(GatewayError::Unavailable("database is down".to_string()))
        );
    }

    #[test]
    fn test_default_gateway_is_unavailable() {
        let directory = UserDirectory::default();
        assert!(matches!(
            directory.delete(1),
            Err(GatewayError::Unavailable(_))
        ));
    }

    #[test]
    fn test_with_config_applies_policy() {
        let config = DirectoryConfig {
            duplicate_ids: DuplicateIdPolicy::LastWins,
            ..DirectoryConfig::default()
        };
        let directory = UserDirectory::with_config(Arc::new(UnavailableGateway), &config);

        assert_eq!(directory.duplicate_id_policy(), DuplicateIdPolicy::LastWins);
    }

    #[test]
    fn test_debug_does_not_leak_passwords() {
        let mut directory = UserDirectory::default();
        directory.add([ivan()]);

        let debug = format!("{:?}", directory);
        assert!(debug.contains("Ivan"));
        assert!(!debug.contains("123"));
    }
}
