use async_trait::async_trait;
use tokio::sync::RwLock;

use roster::data::{Activities, Activity};
use roster::errors::DirectoryError;
use roster::log;

/// A trait for reading activities and managing their participants.
///
/// The set of activities is fixed when the service is built; only participant
/// lists change. Implementations must make each write a single atomic
/// lookup-then-mutate step.
///
/// # Examples
///
/// ```rust
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     service.signup("Chess Club", "ada@mergington.edu").await?;
///     let activities = service.list().await?;
///     assert!(activities["Chess Club"].has_participant("ada@mergington.edu"));
///     service.unregister("Chess Club", "ada@mergington.edu").await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity with its current participants.
    async fn list(&self) -> Result<Activities, Self::Error>;

    /// Retrieves a single activity by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity has that name.
    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error>;

    /// Signs a participant up for an activity and returns the updated activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist, if the participant is
    /// already signed up, or if the participant identifier is empty.
    async fn signup(&self, activity_name: &str, email: &str) -> Result<Activity, Self::Error>;

    /// Removes a participant from an activity and returns the updated activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the participant is not
    /// signed up for it.
    async fn unregister(&self, activity_name: &str, email: &str)
    -> Result<Activity, Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// All activities sit behind one `RwLock`: reads share it, each write holds it
/// exclusively for the whole lookup and mutation. Nothing is persisted.
///
/// # Examples
/// ```rust
/// let service = ActivityDirectoryInMemory::seeded();
/// service.signup("Chess Club", "ada@mergington.edu").await.unwrap();
/// let chess = service.get("Chess Club").await.unwrap();
/// assert!(chess.has_participant("ada@mergington.edu"));
/// ```
pub struct ActivityDirectoryInMemory {
    activities: RwLock<Activities>,
}

impl ActivityDirectoryInMemory {
    pub fn new(activities: Activities) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// A directory holding the activities from [`super::seed`].
    pub fn seeded() -> Self {
        Self::new(super::seed::activities())
    }
}

impl Default for ActivityDirectoryInMemory {
    fn default() -> Self {
        Self::seeded()
    }
}

fn normalize_email(email: &str) -> Result<&str, DirectoryError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(DirectoryError::InvalidParticipant);
    }
    Ok(email)
}

#[async_trait]
impl ActivityService for ActivityDirectoryInMemory {
    type Error = DirectoryError;

    async fn list(&self) -> Result<Activities, Self::Error> {
        Ok(self.activities.read().await.clone())
    }

    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error> {
        self.activities
            .read()
            .await
            .get(activity_name)
            .cloned()
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity_name.to_string()))
    }

    async fn signup(&self, activity_name: &str, email: &str) -> Result<Activity, Self::Error> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity_name.to_string()))?;
        let email = normalize_email(email)?;

        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        log::debug!(
            "{} now has {} participant(s)",
            activity_name,
            activity.participants.len()
        );
        Ok(activity.clone())
    }

    async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Activity, Self::Error> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity_name.to_string()))?;
        let email = normalize_email(email)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::ParticipantNotFound {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        Ok(activity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed;
    use std::sync::Arc;

    const CHESS: &str = "Chess Club";
    const EMAIL: &str = "testuser@example.com";

    #[tokio::test]
    async fn list_contains_every_seed_activity() {
        let service = ActivityDirectoryInMemory::seeded();
        let listed = service.list().await.unwrap();

        for name in seed::activities().keys() {
            assert!(listed.contains_key(name), "{name} missing from list");
        }
    }

    #[tokio::test]
    async fn signup_then_unregister_round_trip() {
        let service = ActivityDirectoryInMemory::seeded();

        let updated = service.signup(CHESS, EMAIL).await.unwrap();
        assert!(updated.has_participant(EMAIL));
        assert!(service.list().await.unwrap()[CHESS].has_participant(EMAIL));

        let updated = service.unregister(CHESS, EMAIL).await.unwrap();
        assert!(!updated.has_participant(EMAIL));
        assert!(!service.list().await.unwrap()[CHESS].has_participant(EMAIL));
    }

    #[tokio::test]
    async fn signup_appends_in_order() {
        let service = ActivityDirectoryInMemory::seeded();
        service.signup(CHESS, EMAIL).await.unwrap();

        let chess = service.get(CHESS).await.unwrap();
        assert_eq!(chess.participants.last().map(String::as_str), Some(EMAIL));
        assert_eq!(chess.participants.len(), 3);
    }

    #[tokio::test]
    async fn unknown_activity_leaves_directory_untouched() {
        let service = ActivityDirectoryInMemory::seeded();
        let before = service.list().await.unwrap();

        let err = service.signup("Underwater Basket Weaving", EMAIL).await.unwrap_err();
        assert_eq!(
            err,
            DirectoryError::ActivityNotFound("Underwater Basket Weaving".to_string())
        );

        let err = service.unregister("Underwater Basket Weaving", EMAIL).await.unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(service.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn unknown_activity_wins_over_blank_email() {
        let service = ActivityDirectoryInMemory::seeded();

        let err = service.signup("Knitting", "").await.unwrap_err();
        assert_eq!(err, DirectoryError::ActivityNotFound("Knitting".to_string()));

        let err = service.unregister("Knitting", " ").await.unwrap_err();
        assert_eq!(err, DirectoryError::ActivityNotFound("Knitting".to_string()));
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let service = ActivityDirectoryInMemory::seeded();
        service.signup(CHESS, EMAIL).await.unwrap();

        let err = service.signup(CHESS, EMAIL).await.unwrap_err();
        assert!(matches!(err, DirectoryError::AlreadySignedUp { .. }));

        let chess = service.get(CHESS).await.unwrap();
        let copies = chess.participants.iter().filter(|p| *p == EMAIL).count();
        assert_eq!(copies, 1);
    }

    #[tokio::test]
    async fn unregister_missing_participant_is_not_found() {
        let service = ActivityDirectoryInMemory::seeded();
        let before = service.get(CHESS).await.unwrap();

        let err = service.unregister(CHESS, EMAIL).await.unwrap_err();
        assert_eq!(
            err,
            DirectoryError::ParticipantNotFound {
                activity: CHESS.to_string(),
                email: EMAIL.to_string(),
            }
        );
        assert_eq!(service.get(CHESS).await.unwrap(), before);
    }

    #[tokio::test]
    async fn blank_email_is_rejected_and_whitespace_trimmed() {
        let service = ActivityDirectoryInMemory::seeded();

        let err = service.signup(CHESS, "   ").await.unwrap_err();
        assert_eq!(err, DirectoryError::InvalidParticipant);

        let chess = service.signup(CHESS, "  padded@example.com ").await.unwrap();
        assert!(chess.has_participant("padded@example.com"));
        service.unregister(CHESS, "padded@example.com").await.unwrap();
    }

    #[tokio::test]
    async fn capacity_is_not_enforced() {
        let mut activities = Activities::new();
        activities.insert("Tiny".to_string(), Activity::new("One seat", "Mon", 1));
        let service = ActivityDirectoryInMemory::new(activities);

        service.signup("Tiny", "a@example.com").await.unwrap();
        let tiny = service.signup("Tiny", "b@example.com").await.unwrap();
        assert_eq!(tiny.participants.len(), 2);
        assert_eq!(tiny.spots_left(), 0);
    }

    #[tokio::test]
    async fn concurrent_signups_of_same_email_admit_one() {
        let service = Arc::new(ActivityDirectoryInMemory::seeded());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.signup(CHESS, EMAIL).await })
            })
            .collect();

        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
    }
}
