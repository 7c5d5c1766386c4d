//! Outfit resolution: username → user → editable outfits → thumbnails.
//!
//! The three calls run strictly in sequence. The thumbnail call is re-issued
//! as a whole batch while any entry is still `Pending`, paced and bounded by
//! a [`PollPolicy`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use super::poll::PollPolicy;
use crate::domain::{OutfitRecord, Username};
use crate::ports::{OutfitSummary, RobloxApiPort, RobloxPortError, ThumbnailInfo};

/// Step of the resolution chain, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lookup,
    Outfits,
    Thumbnails,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lookup => "username lookup",
            Self::Outfits => "outfit listing",
            Self::Thumbnails => "thumbnail batch",
        })
    }
}

/// A completed resolution that the presenter can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// One record per editable outfit, in thumbnail-endpoint order.
    Outfits(Vec<OutfitRecord>),
    /// The user exists but has no editable outfits.
    Empty,
    /// The lookup matched no user.
    NotFound,
}

/// Transient failure of a resolution. The chain stops at the first one.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A call failed in transport, status or decoding.
    #[error("{stage} failed: {source}")]
    Upstream {
        stage: Stage,
        #[source]
        source: RobloxPortError,
    },

    /// Thumbnails were still pending when the poll budget ran out.
    #[error("{pending} thumbnail(s) still pending after {attempts} attempt(s)")]
    ThumbnailsPending { attempts: u32, pending: usize },
}

impl ResolveError {
    /// The step that failed.
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Upstream { stage, .. } => *stage,
            Self::ThumbnailsPending { .. } => Stage::Thumbnails,
        }
    }
}

/// Result type alias for resolution.
pub type ResolveResult = Result<Resolution, ResolveError>;

/// Flat classification of a resolution result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Empty,
    NotFound,
    TransientError,
}

impl OutcomeKind {
    /// Classify a resolution result.
    pub const fn of(result: &ResolveResult) -> Self {
        match result {
            Ok(Resolution::Outfits(_)) => Self::Success,
            Ok(Resolution::Empty) => Self::Empty,
            Ok(Resolution::NotFound) => Self::NotFound,
            Err(_) => Self::TransientError,
        }
    }
}

/// Resolves a username into the outfit records to display.
///
/// Holds no per-search state, so one resolver can serve every search of a
/// session.
#[derive(Clone)]
pub struct OutfitResolver {
    api: Arc<dyn RobloxApiPort>,
    policy: PollPolicy,
}

impl OutfitResolver {
    /// Create a resolver over the given port.
    pub fn new(api: Arc<dyn RobloxApiPort>, policy: PollPolicy) -> Self {
        Self { api, policy }
    }

    pub const fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Run the full chain for one username.
    pub async fn resolve(&self, username: &Username) -> ResolveResult {
        let Some(user) = self
            .api
            .lookup_user(username.as_str())
            .await
            .map_err(|source| ResolveError::Upstream {
                stage: Stage::Lookup,
                source,
            })?
        else {
            debug!(username = %username, "username lookup returned no user");
            return Ok(Resolution::NotFound);
        };
        debug!(username = %username, user_id = user.id, "resolved user");

        let outfits: Vec<OutfitSummary> = self
            .api
            .list_outfits(user.id)
            .await
            .map_err(|source| ResolveError::Upstream {
                stage: Stage::Outfits,
                source,
            })?
            .into_iter()
            .filter(|outfit| outfit.is_editable)
            .collect();

        if outfits.is_empty() {
            debug!(user_id = user.id, "user has no editable outfits");
            return Ok(Resolution::Empty);
        }

        let ids: Vec<u64> = outfits.iter().map(|outfit| outfit.id).collect();
        let thumbnails = self.poll_thumbnails(&ids).await?;

        Ok(Resolution::Outfits(join_records(&outfits, thumbnails)))
    }

    /// Re-issue the batch thumbnail call until nothing is pending.
    async fn poll_thumbnails(&self, ids: &[u64]) -> Result<Vec<ThumbnailInfo>, ResolveError> {
        let mut attempt = 1;
        loop {
            let batch = self
                .api
                .outfit_thumbnails(ids)
                .await
                .map_err(|source| ResolveError::Upstream {
                    stage: Stage::Thumbnails,
                    source,
                })?;

            let pending = batch.iter().filter(|thumb| thumb.state.is_pending()).count();
            if pending == 0 {
                debug!(attempt, count = batch.len(), "thumbnails ready");
                return Ok(batch);
            }

            if attempt >= self.policy.max_attempts() {
                warn!(attempt, pending, "giving up on pending thumbnails");
                return Err(ResolveError::ThumbnailsPending {
                    attempts: attempt,
                    pending,
                });
            }

            let delay = self.policy.delay_for(attempt);
            debug!(attempt, pending, ?delay, "thumbnails pending, polling again");
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

/// Join outfit names onto thumbnail entries.
///
/// Output follows the thumbnail order. Entries for IDs that were not
/// requested are dropped; requested outfits the endpoint left out are
/// appended without an image, in listing order.
fn join_records(outfits: &[OutfitSummary], thumbnails: Vec<ThumbnailInfo>) -> Vec<OutfitRecord> {
    let mut names: HashMap<u64, &str> = outfits
        .iter()
        .map(|outfit| (outfit.id, outfit.name.as_str()))
        .collect();
    let mut records = Vec::with_capacity(outfits.len());

    for thumb in thumbnails {
        match names.remove(&thumb.target_id) {
            Some(name) => records.push(OutfitRecord::new(thumb.target_id, name, thumb.image_url)),
            None => warn!(target_id = thumb.target_id, "dropping thumbnail for unrequested outfit"),
        }
    }

    for outfit in outfits {
        if let Some(name) = names.remove(&outfit.id) {
            debug!(outfit_id = outfit.id, "no thumbnail entry returned");
            records.push(OutfitRecord::new(outfit.id, name, None));
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockRobloxApiPort, ThumbnailState, UserSummary};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn user(id: u64) -> UserSummary {
        UserSummary {
            id,
            name: "Builderman".to_string(),
            display_name: "Builderman".to_string(),
        }
    }

    fn outfit(id: u64, name: &str, is_editable: bool) -> OutfitSummary {
        OutfitSummary {
            id,
            name: name.to_string(),
            is_editable,
        }
    }

    fn completed(id: u64) -> ThumbnailInfo {
        ThumbnailInfo::new(
            id,
            Some(format!("https://tr.rbxcdn.com/{id}/420/420/Avatar/Png")),
            ThumbnailState::Completed,
        )
    }

    fn pending(id: u64) -> ThumbnailInfo {
        ThumbnailInfo::new(id, None, ThumbnailState::Pending)
    }

    fn status_error(status: u16) -> RobloxPortError {
        RobloxPortError::Status {
            status,
            endpoint: "https://example.test".to_string(),
        }
    }

    fn username() -> Username {
        Username::parse("Builderman").unwrap()
    }

    fn resolver(mock: MockRobloxApiPort) -> OutfitResolver {
        OutfitResolver::new(Arc::new(mock), PollPolicy::new())
    }

    /// Mock that resolves to a user with the given outfits.
    fn mock_with_outfits(outfits: Vec<OutfitSummary>) -> MockRobloxApiPort {
        let mut mock = MockRobloxApiPort::new();
        mock.expect_lookup_user()
            .withf(|name| name == "Builderman")
            .times(1)
            .returning(|_| Ok(Some(user(42))));
        mock.expect_list_outfits()
            .withf(|id| *id == 42)
            .times(1)
            .returning(move |_| Ok(outfits.clone()));
        mock
    }

    #[tokio::test]
    async fn test_all_completed_returns_one_record_per_editable_outfit() {
        let mut mock = mock_with_outfits(vec![
            outfit(1, "Knight", true),
            outfit(2, "Prebuilt", false),
            outfit(3, "Pirate", true),
        ]);
        mock.expect_outfit_thumbnails()
            .withf(|ids| ids.to_vec() == vec![1, 3])
            .times(1)
            .returning(|_| Ok(vec![completed(1), completed(3)]));

        let result = resolver(mock).resolve(&username()).await.unwrap();

        let Resolution::Outfits(records) = result else {
            panic!("Expected outfits, got {result:?}");
        };
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].id, records[0].name.as_str()), (1, "Knight"));
        assert_eq!((records[1].id, records[1].name.as_str()), (3, "Pirate"));
        assert!(records.iter().all(OutfitRecord::has_thumbnail));
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found_without_further_calls() {
        let mut mock = MockRobloxApiPort::new();
        mock.expect_lookup_user().times(1).returning(|_| Ok(None));
        mock.expect_list_outfits().never();
        mock.expect_outfit_thumbnails().never();

        let result = resolver(mock).resolve(&username()).await;
        assert_eq!(OutcomeKind::of(&result), OutcomeKind::NotFound);
    }

    #[tokio::test]
    async fn test_no_editable_outfits_is_empty_without_thumbnail_call() {
        let mut mock = mock_with_outfits(vec![outfit(7, "Default", false)]);
        mock.expect_outfit_thumbnails().never();

        let result = resolver(mock).resolve(&username()).await;
        assert!(matches!(result, Ok(Resolution::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_entry_triggers_exactly_one_repoll_after_delay() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut mock = mock_with_outfits(vec![outfit(1, "Knight", true), outfit(2, "Ninja", true)]);
        mock.expect_outfit_thumbnails()
            .times(2)
            .returning(move |_| {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(vec![completed(1), pending(2)])
                } else {
                    Ok(vec![completed(1), completed(2)])
                }
            });

        let started = tokio::time::Instant::now();
        let result = resolver(mock).resolve(&username()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(started.elapsed() >= Duration::from_millis(1500));
        let Resolution::Outfits(records) = result else {
            panic!("Expected outfits");
        };
        assert!(records.iter().all(OutfitRecord::has_thumbnail));
    }

    #[tokio::test]
    async fn test_lookup_failure_stops_the_chain() {
        let mut mock = MockRobloxApiPort::new();
        mock.expect_lookup_user()
            .times(1)
            .returning(|_| Err(status_error(500)));
        mock.expect_list_outfits().never();
        mock.expect_outfit_thumbnails().never();

        let err = resolver(mock).resolve(&username()).await.unwrap_err();
        assert_eq!(err.stage(), Stage::Lookup);
    }

    #[tokio::test]
    async fn test_outfit_listing_failure_stops_the_chain() {
        let mut mock = MockRobloxApiPort::new();
        mock.expect_lookup_user()
            .returning(|_| Ok(Some(user(42))));
        mock.expect_list_outfits()
            .times(1)
            .returning(|_| Err(status_error(429)));
        mock.expect_outfit_thumbnails().never();

        let result = resolver(mock).resolve(&username()).await;
        assert_eq!(OutcomeKind::of(&result), OutcomeKind::TransientError);
        assert_eq!(result.unwrap_err().stage(), Stage::Outfits);
    }

    #[tokio::test(start_paused = true)]
    async fn test_thumbnail_failure_mid_poll_aborts_loop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut mock = mock_with_outfits(vec![outfit(1, "Knight", true)]);
        mock.expect_outfit_thumbnails().times(2).returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(vec![pending(1)])
            } else {
                Err(RobloxPortError::Network {
                    message: "connection reset".to_string(),
                })
            }
        });

        let err = resolver(mock).resolve(&username()).await.unwrap_err();
        assert_eq!(err.stage(), Stage::Thumbnails);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_ready_thumbnails_exhaust_the_budget() {
        let mut mock = mock_with_outfits(vec![outfit(1, "Knight", true), outfit(2, "Ninja", true)]);
        mock.expect_outfit_thumbnails()
            .times(3)
            .returning(|_| Ok(vec![completed(1), pending(2)]));

        let policy = PollPolicy::new().with_max_attempts(3);
        let resolver = OutfitResolver::new(Arc::new(mock), policy);

        let started = tokio::time::Instant::now();
        let err = resolver.resolve(&username()).await.unwrap_err();

        assert!(matches!(
            err,
            ResolveError::ThumbnailsPending {
                attempts: 3,
                pending: 1
            }
        ));
        assert!(started.elapsed() >= policy.total_budget());
    }

    #[tokio::test]
    async fn test_records_follow_thumbnail_order() {
        let mut mock = mock_with_outfits(vec![
            outfit(1, "Knight", true),
            outfit(2, "Ninja", true),
            outfit(3, "Pirate", true),
        ]);
        mock.expect_outfit_thumbnails()
            .returning(|_| Ok(vec![completed(3), completed(1), completed(2)]));

        let Resolution::Outfits(records) = resolver(mock).resolve(&username()).await.unwrap() else {
            panic!("Expected outfits");
        };
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(records[0].name, "Pirate");
    }

    #[tokio::test]
    async fn test_repeated_query_is_idempotent() {
        let mut mock = MockRobloxApiPort::new();
        mock.expect_lookup_user()
            .times(2)
            .returning(|_| Ok(Some(user(42))));
        mock.expect_list_outfits()
            .times(2)
            .returning(|_| Ok(vec![outfit(5, "Chef", true), outfit(6, "Cop", true)]));
        mock.expect_outfit_thumbnails()
            .times(2)
            .returning(|_| Ok(vec![completed(6), completed(5)]));

        let resolver = resolver(mock);
        let first = resolver.resolve(&username()).await.unwrap();
        let second = resolver.resolve(&username()).await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_join_keeps_one_record_per_outfit() {
        let outfits = vec![
            outfit(1, "Knight", true),
            outfit(2, "Ninja", true),
            outfit(3, "Pirate", true),
        ];
        let thumbnails = vec![
            completed(2),
            completed(99),
            ThumbnailInfo::new(1, None, ThumbnailState::Blocked),
            completed(2),
        ];

        let records = join_records(&outfits, thumbnails);

        assert_eq!(
            records,
            vec![
                OutfitRecord::new(2, "Ninja", completed(2).image_url),
                OutfitRecord::new(1, "Knight", None),
                OutfitRecord::new(3, "Pirate", None),
            ]
        );
    }

    #[test]
    fn test_outcome_kind_classification() {
        let ok: ResolveResult = Ok(Resolution::Outfits(vec![]));
        assert_eq!(OutcomeKind::of(&ok), OutcomeKind::Success);
        assert_eq!(OutcomeKind::of(&Ok(Resolution::Empty)), OutcomeKind::Empty);

        let err: ResolveResult = Err(ResolveError::ThumbnailsPending {
            attempts: 8,
            pending: 2,
        });
        assert_eq!(OutcomeKind::of(&err), OutcomeKind::TransientError);
        assert!(err.unwrap_err().to_string().contains("after 8 attempt(s)"));
    }
}
