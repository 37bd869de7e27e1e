//! Admin approval for newly observed emojis.
//!
//! Each admin is asked in stored order over DM. The first "yes" records the
//! emoji and ends the round; a "no", a timeout, or an unreachable admin moves
//! on to the next one. A declined or timed-out emoji is only asked about
//! again when someone reacts with it again.

use std::future::Future;
use std::time::Duration;

use tracing::{error, info, warn};

use stealemoji_database::Database;
use stealemoji_database::impls::admins::list_admins;
use stealemoji_database::impls::stolen_emojis::{is_emoji_recorded, record_stolen_emoji};
use stealemoji_database::model::stolen_emoji::NewStolenEmoji;

use crate::collector::emoji::StolenEmoji;

pub const APPROVAL_TIMEOUT: Duration = Duration::from_secs(60);

pub const APPROVAL_TITLE: &str = "New Emoji Detected!";
pub const APPROVAL_PROMPT: &str = "Someone just used an emoji I don't recognize. If you want me to \
     add it to my collection, please respond with 'yes' or 'no'.";
pub const APPROVAL_TIMEOUT_NOTICE: &str = "You didn't respond in time, please react to the message \
     again if you want to add the emoji.";

/// Persistence the workflow needs.
pub trait ApprovalStore: Sync {
    fn is_recorded(&self, emoji_key: &str) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Admin ids in the order they should be asked.
    fn admins(&self) -> impl Future<Output = anyhow::Result<Vec<u64>>> + Send;

    /// Returns `false` if the emoji was recorded concurrently.
    fn record(
        &self,
        emoji: &StolenEmoji,
        approved_by: u64,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[derive(Debug)]
pub enum PromptError {
    /// The admin's user record could not be resolved.
    UnknownUser(anyhow::Error),
    /// The DM could not be delivered, usually because the admin closed DMs.
    Undeliverable(anyhow::Error),
}

/// Direct-message conversation with an admin.
pub trait AdminPrompter: Sync {
    /// Send the approval request. Returns the DM channel id the answer is expected in.
    fn send_request(
        &self,
        admin_id: u64,
        emoji: &StolenEmoji,
    ) -> impl Future<Output = Result<u64, PromptError>> + Send;

    /// `None` when the admin did not answer yes or no within `timeout`.
    fn await_answer(
        &self,
        admin_id: u64,
        channel_id: u64,
        timeout: Duration,
    ) -> impl Future<Output = Option<bool>> + Send;

    fn send_timeout_notice(
        &self,
        channel_id: u64,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminOutcome {
    Approved,
    Declined,
    TimedOut,
    Unreachable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalResult {
    AlreadyRecorded,
    NoAdmins,
    Approved { admin_id: u64 },
    Rejected,
}

pub async fn run_approval<S, P>(
    store: &S,
    prompter: &P,
    emoji: &StolenEmoji,
    timeout: Duration,
) -> anyhow::Result<ApprovalResult>
where
    S: ApprovalStore,
    P: AdminPrompter,
{
    let emoji_key = emoji.key();
    if store.is_recorded(&emoji_key).await? {
        return Ok(ApprovalResult::AlreadyRecorded);
    }

    let admins = store.admins().await?;
    if admins.is_empty() {
        return Ok(ApprovalResult::NoAdmins);
    }

    for admin_id in admins {
        let outcome = ask_admin(prompter, admin_id, emoji, timeout).await;
        info!(admin_id, emoji = %emoji_key, ?outcome, "emoji approval answer");

        if outcome == AdminOutcome::Approved {
            if !store.record(emoji, admin_id).await? {
                return Ok(ApprovalResult::AlreadyRecorded);
            }
            return Ok(ApprovalResult::Approved { admin_id });
        }
    }

    Ok(ApprovalResult::Rejected)
}

async fn ask_admin<P>(
    prompter: &P,
    admin_id: u64,
    emoji: &StolenEmoji,
    timeout: Duration,
) -> AdminOutcome
where
    P: AdminPrompter,
{
    let channel_id = match prompter.send_request(admin_id, emoji).await {
        Ok(channel_id) => channel_id,
        Err(PromptError::UnknownUser(source)) => {
            error!(?source, admin_id, "failed to fetch admin user");
            return AdminOutcome::Unreachable;
        }
        Err(PromptError::Undeliverable(source)) => {
            warn!(?source, admin_id, "couldn't send DM to admin");
            return AdminOutcome::Unreachable;
        }
    };

    match prompter.await_answer(admin_id, channel_id, timeout).await {
        Some(true) => AdminOutcome::Approved,
        Some(false) => AdminOutcome::Declined,
        None => {
            if let Err(source) = prompter.send_timeout_notice(channel_id).await {
                warn!(?source, admin_id, "failed to send approval timeout notice");
            }
            AdminOutcome::TimedOut
        }
    }
}

impl ApprovalStore for Database {
    fn is_recorded(&self, emoji_key: &str) -> impl Future<Output = anyhow::Result<bool>> + Send {
        is_emoji_recorded(self, emoji_key)
    }

    fn admins(&self) -> impl Future<Output = anyhow::Result<Vec<u64>>> + Send {
        list_admins(self)
    }

    async fn record(&self, emoji: &StolenEmoji, approved_by: u64) -> anyhow::Result<bool> {
        let emoji_key = emoji.key();
        let url = emoji.url();

        record_stolen_emoji(
            self,
            NewStolenEmoji {
                emoji_key: &emoji_key,
                emoji_id: emoji.id,
                name: &emoji.name,
                animated: emoji.animated,
                url: &url,
                approved_by,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use super::{
        AdminPrompter, ApprovalResult, ApprovalStore, PromptError, StolenEmoji, run_approval,
    };

    #[derive(Default)]
    struct MemoryStore {
        records: Mutex<HashMap<String, String>>,
        admins: Vec<u64>,
    }

    impl ApprovalStore for MemoryStore {
        async fn is_recorded(&self, emoji_key: &str) -> anyhow::Result<bool> {
            Ok(self.records.lock().unwrap().contains_key(emoji_key))
        }

        async fn admins(&self) -> anyhow::Result<Vec<u64>> {
            Ok(self.admins.clone())
        }

        async fn record(&self, emoji: &StolenEmoji, _approved_by: u64) -> anyhow::Result<bool> {
            let mut records = self.records.lock().unwrap();
            if records.contains_key(&emoji.key()) {
                return Ok(false);
            }
            records.insert(emoji.key(), emoji.url());
            Ok(true)
        }
    }

    #[derive(Clone, Copy, Debug)]
    enum Script {
        Yes,
        No,
        Silent,
        Unknown,
        DmClosed,
    }

    #[derive(Default)]
    struct ScriptedPrompter {
        scripts: HashMap<u64, Script>,
        requests: Mutex<Vec<u64>>,
        timeout_notices: Mutex<Vec<u64>>,
        waits: Mutex<Vec<Duration>>,
    }

    impl ScriptedPrompter {
        fn with(scripts: &[(u64, Script)]) -> Self {
            Self {
                scripts: scripts.iter().copied().collect(),
                ..Self::default()
            }
        }

        fn requests(&self) -> Vec<u64> {
            self.requests.lock().unwrap().clone()
        }

        fn timeout_notices(&self) -> Vec<u64> {
            self.timeout_notices.lock().unwrap().clone()
        }
    }

    impl AdminPrompter for ScriptedPrompter {
        async fn send_request(
            &self,
            admin_id: u64,
            _emoji: &StolenEmoji,
        ) -> Result<u64, PromptError> {
            match self.scripts.get(&admin_id) {
                Some(Script::Unknown) => {
                    Err(PromptError::UnknownUser(anyhow::anyhow!("unknown user")))
                }
                Some(Script::DmClosed) => {
                    Err(PromptError::Undeliverable(anyhow::anyhow!("dms closed")))
                }
                _ => {
                    self.requests.lock().unwrap().push(admin_id);
                    Ok(admin_id + 1_000)
                }
            }
        }

        async fn await_answer(
            &self,
            admin_id: u64,
            _channel_id: u64,
            timeout: Duration,
        ) -> Option<bool> {
            self.waits.lock().unwrap().push(timeout);
            match self.scripts.get(&admin_id) {
                Some(Script::Yes) => Some(true),
                Some(Script::No) => Some(false),
                _ => None,
            }
        }

        async fn send_timeout_notice(&self, channel_id: u64) -> anyhow::Result<()> {
            self.timeout_notices.lock().unwrap().push(channel_id - 1_000);
            Ok(())
        }
    }

    fn blob() -> StolenEmoji {
        StolenEmoji {
            id: 700_000_000_000_000_001,
            name: "blobcat".to_owned(),
            animated: false,
        }
    }

    const TIMEOUT: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn approval_records_emoji_url() {
        let store = MemoryStore {
            admins: vec![1],
            ..MemoryStore::default()
        };
        let prompter = ScriptedPrompter::with(&[(1, Script::Yes)]);

        let result = run_approval(&store, &prompter, &blob(), TIMEOUT)
            .await
            .unwrap();

        assert_eq!(result, ApprovalResult::Approved { admin_id: 1 });
        let records = store.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records.get("<:blobcat:700000000000000001>").map(String::as_str),
            Some("https://cdn.discordapp.com/emojis/700000000000000001.png")
        );
        assert_eq!(*prompter.waits.lock().unwrap(), vec![TIMEOUT]);
    }

    #[tokio::test]
    async fn recorded_emoji_never_prompts() {
        let store = MemoryStore {
            admins: vec![1, 2],
            ..MemoryStore::default()
        };
        store
            .records
            .lock()
            .unwrap()
            .insert(blob().key(), blob().url());
        let prompter = ScriptedPrompter::with(&[(1, Script::Yes), (2, Script::Yes)]);

        let result = run_approval(&store, &prompter, &blob(), TIMEOUT)
            .await
            .unwrap();

        assert_eq!(result, ApprovalResult::AlreadyRecorded);
        assert!(prompter.requests().is_empty());
    }

    #[tokio::test]
    async fn silent_admin_gets_timeout_notice() {
        let store = MemoryStore {
            admins: vec![1],
            ..MemoryStore::default()
        };
        let prompter = ScriptedPrompter::with(&[(1, Script::Silent)]);

        let result = run_approval(&store, &prompter, &blob(), TIMEOUT)
            .await
            .unwrap();

        assert_eq!(result, ApprovalResult::Rejected);
        assert!(store.records.lock().unwrap().is_empty());
        assert_eq!(prompter.timeout_notices(), vec![1]);
    }

    #[tokio::test]
    async fn stops_at_first_approval() {
        let store = MemoryStore {
            admins: vec![1, 2, 3],
            ..MemoryStore::default()
        };
        let prompter =
            ScriptedPrompter::with(&[(1, Script::No), (2, Script::Yes), (3, Script::Yes)]);

        let result = run_approval(&store, &prompter, &blob(), TIMEOUT)
            .await
            .unwrap();

        assert_eq!(result, ApprovalResult::Approved { admin_id: 2 });
        assert_eq!(prompter.requests(), vec![1, 2]);
    }

    #[tokio::test]
    async fn unreachable_admins_are_skipped() {
        let store = MemoryStore {
            admins: vec![1, 2, 3],
            ..MemoryStore::default()
        };
        let prompter = ScriptedPrompter::with(&[
            (1, Script::Unknown),
            (2, Script::DmClosed),
            (3, Script::Yes),
        ]);

        let result = run_approval(&store, &prompter, &blob(), TIMEOUT)
            .await
            .unwrap();

        assert_eq!(result, ApprovalResult::Approved { admin_id: 3 });
        assert_eq!(prompter.requests(), vec![3]);
    }

    #[tokio::test]
    async fn everyone_declining_records_nothing() {
        let store = MemoryStore {
            admins: vec![1, 2],
            ..MemoryStore::default()
        };
        let prompter = ScriptedPrompter::with(&[(1, Script::No), (2, Script::Silent)]);

        let result = run_approval(&store, &prompter, &blob(), TIMEOUT)
            .await
            .unwrap();

        assert_eq!(result, ApprovalResult::Rejected);
        assert!(store.records.lock().unwrap().is_empty());
        assert_eq!(prompter.requests(), vec![1, 2]);
        assert_eq!(prompter.timeout_notices(), vec![2]);
    }

    #[tokio::test]
    async fn no_admins_means_no_prompt() {
        let store = MemoryStore::default();
        let prompter = ScriptedPrompter::default();

        let result = run_approval(&store, &prompter, &blob(), TIMEOUT)
            .await
            .unwrap();

        assert_eq!(result, ApprovalResult::NoAdmins);
        assert!(prompter.requests().is_empty());
    }
}
