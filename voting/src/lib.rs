use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::LookupMap;
use near_sdk::{env, near_bindgen, require, AccountId, PanicOnDefault};

pub use crate::constants::*;
pub use crate::errors::*;
pub use crate::settings::SettingsView;
pub use crate::storage::*;

use crate::checks::{schedule, validate_answers, validate_question};
use crate::events::*;
use crate::settings::{Settings, VSettings};

mod ballot;
mod checks;
pub mod constants;
mod errors;
pub mod events;
mod settings;
mod storage;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    /// Account authorized to update settings and manage any poll.
    pub admin: AccountId,
    pub(crate) settings: VSettings,
    /// map of PollId -> Poll
    pub(crate) polls: LookupMap<PollId, Poll>,
    /// ID of the next created poll. Poll IDs are never reused.
    pub(crate) next_poll_id: PollId,
    /// map of (PollId, voter) -> selected answers
    pub(crate) ballots: LookupMap<(PollId, AccountId), Vec<AnswerId>>,
    pub(crate) tallies: LookupMap<PollId, Tally>,
}

// Implement the contract structure
#[near_bindgen]
impl Contract {
    /// @admin: account authorized to update settings and to cancel or reschedule any poll.
    /// @settings: overwrites the default settings.
    #[init]
    pub fn new(admin: AccountId, settings: Option<SettingsView>) -> Self {
        let settings = Settings::default().apply_changes(settings.unwrap_or_default());
        if let Err(e) = settings.validate() {
            env::panic_str(e);
        }
        Self {
            admin,
            settings: settings.into(),
            polls: LookupMap::new(StorageKey::Polls),
            next_poll_id: FIRST_POLL_ID,
            ballots: LookupMap::new(StorageKey::Ballots),
            tallies: LookupMap::new(StorageKey::Tallies),
        }
    }

    /**********
     * QUERIES
     **********/

    pub fn admin(&self) -> AccountId {
        self.admin.clone()
    }

    pub fn settings(&self) -> SettingsView {
        Settings::from(&self.settings).into()
    }

    /// Returns the ID the next created poll will get.
    pub fn next_poll_id(&self) -> PollId {
        self.next_poll_id
    }

    #[handle_result]
    pub fn poll_info(&self, poll_id: PollId) -> Result<Poll, PollError> {
        self.poll(poll_id)
    }

    #[handle_result]
    pub fn answers(&self, poll_id: PollId) -> Result<Vec<String>, PollError> {
        Ok(self.poll(poll_id)?.answers)
    }

    /// Returns the lifecycle status of the poll at the current block time.
    #[handle_result]
    pub fn poll_status(&self, poll_id: PollId) -> Result<Status, PollError> {
        Ok(self.poll(poll_id)?.status(env::block_timestamp_ms()))
    }

    /// Returns IDs of all created polls, in creation order.
    /// `from_poll`: first poll ID to return, defaults to the first created poll.
    /// `limit`: maximum number of returned IDs, unlimited by default.
    pub fn all_polls(&self, from_poll: Option<PollId>, limit: Option<u32>) -> Vec<PollId> {
        let from = from_poll.unwrap_or(FIRST_POLL_ID).max(FIRST_POLL_ID);
        let limit = limit.map_or(usize::MAX, |l| l as usize);
        (from..self.next_poll_id).take(limit).collect()
    }

    /// Returns IDs of polls which are active at the current block time: started, not ended
    /// and not canceled. Pagination works as in `all_polls`, `limit` counts returned IDs.
    pub fn active_polls(&self, from_poll: Option<PollId>, limit: Option<u32>) -> Vec<PollId> {
        let now = env::block_timestamp_ms();
        let from = from_poll.unwrap_or(FIRST_POLL_ID).max(FIRST_POLL_ID);
        let limit = limit.map_or(usize::MAX, |l| l as usize);
        (from..self.next_poll_id)
            .filter(|id| self.polls.get(id).map_or(false, |p| p.is_active(now)))
            .take(limit)
            .collect()
    }

    /**********
     * TRANSACTIONS
     **********/

    /// Creates a new poll and returns its ID.
    /// `start_time`: poll start in milliseconds. Must be in the future; when not provided the
    /// poll starts immediately.
    /// `duration`: voting window length in milliseconds, must be positive.
    #[handle_result]
    pub fn create_poll(
        &mut self,
        question: String,
        answers: Vec<String>,
        multiple_choices: bool,
        start_time: Option<u64>,
        duration: u64,
    ) -> Result<PollId, PollError> {
        let now = env::block_timestamp_ms();
        let max_answers = Settings::from(&self.settings).max_answers;
        validate_question(&question)?;
        validate_answers(&answers, max_answers)?;
        let (start_time, end_time) = schedule(now, start_time, duration)?;

        let creator = env::predecessor_account_id();
        let poll_id = self.next_poll_id;
        self.next_poll_id += 1;
        self.tallies.insert(&poll_id, &Tally::new(answers.len()));
        self.polls.insert(
            &poll_id,
            &Poll {
                question,
                answers,
                multiple_choices,
                start_time,
                end_time,
                canceled: false,
                creator: creator.clone(),
                created_at: now,
            },
        );
        emit_create_poll(poll_id, creator, start_time, end_time);
        Ok(poll_id)
    }

    /// Cancels the poll. Allowed only before the poll starts, by the poll creator or admin.
    /// Cancellation is irreversible.
    #[handle_result]
    pub fn cancel_poll(&mut self, poll_id: PollId) -> Result<(), PollError> {
        let now = env::block_timestamp_ms();
        let mut poll = self.poll(poll_id)?;
        self.assert_manager(&poll)?;
        poll.assert_not_started(now)?;

        poll.canceled = true;
        self.polls.insert(&poll_id, &poll);
        emit_cancel_poll(poll_id);
        Ok(())
    }

    /// Moves the poll voting window to `[start_time, start_time + duration)`.
    /// Allowed only before the current poll start, by the poll creator or admin. The new
    /// `start_time` must be in the future.
    #[handle_result]
    pub fn update_poll_schedule(
        &mut self,
        poll_id: PollId,
        start_time: u64,
        duration: u64,
    ) -> Result<(), PollError> {
        let now = env::block_timestamp_ms();
        let mut poll = self.poll(poll_id)?;
        self.assert_manager(&poll)?;
        poll.assert_not_started(now)?;
        let (start_time, end_time) = schedule(now, Some(start_time), duration)?;

        poll.start_time = start_time;
        poll.end_time = end_time;
        self.polls.insert(&poll_id, &poll);
        emit_update_poll_schedule(poll_id, start_time, end_time);
        Ok(())
    }

    /**********
     * ADMIN
     **********/

    /// Updates specified settings. Polls already created keep their answers.
    pub fn update_settings(&mut self, settings: SettingsView) {
        self.assert_admin();
        let s = self.settings.apply_changes(settings);
        if let Err(e) = s.validate() {
            env::panic_str(e);
        }
        self.settings = s.into();
    }

    pub fn change_admin(&mut self, new_admin: AccountId) {
        self.assert_admin();
        self.admin = new_admin;
    }

    /**********
     * INTERNAL
     **********/

    pub(crate) fn poll(&self, poll_id: PollId) -> Result<Poll, PollError> {
        self.polls.get(&poll_id).ok_or(PollError::NotFound)
    }

    /// Only the poll creator or the contract admin can manage a poll.
    fn assert_manager(&self, poll: &Poll) -> Result<(), PollError> {
        let caller = env::predecessor_account_id();
        if caller != poll.creator && caller != self.admin {
            return Err(PollError::NotAuthorized);
        }
        Ok(())
    }

    fn assert_admin(&self) {
        require!(self.admin == env::predecessor_account_id(), "not an admin");
    }
}
