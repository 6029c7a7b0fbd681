use near_sdk::{env, near_bindgen, AccountId};

use crate::events::emit_vote;
use crate::{AnswerId, Contract, ContractExt, PollError, PollId, Tally};

#[near_bindgen]
impl Contract {
    /// Records the caller ballot. A ballot can't be changed once cast.
    /// Checks, in order: poll exists, poll started, poll not ended nor canceled, caller hasn't
    /// voted yet, answers are valid for the poll.
    #[handle_result]
    pub fn vote(&mut self, poll_id: PollId, answers: Vec<AnswerId>) -> Result<(), PollError> {
        let now = env::block_timestamp_ms();
        let poll = self.poll(poll_id)?;
        poll.assert_open(now)?;
        let voter = env::predecessor_account_id();
        let key = (poll_id, voter);
        if self.ballots.contains_key(&key) {
            return Err(PollError::AlreadyVoted);
        }
        poll.validate_ballot(&answers)?;

        let mut tally = self
            .tallies
            .get(&poll_id)
            .unwrap_or_else(|| Tally::new(poll.answers.len()));
        tally.record(&answers);
        self.tallies.insert(&poll_id, &tally);
        self.ballots.insert(&key, &answers);
        emit_vote(poll_id, key.1);
        Ok(())
    }

    /**********
     * QUERIES
     **********/

    /// Returns number of votes for each answer, in the answers order.
    /// Available in every poll stage.
    #[handle_result]
    pub fn results(&self, poll_id: PollId) -> Result<Vec<u32>, PollError> {
        Ok(self.tally(poll_id)?.votes)
    }

    /// Returns number of ballots cast in the poll.
    #[handle_result]
    pub fn participants(&self, poll_id: PollId) -> Result<u32, PollError> {
        Ok(self.tally(poll_id)?.participants)
    }

    /// Returns answers selected by `voter`, or an empty list if `voter` didn't vote.
    #[handle_result]
    pub fn user_votes(
        &self,
        poll_id: PollId,
        voter: AccountId,
    ) -> Result<Vec<AnswerId>, PollError> {
        self.poll(poll_id)?;
        Ok(self.ballots.get(&(poll_id, voter)).unwrap_or_default())
    }

    #[handle_result]
    pub fn has_voted(&self, poll_id: PollId, voter: AccountId) -> Result<bool, PollError> {
        self.poll(poll_id)?;
        Ok(self.ballots.contains_key(&(poll_id, voter)))
    }

    /**********
     * INTERNAL
     **********/

    fn tally(&self, poll_id: PollId) -> Result<Tally, PollError> {
        let poll = self.poll(poll_id)?;
        Ok(self
            .tallies
            .get(&poll_id)
            .unwrap_or_else(|| Tally::new(poll.answers.len())))
    }
}
