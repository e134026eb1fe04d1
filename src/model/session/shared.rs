use std::cmp::Ordering;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::model::{candidate::Candidate, voter::Voter};

use super::{Ballot, Election, ResultRow, VoteRejection};

/// An election that can be shared between threads.
///
/// Every operation holds the session's single lock for its whole duration,
/// so registration and voting remain check-then-write atomic.
/// Clones refer to the same session.
#[derive(Debug, Clone)]
pub struct SharedElection {
    inner: Arc<Mutex<Election>>,
}

impl SharedElection {
    /// Open a new shared election.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Election::new(candidates).into()
    }

    /// Lock the session. Every gate runs before any write, so a panic
    /// elsewhere can never leave the state half-updated and poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Election> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Election::register_voter`].
    pub fn register_voter(&self, voter: &Voter) -> bool {
        self.lock().register_voter(voter)
    }

    /// See [`Election::try_cast_vote`].
    pub fn try_cast_vote(
        &self,
        voter_id: &str,
        candidate_id: &str,
    ) -> Result<Ballot, VoteRejection> {
        self.lock().try_cast_vote(voter_id, candidate_id)
    }

    /// See [`Election::cast_vote`]. The callbacks run after the lock is released,
    /// so they may use this election again.
    pub fn cast_vote<T>(
        &self,
        voter_id: &str,
        candidate_id: &str,
        on_success: impl FnOnce(Ballot) -> T,
        on_error: impl FnOnce(VoteRejection) -> T,
    ) -> T {
        let outcome = self.try_cast_vote(voter_id, candidate_id);
        match outcome {
            Ok(ballot) => on_success(ballot),
            Err(rejection) => on_error(rejection),
        }
    }

    /// See [`Election::results`].
    pub fn results(&self) -> Vec<ResultRow> {
        self.lock().results()
    }

    /// See [`Election::results_by`].
    pub fn results_by<F>(&self, compare: F) -> Vec<ResultRow>
    where
        F: FnMut(&ResultRow, &ResultRow) -> Ordering,
    {
        self.lock().results_by(compare)
    }

    /// See [`Election::winner`].
    pub fn winner(&self) -> Option<ResultRow> {
        self.lock().winner()
    }
}

impl From<Election> for SharedElection {
    fn from(election: Election) -> Self {
        Self {
            inner: Arc::new(Mutex::new(election)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn one_vote_per_voter_across_threads() {
        let election = SharedElection::new(vec![Candidate::example1(), Candidate::example2()]);
        assert!(election.register_voter(&Voter::example1()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let election = election.clone();
                let candidate = if i % 2 == 0 { "C1" } else { "C2" };
                thread::spawn(move || election.try_cast_vote("V1", candidate).is_ok())
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(
            election.results().iter().map(|row| row.votes).sum::<u64>(),
            1
        );
    }

    #[test]
    fn registration_once_across_threads() {
        let election = SharedElection::new(vec![Candidate::example1()]);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let election = election.clone();
                thread::spawn(move || election.register_voter(&Voter::example2()))
            })
            .collect();
        let registrations = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(registrations, 1);
    }

    #[test]
    fn callbacks_may_reenter() {
        let election: SharedElection = Election::example().into();
        assert!(election.register_voter(&Voter::example1()));
        let winner = election.cast_vote("V1", "C2", |_| election.winner(), |_| None);
        assert_eq!(winner.map(|row| row.id), Some("C2".to_string()));
        assert_eq!(election.results_by(|a, b| a.id.cmp(&b.id))[1].votes, 1);
    }
}
