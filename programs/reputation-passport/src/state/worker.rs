use anchor_lang::prelude::*;

use crate::constants::SCORE_SCALE;
use crate::error::ReputationError;
use crate::state::{load_account, Job};

/// Reputation record for one worker address.
/// PDA seeds: ["worker", authority]
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Worker {
    /// Wallet that registered and submits jobs
    pub authority: Pubkey,
    /// Set once on registration, never cleared
    pub registered: bool,
    /// Number of Job accounts under this worker
    pub job_count: u64,
    /// Sum of every rating ever recorded
    pub total_rating_sum: u64,
    pub registered_at: i64,
    /// Position in the registry
    pub ordinal: u64,
    pub bump: u8,
}

/// Return data of `get_score`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerScore {
    pub score: u64,
    pub job_count: u64,
}

impl Worker {
    pub const SEED: &'static [u8] = b"worker";

    pub fn register(&mut self, authority: Pubkey, ordinal: u64, bump: u8, now: i64) -> Result<()> {
        require!(!self.registered, ReputationError::AlreadyRegistered);

        self.authority = authority;
        self.registered = true;
        self.job_count = 0;
        self.total_rating_sum = 0;
        self.registered_at = now;
        self.ordinal = ordinal;
        self.bump = bump;
        Ok(())
    }

    /// Validates a job submission and folds its rating into the totals.
    /// Returns the index the new job occupies. Nothing changes on error.
    pub fn record_job(&mut self, platform: &str, rating: u8, job_type: &str) -> Result<u64> {
        require!(self.registered, ReputationError::NotRegistered);
        Job::validate(platform, rating, job_type)?;

        let index = self.job_count;
        let job_count = index
            .checked_add(1)
            .ok_or(ReputationError::CounterOverflow)?;
        let total_rating_sum = self
            .total_rating_sum
            .checked_add(u64::from(rating))
            .ok_or(ReputationError::CounterOverflow)?;

        self.job_count = job_count;
        self.total_rating_sum = total_rating_sum;
        Ok(index)
    }

    /// Mean rating scaled by `SCORE_SCALE`, truncated. Zero before the first job.
    pub fn score(&self) -> u64 {
        if self.job_count == 0 {
            return 0;
        }
        let scaled = u128::from(self.total_rating_sum) * u128::from(SCORE_SCALE);
        (scaled / u128::from(self.job_count)) as u64
    }

    pub fn score_view(&self) -> WorkerScore {
        WorkerScore {
            score: self.score(),
            job_count: self.job_count,
        }
    }

    /// Reads a worker from an account that may not exist.
    /// `None` means the address never registered.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        Ok(load_account::<Self>(info)?.filter(|worker| worker.registered))
    }

    pub fn load_registered(info: &AccountInfo) -> Result<Self> {
        Self::load(info)?.ok_or_else(|| error!(ReputationError::NotRegistered))
    }

    pub fn check_job_index(&self, index: u64) -> Result<()> {
        require!(index < self.job_count, ReputationError::IndexOutOfBounds);
        Ok(())
    }
}
