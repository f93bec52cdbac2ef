use anchor_lang::prelude::*;

use crate::constants::{MAX_JOB_TYPE_LEN, MAX_PLATFORM_LEN, MAX_RATING, MIN_RATING};
use crate::error::ReputationError;
use crate::state::{load_account, Worker};

/// One rated engagement, immutable once written.
/// PDA seeds: ["job", worker, index]
#[account]
#[derive(InitSpace, Debug)]
pub struct Job {
    /// Owning Worker account
    pub worker: Pubkey,
    pub index: u64,
    #[max_len(32)] // MAX_PLATFORM_LEN
    pub platform: String,
    pub rating: u8,
    #[max_len(32)] // MAX_JOB_TYPE_LEN
    pub job_type: String,
    pub timestamp: i64,
    pub bump: u8,
}

/// Return data of `get_job`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct JobRecord {
    pub platform: String,
    pub rating: u8,
    pub timestamp: i64,
    pub job_type: String,
}

impl Job {
    pub const SEED: &'static [u8] = b"job";

    pub fn new(
        worker: Pubkey,
        index: u64,
        platform: String,
        rating: u8,
        job_type: String,
        timestamp: i64,
        bump: u8,
    ) -> Self {
        Self {
            worker,
            index,
            platform,
            rating,
            job_type,
            timestamp,
            bump,
        }
    }

    pub fn validate(platform: &str, rating: u8, job_type: &str) -> Result<()> {
        require!(
            (MIN_RATING..=MAX_RATING).contains(&rating),
            ReputationError::InvalidRating
        );
        require!(!platform.is_empty(), ReputationError::EmptyPlatform);
        require!(
            platform.len() <= MAX_PLATFORM_LEN,
            ReputationError::PlatformTooLong
        );
        require!(!job_type.is_empty(), ReputationError::EmptyJobType);
        require!(
            job_type.len() <= MAX_JOB_TYPE_LEN,
            ReputationError::JobTypeTooLong
        );
        Ok(())
    }

    /// Reads job `index` of `worker` once the index is known to be in range.
    pub fn load_record(worker: &Worker, index: u64, info: &AccountInfo) -> Result<JobRecord> {
        worker.check_job_index(index)?;
        let job = load_account::<Self>(info)?
            .ok_or_else(|| error!(ReputationError::IndexOutOfBounds))?;
        Ok(JobRecord::from(&job))
    }
}

impl From<&Job> for JobRecord {
    fn from(job: &Job) -> Self {
        Self {
            platform: job.platform.clone(),
            rating: job.rating,
            timestamp: job.timestamp,
            job_type: job.job_type.clone(),
        }
    }
}
