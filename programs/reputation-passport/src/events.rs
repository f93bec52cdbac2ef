use anchor_lang::prelude::*;

#[event]
pub struct WorkerRegistered {
    pub worker: Pubkey,
}

#[event]
pub struct JobAdded {
    pub worker: Pubkey,
    pub platform: String,
    pub rating: u8,
    pub job_type: String,
}

/// Emitted after every accepted job. `score` uses the same scale as `get_score`.
#[event]
pub struct ScoreUpdated {
    pub worker: Pubkey,
    pub score: u64,
    pub job_count: u64,
}
