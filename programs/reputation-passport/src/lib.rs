use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use instructions::*;
use state::{JobRecord, WorkerScore};

declare_id!("2ty9D23ZTrYLWR4Ry1t2NgWBxuXqFT79krg7uv75fdBx");

#[program]
pub mod reputation_passport {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.init(&ctx.bumps)
    }

    pub fn register_worker(ctx: Context<RegisterWorker>) -> Result<()> {
        instructions::register_worker::handler(ctx)
    }

    pub fn add_job(
        ctx: Context<AddJob>,
        platform: String,
        rating: u8,
        job_type: String,
    ) -> Result<()> {
        instructions::add_job::handler(ctx, platform, rating, job_type)
    }

    // ---------- views ----------
    pub fn get_score(ctx: Context<QueryWorker>, address: Pubkey) -> Result<WorkerScore> {
        instructions::queries::get_score(ctx, address)
    }

    pub fn get_job(ctx: Context<QueryJob>, address: Pubkey, index: u64) -> Result<JobRecord> {
        instructions::queries::get_job(ctx, address, index)
    }

    pub fn get_worker_job_count(ctx: Context<QueryWorker>, address: Pubkey) -> Result<u64> {
        instructions::queries::get_worker_job_count(ctx, address)
    }

    pub fn get_worker_count(ctx: Context<QueryRegistry>) -> Result<u64> {
        instructions::queries::get_worker_count(ctx)
    }

    pub fn get_worker_address(ctx: Context<QueryRegistryEntry>, ordinal: u64) -> Result<Pubkey> {
        instructions::queries::get_worker_address(ctx, ordinal)
    }

    pub fn is_worker_registered(ctx: Context<QueryWorker>, address: Pubkey) -> Result<bool> {
        instructions::queries::is_worker_registered(ctx, address)
    }
}
