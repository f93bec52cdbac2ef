//! Read-only views. Results travel back as program return data; clients
//! normally simulate these instead of submitting them.

use anchor_lang::prelude::*;

use crate::state::{Job, JobRecord, Registry, RegistryEntry, Worker, WorkerScore};

#[derive(Accounts)]
#[instruction(address: Pubkey)]
pub struct QueryWorker<'info> {
    /// CHECK: may be uninitialized; read through `Worker::load`
    #[account(seeds = [Worker::SEED, address.as_ref()], bump)]
    pub worker: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(address: Pubkey, index: u64)]
pub struct QueryJob<'info> {
    /// CHECK: may be uninitialized; read through `Worker::load`
    #[account(seeds = [Worker::SEED, address.as_ref()], bump)]
    pub worker: UncheckedAccount<'info>,

    /// CHECK: deserialized only after `index` is known to be in range
    #[account(seeds = [Job::SEED, worker.key().as_ref(), &index.to_le_bytes()], bump)]
    pub job: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct QueryRegistry<'info> {
    #[account(seeds = [Registry::SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,
}

#[derive(Accounts)]
#[instruction(ordinal: u64)]
pub struct QueryRegistryEntry<'info> {
    #[account(seeds = [Registry::SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    /// CHECK: deserialized only after `ordinal` is known to be in range
    #[account(seeds = [RegistryEntry::SEED, &ordinal.to_le_bytes()], bump)]
    pub entry: UncheckedAccount<'info>,
}

pub fn get_score(ctx: Context<QueryWorker>, _address: Pubkey) -> Result<WorkerScore> {
    let worker = Worker::load_registered(&ctx.accounts.worker)?;
    Ok(worker.score_view())
}

pub fn get_worker_job_count(ctx: Context<QueryWorker>, _address: Pubkey) -> Result<u64> {
    let worker = Worker::load_registered(&ctx.accounts.worker)?;
    Ok(worker.job_count)
}

pub fn is_worker_registered(ctx: Context<QueryWorker>, _address: Pubkey) -> Result<bool> {
    Ok(Worker::load(&ctx.accounts.worker)?.is_some())
}

pub fn get_job(ctx: Context<QueryJob>, _address: Pubkey, index: u64) -> Result<JobRecord> {
    let worker = Worker::load_registered(&ctx.accounts.worker)?;
    Job::load_record(&worker, index, &ctx.accounts.job)
}

pub fn get_worker_count(ctx: Context<QueryRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.worker_count)
}

pub fn get_worker_address(ctx: Context<QueryRegistryEntry>, ordinal: u64) -> Result<Pubkey> {
    RegistryEntry::load_worker(&ctx.accounts.registry, ordinal, &ctx.accounts.entry)
}
