use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;

use crate::events::{JobAdded, ScoreUpdated};
use crate::state::{Job, Worker};

#[derive(Accounts)]
pub struct AddJob<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// An unregistered caller gets a blank record here and is rejected with
    /// `NotRegistered`; the failed transaction discards the account.
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [Worker::SEED, authority.key().as_ref()],
        bump,
        space = 8 + Worker::INIT_SPACE,
    )]
    pub worker: Account<'info, Worker>,

    #[account(
        init,
        payer = authority,
        seeds = [Job::SEED, worker.key().as_ref(), &worker.job_count.to_le_bytes()],
        bump,
        space = 8 + Job::INIT_SPACE,
    )]
    pub job: Account<'info, Job>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<AddJob>,
    platform: String,
    rating: u8,
    job_type: String,
) -> Result<()> {
    let worker = &mut ctx.accounts.worker;
    let clock = Clock::get()?;

    let index = worker.record_job(&platform, rating, &job_type)?;

    ctx.accounts.job.set_inner(Job::new(
        worker.key(),
        index,
        platform.clone(),
        rating,
        job_type.clone(),
        clock.unix_timestamp,
        ctx.bumps.job,
    ));

    let authority = worker.authority;
    let score = worker.score();
    let job_count = worker.job_count;

    emit!(JobAdded {
        worker: authority,
        platform,
        rating,
        job_type,
    });
    emit!(ScoreUpdated {
        worker: authority,
        score,
        job_count,
    });

    msg!(
        "Job {} added for worker: {} score: {} jobs: {}",
        index,
        authority,
        score,
        job_count
    );

    Ok(())
}
