use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;

use crate::events::WorkerRegistered;
use crate::state::{Registry, RegistryEntry, Worker};

#[derive(Accounts)]
pub struct RegisterWorker<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Already-registered workers fail in the handler with `AlreadyRegistered`
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [Worker::SEED, authority.key().as_ref()],
        bump,
        space = 8 + Worker::INIT_SPACE,
    )]
    pub worker: Account<'info, Worker>,

    #[account(
        mut,
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = authority,
        seeds = [RegistryEntry::SEED, &registry.worker_count.to_le_bytes()],
        bump,
        space = 8 + RegistryEntry::INIT_SPACE,
    )]
    pub entry: Account<'info, RegistryEntry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterWorker>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let worker = &mut ctx.accounts.worker;
    let registry = &mut ctx.accounts.registry;
    let clock = Clock::get()?;

    let ordinal = registry.enroll(worker, authority, ctx.bumps.worker, clock.unix_timestamp)?;
    ctx.accounts.entry.set_inner(RegistryEntry {
        worker: authority,
        ordinal,
        bump: ctx.bumps.entry,
    });

    emit!(WorkerRegistered { worker: authority });
    msg!("Worker registered: {} (ordinal {})", authority, ordinal);

    Ok(())
}
