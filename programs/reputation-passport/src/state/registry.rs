use anchor_lang::prelude::*;

use crate::error::ReputationError;
use crate::state::{load_account, Worker};

/// Number of registered workers. Addresses live in one `RegistryEntry`
/// per ordinal so the registry never grows.
/// PDA seeds: ["registry"]
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Registry {
    pub worker_count: u64,
    pub bump: u8,
}

/// Address registered at a fixed ordinal.
/// PDA seeds: ["registry_entry", ordinal]
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct RegistryEntry {
    pub worker: Pubkey,
    pub ordinal: u64,
    pub bump: u8,
}

impl Registry {
    pub const SEED: &'static [u8] = b"registry";

    /// Marks `worker` registered under the next ordinal and returns that
    /// ordinal. The count only moves when registration succeeds.
    pub fn enroll(&mut self, worker: &mut Worker, authority: Pubkey, bump: u8, now: i64) -> Result<u64> {
        let ordinal = self.worker_count;
        let worker_count = ordinal
            .checked_add(1)
            .ok_or(ReputationError::CounterOverflow)?;

        worker.register(authority, ordinal, bump, now)?;
        self.worker_count = worker_count;
        Ok(ordinal)
    }

    pub fn check_ordinal(&self, ordinal: u64) -> Result<()> {
        require!(ordinal < self.worker_count, ReputationError::IndexOutOfBounds);
        Ok(())
    }
}

impl RegistryEntry {
    pub const SEED: &'static [u8] = b"registry_entry";

    /// Address at `ordinal`, read from its entry account once the ordinal
    /// is known to be in range.
    pub fn load_worker(registry: &Registry, ordinal: u64, info: &AccountInfo) -> Result<Pubkey> {
        registry.check_ordinal(ordinal)?;
        let entry = load_account::<Self>(info)?
            .ok_or_else(|| error!(ReputationError::IndexOutOfBounds))?;
        Ok(entry.worker)
    }
}
