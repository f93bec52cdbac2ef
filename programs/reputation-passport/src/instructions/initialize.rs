use anchor_lang::prelude::*;

use crate::state::Registry;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer; pays for the registry
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [Registry::SEED],
        bump,
        space = 8 + Registry::INIT_SPACE,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn init(&mut self, bumps: &InitializeBumps) -> Result<()> {
        self.registry.set_inner(Registry {
            worker_count: 0,
            bump: bumps.registry,
        });

        msg!("Registry initialized by: {}", self.authority.key());
        Ok(())
    }
}
