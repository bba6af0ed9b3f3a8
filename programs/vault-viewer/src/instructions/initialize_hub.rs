use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Create the vault hub registry
#[derive(Accounts)]
pub struct InitializeHub<'info> {
    /// Hub authority - the only signer allowed to mutate the registry
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = VaultHub::SPACE,
        seeds = [VAULT_HUB_SEED],
        bump
    )]
    pub vault_hub: Account<'info, VaultHub>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeHub>) -> Result<()> {
    let hub = &mut ctx.accounts.vault_hub;
    hub.authority = ctx.accounts.authority.key();
    hub.connections = Vec::new();
    hub.bump = ctx.bumps.vault_hub;

    emit!(HubInitialized {
        vault_hub: hub.key(),
        authority: hub.authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
