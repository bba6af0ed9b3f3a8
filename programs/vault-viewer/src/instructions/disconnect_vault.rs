use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Disconnect a vault from the hub, preserving the order of the rest
#[derive(Accounts)]
pub struct DisconnectVault<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_HUB_SEED],
        bump = vault_hub.bump,
        has_one = authority @ ViewerError::Unauthorized,
    )]
    pub vault_hub: Account<'info, VaultHub>,
}

pub fn handler(ctx: Context<DisconnectVault>, vault: Pubkey) -> Result<()> {
    ctx.accounts.vault_hub.disconnect(&vault)?;

    emit!(VaultDisconnected {
        vault,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
