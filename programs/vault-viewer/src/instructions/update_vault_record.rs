use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Overwrite the accounting record of a connected vault
#[derive(Accounts)]
pub struct UpdateVaultRecord<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_HUB_SEED],
        bump = vault_hub.bump,
        has_one = authority @ ViewerError::Unauthorized,
    )]
    pub vault_hub: Account<'info, VaultHub>,
}

pub fn handler(
    ctx: Context<UpdateVaultRecord>,
    vault: Pubkey,
    liability_shares: u64,
    total_value: u64,
    liability_steth: u64,
) -> Result<()> {
    ctx.accounts
        .vault_hub
        .update_record(&vault, liability_shares, total_value, liability_steth)?;

    emit!(VaultRecordUpdated {
        vault,
        liability_shares,
        total_value,
        liability_steth,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
