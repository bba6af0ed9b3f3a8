use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Connect a vault to the hub
#[derive(Accounts)]
pub struct ConnectVault<'info> {
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
    ctx: Context<ConnectVault>,
    vault: Pubkey,
    owner: Pubkey,
    forced_rebalance_threshold_bp: u16,
    infra_fee_bp: u16,
    liquidity_fee_bp: u16,
) -> Result<()> {
    if vault == Pubkey::default() {
        msg!("ZeroArgument: _vault");
        return err!(ViewerError::ZeroArgument);
    }
    if owner == Pubkey::default() {
        msg!("ZeroArgument: _owner");
        return err!(ViewerError::ZeroArgument);
    }

    ctx.accounts.vault_hub.connect(VaultConnection {
        vault,
        owner,
        forced_rebalance_threshold_bp,
        infra_fee_bp,
        liquidity_fee_bp,
        liability_shares: 0,
        total_value: 0,
        liability_steth: 0,
    })?;

    emit!(VaultConnected {
        vault,
        owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
