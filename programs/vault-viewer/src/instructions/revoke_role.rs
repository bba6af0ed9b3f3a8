use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Revoke a role on a vault's dashboard
#[derive(Accounts)]
pub struct RevokeRole<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [DASHBOARD_SEED, dashboard.vault.as_ref()],
        bump = dashboard.bump,
        has_one = admin @ ViewerError::Unauthorized,
    )]
    pub dashboard: Account<'info, Dashboard>,
}

pub fn handler(ctx: Context<RevokeRole>, role: [u8; 32], account: Pubkey) -> Result<()> {
    let dashboard = &mut ctx.accounts.dashboard;
    dashboard.revoke_role(&role, &account)?;

    emit!(RoleRevoked {
        dashboard: dashboard.key(),
        role,
        account,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
