use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Grant a role on a vault's dashboard
#[derive(Accounts)]
pub struct GrantRole<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [DASHBOARD_SEED, dashboard.vault.as_ref()],
        bump = dashboard.bump,
        has_one = admin @ ViewerError::Unauthorized,
    )]
    pub dashboard: Account<'info, Dashboard>,
}

pub fn handler(ctx: Context<GrantRole>, role: [u8; 32], account: Pubkey) -> Result<()> {
    if account == Pubkey::default() {
        msg!("ZeroArgument: _account");
        return err!(ViewerError::ZeroArgument);
    }

    let dashboard = &mut ctx.accounts.dashboard;
    dashboard.grant_role(role, account)?;

    emit!(RoleGranted {
        dashboard: dashboard.key(),
        role,
        account,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
