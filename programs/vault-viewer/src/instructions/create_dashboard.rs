use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Create the access-control dashboard for a vault
///
/// The signer becomes the admin and receives the default admin role; the
/// node operator, when supplied, receives the manager role that designates
/// it as the vault's operator.
#[derive(Accounts)]
#[instruction(vault: Pubkey)]
pub struct CreateDashboard<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = Dashboard::SPACE,
        seeds = [DASHBOARD_SEED, vault.as_ref()],
        bump
    )]
    pub dashboard: Account<'info, Dashboard>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateDashboard>,
    vault: Pubkey,
    node_operator: Pubkey,
    node_operator_fee_bp: u16,
) -> Result<()> {
    if vault == Pubkey::default() {
        msg!("ZeroArgument: _vault");
        return err!(ViewerError::ZeroArgument);
    }

    let dashboard = &mut ctx.accounts.dashboard;
    dashboard.vault = vault;
    dashboard.admin = ctx.accounts.admin.key();
    dashboard.node_operator_fee_bp = node_operator_fee_bp;
    dashboard.grants = Vec::new();
    dashboard.bump = ctx.bumps.dashboard;

    dashboard.grant_role(DEFAULT_ADMIN_ROLE, ctx.accounts.admin.key())?;
    if node_operator != Pubkey::default() {
        dashboard.grant_role(node_operator_manager_role(), node_operator)?;
    }

    emit!(DashboardCreated {
        dashboard: dashboard.key(),
        vault,
        admin: dashboard.admin,
        node_operator,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
