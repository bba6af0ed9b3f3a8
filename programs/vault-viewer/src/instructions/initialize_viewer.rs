use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Bind the viewer config to a vault hub
#[derive(Accounts)]
pub struct InitializeViewer<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = Viewer::SPACE,
        seeds = [VIEWER_SEED],
        bump
    )]
    pub viewer: Account<'info, Viewer>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeViewer>, vault_hub: Pubkey) -> Result<()> {
    // The one construction requirement: a non-zero hub handle
    if vault_hub == Pubkey::default() {
        msg!("ZeroArgument: _vaultHub");
        return err!(ViewerError::ZeroArgument);
    }

    let viewer = &mut ctx.accounts.viewer;
    viewer.vault_hub = vault_hub;
    viewer.bump = ctx.bumps.viewer;

    emit!(ViewerInitialized {
        viewer: viewer.key(),
        vault_hub,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
