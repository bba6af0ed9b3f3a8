use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, query, state::*};

/// Shared context for all read-only queries
///
/// Role-touching queries additionally read dashboards from
/// `remaining_accounts`; accounts that are not dashboards are skipped.
#[derive(Accounts)]
pub struct ViewerQuery<'info> {
    #[account(seeds = [VIEWER_SEED], bump = viewer.bump)]
    pub viewer: Account<'info, Viewer>,

    #[account(constraint = vault_hub.key() == viewer.vault_hub @ ViewerError::VaultHubMismatch)]
    pub vault_hub: Account<'info, VaultHub>,
}

pub fn vaults_connected(ctx: Context<ViewerQuery>) -> Result<Vec<Pubkey>> {
    let hub: &VaultHub = &ctx.accounts.vault_hub;
    Ok(query::vaults_connected(hub))
}

pub fn vaults_connected_bound(
    ctx: Context<ViewerQuery>,
    from: u64,
    to: u64,
) -> Result<VaultsPage> {
    let hub: &VaultHub = &ctx.accounts.vault_hub;
    let (vaults, leftover) = query::vaults_connected_bound(hub, from, to)?;
    Ok(VaultsPage { vaults, leftover })
}

pub fn vaults_by_owner(ctx: Context<ViewerQuery>, owner: Pubkey) -> Result<Vec<Pubkey>> {
    let hub: &VaultHub = &ctx.accounts.vault_hub;
    Ok(query::vaults_by_owner(hub, &owner))
}

pub fn vaults_by_owner_bound(
    ctx: Context<ViewerQuery>,
    owner: Pubkey,
    from: u64,
    to: u64,
) -> Result<VaultsPage> {
    let hub: &VaultHub = &ctx.accounts.vault_hub;
    let (vaults, leftover) = query::vaults_by_owner_bound(hub, &owner, from, to)?;
    Ok(VaultsPage { vaults, leftover })
}

pub fn vaults_by_role(
    ctx: Context<ViewerQuery>,
    role: [u8; 32],
    account: Pubkey,
) -> Result<Vec<Pubkey>> {
    let directory = DashboardDirectory::load(ctx.remaining_accounts);
    let hub: &VaultHub = &ctx.accounts.vault_hub;
    Ok(query::vaults_by_role(hub, &directory, &role, &account))
}

pub fn vaults_by_role_bound(
    ctx: Context<ViewerQuery>,
    role: [u8; 32],
    account: Pubkey,
    from: u64,
    to: u64,
) -> Result<VaultsPage> {
    let directory = DashboardDirectory::load(ctx.remaining_accounts);
    let hub: &VaultHub = &ctx.accounts.vault_hub;
    let (vaults, leftover) =
        query::vaults_by_role_bound(hub, &directory, &role, &account, from, to)?;
    Ok(VaultsPage { vaults, leftover })
}
