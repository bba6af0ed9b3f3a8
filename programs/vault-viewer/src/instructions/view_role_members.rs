use anchor_lang::prelude::*;

use crate::{query, state::*};

use super::view_vaults::ViewerQuery;

pub fn get_role_members(
    ctx: Context<ViewerQuery>,
    vault: Pubkey,
    roles: Vec<[u8; 32]>,
) -> Result<VaultRoleMembers> {
    let directory = DashboardDirectory::load(ctx.remaining_accounts);
    let hub: &VaultHub = &ctx.accounts.vault_hub;
    Ok(query::role_members(hub, &directory, &vault, &roles))
}

pub fn get_role_members_batch(
    ctx: Context<ViewerQuery>,
    vaults: Vec<Pubkey>,
    roles: Vec<[u8; 32]>,
) -> Result<Vec<VaultRoleMembers>> {
    let directory = DashboardDirectory::load(ctx.remaining_accounts);
    let hub: &VaultHub = &ctx.accounts.vault_hub;
    Ok(query::role_members_batch(hub, &directory, &vaults, &roles))
}
