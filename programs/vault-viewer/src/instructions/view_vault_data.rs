use anchor_lang::prelude::*;

use crate::{query, state::*};

use super::view_vaults::ViewerQuery;

pub fn get_vault_data(ctx: Context<ViewerQuery>, vault: Pubkey) -> Result<VaultData> {
    let directory = DashboardDirectory::load(ctx.remaining_accounts);
    let hub: &VaultHub = &ctx.accounts.vault_hub;
    Ok(query::vault_data(hub, &directory, &vault))
}

pub fn get_vaults_data_bound(
    ctx: Context<ViewerQuery>,
    from: u64,
    to: u64,
) -> Result<VaultsDataPage> {
    let directory = DashboardDirectory::load(ctx.remaining_accounts);
    let hub: &VaultHub = &ctx.accounts.vault_hub;
    let (vaults_data, leftover) = query::vaults_data_bound(hub, &directory, from, to)?;
    Ok(VaultsDataPage {
        vaults_data,
        leftover,
    })
}
