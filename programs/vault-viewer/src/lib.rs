// Vault Viewer - paginated read-only aggregation over a vault hub registry
//
// Three query surfaces over one registry: connected vaults, vaults filtered
// by owner, and vaults filtered by (role, account) grants on per-vault
// dashboards; plus batch snapshots and role membership resolution. Bounded
// variants take a half-open [from, to) window and return the slice together
// with the count of matches left beyond the window.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod query;
pub mod state;

use instructions::*;
use state::{VaultData, VaultRoleMembers, VaultsDataPage, VaultsPage};

declare_id!("VVVRevSAeCGxc8hJ9vng22E42n64BCzM2RZ5A3wrtDP");

#[program]
pub mod vault_viewer {
    use super::*;

    /// Create the vault hub registry with the signer as its authority
    pub fn initialize_hub(ctx: Context<InitializeHub>) -> Result<()> {
        instructions::initialize_hub::handler(ctx)
    }

    /// Bind the viewer to a hub
    ///
    /// Fails with `ZeroArgument` when the hub handle is the zero key.
    pub fn initialize_viewer(ctx: Context<InitializeViewer>, vault_hub: Pubkey) -> Result<()> {
        instructions::initialize_viewer::handler(ctx, vault_hub)
    }

    /// Connect a vault to the hub (authority only)
    pub fn connect_vault(
        ctx: Context<ConnectVault>,
        vault: Pubkey,
        owner: Pubkey,
        forced_rebalance_threshold_bp: u16,
        infra_fee_bp: u16,
        liquidity_fee_bp: u16,
    ) -> Result<()> {
        instructions::connect_vault::handler(
            ctx,
            vault,
            owner,
            forced_rebalance_threshold_bp,
            infra_fee_bp,
            liquidity_fee_bp,
        )
    }

    /// Disconnect a vault from the hub (authority only)
    pub fn disconnect_vault(ctx: Context<DisconnectVault>, vault: Pubkey) -> Result<()> {
        instructions::disconnect_vault::handler(ctx, vault)
    }

    /// Update a connected vault's accounting record (authority only)
    pub fn update_vault_record(
        ctx: Context<UpdateVaultRecord>,
        vault: Pubkey,
        liability_shares: u64,
        total_value: u64,
        liability_steth: u64,
    ) -> Result<()> {
        instructions::update_vault_record::handler(
            ctx,
            vault,
            liability_shares,
            total_value,
            liability_steth,
        )
    }

    /// Create the access-control dashboard for a vault
    pub fn create_dashboard(
        ctx: Context<CreateDashboard>,
        vault: Pubkey,
        node_operator: Pubkey,
        node_operator_fee_bp: u16,
    ) -> Result<()> {
        instructions::create_dashboard::handler(ctx, vault, node_operator, node_operator_fee_bp)
    }

    /// Grant a role on a dashboard (dashboard admin only)
    pub fn grant_role(ctx: Context<GrantRole>, role: [u8; 32], account: Pubkey) -> Result<()> {
        instructions::grant_role::handler(ctx, role, account)
    }

    /// Revoke a role on a dashboard (dashboard admin only)
    pub fn revoke_role(ctx: Context<RevokeRole>, role: [u8; 32], account: Pubkey) -> Result<()> {
        instructions::revoke_role::handler(ctx, role, account)
    }

    /// All connected vaults in registry order
    pub fn vaults_connected(ctx: Context<ViewerQuery>) -> Result<Vec<Pubkey>> {
        instructions::view_vaults::vaults_connected(ctx)
    }

    /// Connected vaults in `[from, to)` plus the count beyond `to`
    pub fn vaults_connected_bound(
        ctx: Context<ViewerQuery>,
        from: u64,
        to: u64,
    ) -> Result<VaultsPage> {
        instructions::view_vaults::vaults_connected_bound(ctx, from, to)
    }

    /// Connected vaults recorded as owned by `owner`
    pub fn vaults_by_owner(ctx: Context<ViewerQuery>, owner: Pubkey) -> Result<Vec<Pubkey>> {
        instructions::view_vaults::vaults_by_owner(ctx, owner)
    }

    /// Bounded variant of `vaults_by_owner`; the window applies to the
    /// filtered set
    pub fn vaults_by_owner_bound(
        ctx: Context<ViewerQuery>,
        owner: Pubkey,
        from: u64,
        to: u64,
    ) -> Result<VaultsPage> {
        instructions::view_vaults::vaults_by_owner_bound(ctx, owner, from, to)
    }

    /// Connected vaults whose dashboard reports `account` as a member of
    /// `role` (dashboards supplied via remaining accounts)
    pub fn vaults_by_role(
        ctx: Context<ViewerQuery>,
        role: [u8; 32],
        account: Pubkey,
    ) -> Result<Vec<Pubkey>> {
        instructions::view_vaults::vaults_by_role(ctx, role, account)
    }

    /// Bounded variant of `vaults_by_role` over the filtered set
    pub fn vaults_by_role_bound(
        ctx: Context<ViewerQuery>,
        role: [u8; 32],
        account: Pubkey,
        from: u64,
        to: u64,
    ) -> Result<VaultsPage> {
        instructions::view_vaults::vaults_by_role_bound(ctx, role, account, from, to)
    }

    /// Snapshot of one vault; all-zero for a zero or unknown handle
    pub fn get_vault_data(ctx: Context<ViewerQuery>, vault: Pubkey) -> Result<VaultData> {
        instructions::view_vault_data::get_vault_data(ctx, vault)
    }

    /// Snapshots for the connected vaults in `[from, to)`; callers bound
    /// per-call cost through the window width
    pub fn get_vaults_data_bound(
        ctx: Context<ViewerQuery>,
        from: u64,
        to: u64,
    ) -> Result<VaultsDataPage> {
        instructions::view_vault_data::get_vaults_data_bound(ctx, from, to)
    }

    /// Owner, node operator and member lists for the requested roles
    pub fn get_role_members(
        ctx: Context<ViewerQuery>,
        vault: Pubkey,
        roles: Vec<[u8; 32]>,
    ) -> Result<VaultRoleMembers> {
        instructions::view_role_members::get_role_members(ctx, vault, roles)
    }

    /// Per-vault role membership resolution preserving input order
    pub fn get_role_members_batch(
        ctx: Context<ViewerQuery>,
        vaults: Vec<Pubkey>,
        roles: Vec<[u8; 32]>,
    ) -> Result<Vec<VaultRoleMembers>> {
        instructions::view_role_members::get_role_members_batch(ctx, vaults, roles)
    }
}
