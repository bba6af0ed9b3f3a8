//! Pure query core: pagination plus the connected/by-owner/by-role views,
//! batch snapshots and role membership resolution.
//!
//! Everything here is generic over two read-only capabilities so the logic
//! can be exercised against in-memory fakes: [`VaultRegistry`] (the hub) and
//! [`RoleSource`] (the dashboards supplied with a query). Filtering is a
//! linear scan in registry order; results are never re-sorted.

use anchor_lang::prelude::*;

use crate::errors::ViewerError;
use crate::state::{
    VaultConnection, VaultConnectionInfo, VaultData, VaultRecordInfo, VaultRoleMembers,
};

/// Read-only view of the hub's ordered connection list
pub trait VaultRegistry {
    fn vault_count(&self) -> u64;

    /// Vault handle at `index`; the zero key when out of range
    fn vault_at(&self, index: u64) -> Pubkey;

    fn connection_of(&self, vault: &Pubkey) -> Option<&VaultConnection>;

    fn owner_of(&self, vault: &Pubkey) -> Option<Pubkey> {
        self.connection_of(vault).map(|c| c.owner)
    }
}

/// Read-only view of the access-control state behind owner handles
///
/// Owners without access-control capability report no roles, the zero node
/// operator and a zero fee; that is never an error.
pub trait RoleSource {
    fn has_role(&self, owner: &Pubkey, role: &[u8; 32], account: &Pubkey) -> bool;

    fn role_members(&self, owner: &Pubkey, role: &[u8; 32]) -> Vec<Pubkey>;

    fn node_operator(&self, owner: &Pubkey) -> Pubkey;

    fn node_operator_fee(&self, owner: &Pubkey) -> u16;
}

/// Validate a half-open `[from, to)` window against a collection size.
///
/// Returns `(start, end, leftover)` where `end` is `to` clamped to
/// `current_size` and `leftover` counts the elements beyond `to`. Rejects
/// `from > to` and `from > current_size`; `from == current_size` is a valid
/// empty window, and `to` past the end is clamped rather than rejected.
pub fn paginate(current_size: u64, from: u64, to: u64) -> Result<(u64, u64, u64)> {
    require!(
        from <= to && from <= current_size,
        ViewerError::WrongPaginationRange
    );
    let end = to.min(current_size);
    Ok((from, end, current_size.saturating_sub(to)))
}

/// All connected vaults in registry order
pub fn vaults_connected<R: VaultRegistry>(registry: &R) -> Vec<Pubkey> {
    (0..registry.vault_count())
        .map(|i| registry.vault_at(i))
        .collect()
}

/// Connected vaults in `[from, to)` plus the count beyond `to`
pub fn vaults_connected_bound<R: VaultRegistry>(
    registry: &R,
    from: u64,
    to: u64,
) -> Result<(Vec<Pubkey>, u64)> {
    let (start, end, leftover) = paginate(registry.vault_count(), from, to)?;
    let vaults = (start..end).map(|i| registry.vault_at(i)).collect();
    Ok((vaults, leftover))
}

/// Connected vaults whose recorded owner is `owner`, in registry order
pub fn vaults_by_owner<R: VaultRegistry>(registry: &R, owner: &Pubkey) -> Vec<Pubkey> {
    vaults_connected(registry)
        .into_iter()
        .filter(|vault| registry.owner_of(vault) == Some(*owner))
        .collect()
}

/// Bounded variant of [`vaults_by_owner`]; the window applies to the
/// filtered set, so `leftover` counts remaining matches
pub fn vaults_by_owner_bound<R: VaultRegistry>(
    registry: &R,
    owner: &Pubkey,
    from: u64,
    to: u64,
) -> Result<(Vec<Pubkey>, u64)> {
    bound_slice(&vaults_by_owner(registry, owner), from, to)
}

/// Connected vaults whose owner reports `account` as a member of `role`
pub fn vaults_by_role<R: VaultRegistry, S: RoleSource>(
    registry: &R,
    roles: &S,
    role: &[u8; 32],
    account: &Pubkey,
) -> Vec<Pubkey> {
    vaults_connected(registry)
        .into_iter()
        .filter(|vault| match registry.owner_of(vault) {
            Some(owner) => roles.has_role(&owner, role, account),
            None => false,
        })
        .collect()
}

/// Bounded variant of [`vaults_by_role`] over the filtered set
pub fn vaults_by_role_bound<R: VaultRegistry, S: RoleSource>(
    registry: &R,
    roles: &S,
    role: &[u8; 32],
    account: &Pubkey,
    from: u64,
    to: u64,
) -> Result<(Vec<Pubkey>, u64)> {
    bound_slice(&vaults_by_role(registry, roles, role, account), from, to)
}

fn bound_slice(matches: &[Pubkey], from: u64, to: u64) -> Result<(Vec<Pubkey>, u64)> {
    let (start, end, leftover) = paginate(matches.len() as u64, from, to)?;
    Ok((matches[start as usize..end as usize].to_vec(), leftover))
}

/// Snapshot of one vault's state; the all-zero snapshot for a zero or
/// unknown handle so callers can probe without a failing call
pub fn vault_data<R: VaultRegistry, S: RoleSource>(
    registry: &R,
    roles: &S,
    vault: &Pubkey,
) -> VaultData {
    if *vault == Pubkey::default() {
        return VaultData::default();
    }
    let Some(connection) = registry.connection_of(vault) else {
        return VaultData::default();
    };
    VaultData {
        vault_address: *vault,
        connection: VaultConnectionInfo {
            forced_rebalance_threshold_bp: connection.forced_rebalance_threshold_bp,
            infra_fee_bp: connection.infra_fee_bp,
            liquidity_fee_bp: connection.liquidity_fee_bp,
        },
        record: VaultRecordInfo {
            liability_shares: connection.liability_shares,
        },
        total_value: connection.total_value,
        liability_steth: connection.liability_steth,
        node_operator_fee_rate: roles.node_operator_fee(&connection.owner),
    }
}

/// Snapshots for the connected vaults in `[from, to)` plus the count beyond
/// `to`. Callers keep per-call cost bounded by choosing a small window; no
/// maximum width is enforced beyond range validation.
pub fn vaults_data_bound<R: VaultRegistry, S: RoleSource>(
    registry: &R,
    roles: &S,
    from: u64,
    to: u64,
) -> Result<(Vec<VaultData>, u64)> {
    let (start, end, leftover) = paginate(registry.vault_count(), from, to)?;
    let vaults_data = (start..end)
        .map(|i| {
            let vault = registry.vault_at(i);
            vault_data(registry, roles, &vault)
        })
        .collect();
    Ok((vaults_data, leftover))
}

/// Owner, node operator and per-role member lists for one vault; the
/// all-zero form with empty member lists for a zero or unknown handle
pub fn role_members<R: VaultRegistry, S: RoleSource>(
    registry: &R,
    roles_source: &S,
    vault: &Pubkey,
    roles: &[[u8; 32]],
) -> VaultRoleMembers {
    let owner = if *vault == Pubkey::default() {
        None
    } else {
        registry.owner_of(vault)
    };
    match owner {
        Some(owner) => VaultRoleMembers {
            vault: *vault,
            owner,
            node_operator: roles_source.node_operator(&owner),
            members: roles
                .iter()
                .map(|role| roles_source.role_members(&owner, role))
                .collect(),
        },
        None => VaultRoleMembers {
            members: vec![Vec::new(); roles.len()],
            ..Default::default()
        },
    }
}

/// Independent per-vault resolution preserving input order; one unknown
/// handle degrades to the zero form without aborting the batch
pub fn role_members_batch<R: VaultRegistry, S: RoleSource>(
    registry: &R,
    roles_source: &S,
    vaults: &[Pubkey],
    roles: &[[u8; 32]],
) -> Vec<VaultRoleMembers> {
    vaults
        .iter()
        .map(|vault| role_members(registry, roles_source, vault, roles))
        .collect()
}
