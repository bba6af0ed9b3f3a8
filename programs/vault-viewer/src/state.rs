use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ViewerError;
use crate::query::{RoleSource, VaultRegistry};

/// Registry of connected vaults
///
/// Source of truth for which vaults are connected and who owns each. The
/// viewer only ever reads it; mutations go through the authority-gated
/// maintenance instructions. Enumeration order is insertion order and is
/// preserved across disconnects.
#[account]
pub struct VaultHub {
    /// Authority that can connect/disconnect vaults and update records
    pub authority: Pubkey,

    /// Connected vaults in insertion order
    pub connections: Vec<VaultConnection>,

    /// Bump seed for the hub PDA
    pub bump: u8,

    // Padding for future upgrades
    pub _reserved: [u8; 128],
}

/// Per-vault entry held by the hub
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct VaultConnection {
    /// The vault handle
    pub vault: Pubkey,

    /// Owner handle; a dashboard PDA when the vault is access-controlled
    pub owner: Pubkey,

    /// Threshold at which a forced rebalance kicks in, in basis points
    pub forced_rebalance_threshold_bp: u16,

    /// Infrastructure fee, in basis points
    pub infra_fee_bp: u16,

    /// Liquidity fee, in basis points
    pub liquidity_fee_bp: u16,

    /// Shares backing the vault's liability
    pub liability_shares: u64,

    /// Total value held by the vault
    pub total_value: u64,

    /// Liability denominated in stETH
    pub liability_steth: u64,
}

impl VaultHub {
    /// 8 (discriminator) + 32 (authority) + 4 (vec len) + entries + 1 (bump) + 128 (padding)
    pub const SPACE: usize =
        8 + 32 + 4 + MAX_CONNECTED_VAULTS * VaultConnection::SIZE + 1 + 128;

    pub fn is_connected(&self, vault: &Pubkey) -> bool {
        self.connections.iter().any(|c| c.vault == *vault)
    }

    fn connection_mut(&mut self, vault: &Pubkey) -> Option<&mut VaultConnection> {
        self.connections.iter_mut().find(|c| c.vault == *vault)
    }

    /// Append a new connection, rejecting duplicates and a full hub
    pub fn connect(&mut self, connection: VaultConnection) -> Result<()> {
        require!(
            !self.is_connected(&connection.vault),
            ViewerError::VaultAlreadyConnected
        );
        require!(
            self.connections.len() < MAX_CONNECTED_VAULTS,
            ViewerError::HubFull
        );
        self.connections.push(connection);
        Ok(())
    }

    /// Remove a connection, preserving the relative order of the rest
    pub fn disconnect(&mut self, vault: &Pubkey) -> Result<()> {
        let index = self
            .connections
            .iter()
            .position(|c| c.vault == *vault)
            .ok_or(error!(ViewerError::VaultNotConnected))?;
        self.connections.remove(index);
        Ok(())
    }

    /// Overwrite the accounting fields of a connected vault
    pub fn update_record(
        &mut self,
        vault: &Pubkey,
        liability_shares: u64,
        total_value: u64,
        liability_steth: u64,
    ) -> Result<()> {
        let connection = self
            .connection_mut(vault)
            .ok_or(error!(ViewerError::VaultNotConnected))?;
        connection.liability_shares = liability_shares;
        connection.total_value = total_value;
        connection.liability_steth = liability_steth;
        Ok(())
    }
}

impl VaultConnection {
    /// 32 (vault) + 32 (owner) + 3 * 2 (bp fields) + 3 * 8 (accounting)
    pub const SIZE: usize = 32 + 32 + 6 + 24;
}

impl VaultRegistry for VaultHub {
    fn vault_count(&self) -> u64 {
        self.connections.len() as u64
    }

    fn vault_at(&self, index: u64) -> Pubkey {
        self.connections
            .get(index as usize)
            .map(|c| c.vault)
            .unwrap_or_default()
    }

    fn connection_of(&self, vault: &Pubkey) -> Option<&VaultConnection> {
        self.connections.iter().find(|c| c.vault == *vault)
    }
}

/// Access-control surface of a single vault
///
/// Plays the role of the vault's owner contract: holds the admin, the
/// node-operator fee and the role membership table the viewer queries.
#[account]
pub struct Dashboard {
    /// Vault this dashboard controls
    pub vault: Pubkey,

    /// Admin that can grant and revoke roles
    pub admin: Pubkey,

    /// Node operator fee, in basis points
    pub node_operator_fee_bp: u16,

    /// Role grants; members kept in grant order, no duplicates
    pub grants: Vec<RoleGrant>,

    /// Bump seed for the dashboard PDA
    pub bump: u8,

    // Padding for future upgrades
    pub _reserved: [u8; 64],
}

/// Members holding one role identifier
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RoleGrant {
    pub role: [u8; 32],
    pub members: Vec<Pubkey>,
}

impl RoleGrant {
    /// 32 (role) + 4 (vec len) + members
    pub const SIZE: usize = 32 + 4 + MAX_MEMBERS_PER_ROLE * 32;
}

impl Dashboard {
    /// 8 (discriminator) + 32 (vault) + 32 (admin) + 2 (fee) + 4 (vec len)
    /// + grants + 1 (bump) + 64 (padding)
    pub const SPACE: usize =
        8 + 32 + 32 + 2 + 4 + MAX_ROLES_PER_DASHBOARD * RoleGrant::SIZE + 1 + 64;

    fn grant(&self, role: &[u8; 32]) -> Option<&RoleGrant> {
        self.grants.iter().find(|g| g.role == *role)
    }

    pub fn has_role(&self, role: &[u8; 32], account: &Pubkey) -> bool {
        self.grant(role)
            .map(|g| g.members.contains(account))
            .unwrap_or(false)
    }

    /// Members of a role in grant order; empty when the role is unknown
    pub fn role_members(&self, role: &[u8; 32]) -> Vec<Pubkey> {
        self.grant(role).map(|g| g.members.clone()).unwrap_or_default()
    }

    /// The designated node operator: first member of the manager role,
    /// or the zero key when that role has no members
    pub fn node_operator(&self) -> Pubkey {
        self.role_members(&node_operator_manager_role())
            .first()
            .copied()
            .unwrap_or_default()
    }

    pub fn grant_role(&mut self, role: [u8; 32], account: Pubkey) -> Result<()> {
        if let Some(grant) = self.grants.iter_mut().find(|g| g.role == role) {
            require!(
                !grant.members.contains(&account),
                ViewerError::RoleAlreadyGranted
            );
            require!(
                grant.members.len() < MAX_MEMBERS_PER_ROLE,
                ViewerError::RoleMembersFull
            );
            grant.members.push(account);
        } else {
            require!(
                self.grants.len() < MAX_ROLES_PER_DASHBOARD,
                ViewerError::DashboardRolesFull
            );
            self.grants.push(RoleGrant {
                role,
                members: vec![account],
            });
        }
        Ok(())
    }

    pub fn revoke_role(&mut self, role: &[u8; 32], account: &Pubkey) -> Result<()> {
        let grant = self
            .grants
            .iter_mut()
            .find(|g| g.role == *role)
            .ok_or(error!(ViewerError::RoleNotGranted))?;
        let index = grant
            .members
            .iter()
            .position(|m| m == account)
            .ok_or(error!(ViewerError::RoleNotGranted))?;
        grant.members.remove(index);
        Ok(())
    }
}

/// Viewer config: the hub this viewer reads from
#[account]
pub struct Viewer {
    pub vault_hub: Pubkey,
    pub bump: u8,
    pub _reserved: [u8; 64],
}

impl Viewer {
    pub const SPACE: usize = 8 + 32 + 1 + 64;
}

/// Connection parameters echoed back by data queries
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct VaultConnectionInfo {
    pub forced_rebalance_threshold_bp: u16,
    pub infra_fee_bp: u16,
    pub liquidity_fee_bp: u16,
}

/// Accounting record echoed back by data queries
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct VaultRecordInfo {
    pub liability_shares: u64,
}

/// Fixed-shape snapshot of one vault's state
///
/// The default value is the all-zero snapshot returned for zero or unknown
/// vault handles.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct VaultData {
    pub vault_address: Pubkey,
    pub connection: VaultConnectionInfo,
    pub record: VaultRecordInfo,
    pub total_value: u64,
    pub liability_steth: u64,
    pub node_operator_fee_rate: u16,
}

/// One page of vault handles plus the count of matches beyond `to`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct VaultsPage {
    pub vaults: Vec<Pubkey>,
    pub leftover: u64,
}

/// One page of vault snapshots plus the count of vaults beyond `to`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct VaultsDataPage {
    pub vaults_data: Vec<VaultData>,
    pub leftover: u64,
}

/// Role membership of one vault: owner, node operator and one member list
/// per requested role, in request order
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct VaultRoleMembers {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub node_operator: Pubkey,
    pub members: Vec<Vec<Pubkey>>,
}

/// Owner-keyed lookup over the dashboards supplied with a query
///
/// View instructions receive dashboards through `remaining_accounts`; owners
/// without a matching dashboard report no roles and the zero node operator.
pub struct DashboardDirectory {
    entries: Vec<(Pubkey, Dashboard)>,
}

impl DashboardDirectory {
    pub fn new(entries: Vec<(Pubkey, Dashboard)>) -> Self {
        Self { entries }
    }

    /// Collect dashboards from caller-supplied accounts, skipping anything
    /// that is not a dashboard owned by this program
    pub fn load(accounts: &[AccountInfo]) -> Self {
        let mut entries = Vec::with_capacity(accounts.len());
        for account in accounts {
            if account.owner != &crate::ID {
                continue;
            }
            let Ok(data) = account.try_borrow_data() else {
                continue;
            };
            let mut slice: &[u8] = &data;
            if let Ok(dashboard) = Dashboard::try_deserialize(&mut slice) {
                entries.push((account.key(), dashboard));
            }
        }
        Self { entries }
    }

    fn dashboard_of(&self, owner: &Pubkey) -> Option<&Dashboard> {
        self.entries
            .iter()
            .find(|(key, _)| key == owner)
            .map(|(_, dashboard)| dashboard)
    }
}

impl RoleSource for DashboardDirectory {
    fn has_role(&self, owner: &Pubkey, role: &[u8; 32], account: &Pubkey) -> bool {
        self.dashboard_of(owner)
            .map(|d| d.has_role(role, account))
            .unwrap_or(false)
    }

    fn role_members(&self, owner: &Pubkey, role: &[u8; 32]) -> Vec<Pubkey> {
        self.dashboard_of(owner)
            .map(|d| d.role_members(role))
            .unwrap_or_default()
    }

    fn node_operator(&self, owner: &Pubkey) -> Pubkey {
        self.dashboard_of(owner)
            .map(|d| d.node_operator())
            .unwrap_or_default()
    }

    fn node_operator_fee(&self, owner: &Pubkey) -> u16 {
        self.dashboard_of(owner)
            .map(|d| d.node_operator_fee_bp)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_hub() -> VaultHub {
        VaultHub {
            authority: Pubkey::new_unique(),
            connections: Vec::new(),
            bump: 0,
            _reserved: [0; 128],
        }
    }

    fn mock_connection(vault: Pubkey, owner: Pubkey) -> VaultConnection {
        VaultConnection {
            vault,
            owner,
            ..Default::default()
        }
    }

    fn mock_dashboard(vault: Pubkey, admin: Pubkey) -> Dashboard {
        Dashboard {
            vault,
            admin,
            node_operator_fee_bp: 0,
            grants: Vec::new(),
            bump: 0,
            _reserved: [0; 64],
        }
    }

    #[test]
    fn test_connect_preserves_insertion_order() {
        let mut hub = mock_hub();
        let owner = Pubkey::new_unique();
        let vaults: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();

        for vault in &vaults {
            hub.connect(mock_connection(*vault, owner)).unwrap();
        }

        assert_eq!(hub.vault_count(), 3);
        for (i, vault) in vaults.iter().enumerate() {
            assert_eq!(hub.vault_at(i as u64), *vault);
        }
    }

    #[test]
    fn test_connect_rejects_duplicates() {
        let mut hub = mock_hub();
        let vault = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        hub.connect(mock_connection(vault, owner)).unwrap();
        assert!(hub.connect(mock_connection(vault, owner)).is_err());
        assert_eq!(hub.vault_count(), 1);
    }

    #[test]
    fn test_connect_rejects_when_full() {
        let mut hub = mock_hub();
        let owner = Pubkey::new_unique();
        for _ in 0..MAX_CONNECTED_VAULTS {
            hub.connect(mock_connection(Pubkey::new_unique(), owner))
                .unwrap();
        }
        assert!(hub
            .connect(mock_connection(Pubkey::new_unique(), owner))
            .is_err());
    }

    #[test]
    fn test_disconnect_keeps_relative_order() {
        let mut hub = mock_hub();
        let owner = Pubkey::new_unique();
        let vaults: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        for vault in &vaults {
            hub.connect(mock_connection(*vault, owner)).unwrap();
        }

        hub.disconnect(&vaults[1]).unwrap();

        assert_eq!(hub.vault_count(), 3);
        assert_eq!(hub.vault_at(0), vaults[0]);
        assert_eq!(hub.vault_at(1), vaults[2]);
        assert_eq!(hub.vault_at(2), vaults[3]);
    }

    #[test]
    fn test_disconnect_unknown_vault_fails() {
        let mut hub = mock_hub();
        assert!(hub.disconnect(&Pubkey::new_unique()).is_err());
    }

    #[test]
    fn test_update_record() {
        let mut hub = mock_hub();
        let vault = Pubkey::new_unique();
        hub.connect(mock_connection(vault, Pubkey::new_unique()))
            .unwrap();

        hub.update_record(&vault, 100, 2_000, 1_500).unwrap();

        let connection = hub.connection_of(&vault).unwrap();
        assert_eq!(connection.liability_shares, 100);
        assert_eq!(connection.total_value, 2_000);
        assert_eq!(connection.liability_steth, 1_500);

        assert!(hub
            .update_record(&Pubkey::new_unique(), 1, 1, 1)
            .is_err());
    }

    #[test]
    fn test_vault_at_out_of_range_is_zero() {
        let hub = mock_hub();
        assert_eq!(hub.vault_at(0), Pubkey::default());
    }

    #[test]
    fn test_grant_and_revoke_role() {
        let admin = Pubkey::new_unique();
        let mut dashboard = mock_dashboard(Pubkey::new_unique(), admin);
        let role = [7u8; 32];
        let member = Pubkey::new_unique();

        dashboard.grant_role(role, member).unwrap();
        assert!(dashboard.has_role(&role, &member));
        assert_eq!(dashboard.role_members(&role), vec![member]);

        // double grant is rejected
        assert!(dashboard.grant_role(role, member).is_err());

        dashboard.revoke_role(&role, &member).unwrap();
        assert!(!dashboard.has_role(&role, &member));
        assert!(dashboard.revoke_role(&role, &member).is_err());
    }

    #[test]
    fn test_role_members_keep_grant_order() {
        let mut dashboard = mock_dashboard(Pubkey::new_unique(), Pubkey::new_unique());
        let role = [1u8; 32];
        let members: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        for member in &members {
            dashboard.grant_role(role, *member).unwrap();
        }
        assert_eq!(dashboard.role_members(&role), members);
    }

    #[test]
    fn test_node_operator_derivation() {
        let mut dashboard = mock_dashboard(Pubkey::new_unique(), Pubkey::new_unique());
        assert_eq!(dashboard.node_operator(), Pubkey::default());

        let operator = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        dashboard
            .grant_role(node_operator_manager_role(), operator)
            .unwrap();
        dashboard
            .grant_role(node_operator_manager_role(), second)
            .unwrap();

        // first member of the manager role wins
        assert_eq!(dashboard.node_operator(), operator);
    }

    #[test]
    fn test_directory_unknown_owner_degrades_to_defaults() {
        let directory = DashboardDirectory::new(Vec::new());
        let owner = Pubkey::new_unique();
        let role = [2u8; 32];

        assert!(!directory.has_role(&owner, &role, &Pubkey::new_unique()));
        assert!(directory.role_members(&owner, &role).is_empty());
        assert_eq!(directory.node_operator(&owner), Pubkey::default());
        assert_eq!(directory.node_operator_fee(&owner), 0);
    }
}
