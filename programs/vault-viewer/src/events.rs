use anchor_lang::prelude::*;

/// Event emitted when the vault hub is initialized
#[event]
pub struct HubInitialized {
    pub vault_hub: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when the viewer config is bound to a hub
#[event]
pub struct ViewerInitialized {
    pub viewer: Pubkey,
    pub vault_hub: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a vault is connected to the hub
#[event]
pub struct VaultConnected {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a vault is disconnected from the hub
#[event]
pub struct VaultDisconnected {
    pub vault: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a vault's accounting record is updated
#[event]
pub struct VaultRecordUpdated {
    pub vault: Pubkey,
    pub liability_shares: u64,
    pub total_value: u64,
    pub liability_steth: u64,
    pub timestamp: i64,
}

/// Event emitted when a dashboard is created for a vault
#[event]
pub struct DashboardCreated {
    pub dashboard: Pubkey,
    pub vault: Pubkey,
    pub admin: Pubkey,
    pub node_operator: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a role is granted on a dashboard
#[event]
pub struct RoleGranted {
    pub dashboard: Pubkey,
    pub role: [u8; 32],
    pub account: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a role is revoked on a dashboard
#[event]
pub struct RoleRevoked {
    pub dashboard: Pubkey,
    pub role: [u8; 32],
    pub account: Pubkey,
    pub timestamp: i64,
}
