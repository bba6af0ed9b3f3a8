// Constants for the Vault Viewer program

use solana_keccak_hasher as keccak;

/// Seed for the vault hub PDA
pub const VAULT_HUB_SEED: &[u8] = b"vault_hub";

/// Seed for the viewer config PDA
pub const VIEWER_SEED: &[u8] = b"viewer";

/// Seed for per-vault dashboard PDAs
pub const DASHBOARD_SEED: &[u8] = b"dashboard";

/// Maximum vaults the hub account can hold before connect_vault fails
pub const MAX_CONNECTED_VAULTS: usize = 32;

/// Maximum distinct roles a dashboard can track
pub const MAX_ROLES_PER_DASHBOARD: usize = 8;

/// Maximum members per role grant
pub const MAX_MEMBERS_PER_ROLE: usize = 8;

/// Admin role held by the dashboard creator; all-zero by convention
pub const DEFAULT_ADMIN_ROLE: [u8; 32] = [0u8; 32];

/// Role whose first member is the vault's designated node operator
pub fn node_operator_manager_role() -> [u8; 32] {
    keccak::hash(b"vault_viewer.Dashboard.NodeOperatorManagerRole").to_bytes()
}
