use anchor_lang::prelude::*;

/// Custom error codes for the Vault Viewer program
///
/// Two error families matter to callers: construction errors (ZeroArgument)
/// and pagination errors (WrongPaginationRange). Unknown or zero vault
/// handles are never errors; queries degrade to zero-valued results instead.
#[error_code]
pub enum ViewerError {
    #[msg("Zero-valued argument where a non-zero key is required")]
    ZeroArgument,

    #[msg("Wrong pagination range: from must not exceed to or the collection size")]
    WrongPaginationRange,

    #[msg("Unauthorized - only the hub authority can perform this action")]
    Unauthorized,

    #[msg("Vault hub account does not match the one the viewer was initialized with")]
    VaultHubMismatch,

    #[msg("Vault is already connected to the hub")]
    VaultAlreadyConnected,

    #[msg("Vault is not connected to the hub")]
    VaultNotConnected,

    #[msg("Vault hub is full - maximum connected vaults reached")]
    HubFull,

    #[msg("Account already holds the role")]
    RoleAlreadyGranted,

    #[msg("Account does not hold the role")]
    RoleNotGranted,

    #[msg("Dashboard role table is full")]
    DashboardRolesFull,

    #[msg("Role member list is full")]
    RoleMembersFull,
}
