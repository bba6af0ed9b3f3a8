pub mod connect_vault;
pub mod create_dashboard;
pub mod disconnect_vault;
pub mod grant_role;
pub mod initialize_hub;
pub mod initialize_viewer;
pub mod revoke_role;
pub mod update_vault_record;
pub mod view_role_members;
pub mod view_vault_data;
pub mod view_vaults;

pub use connect_vault::*;
pub use create_dashboard::*;
pub use disconnect_vault::*;
pub use grant_role::*;
pub use initialize_hub::*;
pub use initialize_viewer::*;
pub use revoke_role::*;
pub use update_vault_record::*;
pub use view_role_members::*;
pub use view_vault_data::*;
pub use view_vaults::*;
