pub mod lot_status;
pub mod showing_status;
pub mod tenant_status;
pub mod user_role;

pub use lot_status::{LotStatus, LotStatusSet};
pub use showing_status::ShowingStatus;
pub use tenant_status::TenantStatus;
pub use user_role::UserRole;
