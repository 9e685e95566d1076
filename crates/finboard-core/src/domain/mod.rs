mod company;
mod stamp;
mod symbol;

pub use company::{CompanyId, CompanyRecord, RevenueSnapshot};
pub use stamp::UpdateStamp;
pub use symbol::Symbol;
