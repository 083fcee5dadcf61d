mod button;
mod staff;

pub use button::Button;
pub use staff::{StaffConfig, StaffRenderer, ledger_line_count};
