//! Authority-gated governance instructions.

pub mod pause;
pub mod unpause;
pub mod update_authority;
pub mod update_cap;
pub mod withdraw_fees;

pub use pause::*;
pub use unpause::*;
pub use update_authority::*;
pub use update_cap::*;
pub use withdraw_fees::*;
