pub mod profile;
pub mod responses;
pub mod spin;
pub mod tapbot;
pub mod user;

pub use profile::{BossState, FreeBoosts, ProfileState};
pub use responses::*;
pub use spin::SpinReward;
pub use tapbot::{TapbotPhase, TapbotState};
pub use user::UserState;
