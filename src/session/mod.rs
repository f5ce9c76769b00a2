pub mod engine;
pub mod focus;
pub mod gesture;
pub mod now;
pub mod ranking;

pub use engine::CandidateSession;
pub use focus::{FocusChange, MapFocus};
pub use gesture::{classify, Intent, PanRelease};
pub use now::{decide, Decision, NowSession, NowSnapshot, Target};
pub use ranking::rank;
