mod in_flight;
mod session;

pub use self::in_flight::{InFlightGuard, InFlightPermit};
pub use self::session::{MemorySessionStore, SessionStore};
