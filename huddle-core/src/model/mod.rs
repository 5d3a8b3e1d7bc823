mod envelope;
mod peer;
mod room;

pub use envelope::{Envelope, EnvelopeKind};
pub use peer::PeerId;
pub use room::RoomId;
