pub mod model;

pub use model::{Envelope, EnvelopeKind, PeerId, RoomId};
