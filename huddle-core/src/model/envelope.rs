use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::model::PeerId;

/// Frame kinds crossing a signaling socket. Clients only ever send
/// `signal`; the rest are membership events emitted by the hub.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EnvelopeKind {
    Welcome,
    ExistingPeers,
    NewPeer,
    PeerLeft,
    Signal,
}

/// One signaling frame: a single JSON object where every field except
/// `type` is optional and present only when it carries meaning for that
/// kind. `payload` is opaque application data (SDP, ICE) and is forwarded
/// without reserialization, so the receiver sees the sender's exact bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: EnvelopeKind,

    /// Subject peer of a membership event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PeerId>,

    /// Membership snapshot carried by `existing-peers`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peers: Option<Vec<PeerId>>,

    /// Sender of a forwarded `signal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<PeerId>,

    /// Destination of a `signal`. Kept as a string so that an empty or
    /// unparseable destination is the sender's problem, not a protocol
    /// error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Box<RawValue>>,
}

impl Envelope {
    fn bare(kind: EnvelopeKind) -> Self {
        Self {
            kind,
            id: None,
            peers: None,
            from: None,
            to: None,
            payload: None,
        }
    }

    pub fn welcome(id: PeerId) -> Self {
        Self {
            id: Some(id),
            ..Self::bare(EnvelopeKind::Welcome)
        }
    }

    pub fn existing_peers(peers: Vec<PeerId>) -> Self {
        Self {
            peers: Some(peers),
            ..Self::bare(EnvelopeKind::ExistingPeers)
        }
    }

    pub fn new_peer(id: PeerId) -> Self {
        Self {
            id: Some(id),
            ..Self::bare(EnvelopeKind::NewPeer)
        }
    }

    pub fn peer_left(id: PeerId) -> Self {
        Self {
            id: Some(id),
            ..Self::bare(EnvelopeKind::PeerLeft)
        }
    }

    pub fn signal(from: PeerId, to: PeerId, payload: Option<Box<RawValue>>) -> Self {
        Self {
            from: Some(from),
            to: Some(to.to_string()),
            payload,
            ..Self::bare(EnvelopeKind::Signal)
        }
    }
}
