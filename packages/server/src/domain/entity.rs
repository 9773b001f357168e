//! Core domain models for the chat lobby.

use super::value_object::{ConnectionId, DisplayName, Timestamp};

/// Represents one live connection and the name it is shown under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Connection key
    pub id: ConnectionId,
    /// Current display name (pre-escaped)
    pub name: DisplayName,
    /// Timestamp when the connection opened
    pub connected_at: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(id: ConnectionId, name: DisplayName, connected_at: Timestamp) -> Self {
        Self {
            id,
            name,
            connected_at,
        }
    }
}

/// The set of participants currently in the lobby, in join order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant.
    ///
    /// Returns `false` and leaves the roster untouched when the connection is
    /// already present.
    pub fn add(&mut self, participant: Participant) -> bool {
        if self.contains(&participant.id) {
            return false;
        }
        self.participants.push(participant);
        true
    }

    /// Remove a participant by connection ID, returning the removed entry
    pub fn remove(&mut self, id: &ConnectionId) -> Option<Participant> {
        let index = self.participants.iter().position(|p| &p.id == id)?;
        Some(self.participants.remove(index))
    }

    /// Replace a participant's display name, returning the previous name
    pub fn rename(&mut self, id: &ConnectionId, name: DisplayName) -> Option<DisplayName> {
        let participant = self.participants.iter_mut().find(|p| &p.id == id)?;
        Some(std::mem::replace(&mut participant.name, name))
    }

    /// Get a participant by connection ID
    pub fn get(&self, id: &ConnectionId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    /// Whether the connection is registered
    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.get(id).is_some()
    }

    /// Display names in join order
    pub fn names(&self) -> Vec<DisplayName> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    /// Connection IDs in join order
    pub fn ids(&self) -> Vec<ConnectionId> {
        self.participants.iter().map(|p| p.id).collect()
    }

    /// All participants in join order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
