//! HTTP API response DTOs for the chat lobby.

use serde::{Deserialize, Serialize};

/// Participant entry for the diagnostic participants endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDto {
    /// Display name as stored (already escaped)
    pub name: String,
    pub connected_at: String, // ISO 8601
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}
