use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shipment::Shipment;

/// Tag of a [`FetchResult`], as exposed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchStatus {
    Loading,
    Success,
    Error,
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Loading => write!(f, "LOADING"),
            FetchStatus::Success => write!(f, "SUCCESS"),
            FetchStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// The only failure the fetch boundary reports.
///
/// Network, HTTP status and decoding problems all collapse into this one kind;
/// the message is for humans and is not meant to be matched on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to fetch shipments: {}", self.message)
    }
}

impl std::error::Error for FetchFailure {}

/// Outcome of one shipment-list retrieval.
///
/// Serialized with a `status` tag (`LOADING` / `SUCCESS` / `ERROR`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchResult {
    Loading,
    Success { shipments: Vec<Shipment> },
    Error { error: FetchFailure },
}

impl FetchResult {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchResult::Loading => FetchStatus::Loading,
            FetchResult::Success { .. } => FetchStatus::Success,
            FetchResult::Error { .. } => FetchStatus::Error,
        }
    }

    pub fn shipments(&self) -> Option<&[Shipment]> {
        match self {
            FetchResult::Success { shipments } => Some(shipments),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            FetchResult::Error { error } => Some(error),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchResult::Loading)
    }
}

impl From<std::result::Result<Vec<Shipment>, FetchFailure>> for FetchResult {
    fn from(outcome: std::result::Result<Vec<Shipment>, FetchFailure>) -> Self {
        match outcome {
            Ok(shipments) => FetchResult::Success { shipments },
            Err(error) => FetchResult::Error { error },
        }
    }
}
