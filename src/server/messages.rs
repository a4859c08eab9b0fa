use serde::{Serialize, Deserialize};

#[derive(Deserialize, Debug, Default)]
pub struct StartRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ShootRequest {
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
}

/// Body of quit and query of next-level.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRef {
    #[serde(default)]
    pub player_name: String,
}

/// Validation failure reported as a regular response.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(code: &str) -> Self {
        Self { error: code.to_string() }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Ack {
    pub ok: bool,
}
