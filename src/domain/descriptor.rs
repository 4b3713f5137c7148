use serde::{Deserialize, Serialize};

/// One diary entry as the UI layer describes it.
///
/// The engine only cares about identity and the fields that drive bubble
/// size; notes, media and dates stay on the JS side.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BubbleDescriptor {
    pub id: u32,
    pub label: String,
    /// Whether the entry carries a feeling doodle icon (widens the bubble).
    #[serde(default)]
    pub icon: bool,
    /// Set once, on the entry the user just submitted: the bubble spawns
    /// paused at the presentation point instead of falling from above.
    #[serde(default)]
    pub just_added: bool,
}

/// Parse the descriptor list the UI sends across the boundary.
///
/// `null` is accepted and means the same as an empty list: no bubbles.
pub fn descriptors_from_json(json: &str) -> Result<Vec<BubbleDescriptor>, String> {
    let parsed: Option<Vec<BubbleDescriptor>> =
        serde_json::from_str(json).map_err(|e| e.to_string())?;
    Ok(parsed.unwrap_or_default())
}
