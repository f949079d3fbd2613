//! Conversion between the edit form's multi-line description text and the
//! ordered bullet list the service stores as a JSON-array string.

/// Splits description text into bullets: one per line, trimmed, blank lines
/// dropped, order preserved. Total and idempotent over its own decoded
/// output.
pub fn encode(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Joins bullets back into description text for the edit form.
pub fn decode(bullets: &[String]) -> String {
    bullets.join("\n")
}

/// JSON-array encoding used by the `bullets_json` form field.
pub fn serialize_for_wire(bullets: &[String]) -> String {
    serde_json::to_string(bullets).unwrap_or_else(|_| "[]".to_string())
}

/// Parses the stored JSON-array string back into bullets. Missing, malformed,
/// or non-array payloads degrade to an empty list so one corrupted record
/// cannot break the profile view.
pub fn deserialize_from_wire(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(bullets) => bullets,
        Err(e) => {
            tracing::warn!("Discarding malformed bullet payload: {}", e);
            Vec::new()
        }
    }
}
