use chrono::Utc;
use uuid::Uuid;

/// Number of hex digits taken from the random part of the id.
const RANDOM_HEX_LEN: usize = 12;

/// Generate a task id from a random component followed by the current
/// time in milliseconds, both as lowercase hex.
///
/// Collisions are not checked. Ids only need to be unique within one
/// local collection.
pub fn generate_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    let millis = Utc::now().timestamp_millis();
    format!("{}{:x}", &random[..RANDOM_HEX_LEN], millis)
}
