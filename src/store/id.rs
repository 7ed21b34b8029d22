use rand::rngs::OsRng;
use rand::RngCore;

/// Random bytes per message id; hex-encodes to 20 characters.
const MESSAGE_ID_BYTES: usize = 10;

/// Generate a random message identifier.
///
/// Ids are drawn from the OS random source, which makes collisions
/// negligible at the store sizes this crate targets; no uniqueness check is
/// made against existing records.
pub fn new_message_id() -> String {
    let mut bytes = [0u8; MESSAGE_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
