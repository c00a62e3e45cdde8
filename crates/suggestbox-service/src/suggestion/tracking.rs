//! Tracking code generation.

use rand::Rng;

use suggestbox_entity::suggestion::model::TRACKING_CODE_LENGTH;

/// Characters a tracking code is drawn from.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random tracking code of uppercase letters and digits.
pub fn generate_tracking_code() -> String {
    let mut rng = rand::thread_rng();
    (0..TRACKING_CODE_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
