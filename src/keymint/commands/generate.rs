use crate::commands::CmdResult;
use crate::model::{HexKey, Identifier, Notification, Session};
use rand::Rng;

const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";
const IDENTIFIER_TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";
const HEX_KEY_LEN: usize = 64;

/// Build a UUID-v4-shaped identifier by substituting template placeholders:
/// `x` becomes a uniform hex digit, `y` becomes `(r & 0x3) | 0x8` (one of
/// `8,9,a,b`), everything else passes through.
pub fn identifier<R: Rng>(rng: &mut R) -> Identifier {
    let value: String = IDENTIFIER_TEMPLATE
        .chars()
        .map(|c| match c {
            'x' => hex_digit(rng.gen_range(0..16)),
            'y' => hex_digit((rng.gen_range(0..16u8) & 0x3) | 0x8),
            literal => literal,
        })
        .collect();
    Identifier::new(value)
}

/// Draw 64 independent characters from the lowercase hex alphabet.
pub fn hex_key<R: Rng>(rng: &mut R) -> HexKey {
    let value: String = (0..HEX_KEY_LEN)
        .map(|_| HEX_ALPHABET[rng.gen_range(0..16)] as char)
        .collect();
    HexKey::new(value)
}

fn hex_digit(value: u8) -> char {
    HEX_ALPHABET[value as usize] as char
}

/// Generate a fresh identifier into the session, replacing any prior one.
pub fn run_identifier<R: Rng>(session: &mut Session, rng: &mut R) -> CmdResult {
    let id = identifier(rng);
    let notification = Notification::success("UUID generated!");
    session.identifier = Some(id.clone());
    session.notification = Some(notification.clone());
    CmdResult::default()
        .with_identifier(id)
        .with_notification(notification)
}

/// Generate a fresh hex key into the session, replacing any prior one.
pub fn run_hex_key<R: Rng>(session: &mut Session, rng: &mut R) -> CmdResult {
    let key = hex_key(rng);
    let notification = Notification::success("Hex Key generated!");
    session.hex_key = Some(key.clone());
    session.notification = Some(notification.clone());
    CmdResult::default()
        .with_hex_key(key)
        .with_notification(notification)
}
