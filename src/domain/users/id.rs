/// Store-assigned key for a user row (`BIGSERIAL`).
pub type UserId = i64;

/// Resolves raw lookup input to a store key.
///
/// Only a string of ASCII digits denoting a positive `i64` resolves.
/// Everything else (empty input, signs, whitespace, fractions, zero,
/// values past `i64::MAX`, arbitrary text) is unresolvable, and the
/// lifecycle operations treat an unresolvable id exactly like an absent
/// record.
pub fn resolve_user_id(raw: &str) -> Option<UserId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<UserId>().ok().filter(|id| *id > 0)
}
