/// A persisted bank customer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    /// Exact-text decimal as stored, five fractional digits
    /// (`"0.00000"` for a fresh record). Display rounding is the view's
    /// concern, never the record's.
    pub balance: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// An accepted create payload, ready for the store. By the time this
/// exists the plaintext password has already been exchanged for its
/// hash.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub balance: String,
}

/// Field changes for an update; `None` keeps the stored value. The
/// password, the hash, the id, and the timestamps have no field here,
/// so update input can never reach them.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub balance: Option<String>,
}
