//! Well-known session storage keys.

/// Serialized snapshot of the last fetched user.
pub const USER: &str = "user";

/// Present with value [`STAY_SIGNED_IN_VALUE`] when the user asked to stay signed in.
pub const STAY_SIGNED_IN: &str = "staySignedIn";

pub const STAY_SIGNED_IN_VALUE: &str = "true";

/// Serialized session object (user snapshot plus issued-at/expiry metadata).
pub const SESSION: &str = "session";
