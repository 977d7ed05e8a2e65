/// Key in the persistent store holding the serialized session user.
pub const SESSION_USER_KEY: &str = "superbroker_user";

/// Opening credit balance for the default demo broker identity.
pub const DEFAULT_DEMO_CREDITS: i64 = 2500;
