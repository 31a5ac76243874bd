/// Slot key the aggregate is persisted under
pub const STORE_KEY: &str = "chirpynosh_store_v1";

/// Seed partner ids
pub const SEED_PARTNER_BAKERY: &str = "p1";
pub const SEED_PARTNER_MARKET: &str = "p2";

/// Seed recipient id
pub const SEED_RECIPIENT_SHELTER: &str = "r1";

/// Seed listing ids
pub const SEED_LISTING_BAKERY: &str = "l1";
pub const SEED_LISTING_PRODUCE: &str = "l2";

/// Kilograms of CO2 avoided per rescued portion (dashboard estimate)
pub const CO2_KG_PER_PORTION: f64 = 0.7;

/// Expiry thresholds in days (inclusive)
pub const URGENT_WITHIN_DAYS: i64 = 1;
pub const SOON_WITHIN_DAYS: i64 = 3;
