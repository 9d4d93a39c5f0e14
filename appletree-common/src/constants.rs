// Trading card rank weights, indexed by rank.
pub const RANK_WEIGHTS: [f64; 5] = [0.19, 0.30, 0.40, 0.10, 0.01];

// "The World". Drawing it as the primary card rewrites its description.
pub const WORLD_CARD_ID: u32 = 21;
pub const TAROT_SPREAD_SIZE: usize = 3;

pub const CARD_COOLDOWN_MS: u64 = 600_000;
pub const TAROT_COOLDOWN_MS: u64 = 600_000;
pub const EDEN_CARD_COOLDOWN_MS: u64 = 1_200_000;
pub const MESSAGE_COOLDOWN_MS: u64 = 60_000;

// Inclusive XP range granted per message.
pub const MESSAGE_XP_MIN: u32 = 25;
pub const MESSAGE_XP_MAX: u32 = 35;

pub const QUOTE_WEIGHT: f64 = 0.5;
pub const ADDED_CARD_RANK: u8 = 3;

pub const EDEN_DEFAULT_URL: &str = "http://127.0.0.1:8080";
pub const UNKNOWN_USER_NAME: &str = "*???*";

pub const COLLECTION_TEXT_LIMIT: usize = 1800;
