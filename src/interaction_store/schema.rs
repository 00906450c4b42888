//! Schema for the interactions database.

pub const INTERACTIONS_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS interactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    track_id INTEGER NOT NULL,
    action TEXT NOT NULL,
    created_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS ix_interactions_user_created_at
    ON interactions (user_id, created_at);

CREATE INDEX IF NOT EXISTS ix_interactions_user_track_action
    ON interactions (user_id, track_id, action);
";
