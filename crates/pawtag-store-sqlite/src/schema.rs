//! SQL schema for the pawtag SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS accounts (
    account_id    TEXT PRIMARY KEY,
    email         TEXT NOT NULL UNIQUE,
    name          TEXT NOT NULL,
    password_hash TEXT NOT NULL,   -- argon2 PHC string
    role          TEXT NOT NULL,   -- 'admin' | 'tutor'
    created_at    TEXT NOT NULL
);

-- One row per printable tag. `code` is immutable; the only mutation ever
-- issued is the one-shot Unbound -> Bound flip performed by activation.
CREATE TABLE IF NOT EXISTS identifiers (
    identifier_id TEXT PRIMARY KEY,
    code          TEXT NOT NULL UNIQUE,
    status        TEXT NOT NULL DEFAULT 'unbound',  -- 'unbound' | 'bound'
    created_at    TEXT NOT NULL,
    bound_at      TEXT,
    CHECK ((status = 'bound') = (bound_at IS NOT NULL))
);

CREATE TABLE IF NOT EXISTS profiles (
    profile_id      TEXT PRIMARY KEY,
    identifier_id   TEXT NOT NULL UNIQUE REFERENCES identifiers(identifier_id),
    owner_id        TEXT NOT NULL REFERENCES accounts(account_id),
    contact_name    TEXT NOT NULL,
    phone           TEXT NOT NULL,
    channel         TEXT NOT NULL DEFAULT 'message',  -- 'message' | 'call'
    secondary_phone TEXT,
    name            TEXT,
    species         TEXT,
    breed           TEXT,
    birth_date      TEXT,           -- ISO 8601 date
    sex             TEXT,
    notes           TEXT,
    photo           TEXT,
    created_at      TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS identifiers_status_idx  ON identifiers(status);
CREATE INDEX IF NOT EXISTS identifiers_created_idx ON identifiers(created_at);
CREATE INDEX IF NOT EXISTS profiles_owner_idx      ON profiles(owner_id);

PRAGMA user_version = 1;
";
