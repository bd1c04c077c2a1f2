//! SQL schema for the contacts collection.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Insert-only. No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS contacts (
    row_id    INTEGER PRIMARY KEY,
    id        TEXT NOT NULL UNIQUE,  -- public UUID, duplicated out of the document
    document  TEXT NOT NULL          -- JSON-encoded ContactRecord
);

PRAGMA user_version = 1;
";
