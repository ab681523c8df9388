//! SQLite schema definition.

/// Complete database schema for the medication catalog.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Medications
-- ============================================================================

-- rowid (id) preserves insertion order, which decides lookup tie-breaks
CREATE TABLE IF NOT EXISTS medications (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE COLLATE NOCASE,
    generic_name TEXT,
    drug_class TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    avg_cost REAL NOT NULL CHECK (avg_cost >= 0),
    is_brand INTEGER NOT NULL DEFAULT 0,
    counterpart TEXT,
    side_effects TEXT NOT NULL DEFAULT '',
    interactions TEXT NOT NULL DEFAULT '',
    restrictions TEXT,
    source TEXT NOT NULL DEFAULT '',
    insurance TEXT CHECK (insurance IN ('None', 'Limited', 'Some', 'Most')),
    alternatives TEXT NOT NULL DEFAULT '[]',            -- JSON array of strings
    supplement_suggestions TEXT NOT NULL DEFAULT '[]',  -- JSON array of strings
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_medications_class ON medications(drug_class COLLATE NOCASE);

-- FTS5 virtual table for full-text search
CREATE VIRTUAL TABLE IF NOT EXISTS medications_fts USING fts5(
    name,
    generic_name,
    drug_class,
    content='medications',
    content_rowid='id'
);

-- Triggers to keep FTS5 in sync with main table
CREATE TRIGGER IF NOT EXISTS medications_ai AFTER INSERT ON medications BEGIN
    INSERT INTO medications_fts(rowid, name, generic_name, drug_class)
    VALUES (new.id, new.name, new.generic_name, new.drug_class);
END;

CREATE TRIGGER IF NOT EXISTS medications_ad AFTER DELETE ON medications BEGIN
    INSERT INTO medications_fts(medications_fts, rowid, name, generic_name, drug_class)
    VALUES ('delete', old.id, old.name, old.generic_name, old.drug_class);
END;

CREATE TRIGGER IF NOT EXISTS medications_au AFTER UPDATE ON medications BEGIN
    INSERT INTO medications_fts(medications_fts, rowid, name, generic_name, drug_class)
    VALUES ('delete', old.id, old.name, old.generic_name, old.drug_class);
    INSERT INTO medications_fts(rowid, name, generic_name, drug_class)
    VALUES (new.id, new.name, new.generic_name, new.drug_class);
END;

-- ============================================================================
-- Drug Classes
-- ============================================================================

CREATE TABLE IF NOT EXISTS drug_classes (
    id INTEGER PRIMARY KEY,
    class_name TEXT NOT NULL UNIQUE COLLATE NOCASE,
    full_name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    common_uses TEXT NOT NULL DEFAULT ''
);
"#;
