use crate::db::db::Db;
use crate::libs::rules::{AliasRule, RuleKind, RuleSet};
use anyhow::Result;
use rusqlite::{params, Connection};

const SELECT_RULES: &str = "SELECT canonical_name, source_names FROM alias_rules WHERE kind = ?1 ORDER BY position";
const DELETE_RULES: &str = "DELETE FROM alias_rules";
const INSERT_RULE: &str = "INSERT INTO alias_rules (kind, position, canonical_name, source_names) VALUES (?1, ?2, ?3, ?4)";

/// Persisted project and group alias rules.
///
/// Rules are stored in list order. Saving writes the whole [`RuleSet`] at
/// once, matching the copy-on-write edits of the rule set itself.
pub struct Rules {
    conn: Connection,
}

impl Rules {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    pub fn load(&self) -> Result<RuleSet> {
        Ok(RuleSet {
            project_rules: self.load_kind(RuleKind::Project)?,
            group_rules: self.load_kind(RuleKind::Group)?,
        })
    }

    /// Replaces all stored rules with `rules`.
    pub fn save(&mut self, rules: &RuleSet) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_RULES, [])?;
        for kind in [RuleKind::Project, RuleKind::Group] {
            for (position, rule) in rules.rules(kind).iter().enumerate() {
                tx.execute(
                    INSERT_RULE,
                    params![
                        kind.to_string(),
                        position as i64,
                        rule.canonical_name,
                        serde_json::to_string(&rule.source_names)?
                    ],
                )?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn load_kind(&self, kind: RuleKind) -> Result<Vec<AliasRule>> {
        let mut stmt = self.conn.prepare(SELECT_RULES)?;
        let rows = stmt
            .query_map(params![kind.to_string()], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(canonical_name, sources)| -> Result<AliasRule> {
                let sources: Vec<String> = serde_json::from_str(&sources)?;
                Ok(AliasRule::new(&canonical_name, sources))
            })
            .collect()
    }
}
