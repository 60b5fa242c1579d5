//! Alias rule management.
//!
//! Group rules are written by hand: an alias plus the raw group labels it
//! replaces, separated by commas or newlines. Project rules are created by
//! merging two or more project names that show up in the reports.

use crate::{
    db::rules::Rules,
    libs::{
        error::Result as CoreResult,
        messages::Message,
        rules::{RuleKind, RuleSet},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct RulesArgs {
    #[command(subcommand)]
    command: Option<RulesCommand>,
}

#[derive(Debug, Subcommand)]
enum RulesCommand {
    /// Show rules with their index
    List {
        #[arg(value_enum)]
        kind: Option<RuleKind>,
    },
    /// Add a group rule in front of the existing ones
    AddGroup {
        alias: String,
        /// Raw group names, comma separated
        sources: String,
    },
    /// Replace the group rule at INDEX
    EditGroup { index: usize, alias: String, sources: String },
    /// Merge project names into one canonical project
    Merge {
        #[arg(short, long)]
        into: String,
        #[arg(required = true, num_args = 2..)]
        names: Vec<String>,
    },
    /// Rename the project rule at INDEX
    Rename { index: usize, alias: String },
    /// Delete a rule
    Delete {
        #[arg(value_enum)]
        kind: RuleKind,
        index: usize,
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: RulesArgs) -> Result<()> {
    let mut store = Rules::new()?;
    let rules = store.load()?;

    match args.command.unwrap_or(RulesCommand::List { kind: None }) {
        RulesCommand::List { kind } => {
            let kinds = match kind {
                Some(kind) => vec![kind],
                None => vec![RuleKind::Group, RuleKind::Project],
            };
            for kind in kinds {
                handle_list(&rules, kind)?;
            }
            Ok(())
        }
        RulesCommand::AddGroup { alias, sources } => {
            let edited = rules.with_group_rule(&alias, &sources);
            save(&mut store, edited, Message::RuleAdded(alias.trim().to_string()))
        }
        RulesCommand::EditGroup { index, alias, sources } => {
            let edited = rules.with_group_rule_replaced(index, &alias, &sources);
            save(&mut store, edited, Message::RuleUpdated(alias.trim().to_string()))
        }
        RulesCommand::Merge { into, names } => {
            let edited = rules.with_project_merge(&into, names.as_slice());
            save(&mut store, edited, Message::RulesMerged(into.trim().to_string(), names.len()))
        }
        RulesCommand::Rename { index, alias } => {
            let edited = rules.with_project_rule_renamed(index, &alias);
            save(&mut store, edited, Message::RuleRenamed(alias.trim().to_string()))
        }
        RulesCommand::Delete { kind, index, yes } => handle_delete(&mut store, &rules, kind, index, yes),
    }
}

fn handle_list(rules: &RuleSet, kind: RuleKind) -> Result<()> {
    let list = rules.rules(kind);
    if list.is_empty() {
        msg_info!(Message::NoRules(kind.to_string()));
        return Ok(());
    }

    msg_print!(Message::RulesHeader(kind.to_string()), true);
    View::rules(list)?;
    Ok(())
}

fn handle_delete(store: &mut Rules, rules: &RuleSet, kind: RuleKind, index: usize, yes: bool) -> Result<()> {
    let edited = match rules.without_rule(kind, index) {
        Ok(edited) => edited,
        Err(err) => msg_bail_anyhow!(Message::RuleEditFailed(err.to_string())),
    };
    let alias = rules.rules(kind)[index].canonical_name.clone();

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteRule(alias.clone()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    save(store, Ok(edited), Message::RuleDeleted(alias))
}

/// Persists an edited rule set. A rejected edit fails the command.
fn save(store: &mut Rules, edited: CoreResult<RuleSet>, done: Message) -> Result<()> {
    let rules = match edited {
        Ok(rules) => rules,
        Err(err) => msg_bail_anyhow!(Message::RuleEditFailed(err.to_string())),
    };
    store.save(&rules)?;
    msg_success!(done);
    Ok(())
}
