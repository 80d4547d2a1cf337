//! CLI interface for Callbook.
//!
//! Each subcommand is non-interactive: arguments in, text out. Mutating
//! commands load the collection, apply one store operation, and save the
//! result. Saving is deliberately decoupled from the mutation — a failed
//! write is a warning, and the in-memory state still drives the output.
//!
//! Call IDs are accepted as full UUIDs or unambiguous prefixes (e.g. `a3b`).

mod format;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::model::{CallDraft, CallStatus};
use crate::storage::Storage;
use crate::store::CallStore;
use crate::view::{self, StatusFilter};

use format::{format_call, format_counts};

/// Callbook — track your customer calls.
#[derive(Debug, Parser)]
#[command(name = "callbook", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: tracking a call
  1. callbook add "Acme Corp" --phone +15550100 --time 2024-01-10T09:00 --project Website
     → prints a call ID (e.g. a3b0fc12)
  2. callbook list --status scheduled
  3. callbook complete a3b --duration 45
  4. callbook stats

Search and filter:
  callbook list --search acme
  callbook list --status missed --search 555"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Schedule a new call. Prints the call ID.
    Add {
        /// Customer display name.
        customer: String,

        /// Customer phone number, free-form.
        #[arg(long)]
        phone: String,

        /// When the call is scheduled, e.g. `2024-01-10T09:00`.
        /// A bare datetime is read in the system time zone.
        #[arg(long)]
        time: String,

        /// Project label, e.g. "Website" or "Logo".
        #[arg(long)]
        project: Option<String>,

        /// Discussion topics, requirements, anything worth remembering.
        #[arg(long)]
        notes: Option<String>,
    },

    /// List calls, filtered and searched, most recently scheduled first.
    List {
        /// Show only calls with this status.
        #[arg(long, value_enum, default_value = "all")]
        status: StatusArg,

        /// Match against customer name, phone, or project.
        #[arg(long)]
        search: Option<String>,
    },

    /// Mark a call as completed.
    Complete {
        /// Call ID: full UUID or unambiguous prefix.
        id: String,

        /// How long the call ran, in minutes.
        #[arg(long)]
        duration: u32,
    },

    /// Mark a call as missed.
    Miss {
        /// Call ID: full UUID or unambiguous prefix.
        id: String,
    },

    /// Cancel a call.
    Cancel {
        /// Call ID: full UUID or unambiguous prefix.
        id: String,
    },

    /// Delete a call outright.
    Delete {
        /// Call ID: full UUID or unambiguous prefix.
        id: String,
    },

    /// Show aggregate counts: total, scheduled, completed, missed.
    Stats,
}

/// CLI-facing status filter, mapped to the domain `StatusFilter`.
#[derive(Debug, Clone, ValueEnum)]
pub enum StatusArg {
    /// Every call, regardless of status.
    All,
    /// Calls still on the calendar.
    Scheduled,
    /// Calls that took place.
    Completed,
    /// Calls nobody picked up.
    Missed,
    /// Calls called off beforehand.
    Cancelled,
}

impl StatusArg {
    fn to_domain(&self) -> StatusFilter {
        match self {
            Self::All => StatusFilter::All,
            Self::Scheduled => StatusFilter::Scheduled,
            Self::Completed => StatusFilter::Completed,
            Self::Missed => StatusFilter::Missed,
            Self::Cancelled => StatusFilter::Cancelled,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();
    let mut store = CallStore::new(storage.load());

    match cli.command {
        Command::Add {
            customer,
            phone,
            time,
            project,
            notes,
        } => cmd_add(
            storage,
            &mut store,
            CallDraft {
                customer_name: customer,
                phone,
                scheduled_time: time,
                project_type: project,
                notes: notes.unwrap_or_default(),
            },
        ),
        Command::List { status, search } => cmd_list(
            &store,
            status.to_domain(),
            search.as_deref().unwrap_or(""),
        ),
        Command::Complete { id, duration } => {
            cmd_update(storage, &mut store, &id, CallStatus::Completed { duration })
        }
        Command::Miss { id } => cmd_update(storage, &mut store, &id, CallStatus::Missed),
        Command::Cancel { id } => cmd_update(storage, &mut store, &id, CallStatus::Cancelled),
        Command::Delete { id } => cmd_delete(storage, &mut store, &id),
        Command::Stats => cmd_stats(&store),
    }
}

fn cmd_add(storage: &Storage, store: &mut CallStore, draft: CallDraft) -> Result<(), String> {
    let call = store.add(draft).map_err(|e| e.to_string())?;
    persist(storage, store);
    println!("{}", call.id);
    Ok(())
}

fn cmd_list(store: &CallStore, filter: StatusFilter, search: &str) -> Result<(), String> {
    let shown = view::project(store.calls(), filter, search);

    if shown.is_empty() {
        if filter == StatusFilter::All && search.is_empty() {
            println!("No calls yet — schedule one with `callbook add`.");
        } else {
            println!("No calls found — try adjusting the filter or search term.");
        }
        return Ok(());
    }

    for call in shown {
        println!("{}", format_call(call));
    }
    println!();
    println!("{}", format_counts(&view::counts(store.calls())));
    Ok(())
}

fn cmd_update(
    storage: &Storage,
    store: &mut CallStore,
    reference: &str,
    status: CallStatus,
) -> Result<(), String> {
    let id = resolve_call(store, reference)?
        .ok_or_else(|| format!("no call matching '{reference}'"))?;

    store.update_status(id, status).map_err(|e| e.to_string())?;
    persist(storage, store);

    let short_id = &id.to_string()[..8];
    eprintln!("Call {short_id} marked {}", status.label());
    Ok(())
}

fn cmd_delete(storage: &Storage, store: &mut CallStore, reference: &str) -> Result<(), String> {
    match resolve_call(store, reference)? {
        Some(id) => {
            if store.delete(id) {
                persist(storage, store);
                eprintln!("Call {} deleted", &id.to_string()[..8]);
            }
            Ok(())
        }
        // A stale or unknown reference is benign for delete.
        None => {
            eprintln!("No call matching '{reference}' — nothing deleted");
            Ok(())
        }
    }
}

fn cmd_stats(store: &CallStore) -> Result<(), String> {
    println!("{}", format_counts(&view::counts(store.calls())));
    Ok(())
}

/// Write the collection back to the durable slot.
///
/// A failed save must not undo a mutation: the in-memory state stays
/// authoritative for the session, so this only warns.
fn persist(storage: &Storage, store: &CallStore) {
    if let Err(e) = storage.save(store.calls()) {
        eprintln!("Warning: could not save calls: {e}");
    }
}

/// Resolve a call reference (full UUID or unambiguous prefix).
///
/// `Ok(None)` means nothing matched; an ambiguous prefix is an error.
fn resolve_call(store: &CallStore, reference: &str) -> Result<Option<Uuid>, String> {
    if let Ok(id) = reference.parse::<Uuid>() {
        return Ok(store.calls().iter().find(|c| c.id == id).map(|c| c.id));
    }

    let matches: Vec<Uuid> = store
        .calls()
        .iter()
        .map(|c| c.id)
        .filter(|id| id.to_string().starts_with(reference))
        .collect();

    match matches.as_slice() {
        [] => Ok(None),
        [id] => Ok(Some(*id)),
        ids => {
            let shorts: Vec<String> = ids
                .iter()
                .map(|id| id.to_string()[..8].to_string())
                .collect();
            Err(format!(
                "'{reference}' is ambiguous — matches {} calls: {}",
                ids.len(),
                shorts.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::Call;

    fn store_with(ids: &[Uuid]) -> CallStore {
        let calls = ids
            .iter()
            .map(|&id| Call {
                id,
                customer_name: "Acme Corp".into(),
                phone: "+15550100".into(),
                scheduled_time: "2024-01-10T09:00:00Z".parse().unwrap(),
                status: CallStatus::Scheduled,
                notes: String::new(),
                project_type: None,
            })
            .collect();
        CallStore::new(calls)
    }

    #[test]
    fn resolve_full_uuid() {
        let id = Uuid::new_v4();
        let store = store_with(&[id]);

        assert_eq!(resolve_call(&store, &id.to_string()).unwrap(), Some(id));
    }

    #[test]
    fn resolve_full_uuid_not_in_store_is_none() {
        let store = store_with(&[Uuid::new_v4()]);

        let result = resolve_call(&store, &Uuid::new_v4().to_string()).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn resolve_unique_prefix() {
        let id = Uuid::new_v4();
        let store = store_with(&[id]);
        let prefix = &id.to_string()[..6];

        assert_eq!(resolve_call(&store, prefix).unwrap(), Some(id));
    }

    #[test]
    fn resolve_unknown_prefix_is_none() {
        let id: Uuid = "a3b0fc12-0000-4000-8000-000000000000".parse().unwrap();
        let store = store_with(&[id]);

        assert_eq!(resolve_call(&store, "ffff").unwrap(), None);
    }

    #[test]
    fn resolve_ambiguous_prefix_is_an_error() {
        let a: Uuid = "a3b0fc12-0000-4000-8000-000000000000".parse().unwrap();
        let b: Uuid = "a3b0fc12-1111-4000-8000-000000000000".parse().unwrap();
        let store = store_with(&[a, b]);

        let err = resolve_call(&store, "a3b").unwrap_err();
        assert!(err.contains("ambiguous"));
    }
}
