//! Admin command runners
//!
//! Thin wrappers over [`Admin`](crate::admin::Admin) that add the terminal
//! progress display used for multi-day scheduling.

use crate::admin::{Admin, ScheduleOutcome};
use crate::daily::today;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Schedule the deterministic word for `days` days from today
///
/// # Errors
///
/// Returns an error if the credential is rejected or the progress template
/// is invalid. Failures for single dates are reported in the outcomes.
pub fn run_schedule(
    admin: &Admin<'_>,
    credential: Option<&str>,
    days: u32,
) -> Result<Vec<ScheduleOutcome>> {
    let pb = ProgressBar::new(u64::from(days));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    Ok(admin.schedule(credential, today(), days, &pb)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::AdminGate;
    use crate::store::{MemoryStore, WordStore};
    use crate::wordlists::WordList;

    #[test]
    fn schedules_from_today() {
        let gate = AdminGate::new(None);
        let store = MemoryStore::new();
        let words = WordList::embedded();
        let admin = Admin::new(&gate, &store, &words);

        let outcomes = run_schedule(&admin, None, 3).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].date, today());
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
        assert!(store.get(today()).unwrap().is_some());
    }

    #[test]
    fn rejected_credential_fails() {
        let gate = AdminGate::new(Some("ਪਾਸਵਰਡ".to_string()));
        let store = MemoryStore::new();
        let words = WordList::embedded();
        let admin = Admin::new(&gate, &store, &words);

        assert!(run_schedule(&admin, Some("wrong"), 3).is_err());
        assert!(store.get(today()).unwrap().is_none());
    }
}
