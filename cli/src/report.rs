//! Plain-text rendering of the route table and per-session access.

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

use storefront::routes::ROUTES;
use storefront::{Denial, GuardOutcome, GuardPolicy, SessionState};

fn policy_label(policy: GuardPolicy) -> &'static str {
    match policy {
        GuardPolicy::Public => "public",
        GuardPolicy::Authenticated => "authenticated",
        GuardPolicy::Admin => "admin",
    }
}

pub(crate) fn outcome_label(outcome: GuardOutcome) -> String {
    match outcome {
        GuardOutcome::Granted => "granted".to_owned(),
        GuardOutcome::Pending => "pending".to_owned(),
        GuardOutcome::Denied { reason: Denial::Unauthenticated, redirect } => {
            format!("redirect {redirect} (signed out)")
        }
        GuardOutcome::Denied { reason: Denial::Forbidden, redirect } => format!("redirect {redirect} (forbidden)"),
    }
}

/// One line per route: path, guard, page title.
pub fn route_table() -> Vec<String> {
    ROUTES
        .iter()
        .map(|route| format!("{:<12} {:<14} {}", route.path, policy_label(route.guard), route.page.title()))
        .collect()
}

/// Header line naming who the session belongs to.
pub fn session_summary(state: &SessionState) -> String {
    match &state.identity {
        Some(identity) => format!("signed in as {} ({:?})", identity.display_name(), identity.role),
        None if state.loading => "session unresolved".to_owned(),
        None => "signed out".to_owned(),
    }
}

/// One line per route: path and what the guard decides for `state`.
pub fn access_report(state: &SessionState) -> Vec<String> {
    ROUTES
        .iter()
        .map(|route| format!("{:<12} {}", route.path, outcome_label(route.evaluate(state))))
        .collect()
}
