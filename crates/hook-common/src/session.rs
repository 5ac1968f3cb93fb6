//! Session key parsing.

/// Agent id used when a session key does not name one.
pub const DEFAULT_AGENT_ID: &str = "main";

/// Resolve the agent id from a session key.
///
/// Keys look like `agent:<agentId>:<rest>`. Anything else maps to the
/// default agent.
pub fn resolve_agent_id(session_key: &str) -> String {
    let mut parts = session_key.trim().splitn(3, ':');

    match (parts.next(), parts.next()) {
        (Some(prefix), Some(id)) if prefix.eq_ignore_ascii_case("agent") => {
            let id = id.trim();
            if id.is_empty() {
                DEFAULT_AGENT_ID.to_string()
            } else {
                id.to_lowercase()
            }
        }
        _ => DEFAULT_AGENT_ID.to_string(),
    }
}
