use crate::types::{EnvironmentEntry, ResolvedSecret};

const DELIMITER: &str = "# ------------------------------------------------------------------------------------------------------------------------------------";

/// Render the combined `.env` block: plain entries first, then resolved
/// secrets, each section headed by a comment and the whole block framed by
/// delimiter lines.
pub fn render_env_block(environment: &[EnvironmentEntry], secrets: &[ResolvedSecret]) -> String {
    let mut out = String::new();
    out.push_str(DELIMITER);
    out.push_str("\n# Non secret environment\n\n");
    for entry in environment {
        out.push_str(&format!("{}={}\n", entry.name, entry.value));
    }
    out.push_str("\n# Secrets\n\n");
    for secret in secrets {
        out.push_str(&format!("{}={}\n", secret.name, secret.value));
    }
    out.push('\n');
    out.push_str(DELIMITER);
    out
}
