//! Output formatting for a lookup result

use crate::version::CrateInfo;

/// Renders the human-readable report. Lines for empty optional fields are omitted.
pub fn render_text(info: &CrateInfo) -> String {
    let mut lines = vec![
        format!("Crate: {}", info.name),
        format!("Latest Version: {}", info.version),
        format!("Cargo.toml Format: {} = \"{}\"", info.name, info.version_spec),
    ];

    let optional = [
        ("Description", &info.description),
        ("Documentation", &info.documentation),
        ("Repository", &info.repository),
    ];
    for (label, value) in optional {
        if !value.is_empty() {
            lines.push(format!("{}: {}", label, value));
        }
    }

    lines.join("\n")
}

pub fn render_json(info: &CrateInfo) -> serde_json::Result<String> {
    serde_json::to_string_pretty(info)
}
