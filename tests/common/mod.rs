use anyhow::Context;
use assert_cmd::Command;
use std::path::Path;

pub fn mindmend_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mindmend").unwrap();
    cmd.env_remove("MINDMEND_ROOT");
    cmd
}

/// Decode the stored entry list straight out of the preferences file
pub fn read_entries_json(root: &Path) -> anyhow::Result<serde_json::Value> {
    let prefs_path = root.join(".mindmend").join("prefs.json");
    let raw = std::fs::read_to_string(&prefs_path)
        .with_context(|| format!("reading {}", prefs_path.display()))?;

    let prefs: serde_json::Value = serde_json::from_str(&raw).context("parsing prefs.json")?;
    let blob = prefs["mood_entries_json"]
        .as_str()
        .context("prefs.json has no mood_entries_json key")?;

    serde_json::from_str(blob).context("parsing mood_entries_json blob")
}
