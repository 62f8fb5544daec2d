use temp_dir::TempDir;

/// Writes `content` as `config.toml` inside `dir` and returns its path.
pub fn write_config(dir: &TempDir, content: &str) -> anyhow::Result<String> {
    let path = dir.child("config.toml");
    std::fs::write(&path, content)?;

    Ok(path.to_string_lossy().into_owned())
}
