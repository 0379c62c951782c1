use anyhow::{Context, Result};
use outline_config::Config;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// One source of outline text and the name it is reported under.
pub struct Input {
    pub label: String,
    pub text: String,
}

impl Input {
    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self {
            label: path.display().to_string(),
            text,
        })
    }
}

/// Command-line files win over config `inputs`; with neither, read stdin.
pub fn collect(files: &[String], config: &Config) -> Result<Vec<Input>> {
    let paths = if !files.is_empty() {
        expand_globs(files)?
    } else if !config.inputs.is_empty() {
        let paths = config.resolve_inputs()?;
        if paths.is_empty() {
            log::warn!("config inputs matched no files");
        }
        paths
    } else {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(vec![Input {
            label: "<stdin>".to_string(),
            text,
        }]);
    };

    paths.iter().map(|p| Input::read(p)).collect()
}

fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {pattern}"))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            log::warn!("no files matched: {pattern}");
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}
