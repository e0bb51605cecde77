//! Print hand-off.
//!
//! The resume is rendered to plain text, written under the cache directory and
//! passed to the configured print command, which must exit successfully. An
//! empty command only exports.

use crate::resume::Resume;
use anyhow::{Context, Result, bail};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::info;

pub const PRINT_FILE: &str = "resume.txt";

pub fn print_dir(cache_dir: &Path) -> PathBuf {
    cache_dir.join("print")
}

/// Write the plain-text resume and hand it to `command`. Returns the file path.
pub fn print_resume(resume: &Resume, cache_dir: &Path, command: &str) -> Result<PathBuf> {
    validate_command(command)?;
    let dir = print_dir(cache_dir);
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(PRINT_FILE);
    fs::write(&path, render_plain_text(resume))
        .with_context(|| format!("writing {}", path.display()))?;

    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        info!(path = %path.display(), "Exported resume without printing");
        return Ok(path);
    };
    let args: Vec<&str> = parts.collect();
    let output = Command::new(program)
        .args(&args)
        .arg(&path)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("running print command `{command}`"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "print command `{command}` exited with {}: {}",
            output.status,
            stderr.trim()
        );
    }
    info!(
        program,
        status = %output.status,
        path = %path.display(),
        "Print command accepted resume"
    );
    Ok(path)
}

/// The resume as plain text, in the order it appears on screen.
pub fn render_plain_text(resume: &Resume) -> String {
    let mut out = String::new();
    let personal = &resume.personal;
    let _ = writeln!(out, "{}", personal.name.to_uppercase());
    let _ = writeln!(out, "{}", personal.title);
    let contact: Vec<&str> = [
        personal.location.as_str(),
        personal.email.as_str(),
        personal.phone.as_str(),
    ]
    .into_iter()
    .filter(|value| !value.is_empty())
    .collect();
    if !contact.is_empty() {
        let _ = writeln!(out, "{}", contact.join(" | "));
    }
    for link in &resume.socials {
        let _ = writeln!(out, "{}: {}", link.platform, link.url);
    }

    if !personal.about.is_empty() {
        section(&mut out, "About");
        let _ = writeln!(out, "{}", personal.about);
    }

    let jobs: Vec<_> = resume.visible_experience().collect();
    if !jobs.is_empty() {
        section(&mut out, "Experience");
        for (idx, job) in jobs.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{} - {}", job.role, job.company);
            if !job.period.is_empty() {
                let _ = writeln!(out, "{}", job.period);
            }
            for point in &job.description {
                let _ = writeln!(out, "  * {point}");
            }
        }
    }

    if !resume.clearance.is_empty() {
        section(&mut out, "Clearance");
        let _ = writeln!(out, "{}", resume.clearance);
    }
    if !resume.education.is_empty() {
        section(&mut out, "Education");
        for item in &resume.education {
            let _ = writeln!(out, "{}, {} ({})", item.degree, item.school, item.year);
        }
    }
    if !resume.certificates.is_empty() {
        section(&mut out, "Certificates");
        for item in &resume.certificates {
            let _ = writeln!(out, "{}: {}", item.name, item.details);
        }
    }
    if !resume.skills.is_empty() {
        section(&mut out, "Skills");
        let _ = writeln!(out, "{}", resume.skills.join(", "));
    }
    if !resume.languages.is_empty() {
        section(&mut out, "Languages");
        let _ = writeln!(out, "{}", resume.languages.join(", "));
    }
    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}\n{}", title.to_uppercase(), "-".repeat(title.len()));
}

/// The command runs without a shell, so it must fit on one line.
pub fn validate_command(command: &str) -> Result<()> {
    if command.contains(['\n', '\r']) {
        bail!("print command must be a single line");
    }
    Ok(())
}
