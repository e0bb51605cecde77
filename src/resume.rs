//! Resume content model.
//!
//! The resume is plain data loaded from TOML. When no file is given on the
//! command line and `conf/resume.toml` is missing, the copy embedded at build
//! time is used so the viewer always has something to show.

use crate::reveal::TextBlock;
use crate::text_utils::split_words;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use unicode_normalization::UnicodeNormalization;

const EMBEDDED_RESUME: &str = include_str!("../conf/resume.toml");

/// Block id of the bio paragraph.
pub const ABOUT_BLOCK_ID: &str = "about";

#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    pub personal: Personal,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub clearance: String,
    #[serde(default)]
    pub education: Vec<EducationItem>,
    #[serde(default)]
    pub certificates: Vec<CertificateItem>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub about: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LinkedIn,
    GitHub,
    Email,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::GitHub => "GitHub",
            Platform::Email => "Email",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub platform: Platform,
    pub username: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CertificateItem {
    pub name: String,
    pub details: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceItem {
    pub id: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub is_future: bool,
    #[serde(default)]
    pub hidden: bool,
}

impl Resume {
    /// Load from `path`, or from `conf/resume.toml`, or from the embedded copy.
    pub fn load(path: Option<&Path>) -> Result<Resume> {
        if let Some(path) = path {
            let data = fs::read_to_string(path)
                .with_context(|| format!("reading resume {}", path.display()))?;
            let resume = Self::parse(&data)
                .with_context(|| format!("parsing resume {}", path.display()))?;
            info!(path = %path.display(), "Loaded resume");
            return Ok(resume);
        }

        let default_path = Path::new("conf/resume.toml");
        match fs::read_to_string(default_path) {
            Ok(data) => match Self::parse(&data) {
                Ok(resume) => {
                    info!(path = %default_path.display(), "Loaded resume");
                    return Ok(resume);
                }
                Err(err) => {
                    warn!(path = %default_path.display(), "Ignoring invalid resume: {err:#}");
                }
            },
            Err(err) => {
                warn!(path = %default_path.display(), "Using embedded resume: {err}");
            }
        }
        Self::parse(EMBEDDED_RESUME).context("parsing embedded resume")
    }

    pub fn parse(contents: &str) -> Result<Resume> {
        let mut resume: Resume = toml::from_str(contents)?;
        resume.normalize();
        resume.validate()?;
        Ok(resume)
    }

    /// Entries that should be rendered, in source order.
    pub fn visible_experience(&self) -> impl Iterator<Item = &ExperienceItem> {
        self.experience.iter().filter(|job| !job.hidden)
    }

    /// Reveal blocks in page order: the bio paragraph, then each visible job.
    pub fn text_blocks(&self) -> Vec<TextBlock> {
        let mut blocks = Vec::new();
        let about = split_words(&self.personal.about);
        if !about.is_empty() {
            blocks.push(TextBlock::new(ABOUT_BLOCK_ID, vec![about]));
        }
        for job in self.visible_experience() {
            let lines = job
                .description
                .iter()
                .map(|point| split_words(point))
                .filter(|words| !words.is_empty())
                .collect();
            blocks.push(TextBlock::new(job.id.clone(), lines));
        }
        blocks
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for job in &self.experience {
            if job.id.trim().is_empty() {
                bail!("experience entry `{}` has an empty id", job.role);
            }
            if job.id == ABOUT_BLOCK_ID {
                bail!("experience id `{ABOUT_BLOCK_ID}` is reserved");
            }
            if !seen.insert(job.id.as_str()) {
                bail!("duplicate experience id `{}`", job.id);
            }
        }
        Ok(())
    }

    fn normalize(&mut self) {
        fn nfc(value: &mut String) {
            *value = value.nfc().collect();
        }

        nfc(&mut self.personal.name);
        nfc(&mut self.personal.title);
        nfc(&mut self.personal.about);
        nfc(&mut self.clearance);
        for job in &mut self.experience {
            nfc(&mut job.role);
            nfc(&mut job.company);
            job.description.iter_mut().for_each(nfc);
        }
        self.skills.iter_mut().for_each(nfc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [personal]
        name = "Sam"
        title = "Engineer"
        about = "Builds   things that last."

        [[experience]]
        id = "a"
        role = "Lead"
        company = "Acme"
        description = ["Ran the team", "", "Shipped the product"]

        [[experience]]
        id = "b"
        role = "Future"
        company = "Anywhere"
        hidden = true
    "#;

    #[test]
    fn embedded_resume_parses() {
        let resume = Resume::parse(EMBEDDED_RESUME).expect("embedded resume");
        assert!(!resume.personal.name.is_empty());
        assert!(resume.visible_experience().count() >= 1);
        assert!(resume.experience.iter().any(|job| job.hidden));
    }

    #[test]
    fn blocks_follow_source_order_and_skip_hidden_entries() {
        let resume = Resume::parse(MINIMAL).expect("minimal resume");
        let blocks = resume.text_blocks();
        let ids: Vec<&str> = blocks.iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![ABOUT_BLOCK_ID, "a"]);

        assert_eq!(blocks[0].word_count(), 4);
        let words: Vec<&str> = blocks[1].words().collect();
        assert_eq!(
            words,
            vec!["Ran", "the", "team", "Shipped", "the", "product"]
        );
        assert_eq!(blocks[1].lines().len(), 2);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doc = r#"
            [personal]
            name = "Sam"
            title = "Engineer"

            [[experience]]
            id = "x"
            role = "One"
            company = "A"

            [[experience]]
            id = "x"
            role = "Two"
            company = "B"
        "#;
        let err = Resume::parse(doc).expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate experience id"));
    }

    #[test]
    fn text_is_nfc_normalized() {
        let doc = "[personal]\nname = \"Jose\u{301}\"\ntitle = \"Dev\"\n";
        let resume = Resume::parse(doc).expect("resume");
        assert_eq!(resume.personal.name, "Jos\u{e9}");
    }
}
