// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Static page copy.
//!
//! Everything the page says about its owner (bio, skills, services,
//! contact details, social links) is data, loaded from a YAML document so
//! the same binary can present a different portfolio.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Full content of the portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: Owner,
    pub hero: Hero,
    pub about: About,
    pub skills: Vec<SkillCategory>,
    pub services: Vec<Service>,
    pub contact: ContactCopy,
    pub footer: Footer,
}

/// Who the portfolio belongs to and where to reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub email: String,
    pub location: String,
    pub response_time: String,
    pub github_url: String,
    pub linkedin_url: String,
    #[serde(default)]
    pub cv_url: Option<String>,
}

impl Owner {
    /// Single-letter avatar monogram.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Rotating titles for the typing animation
    pub titles: Vec<String>,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub industries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, 0 to 100
    pub level: u8,
}

/// Icon shown next to a service card title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Globe,
    Server,
    Palette,
    Chat,
}

impl ServiceIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::Globe => "🌐",
            ServiceIcon::Server => "🖥",
            ServiceIcon::Palette => "🎨",
            ServiceIcon::Chat => "💬",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCopy {
    pub heading: String,
    pub intro: String,
    pub blurb: String,
    /// Subject line of the pre-filled `mailto:` inquiry
    pub inquiry_subject: String,
    /// Body of the pre-filled `mailto:` inquiry
    pub inquiry_body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub blurb: String,
    pub credits: String,
}

impl SiteContent {
    /// Check the invariants the page relies on.
    pub fn validate(&self) -> Result<()> {
        if self.hero.titles.is_empty() {
            bail!("hero.titles must contain at least one title");
        }
        if self.owner.email.trim().is_empty() {
            bail!("owner.email must not be empty");
        }
        for category in &self.skills {
            if let Some(skill) = category.skills.iter().find(|s| s.level > 100) {
                bail!(
                    "skill '{}' in '{}' has level {}, expected 0-100",
                    skill.name,
                    category.category,
                    skill.level
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::io::serialization::default_content;

    #[test]
    fn test_default_content_is_valid() {
        let content = default_content().unwrap();
        content.validate().unwrap();
        assert_eq!(content.hero.titles.len(), 6);
        assert_eq!(content.owner.initial(), "H");
    }

    #[test]
    fn test_rejects_empty_title_cycle() {
        let mut content = default_content().unwrap();
        content.hero.titles.clear();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_skill() {
        let mut content = default_content().unwrap();
        content.skills[0].skills[0].level = 120;
        let err = content.validate().unwrap_err().to_string();
        assert!(err.contains("120"));
    }
}
