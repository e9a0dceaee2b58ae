// SPDX-License-Identifier: MPL-2.0
//! The translation dictionary schema shared by every locale.
//!
//! Both locale dictionaries are instances of [`Dictionary`], so the key set,
//! shapes, and nesting are identical by construction. A missing entry in one
//! locale is a missing struct field, which the compiler rejects; there is no
//! runtime lookup, no partial dictionary, and no cross-locale fallback.

/// Complete set of UI strings for one locale.
#[derive(Debug)]
pub struct Dictionary {
    pub header: Header,
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub profile: Profile,
    pub security: TitledList,
    pub architecture: TitledList,
    pub portfolio: PortfolioLabels,
    pub contact: Contact,
    pub footer: Footer,
}

/// Navigation labels shown in the page header.
#[derive(Debug)]
pub struct Header {
    pub about: &'static str,
    pub skills: &'static str,
    pub experience: &'static str,
    pub contact: &'static str,
}

#[derive(Debug)]
pub struct Hero {
    pub greeting: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub contact: &'static str,
}

#[derive(Debug)]
pub struct About {
    pub title: &'static str,
    pub intro: &'static str,
    pub focus: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug)]
pub struct Skills {
    pub title: &'static str,
    pub backend: SkillCategory,
    pub frontend: SkillCategory,
    pub cloud: SkillCategory,
    pub databases: SkillCategory,
}

/// One skill grouping (e.g. backend) with its ordered item list.
#[derive(Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug)]
pub struct Profile {
    pub title: &'static str,
    pub roles: &'static [&'static str],
    pub mindset: Mindset,
}

#[derive(Debug)]
pub struct Mindset {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

/// A titled bullet list, used by the security and architecture sections.
#[derive(Debug)]
pub struct TitledList {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Labels framing the portfolio project cards. The per-project free text
/// itself lives in the content model, not here.
#[derive(Debug)]
pub struct PortfolioLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub mentoring: &'static str,
    pub technologies: &'static str,
    pub features: &'static str,
    pub stack: &'static str,
    pub architecture: &'static str,
    pub challenges: &'static str,
    pub ux: &'static str,
    pub demo: &'static str,
    pub repository: &'static str,
}

#[derive(Debug)]
pub struct Contact {
    pub title: &'static str,
    pub description: &'static str,
    pub email_label: &'static str,
}

#[derive(Debug)]
pub struct Footer {
    pub rights: &'static str,
}

impl Dictionary {
    /// Every leaf string in the dictionary, flattened in schema order.
    /// Used by tests to sweep both locales for accidentally empty entries.
    pub fn leaves(&self) -> Vec<&'static str> {
        let mut leaves = vec![
            self.header.about,
            self.header.skills,
            self.header.experience,
            self.header.contact,
            self.hero.greeting,
            self.hero.name,
            self.hero.role,
            self.hero.subtitle,
            self.hero.description,
            self.hero.cta,
            self.hero.contact,
            self.about.title,
            self.about.intro,
            self.about.focus,
        ];
        leaves.extend(self.about.points);
        leaves.push(self.skills.title);
        for category in [
            &self.skills.backend,
            &self.skills.frontend,
            &self.skills.cloud,
            &self.skills.databases,
        ] {
            leaves.push(category.title);
            leaves.extend(category.items);
        }
        leaves.push(self.profile.title);
        leaves.extend(self.profile.roles);
        leaves.push(self.profile.mindset.title);
        leaves.push(self.profile.mindset.description);
        leaves.extend(self.profile.mindset.points);
        for list in [&self.security, &self.architecture] {
            leaves.push(list.title);
            leaves.extend(list.items);
        }
        leaves.extend([
            self.portfolio.title,
            self.portfolio.subtitle,
            self.portfolio.description,
            self.portfolio.mentoring,
            self.portfolio.technologies,
            self.portfolio.features,
            self.portfolio.stack,
            self.portfolio.architecture,
            self.portfolio.challenges,
            self.portfolio.ux,
            self.portfolio.demo,
            self.portfolio.repository,
            self.contact.title,
            self.contact.description,
            self.contact.email_label,
            self.footer.rights,
        ]);
        leaves
    }
}
