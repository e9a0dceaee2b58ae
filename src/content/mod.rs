// SPDX-License-Identifier: MPL-2.0
//! Bilingual content model for the portfolio project records.
//!
//! Free text that must be authored per language is stored as a
//! [`LocalizedText`] pair with one field per supported locale. Both fields
//! are always present; a language with no text carries an explicit empty
//! string, so resolution is total and needs no fallback logic.

mod projects;

pub use projects::PROJECTS;

use crate::i18n::Locale;

/// A single piece of free text, authored separately per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub es: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    /// Returns the string stored for `locale`, verbatim. An empty string is
    /// returned as-is, never substituted with the other language's value.
    pub const fn resolve(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Es => self.es,
            Locale::En => self.en,
        }
    }
}

/// Kind of external link attached to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkLabel {
    Demo,
    Repository,
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectLink {
    pub label: LinkLabel,
    pub url: &'static str,
}

/// One showcased project. Constructed once as static data and consumed
/// read-only by the portfolio section for the active locale.
#[derive(Debug)]
pub struct Project {
    /// Stable identifier, unique across [`PROJECTS`].
    pub id: &'static str,
    /// Language-invariant display title.
    pub title: &'static str,
    pub subtitle: LocalizedText,
    pub description: LocalizedText,
    pub mentoring: &'static [LocalizedText],
    /// Language-invariant technology tags.
    pub technologies: &'static [&'static str],
    pub features: &'static [LocalizedText],
    pub tech_stack: &'static [LocalizedText],
    pub architecture: &'static [LocalizedText],
    pub technical_challenges: &'static [LocalizedText],
    pub ux_highlights: &'static [LocalizedText],
    pub links: &'static [ProjectLink],
}

impl Project {
    /// All bilingual fields of the record, flattened. Used by data
    /// validation tests.
    pub fn localized_fields(&self) -> Vec<&LocalizedText> {
        let mut fields = vec![&self.subtitle, &self.description];
        fields.extend(self.mentoring);
        fields.extend(self.features);
        fields.extend(self.tech_stack);
        fields.extend(self.architecture);
        fields.extend(self.technical_challenges);
        fields.extend(self.ux_highlights);
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_the_requested_language() {
        let text = LocalizedText {
            es: "hola",
            en: "hello",
        };
        assert_eq!(text.resolve(Locale::Es), "hola");
        assert_eq!(text.resolve(Locale::En), "hello");
    }

    #[test]
    fn resolve_returns_empty_string_as_is() {
        let text = LocalizedText { es: "", en: "hello" };
        assert_eq!(text.resolve(Locale::Es), "");
        assert_eq!(text.resolve(Locale::En), "hello");
    }

    #[test]
    fn project_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate project id");
            }
        }
    }

    #[test]
    fn project_links_use_known_labels() {
        for project in PROJECTS {
            for link in project.links {
                assert!(matches!(link.label, LinkLabel::Demo | LinkLabel::Repository));
                assert!(link.url.starts_with("https://"));
            }
        }
    }

    #[test]
    fn localized_fields_cover_every_list() {
        let project = &PROJECTS[0];
        let expected = 2
            + project.mentoring.len()
            + project.features.len()
            + project.tech_stack.len()
            + project.architecture.len()
            + project.technical_challenges.len()
            + project.ux_highlights.len();
        assert_eq!(project.localized_fields().len(), expected);
    }
}
