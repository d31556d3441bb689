//! The site document: every piece of editable page copy.
//!
//! Every section, nested record, list and list element lives behind `Arc`,
//! so a document can be cloned for editing without copying its contents.
//! See [`crate::edit`] for how an edit unshares only the nodes on its path.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::edit::{self, record_node};
use crate::error::EditError;
use crate::merge::merge_over;
use crate::path::Path;
use crate::types::{CtaVariant, GalleryKind};

/// A list of records. Editing one element copies the list spine and that
/// element; the other elements stay shared.
pub type Records<T> = Arc<Vec<Arc<T>>>;

/// A shared list of plain strings.
pub type Strings = Arc<Vec<String>>;

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_name: String,
    pub project_name: String,
    pub tagline: String,
    pub description: String,
    pub hero: Arc<Hero>,
    pub summary: Arc<Summary>,
    pub research: Arc<Research>,
    pub team: Arc<Team>,
    pub gallery: Arc<Gallery>,
    pub contact: Arc<Contact>,
    pub footer: Arc<Footer>,
}

record_node!(SiteConfig {
    "siteName" => site_name,
    "projectName" => project_name,
    "tagline" => tagline,
    "description" => description,
    "hero" => hero,
    "summary" => summary,
    "research" => research,
    "team" => team,
    "gallery" => gallery,
    "contact" => contact,
    "footer" => footer,
});

impl SiteConfig {
    /// A copy of this document with the value at `path` replaced.
    ///
    /// Every node the path does not enter is shared with `self`.
    pub fn with_value(&self, path: &str, value: Value) -> Result<SiteConfig, EditError> {
        let path: Path = path.parse()?;
        let mut next = self.clone();
        edit::set(&mut next, &path, value)?;
        Ok(next)
    }

    /// A copy of this document with `item` appended to the list at `path`.
    pub fn with_appended(&self, path: &str, item: Value) -> Result<SiteConfig, EditError> {
        let path: Path = path.parse()?;
        let mut next = self.clone();
        edit::append(&mut next, &path, item)?;
        Ok(next)
    }

    /// A copy of this document with element `index` removed from the list at
    /// `path`.
    pub fn with_removed(&self, path: &str, index: usize) -> Result<SiteConfig, EditError> {
        let path: Path = path.parse()?;
        let mut next = self.clone();
        edit::remove(&mut next, &path, index)?;
        Ok(next)
    }

    /// Build a document from a persisted JSON value, filling anything the
    /// value lacks from the built-in default.
    ///
    /// Objects merge key by key. Lists and scalars in `persisted` win as a
    /// whole; a list element missing a field (an older shape) gets that
    /// field's empty default instead of failing the whole document.
    pub fn merged_over_default(persisted: Value) -> Result<SiteConfig, serde_json::Error> {
        let mut base = serde_json::to_value(SiteConfig::default())?;
        merge_over(&mut base, persisted);
        serde_json::from_value(base)
    }
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub typewriter_slogans: Strings,
    pub badges: Strings,
    pub cta_buttons: Records<CtaButton>,
}

record_node!(Hero {
    "title" => title,
    "subtitle" => subtitle,
    "typewriterSlogans" => typewriter_slogans,
    "badges" => badges,
    "ctaButtons" => cta_buttons,
});

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CtaButton {
    pub text: String,
    pub href: String,
    pub variant: CtaVariant,
}

record_node!(CtaButton {
    "text" => text,
    "href" => href,
    "variant" => variant,
});

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub cards: Arc<SummaryCards>,
    pub description: String,
    pub highlights: Strings,
}

record_node!(Summary {
    "title" => title,
    "cards" => cards,
    "description" => description,
    "highlights" => highlights,
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryCards {
    pub problem: Arc<Card>,
    pub solution: Arc<Card>,
    pub impact: Arc<Card>,
}

record_node!(SummaryCards {
    "problem" => problem,
    "solution" => solution,
    "impact" => impact,
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub content: String,
}

record_node!(Card {
    "title" => title,
    "content" => content,
});

// ---------------------------------------------------------------------------
// Research
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Research {
    pub title: String,
    pub description: String,
    pub areas: Records<ResearchArea>,
    pub project_scope: Arc<ProjectScope>,
    pub conclusions: Arc<Conclusions>,
}

record_node!(Research {
    "title" => title,
    "description" => description,
    "areas" => areas,
    "projectScope" => project_scope,
    "conclusions" => conclusions,
});

/// One discipline of the analysis work (neutronics, thermal hydraulics, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResearchArea {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Icon name understood by the front end (`atom`, `shield`, ...).
    pub icon: String,
    pub methodology: String,
    pub key_findings: Strings,
    pub software: Strings,
    pub findings: String,
    pub conclusion: String,
    pub results: String,
}

record_node!(ResearchArea {
    "name" => name,
    "title" => title,
    "description" => description,
    "icon" => icon,
    "methodology" => methodology,
    "keyFindings" => key_findings,
    "software" => software,
    "findings" => findings,
    "conclusion" => conclusion,
    "results" => results,
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectScope {
    pub title: String,
    pub description: String,
    pub highlights: Strings,
}

record_node!(ProjectScope {
    "title" => title,
    "description" => description,
    "highlights" => highlights,
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conclusions {
    pub title: String,
    pub items: Strings,
}

record_node!(Conclusions {
    "title" => title,
    "items" => items,
});

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub title: String,
    pub members: Records<TeamMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentor: Option<Arc<Mentor>>,
}

record_node!(Team {
    "title" => title,
    "members" => members,
    "mentor" => mentor,
});

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub expertise: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mentor: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Strings>,
}

record_node!(TeamMember {
    "name" => name,
    "role" => role,
    "expertise" => expertise,
    "avatar" => avatar,
    "isMentor" => is_mentor,
    "linkedin" => linkedin,
    "email" => email,
    "website" => website,
    "specialties" => specialties,
});

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mentor {
    pub name: String,
    pub title: String,
    pub institution: String,
}

record_node!(Mentor {
    "name" => name,
    "title" => title,
    "institution" => institution,
});

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gallery {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Records<GalleryItem>,
}

record_node!(Gallery {
    "title" => title,
    "description" => description,
    "items" => items,
});

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: GalleryKind,
}

record_node!(GalleryItem {
    "id" => id,
    "title" => title,
    "description" => description,
    "image" => image,
    "type" => kind,
});

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub title: String,
    pub description: String,
    pub email: String,
    pub social_links: Arc<SocialLinks>,
    pub location: String,
    pub institution: String,
    pub form: Arc<ContactForm>,
}

record_node!(Contact {
    "title" => title,
    "description" => description,
    "email" => email,
    "socialLinks" => social_links,
    "location" => location,
    "institution" => institution,
    "form" => form,
});

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

record_node!(SocialLinks {
    "github" => github,
    "linkedin" => linkedin,
    "twitter" => twitter,
});

/// Labels of the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub title: String,
    pub subtitle: String,
    /// Keyed by form field name (`name`, `email`, `subject`, `message`).
    pub fields: Arc<BTreeMap<String, Arc<FormField>>>,
    pub submit_button: String,
    pub success_message: String,
    pub error_message: String,
}

record_node!(ContactForm {
    "title" => title,
    "subtitle" => subtitle,
    "fields" => fields,
    "submitButton" => submit_button,
    "successMessage" => success_message,
    "errorMessage" => error_message,
});

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormField {
    pub label: String,
    pub placeholder: String,
}

record_node!(FormField {
    "label" => label,
    "placeholder" => placeholder,
});

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Footer {
    pub description: String,
    pub links: Records<LinkGroup>,
    pub copyright: String,
}

record_node!(Footer {
    "description" => description,
    "links" => links,
    "copyright" => copyright,
});

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinkGroup {
    pub title: String,
    pub items: Records<Link>,
}

record_node!(LinkGroup {
    "title" => title,
    "items" => items,
});

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Link {
    pub text: String,
    pub href: String,
}

record_node!(Link {
    "text" => text,
    "href" => href,
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_hero_title_leaves_siblings_shared() {
        let default = SiteConfig::default();
        let result = default.with_value("hero.title", json!("New Title")).unwrap();

        assert_eq!(result.hero.title, "New Title");
        assert_eq!(result.hero.subtitle, default.hero.subtitle);
        assert_ne!(default.hero.title, "New Title");
        assert!(Arc::ptr_eq(&result.summary, &default.summary));
        assert!(Arc::ptr_eq(&result.research, &default.research));
        assert!(Arc::ptr_eq(&result.footer, &default.footer));
        assert!(!Arc::ptr_eq(&result.hero, &default.hero));
    }

    #[test]
    fn nested_siblings_stay_shared() {
        let default = SiteConfig::default();

        let retitled = default.with_value("research.title", json!("X")).unwrap();
        assert!(Arc::ptr_eq(&retitled.research.areas, &default.research.areas));
        assert!(Arc::ptr_eq(
            &retitled.research.project_scope,
            &default.research.project_scope
        ));
        assert!(Arc::ptr_eq(
            &retitled.research.conclusions,
            &default.research.conclusions
        ));

        let hero = default.with_value("hero.title", json!("X")).unwrap();
        assert!(Arc::ptr_eq(&hero.hero.cta_buttons, &default.hero.cta_buttons));
        assert!(Arc::ptr_eq(&hero.hero.badges, &default.hero.badges));

        let area = default
            .with_value("research.areas[1].title", json!("X"))
            .unwrap();
        let (before, after) = (&default.research.areas, &area.research.areas);
        assert!(!Arc::ptr_eq(before, after));
        assert!(!Arc::ptr_eq(&before[1], &after[1]));
        assert!(Arc::ptr_eq(&before[0], &after[0]));
        assert!(Arc::ptr_eq(&before[2], &after[2]));
        assert!(Arc::ptr_eq(&before[1].software, &after[1].software));
        assert!(Arc::ptr_eq(&area.research.project_scope, &default.research.project_scope));

        let label = default
            .with_value("contact.form.fields.email.label", json!("Mail"))
            .unwrap();
        let (before, after) = (&default.contact.form.fields, &label.contact.form.fields);
        assert!(Arc::ptr_eq(&before["name"], &after["name"]));
        assert!(!Arc::ptr_eq(&before["email"], &after["email"]));
        assert!(Arc::ptr_eq(&default.contact.social_links, &label.contact.social_links));
    }

    #[test]
    fn update_equals_original_outside_the_path() {
        let default = SiteConfig::default();
        let result = default
            .with_value("hero.ctaButtons[1].text", json!("Research"))
            .unwrap();

        let mut expected = serde_json::to_value(&default).unwrap();
        expected["hero"]["ctaButtons"][1]["text"] = json!("Research");
        assert_eq!(serde_json::to_value(&result).unwrap(), expected);
    }

    #[test]
    fn update_nested_map_and_enum_leaves() {
        let default = SiteConfig::default();
        let result = default
            .with_value("contact.form.fields.email.label", json!("Mail"))
            .unwrap()
            .with_value("hero.ctaButtons[0].variant", json!("secondary"))
            .unwrap();

        assert_eq!(result.contact.form.fields["email"].label, "Mail");
        assert_eq!(result.hero.cta_buttons[0].variant, CtaVariant::Secondary);
        assert!(Arc::ptr_eq(&result.team, &default.team));
    }

    #[test]
    fn rejected_update_leaves_document_untouched() {
        let default = SiteConfig::default();
        assert!(default.with_value("hero.ctaButtons[0].variant", json!("loud")).is_err());
        assert!(default.with_value("hero.nothing", json!("x")).is_err());
        assert!(default.with_value("hero.badges[99]", json!("x")).is_err());
        assert_eq!(default, SiteConfig::default());
    }

    #[test]
    fn append_and_remove_on_lists() {
        let default = SiteConfig::default();
        let badges = default.hero.badges.len();

        let added = default.with_appended("hero.badges", json!("New badge")).unwrap();
        assert_eq!(added.hero.badges.len(), badges + 1);
        assert_eq!(added.hero.badges.last().map(String::as_str), Some("New badge"));
        assert!(Arc::ptr_eq(&added.contact, &default.contact));

        let removed = added.with_removed("hero.badges", 0).unwrap();
        assert_eq!(removed.hero.badges[..], added.hero.badges[1..]);
    }

    #[test]
    fn append_research_area_software() {
        let default = SiteConfig::default();
        let next = default
            .with_appended("research.areas[1].software", json!("OpenFOAM"))
            .unwrap();
        assert_eq!(
            next.research.areas[1].software.last().map(String::as_str),
            Some("OpenFOAM")
        );
        assert_eq!(next.research.areas[0], default.research.areas[0]);
    }

    #[test]
    fn append_whole_team_member() {
        let default = SiteConfig::default();
        let next = default
            .with_appended(
                "team.members",
                json!({ "name": "New", "role": "Intern", "expertise": "Serpent" }),
            )
            .unwrap();
        let member = next.team.members.last().unwrap();
        assert_eq!(member.name, "New");
        assert_eq!(member.avatar, None);
    }

    #[test]
    fn serde_round_trip() {
        let default = SiteConfig::default();
        let json = serde_json::to_string(&default).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, default);
    }

    #[test]
    fn persisted_keys_are_camel_case() {
        let value = serde_json::to_value(SiteConfig::default()).unwrap();
        assert!(value.get("siteName").is_some());
        assert!(value["hero"].get("typewriterSlogans").is_some());
        assert!(value["research"].get("projectScope").is_some());
        assert!(value["contact"]["form"].get("submitButton").is_some());
        assert!(value["gallery"]["items"][0].get("type").is_some());
    }

    #[test]
    fn partial_document_is_completed_from_default() {
        let persisted = json!({
            "siteName": "Edited",
            "hero": { "title": "Only the title" }
        });
        let merged = SiteConfig::merged_over_default(persisted).unwrap();
        let default = SiteConfig::default();

        assert_eq!(merged.site_name, "Edited");
        assert_eq!(merged.hero.title, "Only the title");
        assert_eq!(merged.hero.subtitle, default.hero.subtitle);
        assert_eq!(merged.summary, default.summary);
    }

    #[test]
    fn list_elements_missing_fields_still_load() {
        let persisted = json!({
            "research": {
                "title": "Saved title",
                "areas": [{ "name": "Eski alan", "title": "Old area", "software": ["MCNP"] }]
            },
            "footer": { "links": [{ "title": "Proje", "items": [{ "text": "Özet" }] }] }
        });
        let merged = SiteConfig::merged_over_default(persisted).unwrap();

        assert_eq!(merged.research.title, "Saved title");
        assert_eq!(merged.research.areas.len(), 1);
        let area = &merged.research.areas[0];
        assert_eq!(area.title, "Old area");
        assert_eq!(area.results, "");
        assert!(area.key_findings.is_empty());
        assert_eq!(merged.footer.links[0].items[0].href, "");
    }

    #[test]
    fn merge_rejects_wrong_types() {
        assert!(SiteConfig::merged_over_default(json!({ "hero": { "badges": "x" } })).is_err());
    }
}
