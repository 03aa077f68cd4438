use serde::Serialize;
use serde_json::Value;

use crate::content::Portfolio;

#[derive(Debug, Serialize)]
struct Person<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    email: &'a str,
    #[serde(rename = "sameAs")]
    same_as: [&'a str; 2],
    #[serde(rename = "alumniOf")]
    alumni_of: Organization<'a>,
    #[serde(rename = "knowsAbout")]
    knows_about: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct Organization<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

/// schema.org `Person` document for the page head.
pub fn person_json_ld(portfolio: &Portfolio) -> Value {
    let person = Person {
        context: "https://schema.org",
        kind: "Person",
        name: portfolio.profile.name,
        email: portfolio.links.email,
        same_as: [portfolio.links.github, portfolio.links.linkedin],
        alumni_of: Organization {
            kind: "CollegeOrUniversity",
            name: portfolio.education.school,
        },
        knows_about: portfolio
            .tags
            .stack
            .iter()
            .chain(portfolio.tags.coursework)
            .copied()
            .collect(),
    };
    // plain strings and arrays only, so this cannot fail
    serde_json::to_value(person).unwrap_or(Value::Null)
}

/// Serialized JSON-LD, safe to drop inside a `<script>` element.
pub fn person_json_ld_script(portfolio: &Portfolio) -> String {
    person_json_ld(portfolio)
        .to_string()
        .replace("</", "<\\/")
}
