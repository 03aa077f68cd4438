use std::collections::HashSet;

use http::Uri;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub intro: &'static str,
    pub about: &'static str,
    pub contact_title: &'static str,
    pub contact_blurb: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Links {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tags {
    pub stack: &'static [&'static str],
    pub coursework: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub bullets: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub role: &'static str,
    pub org: &'static str,
    pub time: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub grad: &'static str,
    pub location: &'static str,
}

/// Everything the page renders, in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    pub links: Links,
    pub tags: Tags,
    pub projects: &'static [Project],
    pub experience: &'static [Experience],
    pub education: Education,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("{entity} is missing a value for `{field}`")]
    EmptyField {
        entity: String,
        field: &'static str,
    },
    #[error("{entity} has an empty `{field}` list")]
    EmptyList {
        entity: String,
        field: &'static str,
    },
    #[error("invalid uri `{uri}`: {reason}")]
    InvalidUri { uri: String, reason: String },
    #[error("tag `{tag}` appears more than once in {group}")]
    DuplicateTag { group: &'static str, tag: String },
}

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: PROFILE,
    links: LINKS,
    tags: TAGS,
    projects: PROJECTS,
    experience: EXPERIENCE,
    education: EDUCATION,
};

pub const PROFILE: Profile = Profile {
    name: "Ronav Jaiswal",
    brand: "Ronav.J",
    intro: "I’m Ronav Jaiswal — CS @ Carnegie Mellon (’27). I design performant systems in C and craft applied-ML products (RAG, saliency, gaze) with PyTorch & OpenCV.",
    about: "I’m a systems + ML engineer who loves clean abstractions and measurable impact. Recently, I’ve been exploring retino-cortical transforms (log-Z), foveated blur, and gaze-prediction pipelines; and building a RAG doc-intelligence stack tailored to regulated workflows. Previously, I led software & hardware for an FRC/FTC team, shipping robust autonomy with odometry and CV.",
    contact_title: "Let’s build something",
    contact_blurb: "Open to internships and collaborations in systems, ML, and intelligent tooling.",
};

pub const LINKS: Links = Links {
    github: "https://github.com/ronavjaiswal",
    linkedin: "https://www.linkedin.com/in/ronavjaiswal",
    email: "mailto:rjaiswal@andrew.cmu.edu",
};

pub const TAGS: Tags = Tags {
    stack: &[
        "C",
        "C++",
        "Python",
        "Java",
        "TypeScript",
        "React",
        "Node.js",
        "PyTorch",
        "OpenCV",
        "Docker",
        "ChromaDB",
        "RAG",
        "MATLAB",
    ],
    coursework: &[
        "Data Structures & Algorithms",
        "Computer Systems (15-213)",
        "Functional Programming",
        "Computer Security (18-330)",
        "Theoretical CS (15-251)",
        "Math Foundations of CS",
    ],
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Malloc — Dynamic Storage Allocator",
        blurb: "Custom malloc/free/realloc/calloc with segregated free lists, coalescing, and footer elimination; balanced ≥74% utilization with strong throughput.",
        bullets: &[
            "Segregated free lists & immediate/deferred coalescing",
            "Optimized fragmentation; tested with mem_sbrk harness",
        ],
        tech: &["C", "Valgrind"],
        link: None,
    },
    Project {
        title: "Shell — Tiny Linux Shell",
        blurb: "Job control, I/O redirection, built-ins, and robust signal handling (SIGINT/SIGTSTP/SIGCHLD) with correct reaping to avoid zombies.",
        bullets: &[
            "fork/execve/waitpid/setpgid",
            "Foreground/background pipeline management",
        ],
        tech: &["C", "Unix"],
        link: None,
    },
    Project {
        title: "HTTP Proxy Server",
        blurb: "Multithreaded web proxy using POSIX threads + RIO. HTTP/1.0 GET parsing, header normalization, response forwarding, and concurrency safety.",
        bullets: &[
            "Thread pool + robust I/O",
            "Header forwarding (Host, UA, Connection)",
        ],
        tech: &["C", "Pthreads"],
        link: None,
    },
    Project {
        title: "Cache Simulator",
        blurb: "Parametric cache (size/associativity) with LRU; write-back + write-allocate. Matrix transpose optimized using blocking strategies.",
        bullets: &[
            "Hit/miss/eviction/dirty tracking",
            "Clock-cycle aware analysis",
        ],
        tech: &["C"],
        link: None,
    },
    Project {
        title: "Game Discover Hub",
        blurb: "Scalable, responsive game discovery web app; React + TS + Vite + Chakra; integrates RAWG REST API with search/filter/sort.",
        bullets: &[
            "Axios-powered data fetching",
            "Responsive grid + virtualized lists",
        ],
        tech: &["React", "TypeScript", "Vite", "Chakra UI", "Axios"],
        link: Some("https://github.com/ronavjaiswal/Rawg-clone"),
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Undergraduate Research Fellow",
        org: "Carnegie Mellon — Prof. Tai Sing Lee",
        time: "Feb 2025 – Present",
        points: &[
            "Implemented log-Z cortical magnification + foveated blur in OpenCV for gaze-prediction pipelines.",
            "Trained and evaluated saliency models (DeepGaze IIe on MIT1004) with PyTorch; cross-compared with MATLAB legacy baselines.",
        ],
    },
    Experience {
        role: "Applied ML & Knowledge Systems Intern",
        org: "Herbochem Industries (NYC)",
        time: "Jun 2025 – Aug 2025",
        points: &[
            "Built a RAG document-intelligence system for GMP/regulatory workflows (FastAPI + Streamlit).",
            "ChromaDB vector store, e5-base + contrastive FT, MMR diversification, cross-encoder re-ranking; cited Q&A over SOPs/CoAs/MSDS.",
        ],
    },
    Experience {
        role: "Hardware & Software Lead",
        org: "BSRC — FIRST Robotics (FRC/FTC)",
        time: "Aug 2017 – May 2024",
        points: &[
            "Real-time course correction using odometry + RoadRunner; solved non-linear pose under constant curvature.",
            "TensorFlow + OpenCV object detection for autonomous interaction with game elements.",
        ],
    },
];

pub const EDUCATION: Education = Education {
    school: "Carnegie Mellon University",
    degree: "B.S. in Computer Science",
    grad: "Expected 2027",
    location: "Pittsburgh, PA",
};

impl Links {
    /// Address part of the `mailto:` link.
    pub fn email_address(&self) -> &'static str {
        self.email.strip_prefix("mailto:").unwrap_or(self.email)
    }
}

impl Portfolio {
    pub fn projects_with_links(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.link.is_some())
    }

    /// Checks the authored content against the invariants the page relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        let profile = &self.profile;
        for (field, value) in [
            ("name", profile.name),
            ("brand", profile.brand),
            ("intro", profile.intro),
            ("about", profile.about),
            ("contact_title", profile.contact_title),
            ("contact_blurb", profile.contact_blurb),
        ] {
            require_text("profile", field, value)?;
        }

        validate_web_uri(self.links.github)?;
        validate_web_uri(self.links.linkedin)?;
        validate_mailto(self.links.email)?;

        validate_tag_group("stack", self.tags.stack)?;
        validate_tag_group("coursework", self.tags.coursework)?;

        for project in self.projects {
            project.validate()?;
        }
        for exp in self.experience {
            exp.validate()?;
        }
        self.education.validate()
    }
}

impl Project {
    pub fn validate(&self) -> Result<(), ContentError> {
        let entity = format!("project `{}`", self.title);
        require_text(&entity, "title", self.title)?;
        require_text(&entity, "blurb", self.blurb)?;
        for bullet in self.bullets {
            require_text(&entity, "bullets", bullet)?;
        }
        for tech in self.tech {
            require_text(&entity, "tech", tech)?;
        }
        match self.link {
            Some(link) => validate_web_uri(link),
            None => Ok(()),
        }
    }
}

impl Experience {
    pub fn validate(&self) -> Result<(), ContentError> {
        let entity = format!("experience `{}`", self.role);
        require_text(&entity, "role", self.role)?;
        require_text(&entity, "org", self.org)?;
        require_text(&entity, "time", self.time)?;
        if self.points.is_empty() {
            return Err(ContentError::EmptyList {
                entity,
                field: "points",
            });
        }
        self.points
            .iter()
            .try_for_each(|p| require_text(&entity, "points", p))
    }
}

impl Education {
    pub fn validate(&self) -> Result<(), ContentError> {
        require_text("education", "school", self.school)?;
        require_text("education", "degree", self.degree)?;
        require_text("education", "grad", self.grad)?;
        require_text("education", "location", self.location)
    }
}

fn require_text(entity: &str, field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::EmptyField {
            entity: entity.to_string(),
            field,
        })
    } else {
        Ok(())
    }
}

fn validate_tag_group(group: &'static str, tags: &[&str]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for tag in tags {
        require_text(group, "tags", tag)?;
        if !seen.insert(*tag) {
            return Err(ContentError::DuplicateTag {
                group,
                tag: tag.to_string(),
            });
        }
    }
    Ok(())
}

fn invalid(uri: &str, reason: &str) -> ContentError {
    ContentError::InvalidUri {
        uri: uri.to_string(),
        reason: reason.to_string(),
    }
}

/// Absolute `http`/`https` URI with a host.
pub fn validate_web_uri(uri: &str) -> Result<(), ContentError> {
    let parsed: Uri = uri
        .parse()
        .map_err(|e: http::uri::InvalidUri| invalid(uri, &e.to_string()))?;
    match parsed.scheme_str() {
        Some("http") | Some("https") => {}
        Some(other) => return Err(invalid(uri, &format!("unsupported scheme `{other}`"))),
        None => return Err(invalid(uri, "missing scheme")),
    }
    match parsed.host() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid(uri, "missing host")),
    }
}

/// `mailto:` link holding a single `local@domain` address.
pub fn validate_mailto(uri: &str) -> Result<(), ContentError> {
    let address = uri
        .strip_prefix("mailto:")
        .ok_or_else(|| invalid(uri, "expected a mailto: link"))?;
    match address.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !address.contains(char::is_whitespace) =>
        {
            Ok(())
        }
        _ => Err(invalid(uri, "malformed email address")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_content_is_valid() {
        assert_eq!(PORTFOLIO.validate(), Ok(()));
    }

    #[test]
    fn test_links_are_shared_with_profile() {
        assert_eq!(PORTFOLIO.links.email_address(), "rjaiswal@andrew.cmu.edu");
        assert_eq!(PORTFOLIO.projects_with_links().count(), 1);
    }

    #[test]
    fn test_web_uri_validation() {
        assert!(validate_web_uri("https://github.com/ronavjaiswal").is_ok());
        assert!(validate_web_uri("http://example.com").is_ok());
        assert!(matches!(
            validate_web_uri("ftp://example.com/file"),
            Err(ContentError::InvalidUri { .. })
        ));
        assert!(validate_web_uri("/relative/path").is_err());
        assert!(validate_web_uri("not a uri").is_err());
    }

    #[test]
    fn test_mailto_validation() {
        assert!(validate_mailto("mailto:someone@example.com").is_ok());
        assert!(validate_mailto("someone@example.com").is_err());
        assert!(validate_mailto("mailto:someone").is_err());
        assert!(validate_mailto("mailto:@example.com").is_err());
        assert!(validate_mailto("mailto:some one@example.com").is_err());
    }

    #[test]
    fn test_project_requires_title_and_valid_link() {
        let untitled = Project {
            title: " ",
            ..PROJECTS[0].clone()
        };
        assert_eq!(
            untitled.validate(),
            Err(ContentError::EmptyField {
                entity: "project ` `".to_string(),
                field: "title",
            })
        );

        let bad_link = Project {
            link: Some("github.com/no-scheme"),
            ..PROJECTS[0].clone()
        };
        assert!(matches!(
            bad_link.validate(),
            Err(ContentError::InvalidUri { .. })
        ));
    }

    #[test]
    fn test_experience_requires_points() {
        let exp = Experience {
            points: &[],
            ..EXPERIENCE[0].clone()
        };
        assert!(matches!(
            exp.validate(),
            Err(ContentError::EmptyList { field: "points", .. })
        ));
    }

    #[test]
    fn test_duplicate_tags_rejected() {
        let portfolio = Portfolio {
            tags: Tags {
                stack: &["C", "Rust", "C"],
                coursework: TAGS.coursework,
            },
            ..PORTFOLIO.clone()
        };
        assert_eq!(
            portfolio.validate(),
            Err(ContentError::DuplicateTag {
                group: "stack",
                tag: "C".to_string(),
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = validate_mailto("mailto:nobody").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid uri `mailto:nobody`: malformed email address"
        );
    }
}
