//! Static page content: the "content collaborator".
//!
//! The engine treats everything here as injected data: an ordered
//! section registry with stable ids, plus the literal text each
//! renderer lays out. Nothing below is validated beyond "stable id
//! exists".

use crate::section::SectionDescriptor;

/// Owner identity shown on the cover and in the navigation brand.
pub struct Owner {
    pub name: &'static str,
    pub tagline: &'static str,
    pub quote: &'static str,
}

pub const OWNER: Owner = Owner {
    name: "Justin Dave Magboo",
    tagline: "Physical Therapist • Licensed Insurance Advisor",
    quote: "\"Helping people recover their health and secure their future.\"",
};

pub const FOOTER: &str = "© 2025 Justin Dave Magboo. All rights reserved.";

/// One typed block of section body content.
pub enum Block {
    /// Small uppercase kicker line.
    Kicker(&'static str),
    /// Emphasized lead paragraph.
    Lead(&'static str),
    Paragraph(&'static str),
    /// Plain bullet list.
    Bullets(&'static [&'static str]),
    /// Titled bullet card.
    Card {
        title: &'static str,
        items: &'static [&'static str],
    },
    /// Row of small pill labels.
    Chips {
        title: &'static str,
        items: &'static [&'static str],
    },
    /// Label/value rows.
    Facts(&'static [(&'static str, &'static str)]),
}

/// A section of the page: registry entry, full heading, body blocks.
pub struct SectionContent {
    pub descriptor: SectionDescriptor,
    /// Full heading rendered at the top of the section (the registry
    /// label is the shorter navigation form).
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

pub const SECTIONS: &[SectionContent] = &[
    SectionContent {
        descriptor: SectionDescriptor::new("cover", "Cover"),
        heading: "Justin Dave Magboo",
        blocks: &[
            Block::Kicker("Portfolio"),
            Block::Lead("Physical Therapist • Licensed Insurance Advisor"),
            Block::Paragraph("\"Helping people recover their health and secure their future.\""),
        ],
    },
    SectionContent {
        descriptor: SectionDescriptor::new("summary", "Summary"),
        heading: "Professional Summary",
        blocks: &[Block::Paragraph(
            "I am a Physical Therapist Student and a Licensed Financial Advisor with a passion \
             for helping individuals achieve holistic well-being — physically, financially, and \
             emotionally. My background in rehabilitation gives me a unique understanding of \
             health needs, while my financial expertise allows me to guide clients toward \
             long-term security.",
        )],
    },
    SectionContent {
        descriptor: SectionDescriptor::new("skills", "Skills"),
        heading: "Skills & Core Competencies",
        blocks: &[
            Block::Card {
                title: "Shared Skills",
                items: &[
                    "Communication & Client Education",
                    "Needs Assessment & Problem-Solving",
                    "Empathy & Rapport Building",
                ],
            },
            Block::Card {
                title: "Physical Therapy",
                items: &[
                    "Manual Therapy",
                    "Neurological Rehabilitation",
                    "Orthopedic Rehab",
                ],
            },
            Block::Card {
                title: "Insurance Advisory",
                items: &[
                    "Financial Needs Analysis",
                    "Policy Customization",
                    "Claims Assistance",
                ],
            },
            Block::Chips {
                title: "Additional Skills",
                items: &[
                    "Fast Learner",
                    "Interpersonal Skills",
                    "Leadership Skills",
                    "Communication Skills",
                    "Organization Skills",
                    "Time & Project Management",
                ],
            },
        ],
    },
    SectionContent {
        descriptor: SectionDescriptor::new("highlights", "Highlights"),
        heading: "Career Highlights",
        blocks: &[Block::Bullets(&[
            "Helped over 150 patients achieve improved mobility and independence.",
            "Assisted more than 100 clients in securing life and health insurance plans \
             tailored to their needs.",
            "Best Intern, Best in Case Presentation, Best in Journal Presentation, Best in \
             Practical Exam — St. Frances Cabrini Medical Center (2024)",
            "National Achiever of PRU Life UK — Protection Drive Qualifier, Dubai (2023)",
        ])],
    },
    SectionContent {
        descriptor: SectionDescriptor::new("pt", "Physical Therapy"),
        heading: "Physical Therapy Work",
        blocks: &[
            Block::Card {
                title: "Work Experience",
                items: &[
                    "Physical Therapy Intern (2022–2024) – Sta Ana Hospital, National \
                     Children's Hospital, DMMC, Metafactor Wellness Center, Motions Venture \
                     Philippines, St. Frances Cabrini Medical Center.",
                    "Community-Based Rehabilitation (2024–Present) – Brgy. Sico, Batangas.",
                ],
            },
            Block::Card {
                title: "Certifications & Training",
                items: &[
                    "Enhancing Quality of Life for Elderly Individuals with Respiratory Needs: \
                     Assessment and Rehabilitation Approaches — Lyceum of the Philippines \
                     University Batangas.",
                    "World Physical Therapy Day: Rehabilitation and Long COVID — UDM Physical \
                     Therapy Student Council.",
                ],
            },
        ],
    },
    SectionContent {
        descriptor: SectionDescriptor::new("insurance", "Insurance Advisory"),
        heading: "Insurance Advisory Work",
        blocks: &[
            Block::Card {
                title: "Work Experience",
                items: &[
                    "Assistant Unit Manager, PRU Life UK (2022–Present) – Assessed needs and \
                     prescribed plans to secure client's future.",
                ],
            },
            Block::Card {
                title: "Certifications & Licenses",
                items: &[
                    "Certified Investment Advisor — PRU Life UK (2022)",
                    "Rookie High Flyer's Club / Top Rookie – Unit Wide (2022)",
                ],
            },
        ],
    },
    SectionContent {
        descriptor: SectionDescriptor::new("education", "Education"),
        heading: "Education",
        blocks: &[Block::Bullets(&[
            "Lyceum of the Philippines Batangas (2024) – Bachelor of Science in Physical \
             Therapy – 4th year",
            "Sta Teresa College (2020–2021) – Senior High School Graduate",
            "San Antonio, San Pascual, Batangas (2014–2015) – Elementary Graduate",
        ])],
    },
    SectionContent {
        descriptor: SectionDescriptor::new("awards", "Achievements"),
        heading: "Achievements & Awards",
        blocks: &[
            Block::Card {
                title: "Healthcare",
                items: &[
                    "Best Intern, Best in Case Presentation, Best in Journal Presentation, \
                     Best in Practical Exam (2024)",
                ],
            },
            Block::Card {
                title: "Financial Services",
                items: &[
                    "National Achiever of PRU Life UK (2023)",
                    "Top Assistant Unit Manager, Top Leader – Unit Wide (2023)",
                ],
            },
        ],
    },
    SectionContent {
        descriptor: SectionDescriptor::new("contact", "Contact"),
        heading: "Contact",
        blocks: &[Block::Facts(&[
            ("Phone", "+63 939 407 0002"),
            ("Email", "magboojustindave@gmail.com"),
            ("Address", "49 Sto Nino, San Pascual, Batangas"),
        ])],
    },
];

/// Navigation registry in document order.
pub fn descriptors() -> Vec<SectionDescriptor> {
    SECTIONS.iter().map(|s| s.descriptor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_ordered() {
        let ids: Vec<_> = descriptors().iter().map(|d| d.id).collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.first().map(|id| id.as_str()), Some("cover"));
        assert_eq!(ids.last().map(|id| id.as_str()), Some("contact"));
    }

    #[test]
    fn every_section_has_a_heading_and_body() {
        for section in SECTIONS {
            assert!(!section.heading.is_empty());
            assert!(!section.blocks.is_empty());
        }
    }
}
