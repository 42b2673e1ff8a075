//! Static portfolio content
//!
//! Everything shown on the pages that is not fetched at runtime.

use crate::model::types::ProjectRecord;

pub const OWNER_NAME: &str = "DAKSH MALHOTRA";
pub const ROLE: &str = "Software & AI Engineer";
pub const TAGLINE: &str = "Building creative, intelligent, and beautiful digital experiences.";
pub const BIO: &str = "I am a passionate software and AI engineer, focused on building innovative \
solutions and creative digital experiences. My expertise spans full-stack development, machine \
learning, and interactive 3D web technologies.";

pub const DEFAULT_RELAY_URL: &str = "https://api.rss2json.com/v1/api.json";
pub const DEFAULT_FEED_SOURCE: &str = "https://medium.com/feed/@iamdakshmalhotra";
pub const DEFAULT_RESUME_PATH: &str = "/resume.pdf";
pub const DEFAULT_CONTACT_LINK: &str = "https://wa.me/919318437008";

/// Projects shown per page on the Projects page
pub const PROJECTS_PER_PAGE: usize = 2;

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Programming Languages",
        skills: &["JavaScript/TypeScript", "Python", "Java", "C++"],
    },
    SkillGroup {
        title: "Frontend",
        skills: &["React", "Vue.js", "Three.js", "HTML/CSS"],
    },
    SkillGroup {
        title: "Backend & Databases",
        skills: &["Node.js", "Express", "MongoDB", "PostgreSQL"],
    },
    SkillGroup {
        title: "AI/ML",
        skills: &["TensorFlow", "PyTorch", "Computer Vision", "NLP"],
    },
];

pub struct EducationEntry {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub details: &'static [&'static str],
}

pub const EDUCATION_SUMMARY: &str = "Currently pursuing my Bachelor's degree in Computer Science.";

pub const EDUCATION: &[EducationEntry] = &[EducationEntry {
    degree: "Bachelor of Technology",
    field: "Computer Science Engineering",
    institution: "Maharaja Surajmal Institute of Technology",
    duration: "2023 - 2027",
    details: &[
        "Currently in Third Year",
        "Specializing in Computer Science and Engineering",
        "Focus on Advanced Programming, Data Structures, and Software Development",
    ],
}];

pub struct WorkEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const WORK_SUMMARY: &str = "My professional journey in technology and cybersecurity.";

pub const WORK_HISTORY: &[WorkEntry] = &[WorkEntry {
    period: "July 2025 - Present",
    title: "Intern - KPMG",
    summary: "Cybersecurity and technology consulting internship",
}];

pub const PROJECTS_SUMMARY: &str =
    "Featured projects showcasing my technical expertise and creativity.";

pub fn projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new(
            "AI Scheduler",
            "An intelligent scheduling application built with modern web technologies. \
             Features smart time management and automated scheduling capabilities.",
            Some("https://ai-scheduler-rho.vercel.app/"),
            &["React", "Node.js", "AI/ML", "Vercel"],
        ),
        ProjectRecord::new(
            "A11y Audit Pro",
            "Web accessibility auditing tool that helps developers identify and fix \
             accessibility issues in their applications.",
            Some("https://a11y-audit-pro.vercel.app/"),
            &["Accessibility", "JavaScript", "Web Standards", "Vercel"],
        ),
        ProjectRecord::new(
            "Github Analyzer",
            "A comprehensive GitHub repository analysis tool built with multiple technologies. \
             Analyzes code, commits, and repository metrics.",
            Some("https://github.com/idakshmalhotra/Github-analyzer"),
            &["Python", "JavaScript", "CSS", "HTML"],
        ),
    ]
}

pub const RESUME_SUMMARY: &str =
    "Download my resume to learn more about my qualifications and experience.";

pub const BLOGS_SUMMARY: &str =
    "Sharing insights, tutorials, and thoughts on technology and innovation.";

pub const RESEARCH_SUMMARY: &str = "Coming soon...";

pub const CONTACT_SUMMARY: &str = "Let's connect! Reach out on WhatsApp or leave a message below.";

pub const CONTACT_CONFIRMATION: &str = "Thank you! I'll get back to you soon. ✨";
