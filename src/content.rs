//! The portfolio content itself, embedded at compile time.
//!
//! Everything the page renders lives here as plain data: one profile, its
//! roles, case studies, skill groups, and contact links. The content is
//! constructed once at startup and never mutated; `--export` serialises the
//! same data as JSON for use outside the terminal.

use serde::Serialize;

#[derive(Serialize, Clone)]
/// Everything the page renders, fixed at compile time.
pub struct Profile {
    /// Full name, shown in the nav bar and hero.
    pub name: &'static str,
    /// Role headline under the hero name.
    pub headline: &'static str,
    /// Path of the profile image asset.
    pub portrait: &'static str,
    /// One-paragraph professional summary.
    pub summary: &'static str,
    /// Work history, most recent first.
    pub experience: Vec<Role>,
    /// One-line introduction above the project cards.
    pub projects_tagline: &'static str,
    /// Case studies, in card order.
    pub projects: Vec<Project>,
    /// Closing pitch below the project cards.
    pub projects_outro: &'static str,
    /// One-line introduction above the skill groups.
    pub skills_tagline: &'static str,
    /// Competency areas with their individual skills.
    pub skills: Vec<SkillGroup>,
    /// Degrees and institutions.
    pub education: Vec<School>,
    /// Invitation line at the top of the contact section.
    pub contact_pitch: &'static str,
    /// Ways to get in touch, with their link targets.
    pub contact: Vec<ContactLink>,
    /// Copyright line rendered after the last section.
    pub footer: &'static str,
}

#[derive(Serialize, Clone)]
/// One entry in the work history.
pub struct Role {
    /// Employer or engagement name.
    pub employer: &'static str,
    /// Position held.
    pub title: &'static str,
    /// Location and date range.
    pub tenure: &'static str,
    /// Accomplishments, one bullet each.
    pub bullets: Vec<&'static str>,
}

#[derive(Serialize, Clone)]
/// A full case study behind one project card.
pub struct Project {
    /// Card and overlay title.
    pub title: &'static str,
    /// One-line elaboration under the title.
    pub subtitle: &'static str,
    /// Category badge on the card.
    pub category: &'static str,
    /// Opening paragraph of the case study.
    pub introduction: &'static str,
    /// The situation that motivated the work.
    pub problem: &'static str,
    /// What the work set out to achieve.
    pub objective: &'static str,
    /// How it was done, one bullet per step.
    pub methodology: Vec<&'static str>,
    /// What it achieved, one bullet per outcome.
    pub results: Vec<&'static str>,
    /// Closing paragraph of the case study.
    pub conclusion: &'static str,
}

#[derive(Serialize, Clone)]
/// A competency area and the skills under it.
pub struct SkillGroup {
    /// Area name, rendered in caps.
    pub title: &'static str,
    /// Individual skills in display order.
    pub skills: Vec<&'static str>,
}

#[derive(Serialize, Clone)]
/// One education entry.
pub struct School {
    /// Institution and campus.
    pub institution: &'static str,
    /// Degree and field.
    pub degree: &'static str,
    /// Attendance date range.
    pub dates: &'static str,
}

#[derive(Serialize, Clone)]
/// A way to get in touch, with its link target.
pub struct ContactLink {
    /// Text shown on the page.
    pub label: &'static str,
    /// Link target: a `tel:`, `mailto:`, or `https:` form.
    pub target: &'static str,
}

impl Profile {
    #[must_use]
    #[allow(clippy::too_many_lines)]
    /// The bundled portfolio.
    pub fn bundled() -> Self {
        Self {
            name: "MOHAMMAD KHAN",
            headline: "TECHNICAL SUPPORT ENGINEER | IT INFRASTRUCTURE ANALYST | SYSTEMS SUPPORT SPECIALIST",
            portrait: "images/picture.jpeg",
            summary: "IT Support and Systems Analyst with 3+ years across cloud-integrated \
                support environments in financial, academic, and SaaS contexts. Python, SQL, \
                AWS (Lambda, S3), ServiceNow, Splunk, IAM, DNS/VPN/VLAN. Focus on Tier-1/Tier-2 \
                workflows, access control, endpoint provisioning, and incident response. Known \
                for clear documentation, user-friendly troubleshooting, and coordination across \
                cross functional teams.",
            experience: vec![
                Role {
                    employer: "Independent Projects",
                    title: "Freelance IT Engineer",
                    tenure: "Remote, USA · Jan 2023 – Oct 2025",
                    bullets: vec![
                        "Built automation and data tools with Python, Flask, SQLite; improved efficiency by 30%+.",
                        "Designed modular CRUD backends; boosted data retrieval speed by 40%.",
                        "Integrated REST APIs (Open Library, custom); sub-1s real-time responses.",
                        "Shipped responsive UIs with intuitive workflows; ~30% fewer user steps.",
                        "Applied OOP and CI/CD (GitHub Actions) for reliable deployments.",
                        "Ran user feedback loops; achieved 95% satisfaction on usability.",
                    ],
                },
                Role {
                    employer: "Walmart",
                    title: "Stock Clerk",
                    tenure: "Valley Stream, NY · Sep 2021 – Present",
                    bullets: vec![
                        "Maintained barcode scanners and inventory databases; 99% stock accuracy.",
                        "Resolved device sync issues; improved troubleshooting time by 25%.",
                        "Managed updates and data integrity across POS/inventory; 15% efficiency gain.",
                    ],
                },
                Role {
                    employer: "Lehman College",
                    title: "Tech Assistant (IT Support)",
                    tenure: "Bronx, NY · Nov 2018 – May 2019",
                    bullets: vec![
                        "Tier-1 support for 200+ users; 95% first-call resolution.",
                        "Installed OS, updates, and patches; reduced downtime by 25%.",
                        "Trained users on security hygiene; improved safe practices by 30%.",
                        "Monitored logs/access; escalated two potential breaches.",
                    ],
                },
                Role {
                    employer: "Queensborough Community College",
                    title: "Tech Assistant (IT Support)",
                    tenure: "Queens, NY · Jan 2016 – Jun 2016",
                    bullets: vec![
                        "Installed, configured, tested 40+ computers and peripherals.",
                        "Ensured stable network connectivity across labs; improved uptime by 20%.",
                    ],
                },
            ],
            projects_tagline: "Selected projects demonstrating automation, analytics, and support tooling",
            projects: vec![
                Project {
                    title: "LLM Support Chatbot (AWS Bedrock + RAG)",
                    subtitle: "Cloud-native Tier-1 Support Assistant",
                    category: "Cloud & Automation",
                    introduction: "Architected and launched a Tier-1 support assistant using AWS \
                        Bedrock with Retrieval-Augmented Generation (RAG) to enable 24/7 internal \
                        support and automate high-volume queries.",
                    problem: "High ticket volumes and slow response times strained Tier-1 support \
                        workflows and increased backlog.",
                    objective: "Reduce ticket backlog and improve response speed with context-aware \
                        automation integrated into internal workflows.",
                    methodology: vec![
                        "Integrated Bedrock LLM with a RAG pipeline for context-grounded answers",
                        "Deployed serverless components with AWS Lambda and S3",
                        "Built a lightweight Node.js chatbot integration for internal tools",
                        "Added safeguards, logging, and performance metrics for reliability",
                    ],
                    results: vec![
                        "Improved query resolution efficiency by 45%",
                        "Under 1s response times for most internal queries",
                        "Reduced Tier-1 backlog via automated triage and responses",
                    ],
                    conclusion: "Delivered measurable automation impact with reliable cloud \
                        patterns and guardrails.",
                },
                Project {
                    title: "Power BI Airline Dashboard",
                    subtitle: "Operational Analytics with SQL + Splunk",
                    category: "Data & Reporting",
                    introduction: "Built Power BI dashboards by integrating ETL pipelines, SQL \
                        models, and Splunk logs to monitor flight performance metrics and \
                        operational KPIs.",
                    problem: "Manual reporting slowed decision-making and limited operational \
                        visibility across teams.",
                    objective: "Automate reporting and enable near real-time analytics for \
                        operations, finance, and IT support.",
                    methodology: vec![
                        "Modeled datasets with T-SQL and transformation layers",
                        "Automated refresh pipelines and DAX measures",
                        "Integrated Splunk logs for operational signals and alerting",
                        "Standardized datasets to improve data quality",
                    ],
                    results: vec![
                        "Cut manual reporting by ~40%",
                        "Improved analytical efficiency by ~40%",
                        "Delivered role-based dashboards for cross-functional stakeholders",
                    ],
                    conclusion: "Enabled data-driven operations with automated, trustworthy reporting.",
                },
            ],
            projects_outro: "Interested in learning more about any of these projects? Reach out \
                for detailed case studies and insights.",
            skills_tagline: "Core competencies for IT support, cloud operations, and data-driven workflows",
            skills: vec![
                SkillGroup {
                    title: "IT Support & Infrastructure",
                    skills: vec![
                        "Windows/macOS",
                        "AV/Zoom",
                        "Helpdesk, ServiceNow",
                        "Endpoint mgmt, Imaging",
                    ],
                },
                SkillGroup {
                    title: "Cloud & Monitoring",
                    skills: vec!["AWS (Lambda, S3, IAM)", "Splunk", "RBAC", "ASP.NET (Basic)"],
                },
                SkillGroup {
                    title: "Data & Reporting",
                    skills: vec!["SQL (T-SQL, Postgres)", "Power BI (DAX)", "Python (ETL)"],
                },
                SkillGroup {
                    title: "Cloud & Infrastructure",
                    skills: vec!["Azure", "Terraform", "Docker/VMware", "VPN/DNS/VLAN"],
                },
            ],
            education: vec![School {
                institution: "CUNY Lehman College, Bronx, NY",
                degree: "Bachelor of Science, Computer Science",
                dates: "Aug 2017 – May 2021",
            }],
            contact_pitch: "Let's connect — open to Technical Support, Systems Analyst, and IT Ops roles.",
            contact: vec![
                ContactLink {
                    label: "+1 (347) 701-7393",
                    target: "tel:+13477017393",
                },
                ContactLink {
                    label: "LinkedIn",
                    target: "https://www.linkedin.com/in/mohammad-khan-7a1369312/",
                },
                ContactLink {
                    label: "searchingforanewjob78@gmail.com",
                    target: "mailto:searchingforanewjob78@gmail.com",
                },
                ContactLink {
                    label: "GitHub",
                    target: "https://github.com/TK1987265",
                },
            ],
            footer: "© 2025 Mohammad Khan. Built for clarity and fast support.",
        }
    }
}

#[cfg(test)]
#[path = "tests/content.rs"]
mod tests;
