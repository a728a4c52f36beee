// Portfolio content
//
// Static copy rendered by the page sections. Pure data: no colors here, the
// sections pick those from the active palette.

pub struct Profile {
    pub nickname: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0 ~ 100
    pub level: u8,
}

pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub struct Practice {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub struct Interest {
    pub name: &'static str,
    pub description: &'static str,
}

pub struct InterestGroup {
    pub title: &'static str,
    pub items: &'static [Interest],
}

pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const PROFILE: Profile = Profile {
    nickname: "Call me \"Satya\"",
    name: "Satyendra Pandey",
    role: "Full-Stack & Blockchain Developer",
    headline: "Building High-Performance On-Chain DEX & Blockchain Systems",
    summary: "Specializing in blockchain architecture, DeFi platforms, and AI-assisted \
              development. Designing custom blockchains with BFT consensus, on-chain order \
              books handling 50K+ TPS, and secure, scalable trading systems.",
};

pub const STATS: &[Stat] = &[
    Stat { value: "6+", label: "Years Experience" },
    Stat { value: "50+", label: "Projects Delivered" },
    Stat { value: "50+", label: "Technologies Mastered" },
    Stat { value: "1000+", label: "GitHub Contributions" },
];

pub const JOURNEY: &[Milestone] = &[
    Milestone {
        year: "2018",
        title: "The Beginning",
        description: "Started as a junior developer, learning the fundamentals of web \
                      development and software engineering principles.",
    },
    Milestone {
        year: "2019-2020",
        title: "Full-Stack Development",
        description: "Dove deep into full-stack development with React, Node.js and \
                      databases. Shipped the first production applications.",
    },
    Milestone {
        year: "2021-2022",
        title: "Cloud & Architecture",
        description: "Expanded into cloud platforms (AWS, Azure), microservices \
                      architecture and DevOps practices.",
    },
    Milestone {
        year: "2023-2024",
        title: "Senior Engineering",
        description: "Led technical teams, architected scalable systems and mentored \
                      junior developers, with a focus on performance.",
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Languages & Core",
        skills: &[
            Skill { name: "Node.js", level: 95 },
            Skill { name: "Go", level: 92 },
            Skill { name: "Rust", level: 88 },
            Skill { name: "TypeScript", level: 94 },
            Skill { name: "Solidity", level: 90 },
        ],
    },
    SkillGroup {
        name: "Frontend",
        skills: &[
            Skill { name: "React", level: 95 },
            Skill { name: "Next.js", level: 92 },
            Skill { name: "Angular", level: 88 },
            Skill { name: "Tailwind CSS", level: 90 },
        ],
    },
    SkillGroup {
        name: "Blockchain & Smart Contracts",
        skills: &[
            Skill { name: "Smart Contracts", level: 91 },
            Skill { name: "BFT Consensus", level: 89 },
            Skill { name: "DeFi", level: 92 },
        ],
    },
    SkillGroup {
        name: "Databases & Storage",
        skills: &[
            Skill { name: "MongoDB", level: 91 },
            Skill { name: "PostgreSQL", level: 89 },
            Skill { name: "OpenSearch", level: 85 },
            Skill { name: "Vector DB", level: 83 },
        ],
    },
    SkillGroup {
        name: "DevOps & Infrastructure",
        skills: &[
            Skill { name: "Docker", level: 94 },
            Skill { name: "Kubernetes", level: 91 },
            Skill { name: "Grafana", level: 87 },
            Skill { name: "Terraform", level: 84 },
        ],
    },
    SkillGroup {
        name: "Testing & Quality",
        skills: &[
            Skill { name: "Unit Testing", level: 92 },
            Skill { name: "Load Testing", level: 89 },
            Skill { name: "Test-Driven Development", level: 88 },
        ],
    },
];

pub const EXPERIENCE: &[Job] = &[
    Job {
        title: "Blockchain Engineer",
        company: "AntierDex (DeFi)",
        location: "Remote",
        period: "2023 - Present",
        description: "Building a fully on-chain decentralized exchange with custom \
                      blockchain infrastructure, BFT-based consensus and on-chain order \
                      book execution.",
        achievements: &[
            "Designed a custom blockchain with BFT consensus and 5 validator nodes",
            "Developing a DEX capable of 50K+ TPS in Go",
            "Implementing an on-chain order book for spot and perpetual markets",
        ],
        technologies: &["Go", "Blockchain", "BFT Consensus", "Solidity", "Rust"],
    },
    Job {
        title: "Software Engineer",
        company: "Fincrafts (CeFi)",
        location: "Remote",
        period: "2022 - 2023",
        description: "Built a centralized Forex trading platform for proprietary assets \
                      and forex reserves.",
        achievements: &[
            "Optimized high-speed data flow with robust concurrent user handling",
            "Shipped social, algo and copy trading features",
            "Built MAM/PAMM master strategy support",
        ],
        technologies: &["Node.js", "React", "MongoDB", "Microservices", "Kubernetes"],
    },
    Job {
        title: "Full-Stack Developer",
        company: "Goldenleap (CeFi)",
        location: "UAE",
        period: "2021 - 2022",
        description: "Developed a finance and trading management platform for daily Forex \
                      traders.",
        achievements: &[
            "Built secure trading workflows for proprietary asset management",
            "Implemented authentication and authorization",
        ],
        technologies: &["Node.js", "Angular", "PostgreSQL", "Docker", "TypeScript"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Layer 1 Trading Platform (AntierDex)",
        description: "High-performance decentralized trading platform with BFT consensus \
                      and 50K+ TPS capacity.",
        technologies: &["Go", "Blockchain", "BFT Consensus", "Rust"],
    },
    Project {
        title: "Advanced Order Matching Engine",
        description: "Sub-millisecond matching with an on-chain order book for spot and \
                      perpetual markets.",
        technologies: &["Go", "Rust", "DeFi"],
    },
    Project {
        title: "Cross-Chain Bridge Protocol",
        description: "Asset transfers between Ethereum, Polygon and other networks with \
                      multi-signature validator security.",
        technologies: &["Solidity", "Node.js", "Ethereum", "Polygon"],
    },
    Project {
        title: "NFT Marketplace Platform",
        description: "Multi-chain minting, trading and auctions backed by IPFS storage.",
        technologies: &["React", "Next.js", "IPFS", "Solidity"],
    },
];

pub const PRACTICES: &[Practice] = &[
    Practice {
        category: "System Design",
        items: &[
            "Distributed systems and microservices architecture",
            "Caching strategies (Redis, CDN)",
            "Message queues (Kafka, RabbitMQ, SQS)",
        ],
    },
    Practice {
        category: "Software Engineering Principles",
        items: &[
            "SOLID principles and design patterns",
            "Domain-Driven Design and CQRS",
            "Test-Driven Development",
        ],
    },
    Practice {
        category: "Performance & Optimization",
        items: &[
            "Profiling and query optimization",
            "Network and API efficiency",
        ],
    },
    Practice {
        category: "Security",
        items: &[
            "Authentication and authorization (OAuth, JWT, RBAC)",
            "API security and rate limiting",
        ],
    },
];

pub const GITHUB_USER: &str = "strangerhash";

pub const INTERESTS: &[InterestGroup] = &[
    InterestGroup {
        title: "Adventures",
        items: &[
            Interest { name: "Motorcycle Riding", description: "Scenic routes and mountain terrain" },
            Interest { name: "Camping", description: "Off-grid hill station trips" },
            Interest { name: "Photography", description: "Moments from adventures and tech events" },
        ],
    },
    InterestGroup {
        title: "Tech Passions",
        items: &[
            Interest { name: "Cloud-Native Tech", description: "Kubernetes and distributed systems" },
            Interest { name: "AI & ML", description: "AI applications in blockchain and DeFi" },
        ],
    },
    InterestGroup {
        title: "Community",
        items: &[
            Interest { name: "Meetup Speaker", description: "Talks at blockchain conferences" },
            Interest { name: "Mentorship", description: "Guiding newcomers in Web3" },
        ],
    },
];

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { label: "Email", value: "pandeysatyendra870@gmail.com" },
    ContactInfo { label: "Location", value: "India" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com/strangerhash" },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/satyendra-pandey-a0314b167/" },
];

/// Proficiency label for a skill level
pub fn skill_level_label(level: u8) -> &'static str {
    match level {
        90.. => "Expert",
        75..=89 => "Advanced",
        50..=74 => "Intermediate",
        _ => "Beginner",
    }
}
