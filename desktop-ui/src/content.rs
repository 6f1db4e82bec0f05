//! Static portfolio content: the project catalog, skill listing, and the
//! text rendered into notepad windows. Consumed at desktop-render time and
//! by the explorer/terminal views; never mutated at runtime.

pub const CODENAME: &str = "SynthOS v0.5";

pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        items: &["React", "TypeScript", "Tailwind CSS", "Next.js", "Framer Motion"],
    },
    SkillGroup {
        category: "Backend",
        items: &["Node.js", "Python", "PostgreSQL", "Supabase", "Go"],
    },
    SkillGroup {
        category: "DevOps",
        items: &["Docker", "AWS", "CI/CD", "Git", "Linux"],
    },
];

pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
    /// CSS color pair for the explorer card tile.
    pub color: &'static str,
    pub icon: Option<&'static str>,
    pub date_range: &'static str,
    pub achievements: &'static [&'static str],
}

impl Project {
    /// Company portion of the name (everything before the first dash).
    pub fn company(&self) -> &'static str {
        self.name.split(" - ").next().unwrap_or(self.name)
    }

    /// Title used for the project's detail window.
    pub fn window_title(&self) -> String {
        format!("{}.txt", self.company())
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        name: "Spectra Tech Corp - E-Commerce Platform",
        role: "CTO",
        desc: "Architected and launched a high-performance B2B-B2C e-commerce \
               platform using Next.js and React Native (Expo), ensuring seamless \
               cross-platform experience.",
        tags: &[
            "Next.js",
            "React Native",
            "Expo",
            "GCP",
            "Docker",
            "Microservices",
            "Prometheus",
            "Grafana",
        ],
        color: "rgba(59, 130, 246, 0.2)",
        icon: Some("/spectra.png"),
        date_range: "December 2024 – October 2025",
        achievements: &[
            "Engineered a scalable DevOps pipeline on Google Cloud Platform, deploying \
             Dockerized microservices and establishing 99.9% system observability using \
             Prometheus, Loki, and Grafana.",
            "Optimized backend performance and database load by implementing a tiered \
             caching and message queuing strategy to handle high-concurrency requests.",
            "Directed the full product lifecycle, managing the roadmap from technical \
             design to production deployment while overseeing data security.",
        ],
    },
    Project {
        id: 2,
        name: "Pearl Labs (Now Alto Foundation) - Crypto banking protocol (Crypto technology)",
        role: "CTO | Senior Solidity Engineer",
        desc: "Designed and secured a multi-million dollar DeFi protocol featuring \
               lending markets, yield optimization, and inter-chain interoperability.",
        tags: &["Solidity", "DeFi", "Foundry", "Hardhat", "Smart Contracts", "Web3"],
        color: "rgba(59, 130, 246, 0.4)",
        icon: Some("/alto_logo_light.svg"),
        date_range: "February 2022 – October 2024",
        achievements: &[
            "Created internal tooling to improve Developer Experience (DX) and \
             streamlined coordination between frontend and backend engineering teams, \
             resulting in faster feature delivery.",
            "Spearheaded smart contract development and security auditing using Foundry \
             and Hardhat, implementing rigorous fuzzing and testing standards to protect \
             user assets.",
            "Orchestrated crisis management protocols, mitigating critical on-chain \
             incidents and leading the technical response to safeguard protocol integrity.",
        ],
    },
    Project {
        id: 3,
        name: "KogeFarm - Crypto yield farming (Crypto technology)",
        role: "Technical Lead",
        desc: "Developed complex yield-optimizing smart contracts in Solidity, \
               automating asset compounding across liquidity pools to maximize APY.",
        tags: &[
            "Solidity",
            "DeFi",
            "Yield Farming",
            "Smart Contracts",
            "Frontend Integration",
        ],
        color: "rgba(168, 85, 247, 0.4)",
        icon: Some("/kogefarm.svg"),
        date_range: "October 2021 – February 2022",
        achievements: &[
            "Transitioned from active user to Core Contributor and Technical Lead, \
             leveraged deep product knowledge to enhance the user experience and \
             significantly extend product features.",
            "Led frontend integration, ensuring precise real-time data visualization for \
             user positions and protocol metrics.",
        ],
    },
    Project {
        id: 4,
        name: "Pivohub - B2B commercial solution",
        role: "Software Developer",
        desc: "Developed full-stack features for a supply chain management platform \
               connecting craft producers to retailers, optimizing inventory tracking \
               and order processing.",
        tags: &["Full Stack", "Supply Chain", "Inventory Management"],
        color: "rgba(234, 179, 8, 0.5)",
        icon: Some("/pivohub.svg"),
        date_range: "February 2021 – October 2021",
        achievements: &[
            "Optimized application logic to streamline inventory tracking and order \
             processing workflows.",
        ],
    },
    Project {
        id: 5,
        name: "Multicim - Medical solution",
        role: "Full Stack Developer",
        desc: "Spearheaded complete refactor of legacy application to modern, scalable \
               tools, engineering downtime-resilient systems for critical medical care \
               providers.",
        tags: &["Legacy Refactor", "Docker", "SysAdmin", "Infrastructure", "DevOps"],
        color: "rgba(59, 130, 246, 0.4)",
        icon: Some("/carechain.png"),
        date_range: "February 2020 – February 2021",
        achievements: &[
            "Spearheaded a complete refactor of the legacy application to use modern, \
             scalable, and developer-friendly tools, which directly increased \
             engineering productivity.",
            "Engineered downtime-resilient systems, significantly improving platform \
             reliability and uptime for critical medical care providers.",
            "Managed on-premise infrastructure as a SysAdmin, self-hosting the backend \
             environment via Docker to ensure strict data privacy and compliance.",
        ],
    },
    Project {
        id: 6,
        name: "Freelance Projects",
        role: "Full Stack Developer",
        desc: "Delivered diverse software solutions including mobile apps built with \
               Flutter/Dart and web applications using React, Python (Django/Flask), \
               and PHP.",
        tags: &["Flutter", "Dart", "React", "Python", "Django", "Flask", "PHP"],
        color: "rgba(6, 182, 212, 0.2)",
        icon: None,
        date_range: "August 2019 – February 2021",
        achievements: &[
            "Delivered diverse software solutions for multiple clients across various \
             industries.",
            "Built mobile applications using Flutter/Dart.",
            "Developed web applications using React, Python (Django/Flask), and PHP.",
        ],
    },
];

pub fn project(project_id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == project_id)
}

/// Detail text for a project notepad window. Produced once when the window
/// is created and stored on it verbatim.
pub fn project_content(project_id: u32) -> String {
    let Some(project) = project(project_id) else {
        return String::new();
    };

    let mut text = format!(
        "{}\nRole: {} | {}\n\n{}\n\nKey Achievements:\n",
        project.name, project.role, project.date_range, project.desc
    );
    for achievement in project.achievements {
        text.push_str("  • ");
        text.push_str(achievement);
        text.push('\n');
    }
    text.push_str("\nTechnologies: ");
    text.push_str(&project.tags.join(", "));
    text.push('\n');
    text
}

pub const WELCOME_TEXT: &str = "\
Hi there! 👋

I'm a Software Engineer with a passion for building anything, and everything.

I love turning complex problems into simple, beautiful, and intuitive bits of \
code. When I'm not coding, you can find me exploring new tech, gaming, or raving.

Feel free to browse \"Syntwave OS\" to learn more about my work!

Here are some fun facts about me:
  • Lived in 2 different countries
  • Have a cat named Whiskey because I like whisky
  • Love Synthwave and techno music
";

pub const CREDITS_TEXT: &str = "\
Credits

Background video: The Drive - 12 Hours - 4K Ultra HD 60fps
by VISUALDON
https://www.youtube.com/watch?v=rqJDO3TWnac

This portfolio was built with:
  • Rust
  • Dioxus
  • WebAssembly
  • gloo
  • fuzzy-matcher

Special thanks to all the open-source contributors!
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_is_the_segment_before_the_dash() {
        assert_eq!(project(3).unwrap().company(), "KogeFarm");
        assert_eq!(project(3).unwrap().window_title(), "KogeFarm.txt");
        // No dash: the whole name stands in.
        assert_eq!(project(6).unwrap().company(), "Freelance Projects");
    }

    #[test]
    fn project_content_carries_role_achievements_and_tags() {
        let text = project_content(1);
        assert!(text.contains("Role: CTO | December 2024 – October 2025"));
        assert!(text.contains("Key Achievements:"));
        assert!(text.contains("Prometheus, Loki, and Grafana"));
        assert!(text.contains("Technologies: Next.js, React Native"));
    }

    #[test]
    fn unknown_project_renders_empty() {
        assert!(project_content(99).is_empty());
    }
}
