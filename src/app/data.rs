//! Compiled-in page content. Everything here is immutable static data;
//! the sections render it directly and nothing mutates it at runtime.

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink {
        name: "Home",
        href: "#home",
    },
    NavLink {
        name: "About",
        href: "#about",
    },
    NavLink {
        name: "Skills",
        href: "#skills",
    },
    NavLink {
        name: "Experience",
        href: "#experience",
    },
    NavLink {
        name: "Projects",
        href: "#projects",
    },
    NavLink {
        name: "Contact",
        href: "#contact",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    /// devicon class rendered as `<i class=...>`
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        url: "https://github.com/dipayan1506",
        icon: "devicon-github-original",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/dipayan-debnath-50655b24a/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Twitter",
        url: "https://twitter.com",
        icon: "devicon-twitter-original",
    },
];

pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1dG2ChnRNUU2dnsXSUiMFnvGc9HQ5VBFz/view?usp=sharing";

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub logo: &'static str,
}

/// Closed set of skill groups. The tabs render exactly these variants,
/// so an unknown category is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Programming,
    Web3,
    Tools,
    Database,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Programming,
        SkillCategory::Web3,
        SkillCategory::Tools,
        SkillCategory::Database,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Programming => "Programming",
            SkillCategory::Web3 => "Web3",
            SkillCategory::Tools => "Tools",
            SkillCategory::Database => "Database",
        }
    }

    pub fn skills(self) -> &'static [Skill] {
        match self {
            SkillCategory::Frontend => &FRONTEND_SKILLS,
            SkillCategory::Backend => &BACKEND_SKILLS,
            SkillCategory::Programming => &PROGRAMMING_SKILLS,
            SkillCategory::Web3 => &WEB3_SKILLS,
            SkillCategory::Tools => &TOOLS_SKILLS,
            SkillCategory::Database => &DATABASE_SKILLS,
        }
    }
}

macro_rules! devicon {
    ($name:literal, $path:literal) => {
        Skill {
            name: $name,
            logo: concat!(
                "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/",
                $path
            ),
        }
    };
}

macro_rules! devicon_latest {
    ($name:literal, $path:literal) => {
        Skill {
            name: $name,
            logo: concat!(
                "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/",
                $path
            ),
        }
    };
}

static FRONTEND_SKILLS: [Skill; 9] = [
    devicon!("React", "react/react-original.svg"),
    devicon_latest!("Next.js", "nextjs/nextjs-original.svg"),
    devicon_latest!("Redux", "redux/redux-original.svg"),
    devicon!("JavaScript", "javascript/javascript-original.svg"),
    devicon!("TypeScript", "typescript/typescript-original.svg"),
    devicon!("HTML5", "html5/html5-original.svg"),
    devicon!("CSS3", "css3/css3-original.svg"),
    devicon_latest!("Tailwind", "tailwindcss/tailwindcss-original.svg"),
    devicon_latest!("Bootstrap", "bootstrap/bootstrap-original.svg"),
];

static BACKEND_SKILLS: [Skill; 4] = [
    devicon!("Node.js", "nodejs/nodejs-original.svg"),
    devicon!("Express", "express/express-original.svg"),
    devicon_latest!("GraphQL", "graphql/graphql-plain.svg"),
    devicon_latest!("Nest", "nestjs/nestjs-original.svg"),
];

static PROGRAMMING_SKILLS: [Skill; 5] = [
    devicon_latest!("C++", "cplusplus/cplusplus-original.svg"),
    devicon!("JavaScript", "javascript/javascript-original.svg"),
    devicon!("TypeScript", "typescript/typescript-original.svg"),
    devicon!("Python", "python/python-original.svg"),
    devicon_latest!("Go", "go/go-original.svg"),
];

static WEB3_SKILLS: [Skill; 5] = [
    devicon_latest!("Solidity", "solidity/solidity-original.svg"),
    Skill {
        name: "Hardhat",
        logo: "https://cdn.jsdelivr.net/gh/PKief/vscode-material-icon-theme@main/icons/hardhat.svg",
    },
    Skill {
        name: "Ethers.js",
        logo: "https://cdn.jsdelivr.net/gh/chainstack/assets@main/images/logos/ethers.png",
    },
    Skill {
        name: "Metamask",
        logo: "https://cdn.jsdelivr.net/gh/MetaMask/brand-resources@master/SVG/metamask-fox.svg",
    },
    devicon_latest!("IPFS", "ipfs/ipfs-original.svg"),
];

static TOOLS_SKILLS: [Skill; 4] = [
    devicon!("Git", "git/git-original.svg"),
    devicon!("VS Code", "vscode/vscode-original.svg"),
    devicon!("Docker", "docker/docker-original.svg"),
    devicon!("Webpack", "webpack/webpack-original.svg"),
];

static DATABASE_SKILLS: [Skill; 4] = [
    devicon!("MongoDB", "mongodb/mongodb-original.svg"),
    devicon!("PostgreSQL", "postgresql/postgresql-original.svg"),
    devicon!("MySQL", "mysql/mysql-original.svg"),
    devicon_latest!("Prisma", "prisma/prisma-original.svg"),
];

/// Labels floating in the decorative skills cloud.
pub const CLOUD_WORDS: [&str; 15] = [
    "React",
    "JavaScript",
    "TypeScript",
    "HTML",
    "CSS",
    "Tailwind",
    "Node.js",
    "Three.js",
    "Express",
    "MongoDB",
    "Git",
    "Figma",
    "UI/UX",
    "Responsive",
    "REST API",
];

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCES: [ExperienceEntry; 2] = [
    ExperienceEntry {
        title: "Full Stack Developer",
        company: "Build My Guild",
        period: "Nov 2024 - Feb 2025",
        location: "Remote",
        highlights: &[
            "Contributed to the development of a Memecoin launchpad supporting both EVM and Non-EVM chains",
            "Developed a Decentralised Escrow Solution with smart contracts and integrated it with the frontend and backend",
        ],
    },
    ExperienceEntry {
        title: "Blockchain Developer Intern",
        company: "HyDRAULIC",
        period: "Jun 2024 - Nov 2024",
        location: "Remote",
        highlights: &[
            "Developed smart contracts and the tech infrastructure for tokenizing Intellectual Property as on-chain NFTs",
            "Created an IP financing marketplace enabling IP loans and sales to SMEs globally",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Web,
    Blockchain,
}

/// Filter key for the project grid. `All` is the identity projection;
/// a category selects exactly the matching entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    pub const ALL_FILTERS: [ProjectFilter; 3] = [
        ProjectFilter::All,
        ProjectFilter::Category(ProjectCategory::Web),
        ProjectFilter::Category(ProjectCategory::Blockchain),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Category(ProjectCategory::Web) => "Web Apps",
            ProjectFilter::Category(ProjectCategory::Blockchain) => "Blockchain",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(category) => project.category == category,
        }
    }
}

#[derive(Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    pub live_url: &'static str,
    pub source_url: &'static str,
    pub details: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "Chatting Application",
        category: ProjectCategory::Web,
        image: "https://images.pexels.com/photos/7014766/pexels-photo-7014766.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &[
            "React.js",
            "JavaScript",
            "Tailwind CSS",
            "MongoDB",
            "Express.js",
            "Node.js",
            "Socket.io",
        ],
        description: "Real-time chatting platform with secure user authentication and instant messaging capabilities.",
        live_url: "https://example.com",
        source_url: "https://github.com/dipayan1506/chat-app",
        details: "Built a real-time chatting platform that supports user registration, login, and secure real-time communication, allowing multiple users to engage in instantaneous conversations on a responsive, cross-device interface. Integrated robust authentication using JWT and bcrypt for hashing passwords, ensuring secure data storage and user privacy. Utilized MongoDB for efficient storage of chat histories and user data.",
    },
    Project {
        id: 2,
        title: "Decentralized Arbitration System",
        category: ProjectCategory::Blockchain,
        image: "https://images.pexels.com/photos/8370752/pexels-photo-8370752.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &[
            "Next.js",
            "Solidity",
            "Hardhat",
            "TypeScript",
            "Tailwind CSS",
            "JavaScript",
        ],
        description: "A blockchain-based platform for secure and transparent dispute resolution.",
        live_url: "https://example.com",
        source_url: "https://github.com/dipayan1506/Decentralised-Arbiteration-System",
        details: "Built a decentralized platform allowing clients to create disputes and enabling jury members to stake tokens, ensuring fair and secure dispute resolution through blockchain. Implemented a weighted random selection mechanism for jury selection and voting, achieving decentralized and transparent decision-making in a secure manner.",
    },
    Project {
        id: 3,
        title: "Cloth Shop Site",
        category: ProjectCategory::Web,
        image: "https://images.pexels.com/photos/5632402/pexels-photo-5632402.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &[
            "React.js",
            "JavaScript",
            "Tailwind CSS",
            "MongoDB",
            "Express.js",
            "Node.js",
        ],
        description: "Full-featured e-commerce platform with secure payment integration.",
        live_url: "https://example.com",
        source_url: "https://github.com",
        details: "Designed and developed a full-featured e-commerce platform with user registration, a dynamic product marketplace, and secure payment integration, allowing users to browse, add to cart, and complete transactions seamlessly. Enhanced performance, optimized load times, ensured smooth user experience, and secured authentication.",
    },
];

/// Pure projection of the static project list. `All` preserves the
/// original order; a category key returns only its own entries.
pub fn filter_projects(filter: ProjectFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_returns_full_list_in_order() {
        let all = filter_projects(ProjectFilter::All);
        assert_eq!(all.len(), PROJECTS.len());
        let ids = all.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn category_filters_return_only_matching_projects() {
        let web = filter_projects(ProjectFilter::Category(ProjectCategory::Web));
        assert!(!web.is_empty());
        assert!(web.iter().all(|p| p.category == ProjectCategory::Web));
        assert_eq!(web.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

        let chain = filter_projects(ProjectFilter::Category(ProjectCategory::Blockchain));
        assert!(chain.iter().all(|p| p.category == ProjectCategory::Blockchain));
        assert_eq!(chain.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn category_filters_partition_the_project_list() {
        let web = filter_projects(ProjectFilter::Category(ProjectCategory::Web));
        let chain = filter_projects(ProjectFilter::Category(ProjectCategory::Blockchain));
        assert_eq!(web.len() + chain.len(), PROJECTS.len());
    }

    #[test]
    fn every_rendered_skill_category_has_skills() {
        for category in SkillCategory::ALL {
            assert!(
                !category.skills().is_empty(),
                "empty skill group for {:?}",
                category
            );
        }
    }

    #[test]
    fn skill_logos_are_absolute_urls() {
        for category in SkillCategory::ALL {
            for skill in category.skills() {
                assert!(skill.logo.starts_with("https://"), "{}", skill.name);
            }
        }
    }

    #[test]
    fn nav_links_target_in_page_anchors() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'));
        }
    }
}
