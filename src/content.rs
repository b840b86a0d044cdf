//! Static portfolio content rendered by the page sections.

pub struct PersonalInfo {
    pub short_name: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub about: &'static [&'static str],
    pub stats: &'static [Stat],
}

impl PersonalInfo {
    pub fn github_url(&self) -> String {
        format!("https://{}", self.github)
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://{}", self.linkedin)
    }
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub struct SkillCategory {
    pub category: &'static str,
    pub items: &'static [Skill],
}

pub struct Experience {
    pub company: &'static str,
    pub location: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub contributions: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub year: &'static str,
    pub technologies: &'static [&'static str],
    pub details: &'static [&'static str],
}

impl Project {
    /// Lead sentence shown under the title.
    pub fn description(&self) -> &'static str {
        self.details.first().copied().unwrap_or_default()
    }
}

pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub field: &'static str,
    pub cgpa: &'static str,
    pub period: &'static str,
    pub coursework: &'static [&'static str],
}

pub struct Certification {
    pub institution: &'static str,
    pub description: &'static str,
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    short_name: "Tushar Patil",
    name: "Tushar Nana Patil",
    role: "React / React Native / MERN Developer",
    email: "tusharpatil21324@gmail.com",
    phone: "9518914454",
    github: "github.com/TusharN-Patil",
    linkedin: "linkedin.com/in/tusharpatil1702",
    location: "Pune, Maharashtra, India",
    summary: "MERN Stack Developer with 2+ years of hands-on experience specializing in building scalable, reusable, and testable components. Passionate about creating seamless user experiences across web and mobile platforms.",
    about: &[
        "MERN Stack Developer with over 2 years of hands-on experience in building scalable web and mobile applications. I specialize in creating performant, reusable, and maintainable code that delivers exceptional user experiences.",
        "My expertise lies in React.js and React Native, with a strong focus on performance optimization using advanced hooks like useMemo and useCallback. I have successfully delivered production-ready applications in the E-commerce and Healthcare domains.",
        "My approach combines clean code principles with modern development practices, ensuring that every project I work on is not only functional but also scalable and maintainable for the long term.",
    ],
    stats: &[
        Stat { value: "2+", label: "Years of Experience" },
        Stat { value: "10+", label: "Projects Completed" },
        Stat { value: "15+", label: "Technologies" },
        Stat { value: "5+", label: "Happy Clients" },
    ],
};

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        category: "Frontend Development",
        items: &[
            Skill { name: "React.js", icon: "⚛️" },
            Skill { name: "React Native", icon: "📱" },
            Skill { name: "JavaScript", icon: "🟨" },
            Skill { name: "HTML5", icon: "🔷" },
            Skill { name: "CSS3", icon: "💎" },
            Skill { name: "Tailwind CSS", icon: "🌊" },
        ],
    },
    SkillCategory {
        category: "Backend Development",
        items: &[
            Skill { name: "Node.js", icon: "🟢" },
            Skill { name: "Express.js", icon: "⚡" },
            Skill { name: "REST APIs", icon: "🔌" },
        ],
    },
    SkillCategory {
        category: "Database & Tools",
        items: &[
            Skill { name: "MongoDB", icon: "🍃" },
            Skill { name: "Sequelize / SQL", icon: "🗄️" },
            Skill { name: "React Query", icon: "🔄" },
            Skill { name: "Git", icon: "🔧" },
        ],
    },
];

pub const WORK_EXPERIENCE: &[Experience] = &[Experience {
    company: "SpidronTech LLP",
    location: "Pune, Maharashtra",
    role: "Associate Software Engineer",
    period: "Nov 2023 - Dec 2025",
    contributions: &[
        "Designed scalable and reusable UI components, reducing development time by 25% and improving maintainability across React Native projects.",
        "Accelerated cross-platform mobile app development by 50% through optimized component architecture and clean coding practices.",
        "Integrated RESTful APIs and optimized backend logic using Node.js, Express.js, MongoDB, and SQL, improving application reliability by 40%.",
        "Managed complete Android and iOS deployment processes including APK/AAB generation, Play Store publishing, App Store Connect uploads, and TestFlight releases.",
        "Utilized AI tools such as Cursor AI and Agentic AI to automate workflows and improve debugging efficiency.",
        "Improved performance and code quality through profiling, optimization, and structured code reviews.",
    ],
}];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Sports Activity Social Networking Application",
        year: "2024",
        technologies: &[
            "React Native",
            "Redux Toolkit",
            "TypeScript",
            "Node.js",
            "Express.js",
            "MongoDB",
            "Firebase",
            "PHP (Laravel)",
        ],
        details: &[
            "Developed a sports and events social platform serving users aged 16-90.",
            "Increased user engagement by 30% through interactive UI and activity-based features.",
            "Integrated backend APIs to improve responsiveness and overall application performance.",
        ],
    },
    Project {
        title: "Online Food Delivery Marketplace for Collectibles",
        year: "2024",
        technologies: &[
            "React Native",
            "Redux Toolkit",
            "Node.js",
            "Express.js",
            "MongoDB",
            "Firebase",
        ],
        details: &[
            "Built a high-performance e-commerce mobile application for selling collectibles.",
            "Improved platform reliability and performance by 35% through optimized workflows.",
            "Implemented secure multi-payment options and dynamic product management.",
        ],
    },
    Project {
        title: "Calendar Web Application",
        year: "2025",
        technologies: &[
            "React.js",
            "Redux Toolkit",
            "TypeScript",
            "Node.js",
            "Express.js",
            "MongoDB",
        ],
        details: &[
            "Developed a business-focused calendar application to manage projects end-to-end.",
            "Integrated multiple calendar platforms into a unified system.",
            "Enhanced productivity and task tracking, improving user experience by 40%.",
        ],
    },
    Project {
        title: "HRMS Mobile Application",
        year: "2025",
        technologies: &[
            "React Native",
            "Redux Toolkit",
            "Node.js",
            "Express.js",
            "MongoDB",
            "Firebase",
        ],
        details: &[
            "Built an HR automation platform for attendance, payroll, timesheets, and reporting.",
            "Reduced manual errors by 60% and increased attendance accuracy to 95%.",
            "Improved overall application efficiency by 30% through performance optimization.",
        ],
    },
];

/// Number of projects shown in the Projects section.
pub const FEATURED_PROJECT_COUNT: usize = 2;

pub fn featured_projects() -> &'static [Project] {
    &PROJECTS[..FEATURED_PROJECT_COUNT.min(PROJECTS.len())]
}

pub const EDUCATION: Education = Education {
    institution: "N.I.T.M.S College, Nagpur University",
    degree: "Bachelor of Computer Applications (BCA)",
    field: "Computer Science",
    cgpa: "7.10/10",
    period: "Aug 2020 - Jun 2023",
    coursework: &[
        "Object-Oriented Programming",
        "Databases",
        "Data Structures and Algorithms",
        "Operating Systems",
        "Computer Networks",
        "Advanced Data Structures",
        "Project Planning and Management",
    ],
};

pub const CERTIFICATION: Certification = Certification {
    institution: "JSpiders & QSpiders - Software Development Training Institute, Pune",
    description: "Completed Full Stack Development training with hands-on experience in modern web and mobile technologies, real-world projects, and collaborative software development practices.",
};

pub const PROFILE_IMAGE: &str = "/profile.png";
pub const RESUME_PDF: &str = "/resume.pdf";
pub const RESUME_FILE_NAME: &str = "Tushar_Patil_Resume.pdf";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_projects() {
        let featured = featured_projects();
        assert_eq!(featured.len(), 2);
        assert_eq!(featured[0].title, PROJECTS[0].title);
        assert_eq!(
            featured[1].description(),
            "Built a high-performance e-commerce mobile application for selling collectibles."
        );
    }

    #[test]
    fn test_social_urls() {
        assert_eq!(PERSONAL_INFO.github_url(), "https://github.com/TusharN-Patil");
        assert_eq!(
            PERSONAL_INFO.linkedin_url(),
            "https://linkedin.com/in/tusharpatil1702"
        );
    }

    #[test]
    fn test_content_is_populated() {
        assert_eq!(PERSONAL_INFO.stats.len(), 4);
        assert_eq!(SKILLS.len(), 3);
        assert!(SKILLS.iter().all(|c| !c.items.is_empty()));
        assert!(WORK_EXPERIENCE.iter().all(|e| !e.contributions.is_empty()));
        assert!(PROJECTS.iter().all(|p| !p.details.is_empty()));
    }
}
