/*!
 * 作品集静态内容生产者
 *
 * 每个命令对应一个零参数（或只依赖配置）的生产者函数，
 * 返回展示层无关的 RenderableContent。这里只有惰性数据，
 * 没有行为。
 */

use chrono::Local;

use crate::commands::registry::PortfolioCommand;
use crate::config::{OwnerConfig, SocialConfig};
use crate::terminal::types::{OutputLine, OutputSpan, RenderableContent, TextTone};

/// 欢迎横幅（启动时作为首条转录条目）
pub fn welcome() -> RenderableContent {
    RenderableContent::empty()
        .with_line(OutputLine::plain(
            TextTone::Heading,
            "Welcome to my Interactive Portfolio Terminal!",
        ))
        .with_blank()
        .with_line(
            OutputLine::new()
                .with_span(OutputSpan::body("Type "))
                .with_span(OutputSpan::accent("'help'"))
                .with_span(OutputSpan::body(" to see available commands.")),
        )
        .with_line(OutputLine::plain(
            TextTone::Body,
            "Use arrow keys to navigate command history.",
        ))
        .with_blank()
        .with_line(OutputLine::plain(
            TextTone::Muted,
            format!("Last login: {}", Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p")),
        ))
}

/// help：可用命令列表
pub fn help() -> RenderableContent {
    let mut content = RenderableContent::empty()
        .with_line(OutputLine::plain(TextTone::Heading, "Available Commands:"))
        .with_blank();

    for command in PortfolioCommand::ALL {
        content.push_line(
            OutputLine::new()
                .with_span(OutputSpan::accent(command.name()))
                .with_span(OutputSpan::body(format!(" - {}", command.description()))),
        );
    }

    content
}

/// sudo：关于我
pub fn about(owner: &OwnerConfig) -> RenderableContent {
    RenderableContent::empty()
        .with_line(OutputLine::plain(TextTone::Heading, "About Me"))
        .with_blank()
        .with_line(OutputLine::plain(
            TextTone::Body,
            format!(
                "Hello! I'm {} passionate Full Stack Developer with expertise in modern web technologies.",
                owner.name
            ),
        ))
}

/// 技能分组
struct SkillGroup {
    title: &'static str,
    items: &'static [&'static str],
}

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Programming Languages",
        items: &["Python", "JavaScript (ES6+)", "TypeScript", "SQL", "Java"],
    },
    SkillGroup {
        title: "Frontend",
        items: &["React.js", "HTML5 / CSS3", "Tailwind CSS", "Redux", "Context API"],
    },
    SkillGroup {
        title: "Backend",
        items: &[
            "Node.js",
            "Express.js",
            "Firebase (Firestore, OAuth, MFA)",
            "Web Sockets",
        ],
    },
    SkillGroup {
        title: "Databases",
        items: &["MongoDB", "SQL", "Firebase Realtime DB", "DBMS"],
    },
    SkillGroup {
        title: "Tools & Platforms",
        items: &[
            "AWS (EC2, S3, IAM)",
            "Git / GitHub",
            "Figma",
            "VS Code",
            "Chrome DevTools",
        ],
    },
    SkillGroup {
        title: "Development Practices",
        items: &["RESTful APIs", "Agile Development", "Component-Based Architecture"],
    },
];

/// skills：技术技能
pub fn skills() -> RenderableContent {
    let mut content = RenderableContent::empty()
        .with_line(OutputLine::plain(TextTone::Heading, "Technical Skills"));

    for group in SKILL_GROUPS {
        content.push_line(OutputLine::new());
        content.push_line(OutputLine::plain(TextTone::Accent, group.title));
        for item in group.items {
            content.push_line(OutputLine::plain(TextTone::Body, format!("• {}", item)));
        }
    }

    content
}

/// 项目条目
struct Project {
    name: &'static str,
    description: &'static str,
    stack: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "Portfolio website",
        description: "A personal portfolio website built with React and TypeScript, featuring an \
                      interactive terminal interface for exploring my skills, projects, and \
                      experience in a unique and engaging way.",
        stack: "React • TypeScript • Tailwind CSS • Render • Three.js",
    },
    Project {
        name: "CareerFit-AI",
        description: "Developed an AI-powered job fit assessment tool that evaluates resume \
                      compatibility with job descriptions using natural language processing, \
                      providing fit percentage scores and actionable improvement suggestions.",
        stack: "Python • Streamlit • LangChain • Google Gemini AI",
    },
    Project {
        name: "Shopify Plus",
        description: "Created a Node.js-based application to enhance the e-commerce experience, \
                      supporting features such as file handling for sellers, session management, \
                      token-based authentication, and automated PDF invoice generation.",
        stack: "React • Node.js • MongoDB • Express • EJS • JWT",
    },
    Project {
        name: "PDF-Summarizer",
        description: "PDF Summarizer lets users upload PDFs, select pages, and quickly generate \
                      concise summaries or answer questions using advanced NLP, making it easy to \
                      extract key information from documents.",
        stack: "Python • Streamlit • PyPDF2 • Langchain • Hugging Face Transformers • OpenAI API",
    },
    Project {
        name: "Lachoo Connect",
        description: "Lachoo Connect is a React and Firebase-based alumni app for Lachoo Memorial \
                      College, enabling alumni to connect, network, share experiences, and stay \
                      updated on each other's professional journeys.",
        stack: "HTML • CSS • JavaScript • Bootstrap • React",
    },
];

/// projects：精选项目
pub fn projects() -> RenderableContent {
    let mut content = RenderableContent::empty()
        .with_line(OutputLine::plain(TextTone::Heading, "Featured Projects"));

    for project in PROJECTS {
        content.push_line(OutputLine::new());
        content.push_line(OutputLine::plain(TextTone::Accent, project.name));
        content.push_line(OutputLine::plain(TextTone::Body, project.description));
        content.push_line(OutputLine::plain(TextTone::Muted, project.stack));
    }

    content
}

/// education：教育背景
pub fn education() -> RenderableContent {
    RenderableContent::empty()
        .with_line(OutputLine::plain(TextTone::Heading, "Education"))
        .with_blank()
        .with_line(OutputLine::plain(
            TextTone::Accent,
            "Masters of Computer Application (MCA)",
        ))
        .with_line(OutputLine::plain(
            TextTone::Body,
            "VELLORE INSTITUTE OF TECHNOLOGY, VELLORE",
        ))
        .with_line(OutputLine::plain(TextTone::Muted, "CGPA: 8.68 (2023-2025)"))
        .with_blank()
        .with_line(OutputLine::plain(
            TextTone::Accent,
            "Bachelor of Computer Application (BCA)",
        ))
        .with_line(OutputLine::plain(
            TextTone::Body,
            "LACHOO MEMORIAL COLLEGE, JODHPUR",
        ))
        .with_line(OutputLine::plain(TextTone::Muted, "CGPA: 7.8 (2020-2023)"))
        .with_blank()
        .with_line(OutputLine::plain(
            TextTone::Accent,
            "Senior Secondary Education (12th Grade)",
        ))
        .with_line(OutputLine::plain(TextTone::Body, "CBSE • 2018"))
        .with_line(OutputLine::plain(TextTone::Muted, "GPA: 92.4%"))
        .with_blank()
        .with_line(OutputLine::plain(TextTone::Accent, "Certifications"))
        .with_line(OutputLine::plain(
            TextTone::Body,
            "• NVIDIA Deep Learning Institute Certificate",
        ))
        .with_line(OutputLine::plain(
            TextTone::Body,
            "• Career Essentials in Generative AI by Microsoft and LinkedIn",
        ))
}

/// experience：工作经历
pub fn experience() -> RenderableContent {
    RenderableContent::empty()
        .with_line(OutputLine::plain(TextTone::Heading, "Work Experience"))
        .with_blank()
        .with_line(OutputLine::plain(TextTone::Accent, "Frontend Developer"))
        .with_line(
            OutputLine::new()
                .with_span(OutputSpan::body(
                    "Datasigns Technologies Pvt Ltd. (A Ugro Capital Company), Bengaluru ",
                ))
                .with_span(OutputSpan::muted("• (July 2024 – Present)")),
        )
        .with_line(OutputLine::plain(
            TextTone::Muted,
            "• Built and maintained scalable business dashboards with modern frontend tech, \
             improving data visibility and user engagement.",
        ))
        .with_line(OutputLine::plain(
            TextTone::Muted,
            "• Migrated legacy code to functional components, boosting performance by 65%.",
        ))
        .with_line(OutputLine::plain(
            TextTone::Muted,
            "• Integrated RESTful APIs and optimized state management for real-time UI updates.",
        ))
        .with_line(OutputLine::plain(
            TextTone::Muted,
            "• Collaborated with product teams to deliver client-focused features in an Agile \
             environment.",
        ))
        .with_line(OutputLine::plain(
            TextTone::Muted,
            "• Gained strong fintech domain knowledge to align technical solutions with business \
             needs.",
        ))
}

/// contact：联系方式
pub fn contact(owner: &OwnerConfig) -> RenderableContent {
    RenderableContent::empty()
        .with_line(OutputLine::plain(TextTone::Heading, "Contact Information"))
        .with_blank()
        .with_line(
            OutputLine::new()
                .with_span(OutputSpan::accent("Email: "))
                .with_span(OutputSpan::body(owner.email.clone())),
        )
        .with_line(
            OutputLine::new()
                .with_span(OutputSpan::accent("Phone: "))
                .with_span(OutputSpan::body(owner.phone.clone())),
        )
        .with_blank()
        .with_line(OutputLine::plain(
            TextTone::Muted,
            "Feel free to reach out! I'm always open to discussing new opportunities or \
             interesting projects.",
        ))
}

/// social：社交链接
pub fn social(social: &SocialConfig) -> RenderableContent {
    RenderableContent::empty()
        .with_line(OutputLine::plain(TextTone::Heading, "Social Links"))
        .with_blank()
        .with_line(
            OutputLine::new()
                .with_span(OutputSpan::accent("GitHub: "))
                .with_span(OutputSpan::body(social.github.clone())),
        )
        .with_line(
            OutputLine::new()
                .with_span(OutputSpan::accent("LinkedIn: "))
                .with_span(OutputSpan::body(social.linkedin.clone())),
        )
        .with_line(
            OutputLine::new()
                .with_span(OutputSpan::accent("Bio Link: "))
                .with_span(OutputSpan::body(social.biolink.clone())),
        )
}

/// resume：下载提示
pub fn resume_notice() -> RenderableContent {
    RenderableContent::empty()
        .with_line(OutputLine::plain(TextTone::Heading, "Resume"))
        .with_blank()
        .with_line(OutputLine::plain(
            TextTone::Body,
            "Resume download initiated..., the file will be saved to your download directory.",
        ))
}

/// exit：会话结束提示
pub fn exit_notice() -> RenderableContent {
    RenderableContent::empty().with_line(OutputLine::plain(TextTone::Body, "Session ended."))
}

/// 未知命令提示，回显用户的原始输入
pub fn not_found(raw_input: &str) -> RenderableContent {
    RenderableContent::empty().with_line(OutputLine::plain(
        TextTone::Error,
        format!(
            "Command not found: {}. Type 'help' for available commands.",
            raw_input
        ),
    ))
}
