//! The static record every panel renders from.

#[derive(Debug, Clone, Copy)]
pub struct Profile {
  pub name: &'static str,
  pub handle: &'static str,
  /// Tagline printed inside the banner
  pub headline: &'static str,
  pub bio: &'static str,
  pub links: Links,
  pub education: Education,
  pub experience: &'static [Experience],
  pub projects: &'static [Project],
  pub achievements: &'static [Achievement],
  pub skills: Skills,
}

#[derive(Debug, Clone, Copy)]
pub struct Links {
  pub email: &'static str,
  pub resume: &'static str,
  pub website: &'static str,
  pub github: &'static str,
  pub linkedin: &'static str,
  pub stackoverflow: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
  pub degree: &'static str,
  pub institution: &'static str,
  pub cgpa: &'static str,
  pub period: &'static str,
  pub remark: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
  pub company: &'static str,
  pub role: &'static str,
  pub period: &'static str,
  pub location: &'static str,
  pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
  pub name: &'static str,
  pub description: &'static str,
  pub tech: &'static str,
  pub achievement: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
  pub title: &'static str,
  pub detail: &'static str,
}

/// Skills grouped into ordered, named categories
#[derive(Debug, Clone, Copy)]
pub struct Skills {
  pub categories: &'static [SkillCategory],
  pub problem_solving: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
  pub name: &'static str,
  pub items: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
  name: "Harsh Anand",
  handle: "@devHarsh01",
  headline: "Software Engineer & Tech Enthusiast",
  bio: "Engineering elegant solutions in a world full of messy problems.",
  links: Links {
    email: "itsmeharsh.nitp@gmail.com",
    resume: "https://drive.google.com/drive/folders/1SYFLyxlmzjUuRMiUayyWzMxr_Z167C8_?usp=sharing",
    website: "http://devharshnitp.vercel.app",
    github: "https://github.com/its-me-Harsh-Anand",
    linkedin: "https://www.linkedin.com/in/devHarsh01",
    stackoverflow: "https://stackoverflow.com/users/17401920/harsh-anand",
  },
  education: Education {
    degree: "B.Tech, Electronics and Communication Engineering",
    institution: "National Institute of Technology Patna",
    cgpa: "8.33",
    period: "June 2020 - June 2024",
    remark: "Graduated from one of India's premier technical institutes",
  },
  experience: &[
    Experience {
      company: "Info Edge (Naukri)",
      role: "Software Engineer",
      period: "Dec 2024 - Present",
      location: "Noida",
      highlights: &[
        "Revamped Naukri Campus Resdex search for 30L+ profiles; improved query performance by 40%",
        "Owned FN services (Resdex, Campus) end-to-end development, testing, and deployment",
        "Built Jobseeker Data Coherence Service with anomaly detection systems",
        "Delivered NG Resdex tagging with Elasticsearch cluster and Kafka pipeline",
        "Developed Kubernetes tooling (5000+ uses) boosting operational productivity",
      ],
    },
    Experience {
      company: "o9 Solutions",
      role: "Technical Consultant Intern + FTE",
      period: "Jan 2024 - Nov 2024",
      location: "Bangalore",
      highlights: &[
        "Collaborated with clients (Barry Callebaut, Pepsico, Natura & Co., Loreal)",
        "Increased planning efficiency by 20% via custom Python and JavaScript plugins",
        "Worked on 5 key initiatives with end-to-end testing and 30+ test cases",
      ],
    },
    Experience {
      company: "Texas Instruments",
      role: "Application Developer Intern",
      period: "May 2023 - July 2023",
      location: "Bangalore",
      highlights: &[
        "Led automation initiatives serving 100K+ customers, reducing manual requests by 40%",
        "Fortified system security, reducing server bandwidth by 25%",
        "Designed 5+ Splunk alerts and automated 3 scripts through Jenkins",
      ],
    },
  ],
  projects: &[
    Project {
      name: "NITP Web",
      description: "Led full-stack development of NIT Patna's official website (4,000+ daily users)",
      tech: "Next.js, Gatsby.js, Node.js, SQL, GraphQL, GOCD",
      achievement: Some("Received Institute Day Gratitude (2023) award"),
    },
    Project {
      name: "Loan Website",
      description: "Full-stack loan management platform with OTP authentication and automated PDF generation",
      tech: "React, Node.js, MongoDB, Twilio API, Nodemailer",
      achievement: None,
    },
    Project {
      name: "Open Source Contributions",
      description: "Contributed to 4+ major repositories (Codedamn, Eduhub, Octokit Lite)",
      tech: "React, Node.js, Git, REST APIs",
      achievement: Some("Built guided projects for 150+ learners"),
    },
  ],
  achievements: &[
    Achievement {
      title: "NPTEL - Joy of Computing using Python",
      detail: "Gold + Elite (95%), Top 2% among 10,000+ applicants (June 2023)",
    },
    Achievement {
      title: "HacktoberFest Contributor (2022)",
      detail: "Contributed to Codedamn, Eduhub, Octokit Lite, AirQo projects",
    },
    Achievement {
      title: "NPTEL - Programming in Modern C++",
      detail: "Silver + Elite (87%), Top 13 among 12,000+ applicants (June 2022)",
    },
    Achievement {
      title: "GWOC Contributor (2021)",
      detail: "Specialized in JavaScript, Frontend Development, and Open Source",
    },
    Achievement {
      title: "Problem Solving",
      detail: "LeetCode: 600+ problems (Top 10%) | GFG: 300+ problems",
    },
  ],
  skills: Skills {
    categories: &[
      SkillCategory { name: "Languages", items: &["Java", "JavaScript (ES6+)", "Python", "C/C++"] },
      SkillCategory {
        name: "Frameworks & Libraries",
        items: &["NodeJS", "ExpressJS", "React", "Next.JS"],
      },
      SkillCategory { name: "Databases & Search", items: &["Elasticsearch", "MongoDB", "MySQL"] },
      SkillCategory {
        name: "Developer Tools",
        items: &["Kibana", "Postman", "SQL Workbench", "VS Code", "IntelliJ IDEA"],
      },
      SkillCategory {
        name: "Infrastructure & DevOps",
        items: &["Docker", "Kubernetes", "NGINX", "Linux"],
      },
    ],
    problem_solving: &["LeetCode: 600+ problems (Top 10%)", "GFG: 300+ problems"],
  },
};
