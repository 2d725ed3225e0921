//! Static content records driving the presentational sections.
//!
//! Every section is a pure function of these tables plus the resolved
//! theme; editing the site means editing this file, not the components.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Biographical and contact details shown across the site.
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub availability_detail: &'static str,
    pub cv_href: &'static str,
    pub cv_file_name: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Sourov Dash",
    role: "Junior MERN Stack Developer",
    tagline: "I build clean, responsive web experiences and I am actively seeking \
              opportunities to grow and contribute to meaningful projects.",
    email: "sourovmmoysanju@gmail.com",
    phone: "+8801742818496",
    location: "Naogaon, Rajshahi, Bangladesh",
    availability: "Available for Opportunities",
    availability_detail: "Open for junior developer roles & freelance projects",
    cv_href: "/sourov-dash-cv.pdf",
    cv_file_name: "Sourov_Dash_CV.pdf",
};

/// Section anchors, in page order. Also the nav link labels.
pub const NAV_SECTIONS: [&str; 4] = ["about", "skills", "projects", "contact"];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm Sourov Dash, a passionate Junior MERN Stack Developer from Naogaon, \
     Bangladesh. I enjoy turning ideas into fast, accessible interfaces and \
     backing them with solid APIs.",
    "Right now I'm sharpening my full-stack skills by shipping small, focused \
     products end to end, and I'm looking for a team where I can keep learning \
     while contributing from day one.",
];

/// A titled group of related skills.
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Frontend Development",
        skills: &["HTML5", "CSS3", "JavaScript", "Tailwind", "React"],
    },
    SkillGroup {
        title: "Backend Development",
        skills: &["Node.js", "Express.js", "JWT"],
    },
    SkillGroup {
        title: "Database Management",
        skills: &["MongoDB", "Firebase"],
    },
    SkillGroup {
        title: "Version Control & Tools",
        skills: &["Git", "GitHub", "VS Code", "Postman", "Vercel", "Netlify", "Figma"],
    },
];

/// One project card in the gallery.
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
}

/// Number of technology tags shown per card; the rest are elided.
pub const PROJECT_TAG_LIMIT: usize = 4;

pub const PROJECTS: [Project; 5] = [
    Project {
        title: "Digital Life Lessons Platform",
        category: "Educational Platform",
        description: "An interactive educational platform designed to teach essential \
                      digital life skills and lessons. Features user-friendly navigation, \
                      responsive design, and engaging content delivery for modern learners.",
        technologies: &["React", "JavaScript", "CSS3", "Responsive Design", "Educational Tech"],
        live_url: "https://digital-life-lesson-client.vercel.app/",
    },
    Project {
        title: "Hero Apps Collection",
        category: "Utility Collection",
        description: "A comprehensive collection of utility applications showcasing various \
                      React components and functionalities. Demonstrates modern UI/UX \
                      principles with clean, intuitive interfaces.",
        technologies: &["React", "JavaScript", "Modern UI", "Component Library", "Utility Apps"],
        live_url: "https://sourov-hero-oi.vercel.app/",
    },
    Project {
        title: "Community Cleanliness Reporter",
        category: "Civic Platform",
        description: "A civic engagement platform enabling citizens to report cleanliness \
                      issues in their community. Features real-time reporting, location \
                      tracking, and community collaboration tools.",
        technologies: &["React", "Community Tech", "Reporting System", "Civic Engagement", "Social Impact"],
        live_url: "https://community-cleanliness-client.vercel.app/",
    },
    Project {
        title: "Green Earth Initiative",
        category: "Environmental Platform",
        description: "An environmental awareness platform promoting sustainable practices \
                      and eco-friendly solutions. Features interactive content, \
                      environmental tips, and green living resources.",
        technologies: &["React", "Environmental Tech", "Sustainability", "Green Solutions", "Eco-Friendly"],
        live_url: "https://sourov-green-earth.netlify.app/",
    },
    Project {
        title: "Green Nest Eco Hub",
        category: "Sustainability Hub",
        description: "A comprehensive eco-living platform providing resources, tips, and \
                      tools for sustainable lifestyle choices. Combines modern web \
                      technology with environmental consciousness.",
        technologies: &["React", "Eco-Tech", "Sustainable Living", "Green Technology", "Environmental Solutions"],
        live_url: "https://sourov-green-nest.netlify.app/",
    },
];

/// One external profile link.
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", href: "https://github.com/sourovmoy" },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/sourov-dash/" },
    SocialLink { label: "Facebook", href: "https://www.facebook.com/sourovmmoysanju" },
];

/// One way to reach out directly, with an optional action link.
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        title: "Email",
        value: PROFILE.email,
        href: Some("mailto:sourovmmoysanju@gmail.com"),
    },
    ContactChannel {
        title: "Phone",
        value: PROFILE.phone,
        href: Some("tel:+8801742818496"),
    },
    ContactChannel { title: "Location", value: PROFILE.location, href: None },
];
