//! Fixed copy of the marketing page.

pub const EXPANSION: &str = "Jagtap Ecosystem Excellence And Lives Automation";

pub const HERO: &str = "Where Innovation Meets Purpose, driving sustainable solutions that transform industries \
     and enhance lives through cutting-edge automation and ecosystem excellence.";

pub const ABOUT: &str = "JEXLA Group is a diversified enterprise committed to building ecosystems of excellence. \
     We combine deep industry knowledge with automation technology to help businesses grow \
     sustainably and to improve the lives of the communities they serve.";

pub const SECTORS_INTRO: &str = "JEXLA Group operates across multiple industry verticals, delivering specialized solutions \
     that drive innovation and sustainable growth in each sector we serve.";

pub struct Metric {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const METRICS: [Metric; 4] = [
    Metric {
        number: "4+",
        label: "Years Experience",
        icon: "🏆",
    },
    Metric {
        number: "100%",
        label: "Committed",
        icon: "💎",
    },
    Metric {
        number: "Global",
        label: "Reach",
        icon: "🌍",
    },
    Metric {
        number: "24/7",
        label: "Support",
        icon: "🚀",
    },
];

pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Our Vision",
        description: "To be a global benchmark for ecosystem excellence, where automation uplifts every life it touches.",
    },
    Pillar {
        title: "Our Mission",
        description: "Deliver dependable, sustainable solutions that bridge traditional business and modern technology.",
    },
    Pillar {
        title: "Our Values",
        description: "Integrity, innovation and long-term commitment to our clients and communities.",
    },
];

pub struct Promoter {
    pub name: &'static str,
    pub role: &'static str,
    pub icon: &'static str,
    pub bio: &'static str,
}

pub const PROMOTERS: [Promoter; 1] = [Promoter {
    name: "Mr Mayur J's",
    role: "Founder & CEO",
    icon: "👨‍💼",
    bio: "A visionary leader with extensive experience in ecosystem development and automation technologies. \
          Mr. Mayur J's brings innovative solutions that bridge the gap between traditional business practices \
          and modern technological advancement, ensuring sustainable growth and operational excellence across \
          diverse industry sectors.",
}];

pub struct Sector {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SECTORS: [Sector; 4] = [
    Sector {
        title: "Manufacturing Industry",
        description: "Advanced automation solutions for modern manufacturing processes.",
        icon: "🏭",
    },
    Sector {
        title: "JEXLA Service",
        description: "Comprehensive ecosystem services tailored to client needs.",
        icon: "⚙️",
    },
    Sector {
        title: "Sustainable Solutions",
        description: "Environment-friendly innovations for a greener future.",
        icon: "🌱",
    },
    Sector {
        title: "Export-Import Services",
        description: "Global trade facilitation and logistics management.",
        icon: "📦",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "Facebook",
        href: "https://facebook.com",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com",
    },
];
