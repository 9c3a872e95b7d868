//! Fixed records behind the static panels.

pub const OWNER_NAME: &str = "Nandini Yadav";

pub const ROLES: [&str; 4] = [
    "Interface Architect",
    "UX Strategist",
    "Design Systems Architect",
    "Product Designer",
];

pub const HERO_TAGS: [&str; 5] = [
    "Figma",
    "Adobe XD",
    "Design Systems",
    "Prototyping",
    "User Research",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub percent: u8,
}

pub const UX_METRICS: [Metric; 3] = [
    Metric { label: "Accessibility", percent: 95 },
    Metric { label: "Usability", percent: 92 },
    Metric { label: "Aesthetic", percent: 98 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typeface {
    pub name: &'static str,
    pub class: &'static str,
    pub description: &'static str,
}

pub const TYPEFACES: [Typeface; 5] = [
    Typeface {
        name: "Playfair Display",
        class: "font-playfair",
        description: "Timeless elegance and sophistication.",
    },
    Typeface {
        name: "Montserrat",
        class: "font-montserrat",
        description: "Clean, modern geometric precision.",
    },
    Typeface {
        name: "Syne",
        class: "font-syne",
        description: "Bold, artistic experimentation.",
    },
    Typeface {
        name: "Inter",
        class: "font-inter",
        description: "Maximum readability and clarity.",
    },
    Typeface {
        name: "Outfit",
        class: "font-outfit",
        description: "Friendly, accessible, and contemporary.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: [&'static str; 4],
    pub vibe: &'static str,
}

pub const PALETTES: [Palette; 4] = [
    Palette {
        name: "Midnight Royal",
        colors: ["#0F172A", "#334155", "#8B5CF6", "#F59E0B"],
        vibe: "Professional, Deep, Trustworthy",
    },
    Palette {
        name: "Sakura Zen",
        colors: ["#FFF5F5", "#FED7D7", "#FBB6CE", "#4A5568"],
        vibe: "Soft, Minimal, Calm",
    },
    Palette {
        name: "Emerald Forest",
        colors: ["#064E3B", "#065F46", "#10B981", "#F0FDF4"],
        vibe: "Growth, Nature, Fresh",
    },
    Palette {
        name: "Vibrant Tech",
        colors: ["#1A1A1A", "#3B82F6", "#10B981", "#E11D48"],
        vibe: "Energetic, Precise, Modern",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pitch {
    pub question: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub icon_path: &'static str,
    pub accent: &'static str,
}

pub const WHY_ME: [Pitch; 3] = [
    Pitch {
        question: "Why choose me as your designer?",
        title: "Strategic Architecture",
        text: "I don't just build interfaces; I architect scalable systems that bridge the gap between business goals and user happiness.",
        icon_path: "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A11.952 11.952 0 003 12c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-3.042-1.135-5.824-3-7.938l-3-3",
        accent: "accent-violet",
    },
    Pitch {
        question: "What makes my work different?",
        title: "Precision & Intent",
        text: "Every pixel has a purpose. I obsess over micro-interactions and accessibility to ensure a premium, inclusive experience.",
        icon_path: "M4 5a1 1 0 011-1h14a1 1 0 011 1v2a1 1 0 01-1 1H5a1 1 0 01-1-1V5zM4 13a1 1 0 011-1h6a1 1 0 011 1v6a1 1 0 01-1 1H5a1 1 0 01-1-1v-6zM16 13a1 1 0 011-1h2a1 1 0 011 1v6a1 1 0 01-1 1h-2a1 1 0 01-1-1v-6z",
        accent: "accent-fuchsia",
    },
    Pitch {
        question: "How do I add value to your team?",
        title: "Adaptability & Growth",
        text: "The tech landscape changes daily. I bring a constant learning mindset, staying ahead of trends while honoring timeless design principles.",
        icon_path: "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z",
        accent: "accent-blue",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillLevel {
    pub name: &'static str,
    pub level: u8,
    pub gradient: &'static str,
}

pub const POWER_STACK: [SkillLevel; 6] = [
    SkillLevel { name: "React", level: 95, gradient: "gradient-sky" },
    SkillLevel { name: "TypeScript", level: 90, gradient: "gradient-indigo" },
    SkillLevel { name: "Next.js", level: 92, gradient: "gradient-slate" },
    SkillLevel { name: "Tailwind CSS", level: 98, gradient: "gradient-teal" },
    SkillLevel { name: "Node.js", level: 85, gradient: "gradient-emerald" },
    SkillLevel { name: "Figma", level: 88, gradient: "gradient-pink" },
];

/// The biography card only has room for the first few entries.
pub const POWER_STACK_FEATURED: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interest {
    pub glyph: &'static str,
    pub verb: &'static str,
    pub subject: &'static str,
}

pub const INTERESTS: [Interest; 2] = [
    Interest { glyph: "📚", verb: "Mastering", subject: "System Design" },
    Interest { glyph: "🎧", verb: "Listening", subject: "Focus Beats" },
];

pub const FLOATING_WORDS: [&str; 4] = ["INNOVATION", "STRUCTURE", "SPEED", "PRECISION"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expertise {
    pub id: &'static str,
    pub title: &'static str,
    pub tools: [&'static str; 3],
    pub description: &'static str,
    pub icon_path: &'static str,
    pub gradient: &'static str,
}

pub const EXPERTISE: [Expertise; 4] = [
    Expertise {
        id: "uiux",
        title: "UI/UX MASTERY",
        tools: ["Figma", "Adobe XD", "Prototyping"],
        description: "Architecting seamless user journeys through high-fidelity wireframes and interactive prototypes. Expert in design handovers and systems.",
        icon_path: "M4 5a1 1 0 011-1h14a1 1 0 011 1v2a1 1 0 01-1 1H5a1 1 0 01-1-1V5zM4 13a1 1 0 011-1h6a1 1 0 011 1v6a1 1 0 01-1 1H5a1 1 0 01-1-1v-6zM16 13a1 1 0 011-1h2a1 1 0 011 1v6a1 1 0 01-1 1h-2a1 1 0 01-1-1v-6z",
        gradient: "gradient-violet-fuchsia",
    },
    Expertise {
        id: "visual",
        title: "VISUAL CRAFT",
        tools: ["Illustrator", "Photoshop", "Branding"],
        description: "Vector-perfect precision and branding strategies that define digital identities. Specializing in icons, logos, and complex illustrations.",
        icon_path: "M15.232 5.232l3.536 3.536m-2.036-5.036a2.5 2.5 0 113.536 3.536L6.5 21.036H3v-3.572L16.732 3.732z",
        gradient: "gradient-orange-rose",
    },
    Expertise {
        id: "frontend",
        title: "FRONTEND ENGINE",
        tools: ["Next.js", "React", "Tailwind"],
        description: "Translating designs into performant, accessible code. Building scalable component libraries with the latest web standards.",
        icon_path: "M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
        gradient: "gradient-blue-cyan",
    },
    Expertise {
        id: "motion",
        title: "MOTION & INTERACTION",
        tools: ["Framer Motion", "Interaction", "Lottie"],
        description: "Bringing interfaces to life with purposeful motion. Ensuring every transition tells a story and guides the user naturally.",
        icon_path: "M13 10V3L4 14h7v7l9-11h-7z",
        gradient: "gradient-indigo-purple",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const EXPERTISE_STATS: [Stat; 2] = [
    Stat { value: "100%", label: "Pixel Perfection" },
    Stat { value: "NEXT.GEN", label: "Workflow Ready" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech: [&'static str; 4],
    pub gradient: &'static str,
    pub image: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Quantum Dashboard",
        category: "Full Stack Development",
        description: "A real-time data visualization platform with advanced filtering and predictive analytics.",
        tech: ["Next.js", "TypeScript", "D3.js", "Supabase"],
        gradient: "gradient-blue-indigo",
        image: "https://images.unsplash.com/photo-1551288049-bbda38a5f012?q=80&w=1000&auto=format&fit=crop",
    },
    Project {
        title: "Ethos Commerce",
        category: "E-Commerce Solution",
        description: "Minimalist fashion store with a focus on sustainable brands and seamless checkout UX.",
        tech: ["React", "Tailwind CSS", "Stripe", "Node.js"],
        gradient: "gradient-violet-fuchsia",
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?q=80&w=1000&auto=format&fit=crop",
    },
    Project {
        title: "Aura AI",
        category: "AI Integration",
        description: "Intelligent content generation tool powered by large language models for creative writers.",
        tech: ["Python", "OpenAI API", "Reflex", "PostgreSQL"],
        gradient: "gradient-fuchsia-pink",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?q=80&w=1000&auto=format&fit=crop",
    },
    Project {
        title: "Nebula OS",
        category: "Interface Design",
        description: "Conceptual operating system interface exploring spatial computing and glassmorphism.",
        tech: ["Figma", "Framer Motion", "React", "Three.js"],
        gradient: "gradient-indigo-purple",
        image: "https://images.unsplash.com/photo-1614850523296-e8c041ca846a?q=80&w=1000&auto=format&fit=crop",
    },
];

pub const SOCIAL_LINKS: [&str; 4] = ["Twitter", "LinkedIn", "Github", "Instagram"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Multiline { rows: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

pub const CONTACT_FIELDS: [FormField; 3] = [
    FormField {
        name: "name",
        label: "Full Name",
        placeholder: "Enter your name",
        kind: FieldKind::Text,
    },
    FormField {
        name: "email",
        label: "Email Address",
        placeholder: "Enter your email",
        kind: FieldKind::Email,
    },
    FormField {
        name: "message",
        label: "Message",
        placeholder: "Tell me about your project",
        kind: FieldKind::Multiline { rows: 5 },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        assert!(POWER_STACK.iter().all(|skill| skill.level <= 100));
        assert!(UX_METRICS.iter().all(|metric| metric.percent <= 100));
        assert!(POWER_STACK_FEATURED <= POWER_STACK.len());
    }

    #[test]
    fn expertise_ids_are_unique() {
        for (index, skill) in EXPERTISE.iter().enumerate() {
            assert!(EXPERTISE[index + 1..].iter().all(|other| other.id != skill.id));
        }
    }

    #[test]
    fn palette_colors_are_hex() {
        for palette in PALETTES {
            for color in palette.colors {
                assert_eq!(color.len(), 7);
                assert!(color.starts_with('#'));
                assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }
}
