//! Static content rendered by the pages. None of it changes at runtime.

use crate::components::IconKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub labels: &'static [&'static str],
    pub values: &'static [f64],
    /// CSS colour per value (one entry means a single-colour series).
    pub colors: &'static [&'static str],
}

const MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const SALES: Series = Series {
    label: "Sales",
    labels: MONTHS,
    values: &[12.0, 19.0, 3.0, 5.0, 2.0, 3.0],
    colors: &["rgba(75, 192, 192, 0.6)"],
};

pub const USERS: Series = Series {
    label: "Users",
    labels: MONTHS,
    values: &[65.0, 59.0, 80.0, 81.0, 56.0, 55.0],
    colors: &["rgb(75, 192, 192)"],
};

pub const DEVICES: Series = Series {
    label: "Devices",
    labels: &["Desktop", "Mobile", "Tablet"],
    values: &[300.0, 50.0, 100.0],
    colors: &["#FF6384", "#36A2EB", "#FFCE56"],
};

pub const REVENUE: Series = Series {
    label: "Revenue",
    labels: MONTHS,
    values: &[1000.0, 1500.0, 1300.0, 1700.0, 1600.0, 1800.0],
    colors: &["rgb(53, 162, 235)", "rgba(53, 162, 235, 0.5)"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn badge_class(self) -> &'static str {
        match self {
            TransactionStatus::Completed => "badge badge--success",
            TransactionStatus::Pending => "badge badge--warning",
            TransactionStatus::Failed => "badge badge--danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub id: &'static str,
    pub customer: &'static str,
    pub amount: &'static str,
    pub status: TransactionStatus,
}

pub const TRANSACTIONS: [Transaction; 4] = [
    Transaction {
        id: "001",
        customer: "Alice Johnson",
        amount: "$120.00",
        status: TransactionStatus::Completed,
    },
    Transaction {
        id: "002",
        customer: "Bob Smith",
        amount: "$75.50",
        status: TransactionStatus::Pending,
    },
    Transaction {
        id: "003",
        customer: "Charlie Brown",
        amount: "$200.00",
        status: TransactionStatus::Completed,
    },
    Transaction {
        id: "004",
        customer: "Diana Prince",
        amount: "$50.00",
        status: TransactionStatus::Failed,
    },
];

/// Icon + heading + body paragraph, used by the About and Profile pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact {
    pub icon: IconKind,
    pub title: &'static str,
    pub content: &'static str,
}

pub const COMPANY_NAME: &str = "TechInnovate Solutions";
pub const COMPANY_TAGLINE: &str = "Empowering businesses through cutting-edge technology";

pub const COMPANY_TOPICS: [Fact; 3] = [
    Fact {
        icon: IconKind::Building,
        title: "Who We Are",
        content: "TechInnovate Solutions is a leading technology company specializing in AI-driven software solutions. We combine cutting-edge technology with human expertise to solve complex business challenges.",
    },
    Fact {
        icon: IconKind::Zap,
        title: "Our Mission",
        content: "Our mission is to empower businesses of all sizes with innovative technology solutions that drive growth, efficiency, and competitive advantage in the digital age.",
    },
    Fact {
        icon: IconKind::Globe,
        title: "Global Presence",
        content: "With offices in San Francisco, London, and Tokyo, we serve clients worldwide, bringing a global perspective to local challenges.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub const TEAM: [TeamMember; 6] = [
    TeamMember {
        name: "Sarah Johnson",
        role: "CEO",
        image: "https://i.pravatar.cc/150?img=1",
    },
    TeamMember {
        name: "Michael Chen",
        role: "CTO",
        image: "https://i.pravatar.cc/150?img=3",
    },
    TeamMember {
        name: "Emily Rodriguez",
        role: "COO",
        image: "https://i.pravatar.cc/150?img=5",
    },
    TeamMember {
        name: "David Kim",
        role: "Head of AI",
        image: "https://i.pravatar.cc/150?img=7",
    },
    TeamMember {
        name: "Olivia Patel",
        role: "Head of Design",
        image: "https://i.pravatar.cc/150?img=9",
    },
    TeamMember {
        name: "Alex Novak",
        role: "Head of Sales",
        image: "https://i.pravatar.cc/150?img=11",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: [Milestone; 4] = [
    Milestone {
        year: "2010",
        title: "Company Founded",
        description: "TechInnovate Solutions was founded by a group of visionary tech entrepreneurs in Silicon Valley.",
    },
    Milestone {
        year: "2015",
        title: "Global Expansion",
        description: "Opened offices in London and Tokyo, marking the beginning of our global operations.",
    },
    Milestone {
        year: "2018",
        title: "AI Division Launch",
        description: "Launched our dedicated AI division, focusing on machine learning and natural language processing solutions.",
    },
    Milestone {
        year: "2023",
        title: "Fortune 500 Recognition",
        description: "Recognized as one of the fastest-growing tech companies by Fortune magazine.",
    },
];

pub const PROFILE_NAME: &str = "John Doe";
pub const PROFILE_TITLE: &str = "Full Stack Developer";
pub const PROFILE_AVATAR: &str = "https://github.com/shadcn.png";

pub const PROFILE_FACTS: [Fact; 4] = [
    Fact {
        icon: IconKind::User,
        title: "About Me",
        content: "I'm a passionate Full Stack Developer with 5 years of experience in building web applications.",
    },
    Fact {
        icon: IconKind::MapPin,
        title: "Location",
        content: "San Francisco, CA",
    },
    Fact {
        icon: IconKind::Briefcase,
        title: "Work",
        content: "Senior Developer at TechCorp Inc.",
    },
    Fact {
        icon: IconKind::GraduationCap,
        title: "Education",
        content: "BS in Computer Science, Stanford University",
    },
];

pub const SKILLS: [&str; 9] = [
    "React",
    "Node.js",
    "JavaScript",
    "TypeScript",
    "Python",
    "GraphQL",
    "MongoDB",
    "Docker",
    "AWS",
];
