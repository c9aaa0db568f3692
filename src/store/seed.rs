//! Launch dataset loaded into the store at process start.

use crate::models::{
    BlogEntry, Collections, CourtHearing, HearingPriority, HearingStatus, JobCategory, JobOpening,
    JobType, LegalNews, Member, NewsCategory, NewsImportance, Post, UserRole,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn member(
    id: &str,
    name: &str,
    role: UserRole,
    institution: &str,
    specialization: &[&str],
    avatar: &str,
) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
        role,
        institution: Some(institution.to_string()),
        specialization: Some(strings(specialization)),
        avatar: avatar.to_string(),
        github_handle: None,
        is_github_connected: None,
    }
}

pub fn initial_collections() -> Collections {
    Collections {
        posts: vec![Post {
            id: "1".to_string(),
            author: "Adv. Rajesh Kumar".to_string(),
            role: UserRole::Advocate,
            content: "Vidhigya Sanghthan is officially running on the Cloud! Our community is now \
                      more connected than ever. Welcome to the future of legal collaboration."
                .to_string(),
            timestamp: "Just now".to_string(),
            likes: 156,
            comments: 28,
            tags: strings(&["LegalTech", "CloudLaunch", "Innovation"]),
        }],
        members: vec![
            member(
                "1",
                "Adv. Rajesh Kumar",
                UserRole::Advocate,
                "Supreme Court of India",
                &["Criminal Law", "Constitutional Law"],
                "RK",
            ),
            member(
                "2",
                "Prof. Amrita Singh",
                UserRole::Professor,
                "National Law University",
                &["Jurisprudence", "Family Law"],
                "AS",
            ),
            member(
                "3",
                "Yash Vardhan",
                UserRole::Student,
                "Delhi University",
                &["Corporate Law"],
                "YV",
            ),
            member(
                "4",
                "Adv. Sameer Verma",
                UserRole::Advocate,
                "Bombay High Court",
                &["Intellectual Property"],
                "SV",
            ),
        ],
        jobs: vec![
            JobOpening {
                id: "1".to_string(),
                title: "Senior Associate (M&A)".to_string(),
                organization: "AZB & Partners".to_string(),
                location: "Mumbai".to_string(),
                job_type: JobType::FullTime,
                category: JobCategory::Corporate,
                experience: None,
                salary: None,
                deadline: "Nov 20, 2024".to_string(),
                description: "Senior role in the Mergers & Acquisitions team for top-tier \
                              transactions."
                    .to_string(),
                posted_at: "2 hours ago".to_string(),
            },
            JobOpening {
                id: "2".to_string(),
                title: "Legal Research Intern".to_string(),
                organization: "Shardul Amarchand Mangaldas".to_string(),
                location: "Remote".to_string(),
                job_type: JobType::Internship,
                category: JobCategory::Corporate,
                experience: None,
                salary: None,
                deadline: "Oct 31, 2024".to_string(),
                description: "Support our research desk on emerging tech law regulations."
                    .to_string(),
                posted_at: "Yesterday".to_string(),
            },
        ],
        hearings: vec![CourtHearing {
            id: "h1".to_string(),
            case_title: "State of Maharashtra vs. Digital Platforms".to_string(),
            case_number: "WP 1122/2024".to_string(),
            court: "Bombay High Court".to_string(),
            date: "Oct 28, 2024".to_string(),
            priority: HearingPriority::High,
            status: HearingStatus::Pending,
        }],
        news: vec![LegalNews {
            id: "n1".to_string(),
            title: "Supreme Court broadens definition of Livelihood under Art. 21".to_string(),
            summary: "A 3-judge bench has held that access to digital justice is now part of the \
                      right to livelihood."
                .to_string(),
            source: "Bar & Bench".to_string(),
            timestamp: "Just Now".to_string(),
            category: NewsCategory::Judiciary,
            importance: NewsImportance::Breaking,
        }],
        blogs: vec![BlogEntry {
            id: "b1".to_string(),
            title: "Demystifying the Bharatiya Nyaya Sanhita (BNS)".to_string(),
            excerpt: "A comprehensive guide for trial lawyers on the procedural shifts in the new \
                      criminal code."
                .to_string(),
            author: "Prof. Ved Prakash".to_string(),
            author_role: UserRole::Professor,
            date: "Oct 22, 2024".to_string(),
            read_time: "12 min read".to_string(),
            cover_image: "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?auto=format&fit=crop&q=80".to_string(),
            category: "Criminal Law".to_string(),
            is_verified: true,
        }],
    }
}
