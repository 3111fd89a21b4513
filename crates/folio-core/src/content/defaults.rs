//! The portfolio content shipped with the library.

use super::loader::ContentDocument;
use crate::models::{Education, Experience, Project, SkillTaxonomy};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the embedded portfolio content.
///
/// Called once per [`ContentStore`](super::ContentStore); nothing here is
/// global state.
pub fn default_document() -> ContentDocument {
    ContentDocument {
        projects: projects(),
        experiences: experiences(),
        education: education(),
        skills: skills(),
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            title: "Parallelized Phase Vocoder".into(),
            description: "Parallel programming on distributed system".into(),
            detailed_description: Some(
                "An audio processing tool that uses parallel computing techniques to accelerate \
                 time-stretching and pitch-shifting. Implemented using MPI and OpenMP for \
                 distributed processing across multiple nodes."
                    .into(),
            ),
            image: "/Parallel.jpg".into(),
            tags: strings(&["C++", "MPI", "OpenMP", "Audio Processing", "Parallel Computing"]),
            link: "/projects/1".into(),
            github: Some("https://github.com/keoniburns/parallelized-phase-vocoder".into()),
            demo_url: None,
        },
        Project {
            id: "2".into(),
            title: "EndyBot".into(),
            description: "SlackBot for post aggregation and distribution".into(),
            detailed_description: Some(
                "A Slack bot that aggregates and categorizes messages from multiple channels, \
                 then distributes summaries to team members based on their preferences and roles."
                    .into(),
            ),
            image: "/p2.jpg".into(),
            tags: strings(&["Node.js", "Slack API", "MongoDB", "NLP", "AWS Lambda"]),
            link: "/projects/2".into(),
            github: Some(String::new()),
            demo_url: Some("https://endybot-demo.example.com".into()),
        },
        Project {
            id: "3".into(),
            title: "Stroke Corrector".into(),
            description: "An embedded system to help correct stroke consistency for pool players"
                .into(),
            detailed_description: Some(
                "A precision device that attaches to pool cues to measure and analyze stroke \
                 mechanics. Provides real-time feedback to improve player consistency through a \
                 companion mobile app."
                    .into(),
            ),
            image: "/P3.jpg".into(),
            tags: strings(&[
                "Embedded Systems",
                "Arduino",
                "Bluetooth",
                "React Native",
                "Motion Sensors",
            ]),
            link: "/projects/3".into(),
            github: Some("https://github.com/keoniburns/stroke-corrector".into()),
            demo_url: None,
        },
        Project {
            id: "4".into(),
            title: "DayStart".into(),
            description: "A desktop application that provides a single place to journal, read \
                          articles, and leetcode"
                .into(),
            detailed_description: Some(
                "An all-in-one productivity desktop application that combines journaling, article \
                 reading, and coding practice. Features include daily goal tracking, offline \
                 article saving, and LeetCode integration."
                    .into(),
            ),
            image: "/p4.jpg".into(),
            tags: strings(&["Electron", "React", "TypeScript", "IndexedDB", "REST APIs"]),
            link: "/projects/4".into(),
            github: Some("https://github.com/keoniburns/daystart".into()),
            demo_url: Some("https://daystart-demo.example.com".into()),
        },
        Project {
            id: "5".into(),
            title: "C++ CNN".into(),
            description: "Convolutional neural network written from scratch for image \
                          classification"
                .into(),
            detailed_description: Some(
                "A convolutional neural network with hand-written convolution, pooling and \
                 backpropagation layers, trained on handwritten digit images without any \
                 machine learning framework."
                    .into(),
            ),
            image: "/p5.jpg".into(),
            tags: strings(&["C++", "Machine Learning", "Computer Vision", "CMake"]),
            link: "/projects/5".into(),
            github: Some("https://github.com/keoniburns/cpp-cnn".into()),
            demo_url: None,
        },
    ]
}

fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "exp1".into(),
            title: "Excalibur Security Inc.".into(),
            position: "Full-Stack Software Engineer".into(),
            description: "I lead the development of a scheduling and compliance platform, \
                          designing a secure, scalable architecture using React, Node.js, and \
                          PostgreSQL. I implemented authentication, access control, and DevOps \
                          practices to enhance reliability while building features that \
                          streamline payroll and scheduling."
                .into(),
            date: "September 2024 - Present".into(),
            tags: strings(&[
                "React",
                "Node.js",
                "PostgreSQL",
                "Docker Compose",
                "JWT",
                "CI/CD",
                "DevOps",
                "Role-Based Access Control (RBAC)",
                "Database Optimization",
                "Authentication",
            ]),
        },
        Experience {
            id: "exp2".into(),
            title: "RideStream".into(),
            position: "Full-Stack Software Engineer".into(),
            description: "I played a key role in developing a mobile app, building core features \
                          with React Native and integrating real-time data pipelines with AWS. I \
                          created playlist functionality, a driver dashboard, and geo-referenced \
                          ad targeting while ensuring compliance with data privacy regulations."
                .into(),
            date: "March 2020 - March 2022".into(),
            tags: strings(&[
                "React Native",
                "AWS S3",
                "AWS Lambda",
                "DynamoDB",
                "Real-Time Data Pipelines",
                "Geo-Referencing",
                "Mobile Development",
                "In-App Playlists",
                "Ad Tech",
                "GDPR Compliance",
            ]),
        },
    ]
}

fn education() -> Vec<Education> {
    vec![Education {
        id: "edu1".into(),
        title: "California State University, Chico".into(),
        degree: "B.S. Computer Science".into(),
        description: "Computer Science program with focus on software engineering, algorithms, \
                      and distributed systems."
            .into(),
        date: "2021 - 2024".into(),
    }]
}

fn skills() -> SkillTaxonomy {
    SkillTaxonomy {
        programming_languages: strings(&[
            "C++",
            "C",
            "Python",
            "JavaScript",
            "TypeScript",
            "Golang",
            "ARM Assembly",
            "HTML",
            "CSS",
            "SQL",
            "NoSQL",
            "YAML",
            "JSON",
            "Bash",
        ]),
        frameworks: strings(&[
            "Express",
            "Node.js",
            "Django",
            "React",
            "React Native",
            "Bootstrap",
        ]),
        cloud_platforms: strings(&["AWS", "Azure", "GCP"]),
        dev_ops_tools: strings(&[
            "Kubernetes",
            "Docker",
            "Terraform",
            "Helm",
            "GitHub Actions",
            "Packer",
            "Vagrant",
        ]),
        databases: strings(&["PostgreSQL", "DynamoDB", "MongoDB", "Firebase", "SQL", "NoSQL"]),
        parallel_computing: strings(&["MPI", "OpenMP", "Pthreads", "Cuda"]),
        testing: strings(&["Jest", "Selenium"]),
    }
}
