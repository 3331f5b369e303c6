//! The Cloud Computing roadmap.

use pathforge_core::RoadmapId;

use crate::model::{Level, Roadmap, Topic};

/// Cloud curriculum: service models through cloud security.
pub fn roadmap() -> Roadmap {
    Roadmap {
        id: RoadmapId::new("cloud-computing"),
        title: "Cloud Computing".to_owned(),
        description: "Cloud infrastructure and services across AWS, Azure, and GCP".to_owned(),
        topics: vec![
            Topic::new(
                "cloud-fundamentals",
                "Cloud Computing Fundamentals",
                "Learn core cloud concepts and service models",
                Level::Beginner,
                "4-6 weeks",
            )
            .link(
                "AWS Cloud Practitioner",
                "https://aws.amazon.com/certification/certified-cloud-practitioner/",
            )
            .link(
                "Cloud Computing Concepts",
                "https://www.coursera.org/learn/cloud-computing",
            ),
            Topic::new(
                "aws-essentials",
                "AWS Essentials",
                "Master Amazon Web Services core services",
                Level::Beginner,
                "8-10 weeks",
            )
            .prereq("cloud-fundamentals")
            .link("AWS Documentation", "https://docs.aws.amazon.com/")
            .link(
                "AWS Solutions Architect",
                "https://aws.amazon.com/certification/certified-solutions-architect-associate/",
            ),
            Topic::new(
                "azure-fundamentals",
                "Azure Fundamentals",
                "Learn Microsoft Azure cloud platform",
                Level::Beginner,
                "6-8 weeks",
            )
            .prereq("cloud-fundamentals")
            .link("Azure Documentation", "https://docs.microsoft.com/azure/")
            .link(
                "Azure Fundamentals",
                "https://docs.microsoft.com/learn/paths/azure-fundamentals/",
            ),
            Topic::new(
                "gcp-essentials",
                "Google Cloud Platform Basics",
                "Understand GCP services and cloud architecture.",
                Level::Intermediate,
                "4 weeks",
            )
            .prereq("cloud-fundamentals")
            .link(
                "GCP Getting Started",
                "https://cloud.google.com/gcp/getting-started",
            ),
            Topic::new(
                "containerization",
                "Containerization & Orchestration",
                "Master Docker and Kubernetes",
                Level::Intermediate,
                "8-10 weeks",
            )
            .prereq("aws-essentials")
            .link("Docker Documentation", "https://docs.docker.com/")
            .link(
                "Kubernetes Documentation",
                "https://kubernetes.io/docs/home/",
            ),
            Topic::new(
                "infrastructure-as-code",
                "Infrastructure as Code",
                "Learn infrastructure automation and management",
                Level::Advanced,
                "6-8 weeks",
            )
            .prereq("containerization")
            .link("Terraform Documentation", "https://www.terraform.io/docs")
            .link(
                "AWS CDK Guide",
                "https://docs.aws.amazon.com/cdk/latest/guide/",
            ),
            Topic::new(
                "cloud-security",
                "Cloud Security",
                "Implement cloud security best practices",
                Level::Advanced,
                "6-8 weeks",
            )
            .prereq("infrastructure-as-code")
            .link(
                "AWS Security Best Practices",
                "https://aws.amazon.com/architecture/security-identity-compliance/",
            )
            .link(
                "Cloud Security Alliance",
                "https://cloudsecurityalliance.org/",
            ),
        ],
    }
}
