//! The DevOps Engineering roadmap.

use pathforge_core::RoadmapId;

use crate::model::{Level, Roadmap, Topic};

/// DevOps curriculum: Linux through DevSecOps.
pub fn roadmap() -> Roadmap {
    Roadmap {
        id: RoadmapId::new("devops"),
        title: "DevOps Engineering".to_owned(),
        description: "Master cloud and DevOps practices".to_owned(),
        topics: vec![
            Topic::new(
                "linux-basics",
                "Linux Fundamentals",
                "Master Linux command line and system administration",
                Level::Beginner,
                "4-6 weeks",
            )
            .link("Linux Journey", "https://linuxjourney.com/")
            .link("Linux Documentation", "https://www.kernel.org/doc/html/latest/"),
            Topic::new(
                "version-control",
                "Version Control",
                "Advanced Git and collaboration workflows",
                Level::Beginner,
                "2-3 weeks",
            )
            .prereq("linux-basics")
            .link("Git Documentation", "https://git-scm.com/doc")
            .link("Git Branching", "https://learngitbranching.js.org/"),
            Topic::new(
                "containerization",
                "Containerization",
                "Docker and container orchestration",
                Level::Intermediate,
                "6-8 weeks",
            )
            .prereq("linux-basics")
            .link("Docker Documentation", "https://docs.docker.com/")
            .link("Kubernetes Docs", "https://kubernetes.io/docs/home/"),
            Topic::new(
                "cloud-platforms",
                "Cloud Platforms",
                "Cloud infrastructure and services",
                Level::Intermediate,
                "8-10 weeks",
            )
            .prereq("containerization")
            .link("AWS Documentation", "https://docs.aws.amazon.com/")
            .link("Azure Documentation", "https://docs.microsoft.com/azure/"),
            Topic::new(
                "infrastructure-as-code",
                "Infrastructure as Code",
                "Automate infrastructure deployment",
                Level::Intermediate,
                "6-8 weeks",
            )
            .prereq("cloud-platforms")
            .link("Terraform Docs", "https://www.terraform.io/docs")
            .link("Ansible Docs", "https://docs.ansible.com/"),
            Topic::new(
                "ci-cd",
                "CI/CD",
                "Continuous Integration and Deployment",
                Level::Advanced,
                "4-6 weeks",
            )
            .prereq("version-control")
            .prereq("containerization")
            .link("Jenkins Docs", "https://www.jenkins.io/doc/")
            .link("GitHub Actions", "https://docs.github.com/actions"),
            Topic::new(
                "monitoring",
                "Monitoring & Logging",
                "System monitoring and log management",
                Level::Advanced,
                "4-6 weeks",
            )
            .prereq("cloud-platforms")
            .link("Prometheus Docs", "https://prometheus.io/docs/")
            .link("Grafana Docs", "https://grafana.com/docs/"),
            Topic::new(
                "security",
                "Security & Compliance",
                "DevSecOps and security best practices",
                Level::Advanced,
                "6-8 weeks",
            )
            .prereq("ci-cd")
            .prereq("monitoring")
            .link(
                "OWASP DevSecOps",
                "https://owasp.org/www-project-devsecops-guideline/",
            )
            .link("Cloud Security", "https://aws.amazon.com/security/"),
        ],
    }
}
