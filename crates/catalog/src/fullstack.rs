//! The Full Stack Development roadmap.

use pathforge_core::RoadmapId;

use crate::model::{Level, Roadmap, Topic};

/// Full stack curriculum: frontend through deployment.
pub fn roadmap() -> Roadmap {
    Roadmap {
        id: RoadmapId::new("fullstack"),
        title: "Full Stack Development".to_owned(),
        description: "Build scalable applications from frontend to deployment".to_owned(),
        topics: vec![
            Topic::new(
                "frontend-fundamentals",
                "Frontend Fundamentals",
                "Master core frontend technologies and modern frameworks",
                Level::Beginner,
                "8-10 weeks",
            )
            .link(
                "React Documentation",
                "https://reactjs.org/docs/getting-started.html",
            )
            .link("TypeScript Handbook", "https://www.typescriptlang.org/docs/"),
            Topic::new(
                "backend-fundamentals",
                "Backend Fundamentals",
                "Learn server-side programming and API development",
                Level::Beginner,
                "6-8 weeks",
            )
            .prereq("frontend-fundamentals")
            .link("Node.js Documentation", "https://nodejs.org/docs/latest/api/")
            .link(
                "Express.js Guide",
                "https://expressjs.com/en/guide/routing.html",
            ),
            Topic::new(
                "database-management",
                "Database Management",
                "Master both SQL and NoSQL databases",
                Level::Intermediate,
                "4-6 weeks",
            )
            .prereq("backend-fundamentals")
            .link("MongoDB University", "https://university.mongodb.com/")
            .link("PostgreSQL Tutorial", "https://www.postgresqltutorial.com/"),
            Topic::new(
                "advanced-backend",
                "Advanced Backend",
                "Advanced server-side concepts and frameworks",
                Level::Advanced,
                "8-10 weeks",
            )
            .prereq("database-management")
            .link("NestJS Documentation", "https://docs.nestjs.com/")
            .link("GraphQL Documentation", "https://graphql.org/learn/"),
            Topic::new(
                "devops-basics",
                "DevOps Fundamentals",
                "Learn deployment and container orchestration",
                Level::Intermediate,
                "4-6 weeks",
            )
            .prereq("advanced-backend")
            .link("Docker Documentation", "https://docs.docker.com/")
            .link(
                "CI/CD Best Practices",
                "https://www.atlassian.com/continuous-delivery/principles",
            ),
        ],
    }
}
