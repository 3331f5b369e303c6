//! The Data Science roadmap.

use pathforge_core::{QuizId, RoadmapId};
use pathforge_quiz::Question;

use crate::model::{CatalogQuiz, Level, Roadmap, Topic};

/// Data Science curriculum: Python through MLOps.
pub fn roadmap() -> Roadmap {
    Roadmap {
        id: RoadmapId::new("data-science"),
        title: "Data Science".to_owned(),
        description: "From Python basics to production machine learning".to_owned(),
        topics: vec![
            Topic::new(
                "python-fundamentals",
                "Python Fundamentals",
                "Master Python programming basics essential for data science.",
                Level::Beginner,
                "2 weeks",
            )
            .link(
                "Python for Data Science Handbook",
                "https://jakevdp.github.io/PythonDataScienceHandbook/",
            )
            .link(
                "Python Basics for Data Science",
                "https://www.edx.org/course/python-basics-for-data-science",
            )
            .with_quiz(python_basics_quiz()),
            Topic::new(
                "data-manipulation",
                "Data Manipulation with Pandas",
                "Learn to manipulate and analyze data using Pandas.",
                Level::Intermediate,
                "3 weeks",
            )
            .prereq("python-fundamentals")
            .link("Pandas Documentation", "https://pandas.pydata.org/docs/")
            .link(
                "Data Manipulation with Pandas",
                "https://www.datacamp.com/courses/data-manipulation-with-pandas",
            ),
            Topic::new(
                "data-visualization",
                "Data Visualization",
                "Create compelling visualizations using matplotlib and seaborn.",
                Level::Intermediate,
                "2 weeks",
            )
            .prereq("data-manipulation")
            .link(
                "Matplotlib Documentation",
                "https://matplotlib.org/stable/contents.html",
            )
            .link("Seaborn Documentation", "https://seaborn.pydata.org/"),
            Topic::new(
                "statistics",
                "Statistics for Data Science",
                "Learn essential statistical concepts and their applications.",
                Level::Intermediate,
                "4 weeks",
            )
            .prereq("data-manipulation")
            .link(
                "Statistics and Probability",
                "https://www.khanacademy.org/math/statistics-probability",
            )
            .link(
                "Statistical Thinking in Python",
                "https://www.datacamp.com/courses/statistical-thinking-in-python-part-1",
            ),
            Topic::new(
                "machine-learning",
                "Machine Learning Fundamentals",
                "Master basic machine learning algorithms and concepts.",
                Level::Advanced,
                "6 weeks",
            )
            .prereq("statistics")
            .link(
                "Scikit-learn Documentation",
                "https://scikit-learn.org/stable/",
            )
            .link(
                "Machine Learning Course",
                "https://www.coursera.org/learn/machine-learning",
            ),
            Topic::new(
                "deep-learning",
                "Deep Learning",
                "Explore neural networks and deep learning frameworks.",
                Level::Advanced,
                "8 weeks",
            )
            .prereq("machine-learning")
            .link(
                "Deep Learning Specialization",
                "https://www.coursera.org/specializations/deep-learning",
            )
            .link("TensorFlow Documentation", "https://www.tensorflow.org/learn"),
            Topic::new(
                "data-projects",
                "Data Science Projects",
                "Build a portfolio with real-world data science projects.",
                Level::Advanced,
                "8 weeks",
            )
            .prereq("deep-learning")
            .prereq("data-visualization")
            .link("Kaggle Competitions", "https://www.kaggle.com/competitions")
            .link(
                "Real-world Data Science Projects",
                "https://www.datacamp.com/projects",
            ),
            Topic::new(
                "best-practices",
                "Data Science Best Practices",
                "Learn industry best practices and professional workflows.",
                Level::Intermediate,
                "2 weeks",
            )
            .prereq("data-projects")
            .link(
                "Data Science Process Alliance",
                "https://www.datascience-pm.com/",
            )
            .link("MLOps Best Practices", "https://ml-ops.org/"),
        ],
    }
}

fn python_basics_quiz() -> CatalogQuiz {
    CatalogQuiz {
        id: QuizId::new("python-basics-quiz"),
        title: "Python Fundamentals Quiz".to_owned(),
        questions: vec![Question {
            id: "q1".to_owned(),
            text: "Which of the following is a mutable data type in Python?".to_owned(),
            options: vec![
                "str".to_owned(),
                "tuple".to_owned(),
                "list".to_owned(),
                "int".to_owned(),
            ],
            correct_answer: 2,
            explanation: "Lists are mutable data types in Python, meaning their contents can \
                          be modified after creation."
                .to_owned(),
        }],
    }
}
