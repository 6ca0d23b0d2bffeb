//! Static promotional content rendered read-only by the landing page.

#[derive(Clone, Copy, PartialEq)]
pub struct CurriculumDay {
    pub day: u8,
    pub title: &'static str,
    pub category: &'static str,
    pub milestone: bool,
}

pub const CURRICULUM: [CurriculumDay; 30] = [
    // Week 1 - Foundation & Python basics
    CurriculumDay { day: 1, title: "What is AI & Machine Learning? Real-world applications & career paths", category: "introduction", milestone: false },
    CurriculumDay { day: 2, title: "Python Essentials for ML: Variables, Data Types, Loops, and Functions", category: "python", milestone: false },
    CurriculumDay { day: 3, title: "Working with Data: NumPy, Pandas, and Jupyter Notebook Basics", category: "python", milestone: false },
    CurriculumDay { day: 4, title: "Data Cleaning & Preprocessing: Handling Missing Values & Outliers", category: "data", milestone: false },
    CurriculumDay { day: 5, title: "Data Visualization using Matplotlib & Seaborn", category: "data", milestone: false },
    CurriculumDay { day: 6, title: "Mini Project 1 – Analyze & visualize Titanic dataset", category: "project", milestone: true },
    // Week 2 - Supervised learning (classification)
    CurriculumDay { day: 7, title: "Understanding Supervised Learning: Classification vs Regression", category: "supervised", milestone: false },
    CurriculumDay { day: 8, title: "Logistic Regression: Predicting Customer Purchase Behavior", category: "supervised", milestone: false },
    CurriculumDay { day: 9, title: "K-Nearest Neighbors: Classify Iris Flower Species", category: "supervised", milestone: false },
    CurriculumDay { day: 10, title: "Naive Bayes: Spam vs Non-Spam Email Classifier", category: "supervised", milestone: false },
    CurriculumDay { day: 11, title: "Decision Tree: Predict Student Exam Results", category: "supervised", milestone: false },
    CurriculumDay { day: 12, title: "Random Forest: Credit Card Fraud Detection", category: "supervised", milestone: false },
    CurriculumDay { day: 13, title: "Model Evaluation: Accuracy, Precision, Recall, F1-Score", category: "evaluation", milestone: false },
    CurriculumDay { day: 14, title: "Mini Project 2 – Titanic Survival Prediction (End-to-End)", category: "project", milestone: true },
    // Week 3 - Supervised learning (regression)
    CurriculumDay { day: 15, title: "Linear Regression: Predict House Prices (Single Feature)", category: "supervised", milestone: false },
    CurriculumDay { day: 16, title: "Multiple Linear Regression: Salary Prediction (Multi Features)", category: "supervised", milestone: false },
    CurriculumDay { day: 17, title: "Polynomial Regression: Predicting Car Prices", category: "supervised", milestone: false },
    CurriculumDay { day: 18, title: "Support Vector Regression: Stock Price Forecasting", category: "supervised", milestone: false },
    CurriculumDay { day: 19, title: "Regression Model Evaluation: RMSE, R² Score", category: "evaluation", milestone: false },
    CurriculumDay { day: 20, title: "Mini Project 3 – Predict Laptop Prices (Real Dataset)", category: "project", milestone: true },
    // Week 4 - Advanced ML (unsupervised, RL, NLP)
    CurriculumDay { day: 21, title: "Unsupervised Learning: Intro to Clustering & Dimensionality Reduction", category: "unsupervised", milestone: false },
    CurriculumDay { day: 22, title: "K-Means Clustering: Customer Segmentation", category: "unsupervised", milestone: false },
    CurriculumDay { day: 23, title: "Hierarchical Clustering: Market Segmentation", category: "unsupervised", milestone: false },
    CurriculumDay { day: 24, title: "PCA (Principal Component Analysis): Visualizing High-Dimensional Data", category: "unsupervised", milestone: false },
    CurriculumDay { day: 25, title: "Association Rule Mining: Market Basket Analysis (Apriori)", category: "unsupervised", milestone: false },
    CurriculumDay { day: 26, title: "Reinforcement Learning: Intro with Upper Confidence Bound (UCB)", category: "reinforcement", milestone: false },
    CurriculumDay { day: 27, title: "Natural Language Processing (NLP) Basics: Tokenization & Bag of Words", category: "nlp", milestone: false },
    CurriculumDay { day: 28, title: "Sentiment Analysis: Classify Movie Reviews (Positive/Negative)", category: "nlp", milestone: false },
    CurriculumDay { day: 29, title: "End-to-End Project: Build a Spam Email Classifier (NLP)", category: "project", milestone: true },
    CurriculumDay { day: 30, title: "Capstone Project: Build Your Own ML Model & Present", category: "capstone", milestone: true },
];

#[derive(Clone, Copy, PartialEq)]
pub struct ProjectWeek {
    pub title: &'static str,
    pub problem: &'static str,
    pub aligns_with: &'static str,
    pub datasets: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub deliverables: &'static [&'static str],
}

pub const EXTRA_WEEKS: [ProjectWeek; 4] = [
    ProjectWeek {
        title: "Week A — Customer Churn Prediction (Classification)",
        problem: "Predict whether a user will churn in the next 30 days using demographics, usage, and support tickets.",
        aligns_with: "Logistic Regression, KNN, Decision Tree, Random Forest, Model Metrics",
        datasets: &["Telco Customer Churn", "App retention logs", "CRM exports (anonymized)"],
        skills: &["EDA & feature engineering", "Imbalanced data handling (SMOTE)", "Model comparison", "Explainability (SHAP)"],
        deliverables: &["ROC/AUC report", "Top churn drivers", "Actionable retention playbook"],
    },
    ProjectWeek {
        title: "Week B — Dynamic Pricing / Sales Forecasting (Regression)",
        problem: "Forecast weekly sales and simulate price elasticity to recommend best pricing.",
        aligns_with: "Linear/Multiple/Polynomial Regression, SVR, Regression metrics",
        datasets: &["Retail sales with price & promo", "Holiday calendar", "Competitor index"],
        skills: &["Feature creation (lags, rolling means)", "Cross-validation", "Error analysis"],
        deliverables: &["Price vs demand curves", "Forecast with confidence bands", "Pricing recommendations"],
    },
    ProjectWeek {
        title: "Week C — Customer Segmentation + Market Basket (Unsupervised)",
        problem: "Group customers by behavior and mine item associations to improve cross-sell.",
        aligns_with: "K-Means, Hierarchical clustering, PCA, Apriori",
        datasets: &["Transactions (user, item, time, amount)", "Product taxonomy"],
        skills: &["Scaling & PCA", "Finding optimal K", "Association rules (support, confidence, lift)"],
        deliverables: &["Segment profiles", "Top bundles/combos", "Targeting plan per segment"],
    },
    ProjectWeek {
        title: "Week D — NLP Support Insights + Ad UCB (NLP & RL)",
        problem: "Analyze sentiment/themes in support tickets and optimize ad choices using UCB.",
        aligns_with: "BoW/TF-IDF, Sentiment classification, Topic cues, UCB multi-armed bandit",
        datasets: &["Support tickets or app reviews", "Ad performance logs"],
        skills: &["Text preprocessing", "Model evaluation (F1)", "UCB exploration-exploitation"],
        deliverables: &["Theme & sentiment dashboard", "UCB lift vs baseline", "Playbook for next quarter"],
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct BonusItem {
    pub id: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const BONUSES: [BonusItem; 5] = [
    BonusItem {
        id: 1,
        title: "Every Saturday LIVE Sessions",
        subtitle: "Morning and Evening at 7:00 PM",
        description: "Interactive live sessions every Saturday to clear your doubts and get personalized guidance",
        features: &["Live Q&A Sessions", "Doubt Clearing", "Career Guidance", "Industry Insights"],
    },
    BonusItem {
        id: 2,
        title: "30 Days Internship Assistance",
        subtitle: "Complete Support",
        description: "Comprehensive assistance throughout your 30-day internship journey",
        features: &["Project Guidance", "Resume Building", "Interview Preparation", "Portfolio Review"],
    },
    BonusItem {
        id: 3,
        title: "Lifetime Private Community Access",
        subtitle: "Up to 3000+ Courses",
        description: "Access to exclusive private community with 3000+ courses in different topics",
        features: &["3000+ Courses", "Networking", "Job Opportunities", "Lifetime Access"],
    },
    BonusItem {
        id: 4,
        title: "One To One Mentorship",
        subtitle: "Personalized Guidance",
        description: "Get personalized mentorship from industry experts to accelerate your learning",
        features: &["Expert Mentors", "Personalized Learning", "Career Guidance", "Flexible Schedule"],
    },
    BonusItem {
        id: 5,
        title: "Lifetime Private Community Access",
        subtitle: "Up to 3000+ Courses",
        description: "Access to exclusive private community with 3000+ courses in different topics",
        features: &["3000+ Courses", "Networking", "Job Opportunities", "Lifetime Access"],
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub rating: u8,
    pub review: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Rahul Sharma",
        role: "Data Analyst at TCS",
        rating: 5,
        review: "This internship completely transformed my career. The practical approach and live projects helped me land a job at TCS within 2 months of completion!",
        image: "https://images.pexels.com/photos/3785079/pexels-photo-3785079.jpeg",
    },
    Testimonial {
        name: "Priya Singh",
        role: "ML Engineer at Wipro",
        rating: 5,
        review: "Rajendra Mehta's teaching methodology is exceptional. The 30-day structured curriculum covered everything I needed to become job-ready in machine learning.",
        image: "https://images.pexels.com/photos/3831645/pexels-photo-3831645.jpeg",
    },
    Testimonial {
        name: "Arjun Kumar",
        role: "Data Scientist at Infosys",
        rating: 5,
        review: "The hands-on projects and real-world applications made learning so much easier. Highly recommend this program for anyone serious about data science!",
        image: "https://images.pexels.com/photos/4195342/pexels-photo-4195342.jpeg",
    },
    Testimonial {
        name: "Sneha Patel",
        role: "Business Analyst at Accenture",
        rating: 5,
        review: "The community support and lifetime access is incredible. Even after completing the internship, I continue to learn from the 3000+ additional courses.",
        image: "https://images.pexels.com/photos/3831849/pexels-photo-3831849.jpeg",
    },
];

pub const TARGET_AUDIENCE: [&str; 7] = [
    "Fresher",
    "Working in a company",
    "Students",
    "Professionals",
    "Faculty",
    "People with year gap",
    "Anyone who wants to master one of the most wanted & in-demand skill",
];

#[derive(Clone, Copy, PartialEq)]
pub struct InstructorStats {
    pub followers: &'static str,
    pub likes: &'static str,
    pub reviews: &'static str,
    pub students: &'static str,
}

pub const INSTRUCTOR_STATS: InstructorStats = InstructorStats {
    followers: "8,000+",
    likes: "51,000+",
    reviews: "2,500+",
    students: "15,000+",
};

pub const NEWS_ITEMS: [&str; 6] = [
    "🚀 Data Science jobs increased by 650% since 2012 - Harvard Business Review",
    "💰 Average Data Scientist salary: ₹12-25 LPA in India - PayScale",
    "📊 Data Analytics market expected to reach $77.6 billion by 2025 - Forbes",
    "🎯 Machine Learning engineers earn 40% more than average IT professionals",
    "🌟 LinkedIn ranked Data Scientist as #1 promising career for 3 consecutive years",
    "⚡ 90% of world's data was created in the last 2 years - IBM",
];

pub const FEATURE_BULLETS: [(&str, &str); 5] = [
    ("📋", "Complete Recordings of 30 Days With Materials"),
    ("🎓", "Internship Certification"),
    ("📺", "Unlimited Every Saturday Live Session"),
    ("👥", "Lifetime Private Community Access"),
    ("⚡", "Lifetime Course Validity"),
];

pub const EXPERTISE: [&str; 9] = [
    "Gen Ai",
    "Agentic Ai",
    "LLM",
    "Machine Learning",
    "Python",
    "Big Data",
    "Data Science",
    "AI/Deep Learning",
    "Project Management",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curriculum_covers_thirty_consecutive_days() {
        assert_eq!(CURRICULUM.len(), 30);
        for (i, entry) in CURRICULUM.iter().enumerate() {
            assert_eq!(entry.day as usize, i + 1);
        }
    }

    #[test]
    fn milestones_fall_on_project_days() {
        let milestones: Vec<u8> = CURRICULUM
            .iter()
            .filter(|d| d.milestone)
            .map(|d| d.day)
            .collect();
        assert_eq!(milestones, vec![6, 14, 20, 29, 30]);
    }

    #[test]
    fn every_day_carries_a_known_category_tag() {
        // Categories become CSS class names and visible row labels, so they
        // must stay lowercase and within the styled set.
        const STYLED: [&str; 10] = [
            "introduction",
            "python",
            "data",
            "project",
            "supervised",
            "evaluation",
            "unsupervised",
            "reinforcement",
            "nlp",
            "capstone",
        ];
        for entry in &CURRICULUM {
            assert!(
                STYLED.contains(&entry.category),
                "day {} has unstyled category {:?}",
                entry.day,
                entry.category
            );
        }
    }

    #[test]
    fn every_project_week_lists_deliverables() {
        for week in &EXTRA_WEEKS {
            assert!(!week.datasets.is_empty());
            assert!(!week.skills.is_empty());
            assert!(!week.deliverables.is_empty());
        }
    }
}
