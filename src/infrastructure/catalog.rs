//! Embedded seed catalogs for the demo apps.
//!
//! The storefront and job board open on pre-populated listings; the portfolio
//! shows a fixed profile. All of it ships inside the binary as JSON and is
//! decoded once at startup.

use thiserror::Error;

use crate::domain::{Job, Product, Profile};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed seed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub struct SeedCatalog;

impl SeedCatalog {
    pub fn products() -> Result<Vec<Product>, CatalogError> {
        Ok(serde_json::from_str(PRODUCT_SEED)?)
    }

    pub fn jobs() -> Result<Vec<Job>, CatalogError> {
        Ok(serde_json::from_str(JOB_SEED)?)
    }

    pub fn profile() -> Result<Profile, CatalogError> {
        Ok(serde_json::from_str(PROFILE_SEED)?)
    }
}

const PRODUCT_SEED: &str = r#"[
  {
    "id": "p1",
    "name": "Wireless Bluetooth Headphones",
    "category": "Electronics",
    "price": 79.99,
    "description": "Immersive sound with active noise cancellation and comfortable earcups. Long-lasting battery life for all-day listening.",
    "in_stock": 15
  },
  {
    "id": "p2",
    "name": "Smartwatch Fitness Tracker",
    "category": "Electronics",
    "price": 129.99,
    "description": "Track your steps, heart rate, and sleep. Receive notifications and control music from your wrist. Water-resistant design.",
    "in_stock": 10
  },
  {
    "id": "p3",
    "name": "Ergonomic Office Chair",
    "category": "Home & Office",
    "price": 249.99,
    "description": "Designed for comfort and support during long working hours. Adjustable features for personalized seating.",
    "in_stock": 5
  },
  {
    "id": "p4",
    "name": "Stainless Steel Water Bottle",
    "category": "Accessories",
    "price": 19.99,
    "description": "Keeps drinks cold for 24 hours or hot for 12 hours. Eco-friendly and durable for everyday use.",
    "in_stock": 50
  },
  {
    "id": "p5",
    "name": "Portable SSD 1TB",
    "category": "Electronics",
    "price": 99.99,
    "description": "Ultra-fast external storage for all your files. Compact and lightweight, made for on-the-go professionals.",
    "in_stock": 8
  },
  {
    "id": "p6",
    "name": "Organic Coffee Beans (1lb)",
    "category": "Food & Beverage",
    "price": 15.50,
    "description": "Premium organic coffee beans, freshly roasted for a rich and aromatic brew. Sustainably sourced.",
    "in_stock": 30
  }
]"#;

const JOB_SEED: &str = r#"[
  {
    "id": "1",
    "title": "Frontend Developer",
    "company": "Tech Solutions Inc.",
    "location": "Remote",
    "employment_type": "Full-time",
    "salary": "$80,000 - $100,000",
    "description": "We are looking for a passionate frontend developer to join our dynamic team. You will build and ship user interface components and care about responsive design.",
    "requirements": [
      "3+ years of experience building user interfaces",
      "Strong proficiency in HTML, CSS, and JavaScript",
      "Experience with RESTful APIs",
      "Familiarity with version control (Git)",
      "Excellent problem-solving skills"
    ],
    "posted": "2025-07-20"
  },
  {
    "id": "2",
    "title": "Backend Engineer",
    "company": "Innovate Co.",
    "location": "New York, NY",
    "employment_type": "Full-time",
    "salary": "$95,000 - $120,000",
    "description": "Join our backend team to build scalable and robust server-side applications. You will design and implement APIs; knowledge of cloud platforms is a plus.",
    "requirements": [
      "5+ years of server-side development experience",
      "Proficiency in MongoDB or PostgreSQL",
      "Strong understanding of API design and development",
      "Experience with microservices architecture",
      "Bachelor's degree in Computer Science or related field"
    ],
    "posted": "2025-07-18"
  },
  {
    "id": "3",
    "title": "UI/UX Designer",
    "company": "Creative Studio",
    "location": "San Francisco, CA",
    "employment_type": "Contract",
    "salary": "$60/hr - $80/hr",
    "description": "We are seeking a talented designer to create intuitive interfaces. You will collaborate with product managers and engineers on direction, visuals, and experience.",
    "requirements": [
      "Portfolio showcasing strong UI/UX design skills",
      "Proficiency in Figma, Sketch, or Adobe XD",
      "Experience with user research and usability testing",
      "Understanding of front-end development principles",
      "Excellent communication and collaboration skills"
    ],
    "posted": "2025-07-22"
  },
  {
    "id": "4",
    "title": "Data Scientist",
    "company": "Data Insights LLC",
    "location": "Remote",
    "employment_type": "Full-time",
    "salary": "$110,000 - $140,000",
    "description": "Lead data-driven initiatives to uncover insights and build predictive models. You will work with large datasets, machine learning, and visualization tools.",
    "requirements": [
      "Master's or Ph.D. in a quantitative field",
      "Strong programming skills in Python",
      "Experience with SQL and data warehousing",
      "Knowledge of statistical modeling and machine learning",
      "Excellent analytical and communication skills"
    ],
    "posted": "2025-07-15"
  }
]"#;

const PROFILE_SEED: &str = r#"{
  "name": "Himanshu Sharma",
  "roles": ["Full Stack Developer", "Cloud Enthusiast", "Open Source Contributor"],
  "summary": "Developer with a focus on building clean, reliable web applications end to end, from data models to polished interfaces.",
  "skills": [
    { "name": "JavaScript / TypeScript", "level": 90 },
    { "name": "React", "level": 85 },
    { "name": "Node.js", "level": 80 },
    { "name": "Python", "level": 75 },
    { "name": "AWS", "level": 70 },
    { "name": "Databases (SQL / NoSQL)", "level": 75 }
  ],
  "experiences": [
    {
      "role": "Software Engineer",
      "company": "Acme Web Labs",
      "period": "2023 - Present",
      "summary": "Ships customer-facing features across the stack and owns the internal component library."
    },
    {
      "role": "Junior Developer",
      "company": "BrightApps",
      "period": "2021 - 2023",
      "summary": "Built dashboards and REST integrations for small-business clients."
    },
    {
      "role": "Engineering Intern",
      "company": "StartUpHub",
      "period": "2020 - 2021",
      "summary": "Prototyped single-page demo applications used in sales engagements."
    }
  ],
  "certifications": [
    "AWS Certified Cloud Practitioner",
    "Meta Front-End Developer Certificate",
    "MongoDB Associate Developer"
  ],
  "email": "himanshu@example.dev",
  "location": "Bengaluru, India"
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_seed_decodes() {
        let products = SeedCatalog::products().unwrap();
        assert_eq!(products.len(), 6);
        assert_eq!(products[0].id, "p1");
        assert!((products[0].price - 79.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_job_seed_decodes() {
        let jobs = SeedCatalog::jobs().unwrap();
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs[1].company, "Innovate Co.");
        assert_eq!(jobs[1].requirements.len(), 5);
    }

    #[test]
    fn test_profile_seed_decodes() {
        let profile = SeedCatalog::profile().unwrap();
        assert_eq!(profile.roles.len(), 3);
        assert!(!profile.skills.is_empty());
    }
}
