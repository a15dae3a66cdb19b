//! Static catalogs offered to the frontend pickers.
//!
//! GET /api/roles   - Interviewable roles
//! GET /api/domains - Industry domains

use axum::Json;
use serde_json::{json, Value};

/// Roles the interview generator has question coverage for.
const ROLES: [&str; 15] = [
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "UX Designer",
    "DevOps Engineer",
    "Machine Learning Engineer",
    "Full Stack Developer",
    "Backend Developer",
    "Frontend Developer",
    "Mobile Developer",
    "Cloud Architect",
    "Cybersecurity Analyst",
    "Business Analyst",
    "Project Manager",
    "Technical Lead",
];

const DOMAINS: [&str; 15] = [
    "Technology",
    "Finance",
    "Healthcare",
    "E-commerce",
    "Education",
    "Gaming",
    "Social Media",
    "IoT",
    "Blockchain",
    "AI/ML",
    "Cybersecurity",
    "Cloud Computing",
    "Mobile Development",
    "Web Development",
    "Data Analytics",
];

/// GET /api/roles - List available roles.
pub async fn list_roles() -> Json<Value> {
    Json(json!({ "roles": ROLES }))
}

/// GET /api/domains - List available domains.
pub async fn list_domains() -> Json<Value> {
    Json(json!({ "domains": DOMAINS }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalogs_are_nonempty_and_wrapped() {
        let roles = list_roles().await.0;
        assert_eq!(roles["roles"].as_array().unwrap().len(), 15);

        let domains = list_domains().await.0;
        assert_eq!(domains["domains"].as_array().unwrap().len(), 15);
        assert_eq!(domains["domains"][0], "Technology");
    }
}
