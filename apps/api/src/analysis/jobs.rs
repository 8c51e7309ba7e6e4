//! Job Suggester — maps a resolved résumé skill set to candidate role titles.

use std::collections::BTreeSet;

/// Role rules: a title is suggested when the skill set contains at least one
/// of its trigger skills. Triggers are normalized forms; table order is the
/// suggestion order.
const ROLE_RULES: &[(&str, &[&str])] = &[
    (
        "Backend Developer",
        &[
            "Python",
            "Java",
            "Go",
            "Node.Js",
            "Django",
            "Flask",
            "Spring",
            "Rest Api",
            "Graphql",
            "Microservices",
        ],
    ),
    (
        "Frontend Developer",
        &["Javascript", "Typescript", "React", "Angular", "Vue"],
    ),
    (
        "Data Engineer",
        &["Sql", "Postgresql", "Mysql", "Mongodb", "Redis", "Elasticsearch"],
    ),
    (
        "Machine Learning Engineer",
        &["Machine Learning", "Deep Learning", "Nlp", "Tensorflow", "Pytorch"],
    ),
    (
        "DevOps Engineer",
        &["Docker", "Kubernetes", "Terraform", "Jenkins", "Ci/Cd", "Devops"],
    ),
    ("Cloud Engineer", &["Aws", "Azure", "Gcp", "Terraform"]),
    ("Systems Engineer", &["C++", "C#", "Rust", "Go"]),
];

/// Returns an ordered list of suggested job titles for a skill set.
/// Deterministic: rule-table order, with a generic fallback when skills
/// exist but no rule fires.
pub fn suggest_jobs(skills: &BTreeSet<String>) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();

    for (title, triggers) in ROLE_RULES {
        if triggers.iter().any(|t| skills.contains(*t)) {
            titles.push((*title).to_string());
        }
    }

    // Covering both sides of the stack earns the combined title too.
    let has = |t: &str| titles.iter().any(|x| x == t);
    if has("Backend Developer") && has("Frontend Developer") {
        titles.push("Full Stack Developer".to_string());
    }

    if titles.is_empty() && !skills.is_empty() {
        titles.push("Software Engineer".to_string());
    }

    titles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> BTreeSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_skill_set_suggests_nothing() {
        assert!(suggest_jobs(&set(&[])).is_empty());
    }

    #[test]
    fn test_python_suggests_backend() {
        let titles = suggest_jobs(&set(&["Python"]));
        assert_eq!(titles, vec!["Backend Developer"]);
    }

    #[test]
    fn test_react_suggests_frontend() {
        let titles = suggest_jobs(&set(&["React"]));
        assert_eq!(titles, vec!["Frontend Developer"]);
    }

    #[test]
    fn test_both_stack_sides_add_full_stack() {
        let titles = suggest_jobs(&set(&["Python", "React"]));
        assert!(titles.contains(&"Full Stack Developer".to_string()));
        assert!(titles.contains(&"Backend Developer".to_string()));
        assert!(titles.contains(&"Frontend Developer".to_string()));
    }

    #[test]
    fn test_terraform_triggers_devops_and_cloud() {
        let titles = suggest_jobs(&set(&["Terraform"]));
        assert_eq!(titles, vec!["DevOps Engineer", "Cloud Engineer"]);
    }

    #[test]
    fn test_unmapped_skills_fall_back_to_generic_title() {
        let titles = suggest_jobs(&set(&["Teamwork"]));
        assert_eq!(titles, vec!["Software Engineer"]);
    }

    #[test]
    fn test_order_follows_rule_table() {
        let titles = suggest_jobs(&set(&["Rust", "Sql", "Docker"]));
        assert_eq!(
            titles,
            vec!["Data Engineer", "DevOps Engineer", "Systems Engineer"]
        );
    }

    #[test]
    fn test_triggers_use_normalized_forms() {
        // Raw lowercase forms are not keys; only normalized forms fire.
        assert!(suggest_jobs(&set(&["python"])).contains(&"Software Engineer".to_string()));
        assert!(suggest_jobs(&set(&["Node.Js"])).contains(&"Backend Developer".to_string()));
    }
}
