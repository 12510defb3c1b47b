use super::Profile;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_bundled_profile_is_complete() {
    let profile = Profile::bundled();

    assert_eq!(profile.experience.len(), 4);
    assert_eq!(profile.projects.len(), 2);
    assert_eq!(profile.skills.len(), 4);
    assert_eq!(profile.education.len(), 1);
    assert_eq!(profile.contact.len(), 4);

    for role in &profile.experience {
        assert!(!role.bullets.is_empty(), "{} has no bullets", role.employer);
    }
    for project in &profile.projects {
        assert!(!project.methodology.is_empty());
        assert!(!project.results.is_empty());
    }
}

#[test]
fn test_contact_targets_use_link_schemes() {
    let profile = Profile::bundled();

    for link in &profile.contact {
        assert!(
            link.target.starts_with("tel:")
                || link.target.starts_with("mailto:")
                || link.target.starts_with("https://"),
            "unexpected link target: {}",
            link.target
        );
    }
}

#[test]
fn test_exported_json_round_trips() {
    let profile = Profile::bundled();
    let json = serde_json::to_string_pretty(&profile).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{json}").unwrap();

    let read_back = fs::read_to_string(file.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&read_back).unwrap();

    assert_eq!(value, serde_json::to_value(&profile).unwrap());
    assert_eq!(value["projects"][1]["title"], "Power BI Airline Dashboard");
    assert_eq!(value["contact"][0]["target"], "tel:+13477017393");
}
