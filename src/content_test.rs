use super::*;

#[test]
fn nav_sections_are_unique_and_lowercase_anchors() {
    for (i, section) in NAV_SECTIONS.iter().enumerate() {
        assert!(!section.is_empty());
        assert_eq!(*section, section.to_lowercase());
        assert!(!section.contains(' '));
        assert!(!NAV_SECTIONS[..i].contains(section), "duplicate section {section}");
    }
}

#[test]
fn profile_fields_are_filled_in() {
    assert!(!PROFILE.name.is_empty());
    assert!(PROFILE.email.contains('@'));
    assert!(PROFILE.phone.starts_with('+'));
    assert!(PROFILE.cv_href.ends_with(".pdf"));
}

#[test]
fn every_skill_group_has_skills() {
    for group in &SKILL_GROUPS {
        assert!(!group.title.is_empty());
        assert!(!group.skills.is_empty(), "{} has no skills", group.title);
    }
}

#[test]
fn every_project_is_presentable() {
    for project in &PROJECTS {
        assert!(!project.title.is_empty());
        assert!(!project.description.is_empty());
        assert!(!project.technologies.is_empty(), "{} has no tags", project.title);
        assert!(project.live_url.starts_with("https://"), "{}", project.live_url);
    }
}

#[test]
fn social_links_point_at_https_profiles() {
    for link in &SOCIAL_LINKS {
        assert!(link.href.starts_with("https://"), "{}", link.label);
    }
}

#[test]
fn contact_channels_link_where_actionable() {
    let email = &CONTACT_CHANNELS[0];
    assert_eq!(email.href, Some("mailto:sourovmmoysanju@gmail.com"));
    let phone = &CONTACT_CHANNELS[1];
    assert!(phone.href.is_some_and(|h| h.starts_with("tel:")));
    let location = &CONTACT_CHANNELS[2];
    assert_eq!(location.href, None);
}
