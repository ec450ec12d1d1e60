use super::*;

#[test]
fn test_salary_from_dedicated_class() {
    let html = r#"<html><body><div class="salary">£85,000 per week</div></body></html>"#;
    let data = extract_player(html);
    assert_eq!(data.weekly_salary, 85000.0);
}

#[test]
fn test_salary_cascade_falls_back_to_bare_span() {
    let html = r#"<html><body>
        <span class="unrelated">nothing here</span>
        <span>€120,000</span>
    </body></html>"#;
    let data = extract_player(html);
    assert_eq!(data.weekly_salary, 120000.0);
}

#[test]
fn test_salary_requires_currency_symbol() {
    let html = r#"<html><body><div class="salary">85000</div></body></html>"#;
    let data = extract_player(html);
    assert_eq!(data.weekly_salary, 0.0);
}

#[test]
fn test_salary_skips_zero_amounts() {
    let html = r#"<html><body>
        <div class="salary">£0</div>
        <div class="wage">£45,000</div>
    </body></html>"#;
    let data = extract_player(html);
    assert_eq!(data.weekly_salary, 45000.0);
}

#[test]
fn test_club_extraction() {
    let html = r#"<html><body><span class="club-name">Inter Miami</span></body></html>"#;
    let data = extract_player(html);
    assert_eq!(data.club.as_deref(), Some("Inter Miami"));
}

#[test]
fn test_club_rejects_breadcrumb_noise() {
    let html = r#"<html><body>
        <div class="breadcrumb"><a href="/">Home</a></div>
    </body></html>"#;
    let data = extract_player(html);
    assert_eq!(data.club, None);

    let html = r#"<html><body>
        <div class="breadcrumb"><a href="/">Home</a></div>
        <span class="team-name">Arsenal</span>
    </body></html>"#;
    let data = extract_player(html);
    assert_eq!(data.club.as_deref(), Some("Arsenal"));
}

#[test]
fn test_club_rejects_short_text() {
    let html = r#"<html><body><span class="club-name">AB</span></body></html>"#;
    let data = extract_player(html);
    assert_eq!(data.club, None);
}

#[test]
fn test_league_extraction() {
    let html = r#"<html><body><span class="league-name">Premier League</span></body></html>"#;
    let data = extract_player(html);
    assert_eq!(data.league.as_deref(), Some("Premier League"));
}

#[test]
fn test_empty_document_yields_nothing() {
    let data = extract_player("<html><body></body></html>");
    assert_eq!(data, ScrapedPlayer::default());
    assert!(!data.has_data());
}

#[test]
fn test_has_data_criteria() {
    let salary_only = ScrapedPlayer {
        weekly_salary: 1000.0,
        ..Default::default()
    };
    assert!(salary_only.has_data());

    let club_only = ScrapedPlayer {
        club: Some("Chelsea".to_string()),
        ..Default::default()
    };
    assert!(club_only.has_data());

    let league_only = ScrapedPlayer {
        league: Some("La Liga".to_string()),
        ..Default::default()
    };
    assert!(!league_only.has_data());
}
