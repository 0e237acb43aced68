use chrono::NaiveDate;
use giftwise_core::db::open_db_in_memory;
use giftwise_core::{
    submit_onboarding, EventKind, EventRepository, MilestoneInput, OnboardingDraft,
    OnboardingError, PersonRepository, ProfileRepository, Relationship, RepoError,
    SocialAccountInput, SocialAccountRepository, SqliteEventRepository, SqlitePersonRepository,
    SqliteProfileRepository, SqliteSocialAccountRepository,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn full_draft() -> OnboardingDraft {
    OnboardingDraft {
        name: "Alice".to_string(),
        relationship: Some(Relationship::BestFriend),
        birthday: Some(date(1990, 9, 20)),
        interests: vec!["Hiking".to_string(), "Coffee".to_string()],
        milestones: vec![
            MilestoneInput {
                kind: EventKind::Anniversary,
                date: date(2015, 2, 14),
            },
            MilestoneInput {
                kind: EventKind::NameDay,
                date: date(2000, 5, 3),
            },
        ],
        social_accounts: vec![SocialAccountInput {
            platform: "Instagram".to_string(),
            url: "https://instagram.com/alice.gifts".to_string(),
        }],
    }
}

#[test]
fn submit_creates_person_profile_events_and_accounts() {
    let mut conn = open_db_in_memory().unwrap();

    let outcome = submit_onboarding(&mut conn, &full_draft()).unwrap();
    assert!(outcome.profile_created);
    assert_eq!(outcome.events_created, 3);
    assert_eq!(outcome.accounts_created, 1);

    let people = SqlitePersonRepository::try_new(&conn).unwrap();
    let person = people.get_person(outcome.person_id).unwrap().unwrap();
    assert_eq!(person.name, "Alice");
    assert_eq!(person.birthday, Some(date(1990, 9, 20)));
    assert_eq!(person.relationship, Some(Relationship::BestFriend));

    let profiles = SqliteProfileRepository::try_new(&conn).unwrap();
    let profile = profiles
        .get_profile_by_person(outcome.person_id)
        .unwrap()
        .unwrap();
    assert_eq!(profile.interests, vec!["Hiking", "Coffee"]);

    let events = SqliteEventRepository::try_new(&conn).unwrap();
    let stored = events.list_events_by_person(outcome.person_id).unwrap();
    let titles: Vec<&str> = stored.iter().map(|e| e.title.as_str()).collect();
    assert!(titles.contains(&"Alice's Birthday"));
    assert!(titles.contains(&"Anniversary"));
    assert!(titles.contains(&"Name Day"));

    let accounts = SqliteSocialAccountRepository::try_new(&conn).unwrap();
    let stored = accounts.list_active_by_person(outcome.person_id).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].platform, "instagram");
    assert_eq!(stored[0].username, "alice.gifts");
    assert!(stored[0].is_active);
}

#[test]
fn submit_without_name_is_rejected_before_storage() {
    let mut conn = open_db_in_memory().unwrap();

    let mut draft = full_draft();
    draft.name = "   ".to_string();

    let err = submit_onboarding(&mut conn, &draft).unwrap_err();
    assert!(matches!(err, OnboardingError::MissingName));

    let people = SqlitePersonRepository::try_new(&conn).unwrap();
    assert!(people.list_people().unwrap().is_empty());
}

#[test]
fn submit_without_interests_skips_profile() {
    let mut conn = open_db_in_memory().unwrap();

    let mut draft = full_draft();
    draft.interests = vec!["  ".to_string()];

    let outcome = submit_onboarding(&mut conn, &draft).unwrap();
    assert!(!outcome.profile_created);

    let profiles = SqliteProfileRepository::try_new(&conn).unwrap();
    assert!(profiles
        .get_profile_by_person(outcome.person_id)
        .unwrap()
        .is_none());
}

#[test]
fn submit_without_birthday_creates_no_birthday_event() {
    let mut conn = open_db_in_memory().unwrap();

    let mut draft = full_draft();
    draft.birthday = None;

    let outcome = submit_onboarding(&mut conn, &draft).unwrap();
    assert_eq!(outcome.events_created, 2);

    let events = SqliteEventRepository::try_new(&conn).unwrap();
    let stored = events.list_events_by_person(outcome.person_id).unwrap();
    assert!(stored.iter().all(|e| e.kind != EventKind::Birthday));
}

#[test]
fn failed_submit_leaves_no_partial_person() {
    let mut conn = open_db_in_memory().unwrap();

    // Duplicate platform violates the (person, platform) uniqueness rule on
    // the last insert step; everything before it must roll back too.
    let mut draft = full_draft();
    draft.social_accounts.push(SocialAccountInput {
        platform: "instagram".to_string(),
        url: "https://instagram.com/alice.other".to_string(),
    });

    let err = submit_onboarding(&mut conn, &draft).unwrap_err();
    assert!(matches!(
        err,
        OnboardingError::Repo(RepoError::AlreadyExists(_))
    ));

    let people = SqlitePersonRepository::try_new(&conn).unwrap();
    assert!(people.list_people().unwrap().is_empty());

    let events = SqliteEventRepository::try_new(&conn).unwrap();
    assert!(events.list_events().unwrap().is_empty());
}

#[test]
fn draft_reset_returns_to_blank_state() {
    let mut draft = full_draft();
    draft.reset();
    assert_eq!(draft, OnboardingDraft::default());
}
