use giftwise_core::db::open_db_in_memory;
use giftwise_core::{
    Event, EventKind, EventRepository, Person, PersonRepository, PersonService, Relationship,
    RepoError, SqliteEventRepository, SqlitePersonRepository,
};
use rusqlite::Connection;

fn birthday(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let mut person = Person::new("Alice");
    person.birthday = Some(birthday(1990, 9, 20));
    person.relationship = Some(Relationship::BestFriend);
    person.notes = Some("loves hiking".to_string());
    let id = repo.create_person(&person).unwrap();

    let loaded = repo.get_person(id).unwrap().unwrap();
    assert_eq!(loaded, person);
}

#[test]
fn list_people_sorts_by_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    repo.create_person(&Person::new("Maya")).unwrap();
    repo.create_person(&Person::new("Ben")).unwrap();
    repo.create_person(&Person::new("Zoe")).unwrap();

    let names: Vec<String> = repo
        .list_people()
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Ben", "Maya", "Zoe"]);
}

#[test]
fn update_existing_person() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let mut person = Person::new("Alice");
    repo.create_person(&person).unwrap();

    person.name = "Alice Cooper".to_string();
    person.relationship = Some(Relationship::Colleague);
    repo.update_person(&person).unwrap();

    let loaded = repo.get_person(person.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Alice Cooper");
    assert_eq!(loaded.relationship, Some(Relationship::Colleague));
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let person = Person::new("Ghost");
    let err = repo.update_person(&person).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == person.id));
}

#[test]
fn blank_name_blocks_create_and_update() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let blank = Person::new("   ");
    let err = repo.create_person(&blank).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let mut person = Person::new("Alice");
    repo.create_person(&person).unwrap();
    person.name = String::new();
    let err = repo.update_person(&person).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn delete_person_cascades_to_events() {
    let conn = open_db_in_memory().unwrap();
    let people = SqlitePersonRepository::try_new(&conn).unwrap();
    let events = SqliteEventRepository::try_new(&conn).unwrap();

    let person = Person::new("Alice");
    people.create_person(&person).unwrap();
    events
        .create_event(&Event::new(
            person.id,
            "Alice's Birthday",
            birthday(2025, 9, 20),
            EventKind::Birthday,
        ))
        .unwrap();

    people.delete_person(person.id).unwrap();

    assert!(people.get_person(person.id).unwrap().is_none());
    assert!(events.list_events_by_person(person.id).unwrap().is_empty());
}

#[test]
fn delete_missing_person_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let ghost = Person::new("Ghost");
    let err = repo.delete_person(ghost.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == ghost.id));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let service = PersonService::new(repo);

    let person = Person::new("Frank");
    let id = service.create_person(&person).unwrap();

    let fetched = service.get_person(id).unwrap().unwrap();
    assert_eq!(fetched.name, "Frank");

    let (loaded, profile) = service.get_person_with_profile(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert!(profile.is_none());
}

#[test]
fn corrupt_relationship_value_surfaces_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let person = Person::new("Alice");
    repo.create_person(&person).unwrap();
    conn.execute(
        "UPDATE people SET relationship = 'nemesis' WHERE id = ?1;",
        [person.id.to_string()],
    )
    .unwrap();

    let err = repo.get_person(person.id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn corrupt_person_id_surfaces_invalid_data_on_list() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    conn.execute(
        "INSERT INTO people (id, name) VALUES ('not-a-uuid', 'Ghost');",
        [],
    )
    .unwrap();

    let err = repo.list_people().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqlitePersonRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => {
            assert!(expected_version > 0);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("uninitialized connection must be rejected"),
    }
}
