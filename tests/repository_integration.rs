//! Integration tests for repository layer
//!
//! Each scenario is written once against the repository ports and run
//! against the in-memory store. The PostgreSQL variants need a database
//! reachable through `DATABASE_URL` and are ignored by default:
//!
//! ```text
//! DATABASE_URL=postgresql://... cargo test -- --ignored
//! ```

use roster_api::domain::member::{Member, MemberId, Username};
use roster_api::domain::repositories::{MemberRepository, RepositoryError, TeamRepository};
use roster_api::domain::team::{Team, TeamId};
use roster_api::infrastructure::database;
use roster_api::infrastructure::repositories::{
    InMemoryStore, PostgresMemberRepository, PostgresTeamRepository,
};
use sqlx::PgPool;

/// Set up test database connection pool with the schema applied
async fn setup_test_db() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    database::migrate(&pool)
        .await
        .expect("Failed to apply migrations");

    pool
}

fn member(name: &str) -> Member {
    Member::new(Username::new(name).expect("valid username"))
}

// ===== Scenarios =====

async fn team_save_and_find_by_id(teams: &dyn TeamRepository, members: &dyn MemberRepository) {
    let mut team = Team::new();
    teams.save(&mut team).await.expect("Failed to save team");

    let team_id = team.id().expect("id assigned on insert");
    assert_eq!(team.base().created_by(), Some("tester"));
    assert!(team.base().created_at().is_some());

    team.add_member(member("kim")).expect("kim joins");
    let kim = team.members_mut().last_mut().expect("kim in team");
    assert_eq!(kim.team_id(), Some(team_id));
    members.save(kim).await.expect("Failed to save member");
    let kim_id = kim.id().expect("member id");

    let found = teams
        .find_by_id(team_id)
        .await
        .expect("Failed to find team")
        .expect("Team should be found");

    assert_eq!(found.id(), Some(team_id));
    assert_eq!(found.members().len(), 1);
    assert_eq!(found.members()[0].username().as_str(), "kim");
    assert!(found.is_consistent());
    assert_eq!(
        found.to_string(),
        format!(
            "Team{{id={}, members=[Member{{id={}, username=kim}}]}}",
            team_id, kim_id
        )
    );

    members.delete(kim_id).await.expect("cleanup member");
    teams.delete(team_id).await.expect("cleanup team");
}

async fn relationship_changes_are_persisted(
    teams: &dyn TeamRepository,
    members: &dyn MemberRepository,
) {
    let mut first = Team::new();
    let mut second = Team::new();
    teams.save(&mut first).await.expect("save first");
    teams.save(&mut second).await.expect("save second");

    let mut lee = member("lee");
    members.save(&mut lee).await.expect("save lee");
    let lee_id = lee.id().expect("member id");

    // lee joins the first team
    first.add_member(lee).expect("lee joins");
    members
        .save(first.member_mut(lee_id).expect("lee in first"))
        .await
        .expect("persist join");

    // then moves to the second team
    let (lee, _) = first.remove_member(lee_id).expect("lee leaves");
    second.add_member(lee).expect("lee joins second");
    members
        .save(second.member_mut(lee_id).expect("lee in second"))
        .await
        .expect("persist move");

    let first_id = first.id().unwrap();
    let second_id = second.id().unwrap();

    let reloaded_first = teams.find_by_id(first_id).await.unwrap().unwrap();
    let reloaded_second = teams.find_by_id(second_id).await.unwrap().unwrap();
    assert!(reloaded_first.members().is_empty());
    assert_eq!(reloaded_second.members()[0].id(), Some(lee_id));

    let by_team = members.find_by_team(second_id).await.unwrap();
    assert_eq!(by_team.len(), 1);

    members.delete(lee_id).await.expect("cleanup member");
    teams.delete(first_id).await.expect("cleanup first");
    teams.delete(second_id).await.expect("cleanup second");
}

async fn member_with_missing_team_is_rejected(members: &dyn MemberRepository) {
    let mut ghost = member("ghost");
    ghost.set_team_id(Some(TeamId::new(i64::MAX)));

    let result = members.save(&mut ghost).await;

    assert!(
        matches!(result, Err(RepositoryError::Integrity(_))),
        "Expected integrity violation, got {:?}",
        result
    );
}

async fn saving_unknown_persistent_member_is_not_found(members: &dyn MemberRepository) {
    let mut stale = member("stale");
    stale.set_id(Some(MemberId::new(i64::MAX)));

    let err = members
        .save(&mut stale)
        .await
        .expect_err("update of a missing member must fail");

    assert!(err.is_not_found(), "Expected NotFound, got {:?}", err);
    assert!(stale.base().last_modified_by().is_none());
    assert!(stale.base().last_modified_at().is_none());
}

async fn deleting_team_orphans_members(
    teams: &dyn TeamRepository,
    members: &dyn MemberRepository,
) {
    let mut team = Team::new();
    teams.save(&mut team).await.expect("save team");
    let team_id = team.id().unwrap();

    let mut park = member("park");
    park.set_team_id(Some(team_id));
    members.save(&mut park).await.expect("save park");
    let park_id = park.id().unwrap();

    teams.delete(team_id).await.expect("delete team");

    assert!(teams.find_by_id(team_id).await.unwrap().is_none());
    let orphan = members.find_by_id(park_id).await.unwrap().unwrap();
    assert!(orphan.team_id().is_none());

    let again = teams.delete(team_id).await;
    assert!(again.unwrap_err().is_not_found());

    members.delete(park_id).await.expect("cleanup member");
}

async fn update_stamps_modified_only(teams: &dyn TeamRepository) {
    let mut team = Team::new();
    teams.save(&mut team).await.expect("insert");
    let created_at = team.base().created_at();

    teams.save(&mut team).await.expect("update");

    assert_eq!(team.base().created_at(), created_at);
    assert!(team.base().last_modified_at() >= created_at);

    teams.delete(team.id().unwrap()).await.expect("cleanup");
}

// ===== In-memory =====

#[tokio::test]
async fn test_in_memory_team_save_and_find_by_id() {
    let store = InMemoryStore::new("tester");
    team_save_and_find_by_id(&store, &store).await;
}

#[tokio::test]
async fn test_in_memory_relationship_changes_are_persisted() {
    let store = InMemoryStore::new("tester");
    relationship_changes_are_persisted(&store, &store).await;
}

#[tokio::test]
async fn test_in_memory_member_with_missing_team_is_rejected() {
    let store = InMemoryStore::new("tester");
    member_with_missing_team_is_rejected(&store).await;
}

#[tokio::test]
async fn test_in_memory_deleting_team_orphans_members() {
    let store = InMemoryStore::new("tester");
    deleting_team_orphans_members(&store, &store).await;
}

#[tokio::test]
async fn test_in_memory_update_stamps_modified_only() {
    let store = InMemoryStore::new("tester");
    update_stamps_modified_only(&store).await;
}

#[tokio::test]
async fn test_in_memory_saving_unknown_persistent_member_is_not_found() {
    let store = InMemoryStore::new("tester");
    saving_unknown_persistent_member_is_not_found(&store).await;
}

// ===== PostgreSQL =====

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_postgres_team_save_and_find_by_id() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool.clone(), "tester");
    let members = PostgresMemberRepository::new(pool, "tester");
    team_save_and_find_by_id(&teams, &members).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_postgres_relationship_changes_are_persisted() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool.clone(), "tester");
    let members = PostgresMemberRepository::new(pool, "tester");
    relationship_changes_are_persisted(&teams, &members).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_postgres_member_with_missing_team_is_rejected() {
    let pool = setup_test_db().await;
    let members = PostgresMemberRepository::new(pool, "tester");
    member_with_missing_team_is_rejected(&members).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_postgres_deleting_team_orphans_members() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool.clone(), "tester");
    let members = PostgresMemberRepository::new(pool, "tester");
    deleting_team_orphans_members(&teams, &members).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_postgres_update_stamps_modified_only() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool, "tester");
    update_stamps_modified_only(&teams).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_postgres_saving_unknown_persistent_member_is_not_found() {
    let pool = setup_test_db().await;
    let members = PostgresMemberRepository::new(pool, "tester");
    saving_unknown_persistent_member_is_not_found(&members).await;
}
