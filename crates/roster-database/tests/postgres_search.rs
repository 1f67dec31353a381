//! Member search against a live PostgreSQL database.
//!
//! Runs only when `ROSTER_TEST_DATABASE_URL` points at a disposable
//! database; the tables are truncated first.

use std::sync::Arc;

use roster_core::config::DatabaseConfig;
use roster_core::error::ErrorKind;
use roster_core::types::{CountStrategy, PageRequest, SortField, TeamId};
use roster_database::migration::run_migrations;
use roster_database::{MemberRepository, PgStore, TeamRepository, connect};
use roster_entity::member::CreateMember;
use roster_entity::search::MemberSearchCondition;

async fn setup() -> Option<(MemberRepository, TeamRepository)> {
    let Ok(url) = std::env::var("ROSTER_TEST_DATABASE_URL") else {
        eprintln!("ROSTER_TEST_DATABASE_URL not set, skipping");
        return None;
    };
    let config = DatabaseConfig {
        url,
        max_connections: 2,
        ..DatabaseConfig::default()
    };
    let pool = connect(&config)
        .await
        .expect("Failed to connect to test database");
    run_migrations(&pool).await.expect("Failed to run migrations");
    sqlx::query("TRUNCATE member, team RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to clean database");

    let store = Arc::new(PgStore::new(pool));
    let members = MemberRepository::new(store.clone(), CountStrategy::default());
    let teams = TeamRepository::new(store);

    let team_a = teams.create("teamA").await.unwrap();
    let team_b = teams.create("teamB").await.unwrap();
    for (name, age, team) in [
        ("member1", 10, team_a.id),
        ("member2", 20, team_a.id),
        ("member3", 30, team_b.id),
        ("member4", 40, team_b.id),
    ] {
        members
            .create(&CreateMember::in_team(name, age, team))
            .await
            .unwrap();
    }
    Some((members, teams))
}

// Both scenarios share one test so parallel test threads never truncate
// under each other.
#[tokio::test]
async fn test_postgres_member_search() {
    let Some((members, teams)) = setup().await else {
        return;
    };

    let condition = MemberSearchCondition::new()
        .age_goe(35)
        .age_loe(40)
        .team_name("teamB");
    let page = members
        .search_page_simple(&condition, &PageRequest::new(0, 10))
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.content[0].username.as_deref(), Some("member4"));
    assert_eq!(page.content[0].team_name.as_deref(), Some("teamB"));

    let page = members
        .search_page_optimized(&MemberSearchCondition::new(), &PageRequest::new(0, 3))
        .await
        .unwrap();
    assert_eq!(page.content.len(), 3);
    assert_eq!(page.total_count, 4);

    members.create(&CreateMember::new("loner", 50)).await.unwrap();
    members.create(&CreateMember::anonymous(100)).await.unwrap();
    members.create(&CreateMember::new("member5", 100)).await.unwrap();

    let all = members.search(&MemberSearchCondition::new()).await.unwrap();
    assert_eq!(all.len(), 7);
    assert_eq!(all[4].team_name, None);

    let sorted = members
        .search_page_simple(
            &MemberSearchCondition::new().age_goe(100),
            &PageRequest::new(0, 10).with_sort(vec![
                SortField::desc("age"),
                SortField::asc("username").nulls_last(),
            ]),
        )
        .await
        .unwrap();
    let names: Vec<Option<&str>> = sorted
        .content
        .iter()
        .map(|r| r.username.as_deref())
        .collect();
    assert_eq!(names, vec![Some("member5"), None]);

    let graphs = members
        .search_with_team(&MemberSearchCondition::new().team_name("teamA"))
        .await
        .unwrap();
    assert_eq!(graphs.len(), 2);
    assert_eq!(graphs[0].team, teams.find_by_name("teamA").await.unwrap());

    let err = members
        .create(&CreateMember::in_team("ghost", 1, TeamId(9_999)))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
}
