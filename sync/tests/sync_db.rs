//! Planning against a real episodes table.

use chrono::Utc;
use fireside_shared::db;
use fireside_shared::models::EpisodeInput;
use fireside_sync::plan::parse_dump;
use fireside_sync::plan_new_episodes;

const DUMP: &str = r#"{
    "entries": [
        {"id": "v1", "title": "Welcome to the Fire", "upload_date": "20240110"},
        {"id": "v2", "title": "Live Session", "upload_date": "20240111"},
        {"id": "v3", "title": "Live Session", "upload_date": "20240112"}
    ]
}"#;

#[tokio::test]
async fn sync_inserts_only_new_episodes() {
    let pool = db::create_memory_pool().await.unwrap();
    db::create_episode(
        &pool,
        EpisodeInput {
            title: "Welcome to the Fire".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let videos = parse_dump(DUMP).unwrap();
    let existing = db::episode_slugs(&pool).await.unwrap();
    let planned = plan_new_episodes(&videos, &existing, Utc::now());
    assert_eq!(planned.len(), 2);

    let inserted = db::insert_synced_episodes(&pool, &planned).await.unwrap();
    assert_eq!(inserted, 2);

    let episodes = db::list_episodes(&pool, None).await.unwrap();
    assert_eq!(episodes.len(), 3);
    let synced: Vec<&str> = episodes
        .iter()
        .filter(|e| e.auto_synced)
        .map(|e| e.slug.as_str())
        .collect();
    assert_eq!(synced, vec!["live-session-1", "live-session"]);

    // A second run finds nothing new.
    let existing = db::episode_slugs(&pool).await.unwrap();
    let again = plan_new_episodes(&videos, &existing, Utc::now());
    assert!(again.is_empty());
}
