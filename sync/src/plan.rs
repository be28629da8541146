/// Deciding which channel videos become new episodes.
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Deserialize;
use std::collections::HashSet;

use fireside_shared::models::NewSyncedEpisode;
use fireside_shared::slug::{slugify, unique_slug};

/// Top level of a `yt-dlp -J` playlist/channel dump.
#[derive(Debug, Deserialize)]
pub struct ChannelDump {
    #[serde(default)]
    pub entries: Vec<Option<VideoEntry>>,
}

/// The fields of a video entry the sync cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoEntry {
    #[serde(default)]
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// `YYYYMMDD`
    pub upload_date: Option<String>,
    pub thumbnail: Option<String>,
    pub webpage_url: Option<String>,
}

/// Parse a channel dump, dropping null entries and entries without a title
/// or upload date.
pub fn parse_dump(json: &str) -> serde_json::Result<Vec<VideoEntry>> {
    let dump: ChannelDump = serde_json::from_str(json)?;
    Ok(dump
        .entries
        .into_iter()
        .flatten()
        .filter(|v| has_text(&v.title) && has_text(&v.upload_date))
        .collect())
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map(|v| !v.is_empty()).unwrap_or(false)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `YYYYMMDD` to `YYYY-MM-DDT12:00:00Z`; anything else becomes `now`.
pub fn to_iso_date(upload_date: Option<&str>, now: DateTime<Utc>) -> String {
    upload_date
        .filter(|d| d.len() == 8)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y%m%d").ok())
        .map(|date| format!("{}T12:00:00Z", date.format("%Y-%m-%d")))
        .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Episodes to insert for `videos`, in channel order.
///
/// Videos whose slug already exists in the table are skipped. Repeated titles
/// inside the batch get `-1`, `-2`, ... suffixes.
pub fn plan_new_episodes(
    videos: &[VideoEntry],
    existing: &HashSet<String>,
    now: DateTime<Utc>,
) -> Vec<NewSyncedEpisode> {
    let mut taken = existing.clone();
    let mut planned = Vec::new();

    for video in videos {
        let title = match non_empty(video.title.as_deref()) {
            Some(title) => title,
            None => continue,
        };
        let base = slugify(title);
        if base.is_empty() || existing.contains(&base) {
            continue;
        }

        let slug = unique_slug(&base, &taken);
        taken.insert(slug.clone());

        planned.push(NewSyncedEpisode {
            title: title.to_string(),
            slug,
            description: non_empty(video.description.as_deref())
                .unwrap_or_default()
                .to_string(),
            published_at: to_iso_date(video.upload_date.as_deref(), now),
            cover_image_url: non_empty(video.thumbnail.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video.id)),
            cover_image_alt: format!("{} thumbnail", title),
            youtube_url: non_empty(video.webpage_url.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| format!("https://www.youtube.com/watch?v={}", video.id)),
        });
    }

    planned
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
    }

    fn video(id: &str, title: &str, date: &str) -> VideoEntry {
        VideoEntry {
            id: id.to_string(),
            title: Some(title.to_string()),
            upload_date: Some(date.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_to_iso_date() {
        assert_eq!(to_iso_date(Some("20240305"), now()), "2024-03-05T12:00:00Z");
        assert_eq!(to_iso_date(Some("2024035"), now()), "2025-01-02T03:04:05Z");
        assert_eq!(to_iso_date(Some("20241399"), now()), "2025-01-02T03:04:05Z");
        assert_eq!(to_iso_date(None, now()), "2025-01-02T03:04:05Z");
    }

    #[test]
    fn test_parse_dump_filters_incomplete_entries() {
        let json = r#"{
            "title": "The Fireside Tribe - Videos",
            "entries": [
                {"id": "a1", "title": "Ep 1", "upload_date": "20240101"},
                null,
                {"id": "a2", "title": "No date"},
                {"id": "a3", "upload_date": "20240102"},
                {"id": "a4", "title": "", "upload_date": "20240103"}
            ]
        }"#;
        let videos = parse_dump(json).unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "a1");
    }

    #[test]
    fn test_parse_dump_without_entries() {
        assert!(parse_dump(r#"{"title": "empty"}"#).unwrap().is_empty());
        assert!(parse_dump("not json").is_err());
    }

    #[test]
    fn test_defaults_and_trimming() {
        let mut v = video("abc123", "  Fire Talk #1  ", "20240305");
        v.description = Some("  About fire  ".to_string());
        let planned = plan_new_episodes(&[v], &HashSet::new(), now());

        assert_eq!(planned.len(), 1);
        let ep = &planned[0];
        assert_eq!(ep.title, "Fire Talk #1");
        assert_eq!(ep.slug, "fire-talk-1");
        assert_eq!(ep.description, "About fire");
        assert_eq!(ep.published_at, "2024-03-05T12:00:00Z");
        assert_eq!(ep.cover_image_url, "https://img.youtube.com/vi/abc123/hqdefault.jpg");
        assert_eq!(ep.cover_image_alt, "Fire Talk #1 thumbnail");
        assert_eq!(ep.youtube_url, "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn test_prefers_dump_urls() {
        let mut v = video("abc123", "Ep", "20240305");
        v.thumbnail = Some("https://i.ytimg.com/vi/abc123/maxres.jpg".to_string());
        v.webpage_url = Some("https://youtu.be/abc123".to_string());
        let planned = plan_new_episodes(&[v], &HashSet::new(), now());
        assert_eq!(planned[0].cover_image_url, "https://i.ytimg.com/vi/abc123/maxres.jpg");
        assert_eq!(planned[0].youtube_url, "https://youtu.be/abc123");
    }

    #[test]
    fn test_skips_existing_and_disambiguates_batch() {
        let existing: HashSet<String> = ["old-episode".to_string()].into_iter().collect();
        let videos = vec![
            video("1", "Old Episode", "20240101"),
            video("2", "Live Session", "20240102"),
            video("3", "Live Session", "20240103"),
            video("4", "Live  Session!", "20240104"),
            video("5", "!!!", "20240105"),
        ];

        let slugs: Vec<String> = plan_new_episodes(&videos, &existing, now())
            .into_iter()
            .map(|e| e.slug)
            .collect();
        assert_eq!(slugs, vec!["live-session", "live-session-1", "live-session-2"]);
    }
}
