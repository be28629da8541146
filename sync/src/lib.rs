/// YouTube channel sync: turns `yt-dlp -J` channel dumps into new episode rows.
pub mod plan;
pub mod ytdlp;

pub use plan::{plan_new_episodes, VideoEntry};
