/// Console configuration
use crate::error::{ConsoleError, Result};
use chrono::NaiveDate;
use jukebox_core::{Album, CreateAlbum, CreateTrack};
use jukebox_playback::{Jukebox, Player, PlayerConfig, Playlist};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "jukebox.toml";

/// Prefix for environment overrides, e.g. `JUKEBOX_PLAYER__SHUFFLE_SEED`
pub const ENV_PREFIX: &str = "JUKEBOX";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_player")]
    pub player: PlayerSettings,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,

    #[serde(default = "default_albums")]
    pub albums: Vec<AlbumConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSettings {
    #[serde(default = "default_playlist_name")]
    pub playlist_name: String,

    /// Fixed seed for reproducible shuffles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,

    /// Queue every catalog track at start-up
    #[serde(default = "default_fill_playlist")]
    pub fill_playlist: bool,

    /// Start with the power already on
    #[serde(default)]
    pub power_on: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AlbumConfig {
    pub title: String,
    pub artist: String,
    pub release_date: NaiveDate,
    pub genre: String,

    #[serde(default)]
    pub tracks: Vec<TrackConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrackConfig {
    pub title: String,

    /// Defaults to the album artist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Album tag when it differs from the owning album's title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    pub duration_secs: u64,
    pub position: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            player: default_player(),
            logging: default_logging(),
            albums: default_albums(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `jukebox.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, environment(None))
    }

    /// Config file that `load` reads, if any
    pub fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        }
    }

    /// Load with an explicit environment source
    pub fn load_from(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(file) = Self::resolve_path(path) {
            let source = config::File::from(file).format(config::FileFormat::Toml);
            settings = settings.add_source(source);
        }

        let config = settings.add_source(env).build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.player.playlist_name.trim().is_empty() {
            return Err(ConsoleError::Config(
                "player.playlist_name cannot be empty".to_string(),
            ));
        }

        if LevelFilter::from_str(&self.logging.level).is_err() {
            return Err(ConsoleError::Config(format!(
                "Unknown logging.level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Build the album catalog in configuration order
    pub fn build_albums(&self) -> jukebox_core::Result<Vec<Album>> {
        self.albums.iter().map(AlbumConfig::build).collect()
    }

    /// Build a jukebox holding the configured catalog
    pub fn build_jukebox(&self) -> Result<Jukebox> {
        let albums = self.build_albums()?;

        let playlist = if self.player.fill_playlist {
            let tracks = albums.iter().flat_map(|a| a.tracks().iter().cloned());
            Playlist::with_tracks(self.player.playlist_name.as_str(), tracks)?
        } else {
            Playlist::new(self.player.playlist_name.as_str())?
        };

        tracing::info!(
            albums = albums.len(),
            tracks = playlist.len(),
            "Catalog loaded"
        );

        let player = Player::with_albums(
            playlist,
            albums,
            PlayerConfig {
                shuffle_seed: self.player.shuffle_seed,
            },
        );
        let mut jukebox = Jukebox::new(player);
        if self.player.power_on {
            jukebox.power_on();
        }
        Ok(jukebox)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl AlbumConfig {
    pub fn build(&self) -> jukebox_core::Result<Album> {
        let mut album = Album::new(CreateAlbum::new(
            self.title.as_str(),
            self.artist.as_str(),
            self.release_date,
            self.genre.as_str(),
        ))?;

        for track in &self.tracks {
            let artist = track.artist.as_deref().unwrap_or(&self.artist);
            let mut data = CreateTrack::new(
                track.title.as_str(),
                artist,
                Duration::from_secs(track.duration_secs),
                track.position,
            );
            if let Some(tag) = &track.album {
                data = data.with_album(tag.as_str());
            }
            album.add_track(data)?;
        }

        Ok(album)
    }
}

/// Environment overrides with `__` between nested keys
pub fn environment(vars: Option<config::Map<String, String>>) -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}

// Default values
fn default_player() -> PlayerSettings {
    PlayerSettings {
        playlist_name: default_playlist_name(),
        shuffle_seed: None,
        fill_playlist: default_fill_playlist(),
        power_on: false,
    }
}

fn default_playlist_name() -> String {
    "Rock Classics".to_string()
}

fn default_fill_playlist() -> bool {
    true
}

fn default_logging() -> LoggingSettings {
    LoggingSettings {
        level: default_level(),
    }
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_albums() -> Vec<AlbumConfig> {
    vec![
        demo_album(
            "Abbey Road",
            "The Beatles",
            (1969, 9, 26),
            "Rock",
            &[
                ("Come Together", 259),
                ("Something", 183),
                ("Maxwell's Silver Hammer", 207),
            ],
        ),
        demo_album(
            "Dark Side of the Moon",
            "Pink Floyd",
            (1973, 3, 1),
            "Progressive Rock",
            &[("Speak to Me", 73), ("Breathe", 163), ("On the Run", 216)],
        ),
    ]
}

fn demo_album(
    title: &str,
    artist: &str,
    (year, month, day): (i32, u32, u32),
    genre: &str,
    tracks: &[(&str, u64)],
) -> AlbumConfig {
    AlbumConfig {
        title: title.to_string(),
        artist: artist.to_string(),
        release_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        genre: genre.to_string(),
        tracks: tracks
            .iter()
            .zip(1..)
            .map(|(&(title, duration_secs), position)| TrackConfig {
                title: title.to_string(),
                artist: None,
                album: None,
                duration_secs,
                position,
            })
            .collect(),
    }
}
