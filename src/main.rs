use anyhow::Result;
use clap::Parser;
use jukebox::model::{merge_playlists, Album, Band, MusicContent, Playlist, Track, User};
use jukebox::MusicService;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "jukebox")]
#[command(about = "In-memory music catalog demo", long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Rate a registered album on behalf of a user
fn rate(service: &mut MusicService, user: &mut User, title: &str, rating: u8) -> Result<()> {
    let album = service
        .get_album_by_title_mut(title)
        .ok_or_else(|| anyhow::anyhow!("album not registered: {title}"))?;
    user.rate_album(album, rating)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut service = MusicService::new();

    // Build the catalog
    let iron_maiden = Band::new("Iron Maiden", "Heavy Metal");
    let lady_gaga = Band::new("Lady Gaga", "Pop");
    let dio = Band::new("Dio", "Heavy Metal");

    let trooper = Track::new("The Trooper", 4.11, Arc::clone(&iron_maiden));
    let fear = Track::new("Fear of the Dark", 7.16, Arc::clone(&iron_maiden));
    let bad_romance = Track::new("Bad Romance", 4.54, Arc::clone(&lady_gaga));
    let poker_face = Track::new("Poker Face", 3.57, Arc::clone(&lady_gaga));
    let holy_diver = Track::new("Holy Diver", 5.54, Arc::clone(&dio));
    let rainbow = Track::new("Rainbow in the Dark", 4.16, Arc::clone(&dio));

    let mut album1 = Album::new("The Trooper", 1983, Arc::clone(&iron_maiden));
    let mut album2 = Album::new("Fear of the Dark", 1992, Arc::clone(&iron_maiden));
    let mut album3 = Album::new("The Fame Monster", 2009, lady_gaga);
    let mut album4 = Album::new("Holy Diver", 1983, dio);

    album1.add_track(Arc::clone(&trooper));
    album2.add_track(Arc::clone(&fear));
    album3.add_track(Arc::clone(&bad_romance));
    album3.add_track(Arc::clone(&poker_face));
    album4.add_track(Arc::clone(&holy_diver));
    album4.add_track(Arc::clone(&rainbow));

    service.add_album(album1);
    service.add_album(album2);
    service.add_album(album3);
    service.add_album(album4);
    log::debug!("Catalog built: {} albums", service.album_count());

    // Browse a discography through the registry
    log::info!("Discography of {}:", iron_maiden);
    for album in service.albums_by_band(&iron_maiden) {
        log::info!("  {} ({})", album, album.release_year);
    }

    // Search the catalog by track name
    log::info!("Searching for tracks named 'Holy Diver':");
    for track in Track::search_by_name("Holy Diver", service.albums()) {
        log::info!("  {}", track);
    }

    // Users rate albums through the registry
    let mut user1 = User::new("MegaHacker");
    let mut user2 = User::new("MusicFan");

    rate(&mut service, &mut user1, "The Trooper", 5)?;
    rate(&mut service, &mut user2, "Fear of the Dark", 5)?;
    rate(&mut service, &mut user1, "The Fame Monster", 4)?;
    rate(&mut service, &mut user2, "Holy Diver", 5)?;

    if let Some(album) = service.get_album_by_title("The Trooper") {
        log::info!("Retrieved Album: {}", album);
    }

    // A user builds a playlist with some social activity on it
    let mut favorites = user1.create_playlist("My Favorite Tracks");
    favorites.add_track(Arc::clone(&trooper));
    favorites.add_track(Arc::clone(&holy_diver));

    favorites.add_tag("Epic Metal");
    favorites.add_comment(&user1, "Great playlist!");
    favorites.add_like(&user1);
    favorites.add_comment(&user2, "Love this!");
    favorites.add_like(&user2);

    service.add_user(user1);
    service.add_user(user2);

    log::info!("Playlist Title: {}", favorites.title());
    log::info!("Tracks in Playlist:");
    for track in favorites.track_list() {
        log::info!("  {}", track);
    }
    log::info!("Tags: {:?}", favorites.tags());
    let interactions = favorites.interactions();
    log::info!(
        "Interactions: {} comment(s), {} like(s)",
        interactions.comments.len(),
        interactions.likes
    );
    service.add_playlist(favorites);

    for title in ["The Trooper", "Fear of the Dark"] {
        if let Some(album) = service.get_album_by_title(title) {
            log::info!("{} Rating: {}", album.title, album.calculate_average_rating());
        }
    }

    // Merge two plain playlists, deduplicating by track name
    let mut chill = Playlist::new("Chill Vibes");
    chill.add_track(Arc::clone(&trooper));
    chill.add_track(bad_romance);

    let mut storm = Playlist::new("Metal Storm");
    storm.add_track(fear);
    storm.add_track(holy_diver);

    log::info!("Merging playlists:");
    let mut merged = merge_playlists(&chill, &storm, "Merged Playlist");
    log::info!("Merged Playlist Title: {}", merged.title());
    log::info!("Tracks in Merged Playlist:");
    for track in merged.track_list() {
        log::info!("  {}", track);
    }

    merged.add_tag("Merged Collection");
    log::info!("Tags in Merged Playlist: {:?}", merged.tags());
    service.add_playlist(merged);

    // Ranking
    log::info!("Top Albums:");
    for album in service.get_top_albums() {
        log::info!("  {}: {}", album.title, album.calculate_average_rating());
    }

    Ok(())
}
