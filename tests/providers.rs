use encore::providers::concerts::{self, ConcertEvent};
use encore::providers::movies::{self, Rating, IMDB_SOURCE, ROTTEN_TOMATOES_SOURCE};
use encore::providers::catalog;

fn rating(source: &str, value: &str) -> Rating {
    serde_json::from_value(serde_json::json!({ "Source": source, "Value": value })).unwrap()
}

#[test]
fn absent_song_resolves_to_the_default_title() {
    assert_eq!(catalog::resolve_song(None), catalog::DEFAULT_SONG);
    assert_eq!(catalog::resolve_song(Some("Hey Jude")), "Hey Jude");
}

#[test]
fn absent_movie_resolves_to_the_default_title() {
    assert_eq!(movies::resolve_title(None), movies::DEFAULT_MOVIE);
    assert_eq!(movies::resolve_title(Some("Arrival")), "Arrival");
}

#[test]
fn rating_scan_ignores_array_position() {
    let forward = vec![
        rating(IMDB_SOURCE, "8.1/10"),
        rating(ROTTEN_TOMATOES_SOURCE, "94%"),
        rating("Metacritic", "81/100"),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    for ratings in [forward, reversed] {
        assert_eq!(
            movies::find_rating(&ratings, IMDB_SOURCE).as_deref(),
            Some("8.1/10")
        );
        assert_eq!(
            movies::find_rating(&ratings, ROTTEN_TOMATOES_SOURCE).as_deref(),
            Some("94%")
        );
    }
}

#[test]
fn missing_rating_source_yields_no_match() {
    let ratings = vec![rating("Metacritic", "81/100")];
    assert!(movies::find_rating(&ratings, IMDB_SOURCE).is_none());
    assert!(movies::find_rating(&ratings, ROTTEN_TOMATOES_SOURCE).is_none());
}

#[test]
fn first_event_without_venue_means_no_results() {
    let events: Vec<ConcertEvent> = serde_json::from_str(
        r#"[
            {"datetime": "2026-11-03T20:00:00", "venue": null},
            {"datetime": "2026-11-04T20:00:00",
             "venue": {"name": "The Forum", "city": "Inglewood", "region": "CA", "country": "United States"}}
        ]"#,
    )
    .unwrap();
    assert!(concerts::venue_entries(&events).is_none());
}

#[test]
fn empty_event_list_means_no_results() {
    assert!(concerts::venue_entries(&[]).is_none());
}

#[test]
fn events_with_venues_become_display_entries() {
    let events: Vec<ConcertEvent> = serde_json::from_str(
        r#"[
            {"datetime": "2026-11-03T20:00:00",
             "venue": {"name": "The Forum", "city": "Inglewood", "region": "CA", "country": "United States"}},
            {"datetime": "2026-11-05T19:30:00",
             "venue": {"name": "Madison Square Garden", "city": "New York", "region": "NY", "country": "United States"}}
        ]"#,
    )
    .unwrap();

    let entries = concerts::venue_entries(&events).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "The Forum");
    assert_eq!(entries[0].event_date, "11/03/2026");
    assert_eq!(entries[1].event_date, "11/05/2026");
}

#[test]
fn event_dates_render_month_day_year() {
    assert_eq!(concerts::format_event_date("2026-11-03T20:00:00"), "11/03/2026");
}

#[test]
fn unparsable_event_date_passes_through() {
    assert_eq!(concerts::format_event_date("TBA"), "TBA");
}
