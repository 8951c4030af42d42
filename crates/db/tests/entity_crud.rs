//! Repository integration tests against a real PostgreSQL database.
//!
//! `DATABASE_URL` must point at a server where the test user may create
//! databases.

use chrono::{Duration, NaiveDate, Utc};
use marquee_core::pagination::Page;
use marquee_core::search::contains_pattern;
use marquee_db::models::actor::{CreateActor, UpdateActor};
use marquee_db::models::artist::CreateArtist;
use marquee_db::models::movie::CreateMovie;
use marquee_db::models::question::CreateQuestion;
use marquee_db::models::show::{CreateShow, ShowTiming};
use marquee_db::models::venue::{CreateVenue, UpdateVenue};
use marquee_db::repositories::{
    ActorRepo, ArtistRepo, CategoryRepo, MovieRepo, QuestionRepo, ShowRepo, VenueRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_venue(name: &str, city: &str, state: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        city: Some(city.to_string()),
        state: Some(state.to_string()),
        address: None,
        phone: None,
        image_link: None,
        facebook_link: None,
        genres: vec!["Jazz".to_string()],
        website: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

fn new_artist(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        city: None,
        state: None,
        phone: None,
        image_link: Some("https://img.example/a.png".to_string()),
        facebook_link: None,
        genres: Vec::new(),
        website: None,
        seeking_venue: true,
        seeking_description: None,
    }
}

fn new_movie(title: &str) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        release_date: NaiveDate::from_ymd_opt(2021, 5, 14).unwrap(),
    }
}

fn new_question(text: &str, category: i64) -> CreateQuestion {
    CreateQuestion {
        question: text.to_string(),
        answer: "42".to_string(),
        category,
        difficulty: 2,
    }
}

// ---------------------------------------------------------------------------
// Fyyur
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_venue_round_trip_and_update(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let found = VenueRepo::find_by_id(&pool, venue.id).await.unwrap().unwrap();
    assert_eq!(found.name, "The Musical Hop");
    assert_eq!(found.genres, vec!["Jazz".to_string()]);
    assert!(!found.seeking_talent);

    let update = UpdateVenue {
        phone: Some("123-123-1234".to_string()),
        ..Default::default()
    };
    let updated = VenueRepo::update(&pool, venue.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.phone.as_deref(), Some("123-123-1234"));
    assert_eq!(updated.name, "The Musical Hop");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_venue_search_is_case_insensitive(pool: PgPool) {
    VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    VenueRepo::create(&pool, &new_venue("Park Square Live Music & Coffee", "San Francisco", "CA"))
        .await
        .unwrap();
    VenueRepo::create(&pool, &new_venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();

    let hits = VenueRepo::search_by_name(&pool, &contains_pattern("MUSIC"))
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);

    let hits = VenueRepo::search_by_name(&pool, &contains_pattern("hop"))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "The Musical Hop");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_shows_split_into_past_and_upcoming(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Hall", "Austin", "TX"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Guns N Petals"))
        .await
        .unwrap();

    for offset in [Duration::days(-3), Duration::days(5), Duration::days(9)] {
        ShowRepo::create(
            &pool,
            &CreateShow {
                venue_id: venue.id,
                artist_id: artist.id,
                start_time: Utc::now() + offset,
            },
        )
        .await
        .unwrap();
    }

    let past = ShowRepo::list_for_venue(&pool, venue.id, ShowTiming::Past)
        .await
        .unwrap();
    let upcoming = ShowRepo::list_for_artist(&pool, artist.id, ShowTiming::Upcoming)
        .await
        .unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].artist_name, "Guns N Petals");
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].venue_name, "Hall");

    let listing = VenueRepo::list_with_upcoming(&pool).await.unwrap();
    assert_eq!(listing[0].num_upcoming_shows, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_venue_cascades_to_shows(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Gone", "Austin", "TX"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Stays")).await.unwrap();
    ShowRepo::create(
        &pool,
        &CreateShow {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time: Utc::now(),
        },
    )
    .await
    .unwrap();

    assert!(VenueRepo::delete(&pool, venue.id).await.unwrap());
    assert!(ShowRepo::list(&pool).await.unwrap().is_empty());
    assert!(ArtistRepo::find_by_id(&pool, artist.id).await.unwrap().is_some());
    assert!(!VenueRepo::delete(&pool, venue.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_show_with_unknown_venue_is_fk_violation(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("Lonely")).await.unwrap();
    let err = ShowRepo::create(
        &pool,
        &CreateShow {
            venue_id: 999_999,
            artist_id: artist.id,
            start_time: Utc::now(),
        },
    )
    .await
    .unwrap_err();

    let code = err.as_database_error().and_then(|e| e.code()).unwrap();
    assert_eq!(code, "23503");
}

// ---------------------------------------------------------------------------
// Trivia
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_categories_are_seeded(pool: PgPool) {
    let categories = CategoryRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(
        names,
        vec!["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_question_pages_hold_at_most_ten(pool: PgPool) {
    for i in 0..13 {
        QuestionRepo::create(&pool, &new_question(&format!("Question {i}?"), 1))
            .await
            .unwrap();
    }

    let first = QuestionRepo::list_page(&pool, Page::FIRST).await.unwrap();
    let second = QuestionRepo::list_page(&pool, Page::from_param(Some(2)).unwrap())
        .await
        .unwrap();
    let third = QuestionRepo::list_page(&pool, Page::from_param(Some(3)).unwrap())
        .await
        .unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), 3);
    assert!(third.is_empty());
    assert_eq!(QuestionRepo::count(&pool).await.unwrap(), 13);
    assert_eq!(QuestionRepo::count_by_category(&pool, 2).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_question_search_and_quiz_candidates(pool: PgPool) {
    QuestionRepo::create(&pool, &new_question("What is the title of the 1990 fantasy?", 5))
        .await
        .unwrap();
    QuestionRepo::create(&pool, &new_question("Whose autobiography is entitled...?", 4))
        .await
        .unwrap();
    QuestionRepo::create(&pool, &new_question("Which dung beetle was worshipped?", 4))
        .await
        .unwrap();

    let hits = QuestionRepo::search(&pool, &contains_pattern("TITLE"))
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);

    let history = QuestionRepo::list_for_quiz(&pool, Some(4)).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|q| q.category == 4));
    let all = QuestionRepo::list_for_quiz(&pool, None).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_question_difficulty_is_checked(pool: PgPool) {
    let mut input = new_question("Too hard?", 1);
    input.difficulty = 9;
    let err = QuestionRepo::create(&pool, &input).await.unwrap_err();
    let code = err.as_database_error().and_then(|e| e.code()).unwrap();
    assert_eq!(code, "23514");
}

// ---------------------------------------------------------------------------
// Casting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_movie_cascades_to_actors(pool: PgPool) {
    let movie = MovieRepo::create(&pool, &new_movie("Dune")).await.unwrap();
    let actor = ActorRepo::create(
        &pool,
        &CreateActor {
            name: "Zendaya".to_string(),
            age: 25,
            gender: "female".to_string(),
            movie_id: movie.id,
        },
    )
    .await
    .unwrap();

    let cast = ActorRepo::list_by_movies(&pool, &[movie.id]).await.unwrap();
    assert_eq!(cast.len(), 1);

    let patched = ActorRepo::update(
        &pool,
        actor.id,
        &UpdateActor {
            age: Some(26),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(patched.age, 26);
    assert_eq!(patched.name, "Zendaya");

    assert!(MovieRepo::delete(&pool, movie.id).await.unwrap());
    assert!(ActorRepo::find_by_id(&pool, actor.id).await.unwrap().is_none());
    assert!(!MovieRepo::exists(&pool, movie.id).await.unwrap());
}
