//! Canned per-emotion shelves served when the catalog provider is
//! unreachable or unconfigured. Every entry is search-ready: id, title,
//! synopsis, rating, and genre codes, so the rest of the pipeline treats
//! them exactly like live results.

use crate::models::Movie;

fn movie(
    id: u64,
    title: &str,
    overview: &str,
    poster_path: &str,
    release_date: &str,
    vote_average: f64,
    genre_ids: &[u32],
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: overview.to_string(),
        poster_path: Some(poster_path.to_string()),
        release_date: release_date.to_string(),
        vote_average,
        vote_count: 0,
        genre_ids: genre_ids.to_vec(),
    }
}

/// Returns the shelf for a detected emotion; unrecognized emotions get the
/// thoughtful shelf.
pub fn movies_for(emotion: &str) -> Vec<Movie> {
    match emotion {
        "stressed" => vec![
            movie(
                1,
                "Spirited Away",
                "A masterpiece of visual storytelling that transports you completely into another world, asking nothing but your wonder.",
                "/spirited-away.jpg",
                "2001-07-20",
                8.5,
                &[16, 10751, 14],
            ),
            movie(
                2,
                "The Grand Budapest Hotel",
                "Wes Anderson's most delightful confection - a visual feast that's both melancholic and joyous, like a perfect macaron.",
                "/grand-budapest.jpg",
                "2014-03-07",
                8.1,
                &[35, 18],
            ),
            movie(
                3,
                "Paddington 2",
                "Pure, concentrated joy. A film so genuinely good-hearted it could cure cynicism.",
                "/paddington2.jpg",
                "2017-11-10",
                7.8,
                &[10751, 35, 12],
            ),
        ],
        "sad" => vec![
            movie(
                4,
                "About Time",
                "A film about love, loss, and the preciousness of ordinary moments that manages to be both heartbreaking and uplifting.",
                "/about-time.jpg",
                "2013-11-01",
                7.8,
                &[35, 18, 14],
            ),
            movie(
                5,
                "Inside Out",
                "Pixar's masterpiece about emotions that validates every feeling while teaching us that sadness has its place in joy.",
                "/inside-out.jpg",
                "2015-06-19",
                8.1,
                &[16, 10751, 18],
            ),
            movie(
                6,
                "Her",
                "A tender exploration of love and loneliness in the modern age that finds beauty in melancholy.",
                "/her.jpg",
                "2013-12-18",
                8.0,
                &[18, 10749, 878],
            ),
        ],
        "adventurous" => vec![
            movie(
                7,
                "Mad Max: Fury Road",
                "A relentless chase that never lets up - pure cinema at its most visceral and exhilarating.",
                "/mad-max-fury-road.jpg",
                "2015-05-15",
                8.1,
                &[28, 12, 878],
            ),
            movie(
                8,
                "The Princess Bride",
                "Adventure, romance, comedy, and heart - everything you want in a perfect adventure story.",
                "/princess-bride.jpg",
                "1987-09-25",
                8.0,
                &[12, 10751, 14],
            ),
            movie(
                9,
                "Spider-Man: Into the Spider-Verse",
                "A visual revolution that matches its energy with heart - superhero storytelling at its finest.",
                "/spider-verse.jpg",
                "2018-12-14",
                8.4,
                &[16, 28, 12],
            ),
        ],
        "romantic" => vec![
            movie(
                13,
                "Before Sunrise",
                "Two strangers, one night in Vienna, and conversations that feel like falling in love.",
                "/before-sunrise.jpg",
                "1995-01-27",
                8.1,
                &[18, 10749],
            ),
            movie(
                14,
                "The Princess Bride",
                "True love, adventure, and perfect quotable dialogue - romance with wit and sword fights.",
                "/princess-bride.jpg",
                "1987-09-25",
                8.0,
                &[12, 10751, 14, 10749],
            ),
            movie(
                15,
                "Eternal Sunshine of the Spotless Mind",
                "A unique exploration of love's complexity - both the pain and beauty of romantic memory.",
                "/eternal-sunshine.jpg",
                "2004-03-19",
                8.3,
                &[18, 10749, 878],
            ),
        ],
        "nostalgic" => vec![
            movie(
                16,
                "Stand By Me",
                "The perfect coming-of-age story about friendship, growing up, and the summer that changes everything.",
                "/stand-by-me.jpg",
                "1986-08-22",
                8.1,
                &[18, 12],
            ),
            movie(
                17,
                "The Sandlot",
                "Summer, baseball, and the kind of childhood friendships that feel like they'll last forever.",
                "/sandlot.jpg",
                "1993-04-07",
                7.8,
                &[35, 10751, 18],
            ),
            movie(
                18,
                "Cinema Paradiso",
                "A love letter to movies and the magic of childhood, told with Italian warmth and wisdom.",
                "/cinema-paradiso.jpg",
                "1988-11-17",
                8.5,
                &[18, 10749],
            ),
        ],
        _ => vec![
            movie(
                10,
                "Arrival",
                "Science fiction that explores language, time, and what it means to be human with breathtaking intelligence.",
                "/arrival.jpg",
                "2016-11-11",
                7.9,
                &[18, 878],
            ),
            movie(
                11,
                "Parasite",
                "A masterclass in filmmaking that unpacks class, family, and society with surgical precision and dark humor.",
                "/parasite.jpg",
                "2019-05-30",
                8.5,
                &[35, 18, 53],
            ),
            movie(
                12,
                "Moonlight",
                "A triptych of identity, sexuality, and masculinity told with poetry and profound empathy.",
                "/moonlight.jpg",
                "2016-10-21",
                7.4,
                &[18],
            ),
        ],
    }
}
