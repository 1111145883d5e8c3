use axum_movie_api::{
    config::AppConfig,
    db::{create_orm_conn, setup_schema},
    entity::{Movies, movies},
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

// Starter catalog: (title, overview, year, rating, category).
const CATALOG: [(&str, &str, i32, f64, &str); 10] = [
    (
        "Avatar",
        "On the moon Pandora, a paraplegic marine sent to infiltrate the Na'vi grows torn between his orders and the world he has come to call home.",
        2009,
        7.8,
        "Action",
    ),
    (
        "Inception",
        "A thief who steals corporate secrets through dream-sharing technology is offered a chance to erase his past by planting an idea instead.",
        2010,
        8.8,
        "Science Fiction",
    ),
    (
        "The Dark Knight",
        "When the Joker emerges from his mysterious past, he unleashes chaos on Gotham and forces Batman closer to crossing his one rule.",
        2008,
        9.0,
        "Action",
    ),
    (
        "Interstellar",
        "A team of explorers travels through a wormhole in space in an attempt to ensure humanity's survival on a dying Earth.",
        2014,
        8.6,
        "Adventure",
    ),
    (
        "The Matrix",
        "A hacker learns from mysterious rebels the true nature of his reality and his role in the war against its controllers.",
        1999,
        8.7,
        "Science Fiction",
    ),
    (
        "Pulp Fiction",
        "The lives of two mob hitmen, a boxer, a gangster's wife and a pair of diner bandits intertwine in four tales of violence and redemption.",
        1994,
        8.9,
        "Crime",
    ),
    (
        "Shawshank",
        "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
        1994,
        9.3,
        "Drama",
    ),
    (
        "The Godfather",
        "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
        1972,
        9.2,
        "Crime",
    ),
    (
        "Fight Club",
        "An insomniac office worker and a devil-may-care soap maker form an underground fight club that evolves into something far darker.",
        1999,
        8.8,
        "Drama",
    ),
    (
        "Forrest Gump",
        "Through the Kennedy and Johnson presidencies, Vietnam and Watergate, a slow-witted yet kind-hearted man drifts through history.",
        1994,
        8.8,
        "Drama",
    ),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    setup_schema(&orm).await?;

    let existing = Movies::find().count(&orm).await?;
    if existing > 0 {
        println!("Movies table already holds {existing} rows, skipping seed");
        return Ok(());
    }

    for (title, overview, year, rating, category) in CATALOG {
        let movie = movies::ActiveModel {
            id: NotSet,
            title: Set(title.to_string()),
            overview: Set(overview.to_string()),
            year: Set(year),
            rating: Set(Some(rating)),
            category: Set(category.to_string()),
        }
        .insert(&orm)
        .await?;
        println!("Seeded movie {} ({})", movie.id, movie.title);
    }

    println!("Seed completed: {} movies", CATALOG.len());
    Ok(())
}
