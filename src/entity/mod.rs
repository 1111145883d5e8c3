pub mod movies;

pub use movies::Entity as Movies;
