pub mod category;
pub mod note;
pub mod user;

pub use category::PostgresCategoryRepository;
pub use note::PostgresNoteRepository;
pub use user::PostgresUserRepository;
