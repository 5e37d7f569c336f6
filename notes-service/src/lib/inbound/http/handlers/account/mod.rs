pub mod delete_account;
pub mod login;
pub mod signup;
pub mod whoami;

pub use delete_account::delete_account;
pub use login::login;
pub use signup::signup;
pub use whoami::whoami;
